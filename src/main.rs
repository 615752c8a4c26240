//! Party Intake - headless driver for the party intake form
//!
//! This application creates parties through the same form controller the
//! booking screen uses, and manages the local party store and configuration.

use clap::{Parser, Subcommand};
use party_intake::cli::{
    CliResult, ConfigArgs, CreateArgs, GenerateIdArgs, ListArgs, ShortcutsArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Party Intake - create and validate parties from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the party form, save it and print the booking handoff
    Create(CreateArgs),
    /// Print a generated party id
    GenerateId(GenerateIdArgs),
    /// Validate party fields without saving
    Validate(ValidateArgs),
    /// List saved parties
    List(ListArgs),
    /// Manage configuration
    Config(ConfigArgs),
    /// Show keyboard shortcuts of the form
    Shortcuts(ShortcutsArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Create(args) => args.execute(),
            Self::GenerateId(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::List(args) => args.execute(),
            Self::Config(args) => args.execute(),
            Self::Shortcuts(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
