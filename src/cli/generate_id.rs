//! Display id generation command.

use crate::cli::common::{CliError, CliResult};
use crate::form::identifier::{generate, SystemEntropy};
use clap::Args;

/// Print a generated party id
#[derive(Debug, Clone, Args)]
pub struct GenerateIdArgs {
    /// Party name the id is derived from (empty uses NEW)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Number of ids to print
    #[arg(short = 'n', long, default_value = "1", value_name = "N")]
    pub count: usize,
}

impl GenerateIdArgs {
    /// Execute the generate-id command
    pub fn execute(&self) -> CliResult<()> {
        if self.count == 0 {
            return Err(CliError::validation("--count must be at least 1"));
        }

        let name = self.name.as_deref().unwrap_or_default();
        for _ in 0..self.count {
            println!("{}", generate(name, &SystemEntropy));
        }
        Ok(())
    }
}
