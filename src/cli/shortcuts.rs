//! Shortcuts command: prints the form's key bindings.

use crate::cli::common::{CliError, CliResult};
use crate::shortcuts::{CommandContext, CommandTable};
use clap::Args;
use serde::Serialize;

/// Show keyboard shortcuts of the party form
#[derive(Debug, Clone, Args)]
pub struct ShortcutsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ShortcutEntry {
    context: &'static str,
    key: String,
    command: &'static str,
    description: &'static str,
}

impl ShortcutsArgs {
    /// Execute the shortcuts command
    pub fn execute(&self) -> CliResult<()> {
        let table = CommandTable::new();
        let entries: Vec<ShortcutEntry> = [CommandContext::Form, CommandContext::DiscardDialog]
            .into_iter()
            .flat_map(|context| {
                table
                    .bindings(context)
                    .into_iter()
                    .map(move |(binding, command)| ShortcutEntry {
                        context: context.name(),
                        key: binding.label(),
                        command: command.id(),
                        description: command.description(),
                    })
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let mut current = "";
        for entry in &entries {
            if entry.context != current {
                if !current.is_empty() {
                    println!();
                }
                println!("[{}]", entry.context);
                current = entry.context;
            }
            println!("  {:<10} {}", entry.key, entry.description);
        }
        Ok(())
    }
}
