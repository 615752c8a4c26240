//! List command for saved parties.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::services::JsonFilePartyStore;
use clap::Args;

/// List parties saved in the file store
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let store = JsonFilePartyStore::new(config.store.data_dir.clone());
        let records = store
            .list()
            .map_err(|e| CliError::io(format!("Failed to list parties: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        if records.is_empty() {
            println!("No parties saved in {}", store.dir().display());
            return Ok(());
        }

        println!("{:<20} {:<30} {:<12} CREATED", "PARTY ID", "NAME", "PHONE");
        for record in &records {
            let p = &record.payload;
            println!(
                "{:<20} {:<30} {:<12} {}",
                p.party_code.as_str(),
                p.ledger_name,
                p.mobile_no,
                p.created_at
            );
        }
        println!("\n{} party(ies)", records.len());
        Ok(())
    }
}
