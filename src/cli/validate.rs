//! Validation command for party field values.

use crate::cli::common::{CliError, CliResult, PartyFieldArgs};
use crate::form::validator::FieldValidator;
use crate::models::PartyDraft;
use clap::Args;
use serde::Serialize;

/// Validate party field values without saving
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    fields: PartyFieldArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ValidationIssue {
    field: &'static str,
    code: String,
    message: String,
}

#[derive(Serialize, Debug)]
struct ValidationResponse {
    valid: bool,
    errors: Vec<ValidationIssue>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        // Values are checked as given; no keystroke normalization here
        let draft = self
            .fields
            .values()
            .into_iter()
            .fold(PartyDraft::new(), |draft, (field, value)| {
                draft.with(field, value)
            });

        let errors = FieldValidator::new().validate(&draft);
        let response = ValidationResponse {
            valid: errors.is_empty(),
            errors: errors
                .iter()
                .map(|(field, error)| ValidationIssue {
                    field: field.key(),
                    code: error.kind.to_string(),
                    message: error.message.clone(),
                })
                .collect(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid {
            println!("✓ Validation passed");
        } else {
            println!("✗ Validation failed");
            println!("\nIssues:");
            for issue in &response.errors {
                println!("  ✗ [{}] {} ({})", issue.field, issue.message, issue.code);
            }
        }

        if !response.valid {
            return Err(CliError::validation(errors.summary()));
        }

        Ok(())
    }
}
