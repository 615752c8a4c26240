//! Create command: runs the party form headlessly and saves to the file store.

use crate::cli::common::{load_config, resolve_session, CliError, CliResult, PartyFieldArgs};
use crate::form::{
    EditOutcome, FormContext, FormEvent, FormServices, FormSettings, Navigation, PartyForm,
    SubmitOutcome,
};
use crate::services::{HandoffSlots, JsonFilePartyStore, SaveError};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Create a party and print the booking handoff
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[command(flatten)]
    fields: PartyFieldArgs,

    /// JSON file with a party selected on the search screen, used as prefill
    #[arg(long, value_name = "FILE")]
    pub prefill: Option<PathBuf>,

    /// Session (tenant) token; overrides PARTY_INTAKE_SESSION and config
    #[arg(long, value_name = "TOKEN")]
    pub session: Option<String>,

    /// Output the handoff slots as JSON
    #[arg(long)]
    pub json: bool,
}

impl CreateArgs {
    /// Execute the create command
    pub fn execute(&self) -> CliResult<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start runtime: {e}")))?;
        runtime.block_on(self.run())
    }

    async fn run(&self) -> CliResult<()> {
        let config = load_config()?;
        let session = resolve_session(self.session.as_deref(), &config);

        let prefill = match &self.prefill {
            Some(path) => Some(std::fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read prefill file {}: {e}", path.display()))
            })?),
            None => None,
        };
        let context = FormContext::from_slots(session, prefill.as_deref());

        let store = Arc::new(JsonFilePartyStore::new(config.store.data_dir.clone()));
        let slots = Arc::new(HandoffSlots::new());
        let services = FormServices::new(store, slots.clone());
        let (mut form, mut events) =
            PartyForm::new(context, services, FormSettings::from_config(&config.form));

        for (field, value) in self.fields.values() {
            if form.set_field(field, value) != EditOutcome::Applied {
                return Err(CliError::validation(format!(
                    "{}: too many digits in '{value}'",
                    field.label()
                )));
            }
        }

        match form.submit() {
            SubmitOutcome::Started => {}
            SubmitOutcome::Invalid => {
                for (field, error) in form.errors().iter() {
                    eprintln!("  ✗ [{}] {}", field.key(), error.message);
                }
                return Err(CliError::validation(form.errors().summary()));
            }
            SubmitOutcome::Busy => {
                return Err(CliError::validation("Form is busy"));
            }
        }

        while let Some(event) = events.recv().await {
            let failure = match &event {
                FormEvent::SaveFinished(Err(e)) => Some(e.clone()),
                _ => None,
            };
            form.handle_event(event);

            if let Some(e) = failure {
                form.teardown();
                return Err(match e {
                    SaveError::MissingSession => CliError::validation(e.to_string()),
                    SaveError::SaveFailed(_) => CliError::io(e.to_string()),
                });
            }
            if let Some(target) = form.take_navigation() {
                debug!("Form requested navigation to {:?}", target);
                if target == Navigation::Booking {
                    break;
                }
            }
        }
        form.teardown();

        let Some(party) = form.persisted() else {
            return Err(CliError::io("Form closed before the party was saved"));
        };

        if self.json {
            let json = serde_json::to_string_pretty(&slots.snapshot())
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            if let Some(notice) = form.notice() {
                println!("✓ {}", notice.message);
            }
            println!();
            println!("  Id:        {}", party.id());
            println!("  Party id:  {}", party.generated_id());
            println!("  Name:      {}", party.name());
            println!("  Phone:     {}", party.phone());
            println!("  Email:     {}", party.email());
            println!();
            println!("Handoff keys: {}", slots.keys().join(", "));
        }

        Ok(())
    }
}
