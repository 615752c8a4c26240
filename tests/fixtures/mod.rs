//! Shared test fixtures for form and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use party_intake::form::{
    FormContext, FormEvent, FormServices, FormSettings, IdEntropy, PartyForm,
};
use party_intake::models::{PartyDraft, PartyField, PartyPayload, PartyRecord};
use party_intake::services::{HandoffSlots, MemoryPartyStore, PartyStore};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

/// Debounce used by form fixtures.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Navigation delay used by form fixtures.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(1500);

/// Entropy with a pinned clock and a counting random source.
///
/// Each draw returns the next value, so consecutive ids differ only in their
/// last three digits.
#[derive(Debug)]
pub struct FixedEntropy {
    millis: u64,
    next: AtomicU32,
}

impl FixedEntropy {
    pub fn new(millis: u64) -> Self {
        Self {
            millis,
            next: AtomicU32::new(0),
        }
    }
}

impl IdEntropy for FixedEntropy {
    fn clock_millis(&self) -> u64 {
        self.millis
    }

    fn random_below(&self, bound: u32) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst) % bound
    }
}

/// Store that always fails with `message`.
pub struct FailingStore {
    pub message: &'static str,
}

#[async_trait::async_trait]
impl PartyStore for FailingStore {
    async fn create(&self, _payload: PartyPayload) -> anyhow::Result<PartyRecord> {
        anyhow::bail!("{}", self.message)
    }
}

/// A form wired to in-memory collaborators.
pub struct TestForm {
    pub form: PartyForm,
    pub events: UnboundedReceiver<FormEvent>,
    pub store: Arc<MemoryPartyStore>,
    pub slots: Arc<HandoffSlots>,
}

impl TestForm {
    /// Builds a form with a memory store and a session token.
    pub fn new(context: FormContext) -> Self {
        let store = Arc::new(MemoryPartyStore::new());
        Self::with_store(context, store.clone(), store)
    }

    /// Builds a form whose saves go to `backend`; `store` is kept for inspection.
    pub fn with_store(
        context: FormContext,
        backend: Arc<dyn PartyStore>,
        store: Arc<MemoryPartyStore>,
    ) -> Self {
        let slots = Arc::new(HandoffSlots::new());
        let services = FormServices::new(backend, slots.clone())
            .with_entropy(Arc::new(FixedEntropy::new(1_700_000_123_456)));
        let settings = FormSettings {
            debounce: DEBOUNCE,
            navigation_delay: NAVIGATION_DELAY,
        };
        let (form, events) = PartyForm::new(context, services, settings);
        Self {
            form,
            events,
            store,
            slots,
        }
    }

    /// Receives the next event and applies it to the form.
    pub async fn pump(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.form.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Applies every event that is already queued.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.form.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Fills every field of `draft` through the form.
    pub fn fill(&mut self, draft: &PartyDraft) {
        for field in PartyField::ALL {
            let value = draft.get(field);
            if !value.is_empty() {
                self.form.set_field(field, value);
            }
        }
    }
}

/// Context with a session token and no prefill.
pub fn session_context() -> FormContext {
    FormContext::new().with_session("tenant-42")
}

/// Draft from the successful-save scenario.
pub fn acme_draft() -> PartyDraft {
    PartyDraft::named("Acme Traders")
        .with(PartyField::ContactPerson1, "9876543210")
        .with(PartyField::Email, "a@b.com")
}

/// Path to the party-intake binary
pub fn party_intake_bin() -> &'static str {
    env!("CARGO_BIN_EXE_party-intake")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(party_intake_bin());
    cmd.env("PARTY_INTAKE_CONFIG_DIR", config_dir);
    cmd.env_remove("PARTY_INTAKE_SESSION");
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Temp config dir with fast form timings and the store inside it.
pub fn fast_config_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("parties");
    let config = format!(
        "[store]\ndata_dir = {:?}\n\n[form]\ndebounce_ms = 10\nnavigation_delay_ms = 10\n",
        data_dir.to_string_lossy()
    );
    std::fs::write(temp_dir.path().join("config.toml"), config).unwrap();
    (temp_dir, data_dir)
}
