//! Party form state machine.
//!
//! [`PartyForm`] owns the draft, the error map and the generated id, and
//! moves between [`FormState::Idle`], [`FormState::Submitting`] and
//! [`FormState::ConfirmingDiscard`]. Background work (id debounce, the save
//! call, the post-save navigation delay) runs as tokio tasks that report back
//! through [`FormEvent`]s; the host feeds those into
//! [`PartyForm::handle_event`] in delivery order.
//!
//! Methods that start background work must be called from within a tokio
//! runtime.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::form::context::FormContext;
use crate::form::identifier::{generate, GeneratedId, IdEntropy, SystemEntropy};
use crate::form::normalizer::{normalize, Normalized};
use crate::form::scheduler::Timer;
use crate::form::validator::{ErrorMap, FieldValidator};
use crate::models::{PartyDraft, PartyField, PersistedParty};
use crate::services::handoff::HandoffSink;
use crate::services::save::{SaveError, SaveOrchestrator};
use crate::services::store::PartyStore;
use crate::shortcuts::{CommandContext, CommandTable, FormCommand};

/// Form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Accepting edits and commands
    Idle,
    /// A save is in flight
    Submitting,
    /// The discard confirmation dialog is open
    ConfirmingDiscard,
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::ConfirmingDiscard => write!(f, "confirming_discard"),
        }
    }
}

/// Screen the form asks the host to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Previous screen; the draft was discarded
    Back,
    /// Party search screen
    PartySearch,
    /// Booking screen; the saved party is in the handoff
    Booking,
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Neutral information
    Info,
}

/// Transient message for the snackbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Events posted back to the form by its background tasks.
#[derive(Debug)]
pub enum FormEvent {
    /// Name input has been quiet for the debounce interval.
    NameSettled {
        /// Edit ticket the timer was started for
        ticket: u64,
    },
    /// The save task finished.
    SaveFinished(Result<PersistedParty, SaveError>),
    /// The post-save delay elapsed.
    NavigationDue(Navigation),
}

/// Outcome of a field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value stored
    Applied,
    /// Normalizer refused the value; nothing changed
    Rejected,
    /// A save is in flight; edits are not accepted
    Blocked,
}

/// Outcome of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the save task was started
    Started,
    /// Validation failed; errors are in the error map
    Invalid,
    /// The form was not idle
    Busy,
}

/// Timing settings for a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    /// Quiet period before regenerating the id after a name edit
    pub debounce: Duration,
    /// Delay between a successful save and navigation
    pub navigation_delay: Duration,
}

impl FormSettings {
    /// Settings from the `[form]` config section.
    #[must_use]
    pub const fn from_config(config: &FormConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            navigation_delay: Duration::from_millis(config.navigation_delay_ms),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

/// Collaborators a form talks to.
#[derive(Clone)]
pub struct FormServices {
    /// Persistence backend
    pub store: Arc<dyn PartyStore>,
    /// Receiver of the saved party
    pub handoff: Arc<dyn HandoffSink>,
    /// Clock and randomness for generated ids
    pub entropy: Arc<dyn IdEntropy>,
}

impl FormServices {
    /// Services with system entropy.
    pub fn new(store: Arc<dyn PartyStore>, handoff: Arc<dyn HandoffSink>) -> Self {
        Self {
            store,
            handoff,
            entropy: Arc::new(SystemEntropy),
        }
    }

    /// Replaces the entropy source.
    pub fn with_entropy(mut self, entropy: Arc<dyn IdEntropy>) -> Self {
        self.entropy = entropy;
        self
    }
}

/// Intake form for a single party.
pub struct PartyForm {
    draft: PartyDraft,
    errors: ErrorMap,
    state: FormState,
    loading: bool,
    focus: PartyField,
    generated_id: GeneratedId,
    id_generations: u64,
    notice: Option<Notice>,
    navigation: Option<Navigation>,
    persisted: Option<PersistedParty>,
    validator: FieldValidator,
    commands: CommandTable,
    entropy: Arc<dyn IdEntropy>,
    orchestrator: Arc<SaveOrchestrator>,
    settings: FormSettings,
    events: mpsc::UnboundedSender<FormEvent>,
    name_ticket: u64,
    applied_ticket: u64,
    id_debounce: Timer,
    navigation_timer: Timer,
    torn_down: bool,
}

impl PartyForm {
    /// Creates a form and the receiver its background tasks report to.
    ///
    /// The draft is prefilled from the context's selected party when present,
    /// and an id is generated immediately from the (possibly empty) name.
    pub fn new(
        context: FormContext,
        services: FormServices,
        settings: FormSettings,
    ) -> (Self, mpsc::UnboundedReceiver<FormEvent>) {
        let (events, rx) = mpsc::unbounded_channel();

        let draft = match &context.selected_party {
            Some(selected) => {
                info!("Prefilling party form from '{}'", selected.ledger_name);
                selected.to_draft()
            }
            None => PartyDraft::new(),
        };
        let generated_id = generate(&draft.party_name, services.entropy.as_ref());
        let orchestrator = Arc::new(SaveOrchestrator::new(
            services.store,
            services.handoff,
            context.session,
        ));

        let form = Self {
            draft,
            errors: ErrorMap::new(),
            state: FormState::Idle,
            loading: false,
            focus: PartyField::PartyName,
            generated_id,
            id_generations: 1,
            notice: None,
            navigation: None,
            persisted: None,
            validator: FieldValidator::new(),
            commands: CommandTable::new(),
            entropy: services.entropy,
            orchestrator,
            settings,
            events,
            name_ticket: 0,
            applied_ticket: 0,
            id_debounce: Timer::new("id regeneration"),
            navigation_timer: Timer::new("navigation"),
            torn_down: false,
        };
        (form, rx)
    }

    /// Current draft.
    #[must_use]
    pub fn draft(&self) -> &PartyDraft {
        &self.draft
    }

    /// Current field errors.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// True while a save is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while the discard dialog is open.
    #[must_use]
    pub fn is_discard_dialog_open(&self) -> bool {
        self.state == FormState::ConfirmingDiscard
    }

    /// Field that receives typed characters.
    #[must_use]
    pub fn focus(&self) -> PartyField {
        self.focus
    }

    /// Display id for the current name.
    #[must_use]
    pub fn generated_id(&self) -> &GeneratedId {
        &self.generated_id
    }

    /// How many ids have been generated, including the initial one.
    #[must_use]
    pub fn id_generations(&self) -> u64 {
        self.id_generations
    }

    /// Latest notice.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Pending navigation request.
    #[must_use]
    pub fn navigation(&self) -> Option<Navigation> {
        self.navigation
    }

    /// Takes the pending navigation request.
    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    /// Party saved by this form, once the save succeeded.
    #[must_use]
    pub fn persisted(&self) -> Option<&PersistedParty> {
        self.persisted.as_ref()
    }

    /// True after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// True while an id regeneration is waiting for the name to settle.
    #[must_use]
    pub fn is_id_regeneration_pending(&self) -> bool {
        self.id_debounce.is_pending()
    }

    // ------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------

    /// Stores a new value for `field` after normalization.
    ///
    /// Any error on the field is cleared when the edit is applied. Editing the
    /// name (re)starts the id debounce.
    pub fn set_field(&mut self, field: PartyField, raw: &str) -> EditOutcome {
        if self.torn_down {
            return EditOutcome::Blocked;
        }
        if self.state == FormState::Submitting {
            debug!("Ignoring edit of {} while submitting", field.key());
            return EditOutcome::Blocked;
        }

        let Normalized::Accept(value) = normalize(field, raw) else {
            debug!("Rejected input for {}", field.key());
            return EditOutcome::Rejected;
        };

        *self.draft.get_mut(field) = value;
        self.errors.clear(field);

        if field == PartyField::PartyName {
            self.schedule_id_regeneration();
        }
        EditOutcome::Applied
    }

    /// Appends a typed character to the focused field.
    pub fn input_char(&mut self, c: char) -> EditOutcome {
        let field = self.focus;
        let mut proposed = self.draft.get(field).to_string();
        proposed.push(c);
        self.set_field(field, &proposed)
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) -> EditOutcome {
        let field = self.focus;
        let mut proposed = self.draft.get(field).to_string();
        proposed.pop();
        self.set_field(field, &proposed)
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Moves focus to `field`.
    pub fn focus_field(&mut self, field: PartyField) {
        self.focus = field;
    }

    // ------------------------------------------------------------------
    // Generated id
    // ------------------------------------------------------------------

    fn schedule_id_regeneration(&mut self) {
        if self.torn_down {
            return;
        }
        self.name_ticket += 1;
        self.id_debounce.schedule(
            self.settings.debounce,
            self.events.clone(),
            FormEvent::NameSettled {
                ticket: self.name_ticket,
            },
        );
    }

    /// Generates a fresh id from the current name right away.
    ///
    /// A pending debounced regeneration is dropped.
    pub fn regenerate_id(&mut self) {
        self.id_debounce.cancel();
        // Invalidate any settle event already in the channel.
        self.name_ticket += 1;
        self.applied_ticket = self.name_ticket;
        self.apply_generated_id();
    }

    /// True when the name changed since the id was last generated.
    #[must_use]
    pub fn is_id_stale(&self) -> bool {
        self.name_ticket != self.applied_ticket
    }

    fn apply_generated_id(&mut self) {
        self.generated_id = generate(&self.draft.party_name, self.entropy.as_ref());
        self.id_generations += 1;
        debug!("Generated party id {}", self.generated_id);
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Validates the draft and, if valid, starts the save.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.torn_down {
            warn!("Submit ignored after teardown");
            return SubmitOutcome::Busy;
        }
        if self.state != FormState::Idle {
            warn!("Submit ignored in state {}", self.state);
            return SubmitOutcome::Busy;
        }

        self.errors = self.validator.validate(&self.draft);
        if !self.errors.is_empty() {
            info!("Submit blocked by {} field error(s)", self.errors.len());
            self.notice = Some(Notice::new(NoticeLevel::Error, self.errors.summary()));
            return SubmitOutcome::Invalid;
        }

        // The settle event may have fired but still sit in the channel.
        if self.is_id_stale() {
            self.regenerate_id();
        }

        self.state = FormState::Submitting;
        self.loading = true;
        self.notice = None;

        let orchestrator = Arc::clone(&self.orchestrator);
        let draft = self.draft.clone();
        let generated_id = self.generated_id.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = orchestrator.save(&draft, &generated_id).await;
            let _ = tx.send(FormEvent::SaveFinished(result));
        });

        SubmitOutcome::Started
    }

    // ------------------------------------------------------------------
    // Navigation and discard
    // ------------------------------------------------------------------

    /// Opens the discard confirmation. Only valid while idle.
    pub fn request_discard(&mut self) -> bool {
        if self.state != FormState::Idle {
            return false;
        }
        self.state = FormState::ConfirmingDiscard;
        true
    }

    /// Discards the draft and asks to navigate back.
    pub fn confirm_discard(&mut self) -> bool {
        if self.state != FormState::ConfirmingDiscard {
            return false;
        }
        self.id_debounce.cancel();
        self.name_ticket += 1;
        self.applied_ticket = self.name_ticket;
        self.draft = PartyDraft::new();
        self.errors = ErrorMap::new();
        self.state = FormState::Idle;
        self.navigation = Some(Navigation::Back);
        info!("Party draft discarded");
        true
    }

    /// Closes the discard dialog, keeping the draft.
    pub fn dismiss_discard(&mut self) -> bool {
        if self.state != FormState::ConfirmingDiscard {
            return false;
        }
        self.state = FormState::Idle;
        true
    }

    /// Asks to navigate to the party search screen.
    pub fn open_search(&mut self) -> bool {
        if self.state != FormState::Idle {
            return false;
        }
        self.navigation = Some(Navigation::PartySearch);
        true
    }

    // ------------------------------------------------------------------
    // Commands and keys
    // ------------------------------------------------------------------

    /// Context the command table is consulted in.
    #[must_use]
    pub fn command_context(&self) -> CommandContext {
        match self.state {
            FormState::ConfirmingDiscard => CommandContext::DiscardDialog,
            FormState::Idle | FormState::Submitting => CommandContext::Form,
        }
    }

    /// Runs a command if the current state allows it.
    ///
    /// Returns false when the command was a no-op.
    pub fn execute(&mut self, command: FormCommand) -> bool {
        let handled = match (self.state, command) {
            (FormState::Idle, FormCommand::Cancel) => self.request_discard(),
            (FormState::Idle, FormCommand::Save) => self.submit() == SubmitOutcome::Started,
            (FormState::Idle, FormCommand::Search) => self.open_search(),
            (FormState::Idle, FormCommand::RegenerateId) => {
                self.regenerate_id();
                true
            }
            (FormState::ConfirmingDiscard, FormCommand::ConfirmDiscard) => self.confirm_discard(),
            (FormState::ConfirmingDiscard, FormCommand::DismissDiscard) => self.dismiss_discard(),
            _ => false,
        };
        if !handled {
            debug!("Command {} not applicable in state {}", command.id(), self.state);
        }
        handled
    }

    /// Handles a key press: command shortcuts first, then text editing.
    ///
    /// Returns true when the key changed something.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(command) = self.commands.lookup(self.command_context(), key) {
            return self.execute(command);
        }
        if self.state != FormState::Idle {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.focus_next();
                true
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.focus_previous();
                true
            }
            (KeyCode::Backspace, _) => self.backspace() == EditOutcome::Applied,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.input_char(c) == EditOutcome::Applied
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Background events
    // ------------------------------------------------------------------

    /// Applies an event from one of the form's background tasks.
    pub fn handle_event(&mut self, event: FormEvent) {
        if self.torn_down {
            debug!("Discarding {:?} after teardown", event);
            return;
        }

        match event {
            FormEvent::NameSettled { ticket } => {
                if ticket == self.name_ticket && self.is_id_stale() {
                    self.applied_ticket = ticket;
                    self.apply_generated_id();
                } else {
                    debug!("Ignoring stale name ticket {}", ticket);
                }
            }
            FormEvent::SaveFinished(Ok(party)) => {
                self.state = FormState::Idle;
                self.loading = false;
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    format!("Party '{}' saved successfully", party.name()),
                ));
                self.draft = PartyDraft::new();
                self.errors = ErrorMap::new();
                self.orchestrator.publish(&party);
                self.persisted = Some(party);
                self.navigation_timer.schedule(
                    self.settings.navigation_delay,
                    self.events.clone(),
                    FormEvent::NavigationDue(Navigation::Booking),
                );
            }
            FormEvent::SaveFinished(Err(e)) => {
                warn!("Party save failed: {}", e);
                self.state = FormState::Idle;
                self.loading = false;
                self.notice = Some(Notice::new(NoticeLevel::Error, e.to_string()));
            }
            FormEvent::NavigationDue(target) => {
                self.navigation = Some(target);
            }
        }
    }

    /// Cancels pending timers and stops accepting events.
    ///
    /// A save already in flight still completes, but its result is dropped
    /// and never handed off. Later submits and edits are refused.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.id_debounce.cancel();
        self.navigation_timer.cancel();
        self.torn_down = true;
        debug!("Party form torn down");
    }
}

impl std::fmt::Debug for PartyForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartyForm")
            .field("state", &self.state)
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("generated_id", &self.generated_id)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectedParty;
    use crate::services::handoff::HandoffSlots;
    use crate::services::store::MemoryPartyStore;

    fn services() -> (FormServices, Arc<MemoryPartyStore>) {
        let store = Arc::new(MemoryPartyStore::new());
        let services = FormServices::new(store.clone(), Arc::new(HandoffSlots::new()));
        (services, store)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[tokio::test]
    async fn test_new_form_without_prefill_uses_fallback_id() {
        let (services, _) = services();
        let (form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.draft(), &PartyDraft::new());
        assert_eq!(form.generated_id().stem(), "NEW");
        assert_eq!(form.id_generations(), 1);
    }

    #[tokio::test]
    async fn test_new_form_prefills_from_selection() {
        let (services, _) = services();
        let selected = SelectedParty {
            ledger_name: "Grand Hotel".to_string(),
            address_line1: "12 MG Road".to_string(),
            address_line2: "Block C".to_string(),
            ..SelectedParty::default()
        };
        let ctx = FormContext::new().with_selected_party(selected.clone());
        let (form, _rx) = PartyForm::new(ctx.clone(), services, FormSettings::default());

        assert_eq!(form.draft().party_name, "Grand Hotel");
        assert_eq!(form.draft().address, "12 MG Road, Block C");
        assert_eq!(form.generated_id().stem(), "GRAN");
        // The slot is read, not consumed
        assert_eq!(ctx.selected_party, Some(selected));
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_fields_error() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        form.set_field(PartyField::Email, "bad");
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert!(form.errors().contains(PartyField::PartyName));
        assert!(form.errors().contains(PartyField::Email));

        assert_eq!(form.set_field(PartyField::Email, "bad@"), EditOutcome::Applied);
        assert!(!form.errors().contains(PartyField::Email));
        assert!(form.errors().contains(PartyField::PartyName));
    }

    #[tokio::test]
    async fn test_rejected_edit_keeps_error_and_value() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        form.set_field(PartyField::Zipcode, "12");
        form.submit();
        assert!(form.errors().contains(PartyField::Zipcode));

        assert_eq!(
            form.set_field(PartyField::Zipcode, "1234567"),
            EditOutcome::Rejected
        );
        assert_eq!(form.draft().zipcode, "12");
        assert!(form.errors().contains(PartyField::Zipcode));
    }

    #[tokio::test]
    async fn test_typing_into_focused_phone_field() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        assert!(form.handle_key(key(KeyCode::Tab, KeyModifiers::NONE)));
        assert_eq!(form.focus(), PartyField::ContactPerson1);

        for c in "98-76543210x9".chars() {
            form.handle_key(key(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(form.draft().contact_person1, "9876543210");

        assert!(form.handle_key(key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(form.draft().contact_person1, "987654321");
    }

    #[tokio::test]
    async fn test_invalid_submit_sets_notice_and_never_saves() {
        let (services, store) = services();
        let ctx = FormContext::new().with_session("tenant");
        let (mut form, mut rx) = PartyForm::new(ctx, services, FormSettings::default());
        form.set_field(PartyField::PartyName, "A");

        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.is_loading());
        assert_eq!(form.notice().map(|n| n.level), Some(NoticeLevel::Error));

        tokio::task::yield_now().await;
        assert!(store.is_empty());
        // Only the debounce timer is pending; no save result arrives.
        form.teardown();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_commands_follow_state() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());

        assert!(!form.execute(FormCommand::ConfirmDiscard));
        assert!(!form.execute(FormCommand::DismissDiscard));
        assert!(form.execute(FormCommand::Cancel));
        assert_eq!(form.state(), FormState::ConfirmingDiscard);

        assert!(!form.execute(FormCommand::Save));
        assert!(!form.execute(FormCommand::Search));
        assert!(!form.execute(FormCommand::RegenerateId));
        assert!(!form.execute(FormCommand::Cancel));
        assert_eq!(form.state(), FormState::ConfirmingDiscard);
    }

    #[tokio::test]
    async fn test_search_command() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        assert!(form.handle_key(key(KeyCode::Char('f'), KeyModifiers::CONTROL)));
        assert_eq!(form.take_navigation(), Some(Navigation::PartySearch));
        assert_eq!(form.navigation(), None);
    }

    #[tokio::test]
    async fn test_regenerate_counts_generation() {
        let (services, _) = services();
        let (mut form, _rx) = PartyForm::new(FormContext::new(), services, FormSettings::default());
        form.set_field(PartyField::PartyName, "Grand Hotel");
        assert!(form.is_id_regeneration_pending());

        assert!(form.handle_key(key(KeyCode::Char('g'), KeyModifiers::CONTROL)));
        assert!(!form.is_id_regeneration_pending());
        assert_eq!(form.id_generations(), 2);
        assert_eq!(form.generated_id().stem(), "GRAN");
    }
}
