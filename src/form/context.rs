//! External context injected into the form at construction.

use tracing::warn;

use crate::models::SelectedParty;

/// Read-only context for one form instance.
///
/// Holds the session token used at save time and the party picked on the
/// search screen, if any. Neither is modified by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    /// Tenant/session token
    pub session: Option<String>,
    /// Prefill selection
    pub selected_party: Option<SelectedParty>,
}

impl FormContext {
    /// Creates a context with neither session nor selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the session token.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Sets the prefill selection.
    pub fn with_selected_party(mut self, selected: SelectedParty) -> Self {
        self.selected_party = Some(selected);
        self
    }

    /// Builds a context from raw slot contents.
    ///
    /// An unparseable selection is logged and treated as absent.
    #[must_use]
    pub fn from_slots(session: Option<String>, selected_party_json: Option<&str>) -> Self {
        let selected_party = selected_party_json
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match SelectedParty::from_json(raw) {
                Ok(selected) => Some(selected),
                Err(e) => {
                    warn!("Ignoring unreadable party selection: {e}");
                    None
                }
            });
        Self {
            session,
            selected_party,
        }
    }
}
