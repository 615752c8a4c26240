//! Save handshake for a validated party draft.

use std::sync::Arc;

use tracing::{info, warn};

use crate::form::identifier::GeneratedId;
use crate::models::{PartyDraft, PartyPayload, PersistedParty};
use crate::services::handoff::{publish_party, HandoffSink};
use crate::services::store::PartyStore;

/// Why a save attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// No tenant/session token is available; nothing was sent.
    MissingSession,
    /// The store rejected the payload or could not be reached.
    SaveFailed(String),
}

impl SaveError {
    /// Stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSession => "MISSING_SESSION",
            Self::SaveFailed(_) => "SAVE_FAILED",
        }
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSession => {
                write!(f, "No active session found. Please sign in again and retry.")
            }
            Self::SaveFailed(message) => write!(f, "Failed to save party: {message}"),
        }
    }
}

impl std::error::Error for SaveError {}

/// Builds the wire payload and submits it; publishes saved parties on request.
pub struct SaveOrchestrator {
    store: Arc<dyn PartyStore>,
    handoff: Arc<dyn HandoffSink>,
    session: Option<String>,
}

impl SaveOrchestrator {
    /// Creates an orchestrator. A blank session token counts as missing.
    pub fn new(
        store: Arc<dyn PartyStore>,
        handoff: Arc<dyn HandoffSink>,
        session: Option<String>,
    ) -> Self {
        let session = session.filter(|token| !token.trim().is_empty());
        Self {
            store,
            handoff,
            session,
        }
    }

    /// Saves `draft` under `generated_id`.
    ///
    /// The caller must have validated the draft. Nothing is published here;
    /// the owner decides whether the result is still wanted and then calls
    /// [`SaveOrchestrator::publish`].
    pub async fn save(
        &self,
        draft: &PartyDraft,
        generated_id: &GeneratedId,
    ) -> Result<PersistedParty, SaveError> {
        let Some(session) = self.session.as_deref() else {
            warn!("Save refused: no session token");
            return Err(SaveError::MissingSession);
        };

        let payload =
            PartyPayload::from_draft(draft, generated_id.clone(), session, chrono::Utc::now());
        info!(
            "Saving party '{}' as {}",
            payload.ledger_name, payload.party_code
        );

        let record = self.store.create(payload).await.map_err(|e| {
            warn!("Party store failed: {e:#}");
            SaveError::SaveFailed(e.to_string())
        })?;

        let party = PersistedParty::from_record(record);
        info!("Saved party {} ({})", party.id(), party.generated_id());
        Ok(party)
    }

    /// Hands a saved party to the next screen.
    pub fn publish(&self, party: &PersistedParty) {
        publish_party(self.handoff.as_ref(), party);
    }
}

impl std::fmt::Debug for SaveOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveOrchestrator")
            .field("has_session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}
