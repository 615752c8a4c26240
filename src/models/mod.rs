//! Data models for party drafts and the records built from them.
//!
//! Models are independent of the form logic and of any storage backend.

pub mod party;
pub mod record;

// Re-export all model types
pub use party::{FieldClass, PartyDraft, PartyField};
pub use record::{PartyPayload, PartyRecord, PersistedParty, SelectedParty};
