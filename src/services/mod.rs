//! Service layer for the save handshake.
//!
//! This module holds the collaborators the form talks to when a draft is
//! saved: the persistence store, the handoff channel, and the orchestrator
//! tying them together.

pub mod handoff;
pub mod save;
pub mod store;

// Re-export commonly used types and functions
pub use handoff::{publish_party, HandoffSink, HandoffSlots};
pub use save::{SaveError, SaveOrchestrator};
pub use store::{JsonFilePartyStore, MemoryPartyStore, PartyStore};
