//! Party Intake Library
//!
//! This library provides the controller behind the party intake form: field
//! validation and normalization, display id generation, the form state
//! machine, and the save handshake that hands a persisted party to the
//! booking screen.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod form;
pub mod models;
pub mod services;
pub mod shortcuts;

// Re-export commonly used types
pub use config::Config;
pub use form::{FormContext, PartyForm};
pub use models::{PartyDraft, PartyField, PersistedParty};
