//! CLI command handlers for Party Intake.
//!
//! This module provides headless, scriptable access to the party form for
//! automation and testing.

pub mod common;
pub mod config;
pub mod create;
pub mod generate_id;
pub mod list;
pub mod shortcuts;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use create::CreateArgs;
pub use generate_id::GenerateIdArgs;
pub use list::ListArgs;
pub use shortcuts::ShortcutsArgs;
pub use validate::ValidateArgs;
