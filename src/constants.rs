//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and form timing defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Party Intake";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "party-intake";

/// Prefix of every generated party id.
pub const GENERATED_ID_PREFIX: &str = "PID";

/// Name stem used when the party name is empty.
pub const GENERATED_ID_FALLBACK: &str = "NEW";

/// Quiet period after the last name edit before the id is regenerated.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Delay between a successful save and navigation to the booking screen.
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 1500;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PARTY_INTAKE_CONFIG_DIR";

/// Environment variable overriding the session token.
pub const SESSION_ENV: &str = "PARTY_INTAKE_SESSION";
