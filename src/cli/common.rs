//! Shared CLI plumbing: error type, exit codes and field flags.

use crate::config::Config;
use crate::constants::SESSION_ENV;
use crate::models::PartyField;
use clap::Args;
use std::fmt;

/// Failure exit codes used by every command. Success exits with 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Input or state was invalid
    Validation = 1,
    /// File system or backend failure
    Io = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input or state (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system or backend failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Party field flags shared by `create` and `validate`.
#[derive(Debug, Clone, Default, Args)]
pub struct PartyFieldArgs {
    /// Party (ledger) name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Primary contact phone (10 digits)
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Secondary contact phone (10 digits)
    #[arg(long, value_name = "PHONE")]
    pub phone2: Option<String>,

    /// Primary email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Secondary email
    #[arg(long, value_name = "EMAIL")]
    pub alt_email: Option<String>,

    /// Street address
    #[arg(long, value_name = "TEXT")]
    pub address: Option<String>,

    /// Postal code (6 digits)
    #[arg(long, value_name = "ZIP")]
    pub zipcode: Option<String>,

    /// Country
    #[arg(long, value_name = "TEXT")]
    pub country: Option<String>,

    /// City
    #[arg(long, value_name = "TEXT")]
    pub city: Option<String>,

    /// State or province
    #[arg(long, value_name = "TEXT")]
    pub state: Option<String>,

    /// First alternate phone (10 digits)
    #[arg(long, value_name = "PHONE")]
    pub alt_contact1: Option<String>,

    /// Second alternate phone (10 digits)
    #[arg(long, value_name = "PHONE")]
    pub alt_contact2: Option<String>,
}

impl PartyFieldArgs {
    /// Flags that were given, in form field order.
    #[must_use]
    pub fn values(&self) -> Vec<(PartyField, &str)> {
        [
            (PartyField::PartyName, &self.name),
            (PartyField::ContactPerson1, &self.phone),
            (PartyField::ContactPerson2, &self.phone2),
            (PartyField::Email, &self.email),
            (PartyField::AlternateEmail, &self.alt_email),
            (PartyField::Address, &self.address),
            (PartyField::Zipcode, &self.zipcode),
            (PartyField::Country, &self.country),
            (PartyField::City, &self.city),
            (PartyField::State, &self.state),
            (PartyField::AlternateContact1, &self.alt_contact1),
            (PartyField::AlternateContact2, &self.alt_contact2),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Resolves the session token: flag, then environment, then config.
#[must_use]
pub fn resolve_session(flag: Option<&str>, config: &Config) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var(SESSION_ENV).ok())
        .filter(|token| !token.trim().is_empty())
        .or_else(|| config.tenant_id().map(str::to_string))
}

/// Loads the configuration, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}
