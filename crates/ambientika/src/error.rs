//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

use ambientika_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const UNAVAILABLE: i32 = 5;
    pub const REJECTED: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(ambientika::auth_failed),
        help(
            "Verify your Ambientika account credentials.\n\
             Pass --username/--password or set AMBIENTIKA_USERNAME / AMBIENTIKA_PASSWORD."
        )
    )]
    AuthFailed(#[source] CoreError),

    #[error("No username given")]
    #[diagnostic(
        code(ambientika::no_credentials),
        help("Pass --username (-u) or set the AMBIENTIKA_USERNAME environment variable.")
    )]
    NoCredentials,

    #[error("Session expired")]
    #[diagnostic(
        code(ambientika::session_expired),
        help("The cloud invalidated the session token. Re-run the command to log in again.")
    )]
    SessionExpired,

    // ── Devices ──────────────────────────────────────────────────────
    #[error("No supported devices found on this account")]
    #[diagnostic(
        code(ambientika::no_devices),
        help("Add your devices to a house in the Ambientika app, then retry.")
    )]
    NoDevices,

    #[error("Device '{serial}' not found")]
    #[diagnostic(
        code(ambientika::not_found),
        help("Run: ambientika devices to see the known serial numbers")
    )]
    DeviceNotFound { serial: String },

    #[error("Device '{serial}' did not report a status")]
    #[diagnostic(
        code(ambientika::unavailable),
        help("The device may be offline or unreachable from the cloud; retry in a few minutes.")
    )]
    Unavailable { serial: String },

    // ── Actions ──────────────────────────────────────────────────────
    #[error("The cloud rejected '{action}' for device '{serial}'")]
    #[diagnostic(
        code(ambientika::rejected),
        help("Re-run with -v for the rejection details.")
    )]
    Rejected { action: String, serial: String },

    // ── Setup ────────────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ambientika::validation))]
    Validation { field: String, reason: String },

    #[error("Device discovery failed")]
    #[diagnostic(
        code(ambientika::discovery),
        help("Check your network connection and the --host value.")
    )]
    Discovery(#[source] CoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed(_) | Self::NoCredentials | Self::SessionExpired => exit_code::AUTH,
            Self::NoDevices | Self::DeviceNotFound { .. } => exit_code::NOT_FOUND,
            Self::Unavailable { .. } => exit_code::UNAVAILABLE,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Discovery(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCredentials(_) => Self::AuthFailed(err),
            CoreError::NoDevicesFound => Self::NoDevices,
            CoreError::Discovery(_) => Self::Discovery(err),
        }
    }
}
