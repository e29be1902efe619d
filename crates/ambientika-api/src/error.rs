use thiserror::Error;

/// Top-level error type for the `ambientika-api` crate.
///
/// Covers every failure mode of the cloud API surface. `ambientika-core`
/// maps these into its two coordinator outcomes: re-authentication
/// required vs. transient update failure.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected, or an authenticated call answered HTTP 401.
    /// Fatal to the session -- the caller must re-authenticate.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success response from the cloud API.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The account has no houses configured, so no devices can exist.
    #[error("Ambientika does not have houses set up")]
    NoHouses,

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session is no longer valid
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying on the
    /// next scheduled poll.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { .. } | Self::Deserialization { .. } => true,
            _ => false,
        }
    }
}
