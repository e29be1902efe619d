use thiserror::Error;

/// Errors surfaced during hub setup and device lookup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Authentication failed at setup. Fatal -- the user must correct
    /// their credentials; the hub does not retry.
    #[error("invalid credentials")]
    InvalidCredentials(#[source] ambientika_api::Error),

    /// Login succeeded but the account exposes no devices.
    #[error("no supported devices found")]
    NoDevicesFound,

    /// Device discovery failed at setup for a non-authentication reason.
    #[error("device discovery failed")]
    Discovery(#[source] ambientika_api::Error),
}

/// Outcome classification for a failed [`Hub::refresh`](crate::Hub::refresh).
///
/// The two variants map onto distinct host reactions: `AuthExpired` is
/// terminal for the session (re-prompt the user), `UpdateFailed` is
/// transient (the next scheduled tick retries; entity identity is kept).
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("re-authentication required")]
    AuthExpired(#[source] ambientika_api::Error),

    #[error("update failed")]
    UpdateFailed(#[source] ambientika_api::Error),
}
