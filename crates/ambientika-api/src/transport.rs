// Shared transport configuration for building reqwest::Client instances.
//
// The login call and the authenticated client share timeout and
// user-agent settings through this module, avoiding duplicated builder
// logic.

use std::time::Duration;

use crate::error::Error;

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("ambientika-rs/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Transport)
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by the authenticated client to inject the `Authorization`
    /// bearer header on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}
