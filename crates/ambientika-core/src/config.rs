use std::time::Duration;

use ambientika_api::transport::TransportConfig;
use ambientika_api::{Credentials, DEFAULT_HOST};
use url::Url;

/// How often the hub re-lists devices from the cloud.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Configuration for one [`Hub`](crate::Hub) instance.
///
/// The config surface is deliberately small: credentials plus the cloud
/// host. Credentials are immutable after construction and owned
/// exclusively by the hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub credentials: Credentials,
    pub host: Url,
    /// Fixed refresh interval; no backoff or coalescing beyond it.
    pub poll_interval: Duration,
    pub transport: TransportConfig,
}

impl HubConfig {
    /// Config for the default cloud host.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            host: Url::parse(DEFAULT_HOST).expect("default host URL is valid"),
            poll_interval: DEFAULT_POLL_INTERVAL,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_host(mut self, host: Url) -> Self {
        self.host = host;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
