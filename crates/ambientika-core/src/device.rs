use std::sync::Arc;

use ambientika_api::{ApiClient, ChangeMode, DeviceInfo, DeviceStatus, Error};

/// Opaque reference to one physical ventilation unit.
///
/// The serial number is the stable identity key across refreshes. The
/// hub owns the handle; entity adapters share it read-only via `Arc`
/// and never take ownership.
pub struct DeviceHandle {
    serial_number: String,
    name: String,
    client: Arc<ApiClient>,
}

impl DeviceHandle {
    pub(crate) fn new(info: DeviceInfo, client: Arc<ApiClient>) -> Self {
        Self {
            serial_number: info.serial_number,
            name: info.name,
            client,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch the current status of this device.
    pub async fn status(&self) -> Result<DeviceStatus, Error> {
        self.client.device_status(&self.serial_number).await
    }

    /// Replace the full operating state of this device.
    pub async fn change_mode(&self, change: ChangeMode) -> Result<(), Error> {
        self.client.change_mode(&self.serial_number, change).await
    }

    /// Reset the filter-wear counter of this device.
    pub async fn reset_filter(&self) -> Result<(), Error> {
        self.client.reset_filter(&self.serial_number).await
    }
}

#[cfg(test)]
impl DeviceHandle {
    /// Handle bound to an unreachable endpoint, for unit tests that
    /// never touch the network.
    pub(crate) fn test_handle(serial: &str, name: &str) -> Self {
        let host = url::Url::parse("http://127.0.0.1:1").expect("static test URL parses");
        let client = ApiClient::with_token(
            "test-token",
            &host,
            &ambientika_api::TransportConfig::default(),
        )
        .expect("offline client builds");
        Self {
            serial_number: serial.to_owned(),
            name: name.to_owned(),
            client: Arc::new(client),
        }
    }
}

impl std::fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("serial_number", &self.serial_number)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
