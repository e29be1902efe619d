// ── Filter reset button ──

use std::sync::Arc;

use tracing::{error, info};

use crate::device::DeviceHandle;

use super::DeviceMetadata;

/// Stateless action entity that resets the device's filter-wear counter.
///
/// A press is fire-and-forget: the outcome is logged and reported as a
/// bool, and the filter status sensor catches up on its next poll.
pub struct FilterResetButton {
    device: Arc<DeviceHandle>,
    unique_id: String,
}

impl FilterResetButton {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_filter_reset", device.serial_number());
        Self { device, unique_id }
    }

    /// Trigger the filter reset. Returns whether the cloud accepted it.
    pub async fn press(&self) -> bool {
        match self.device.reset_filter().await {
            Ok(()) => {
                info!(serial = self.device.serial_number(), "filter reset");
                true
            }
            Err(e) => {
                error!(
                    serial = self.device.serial_number(),
                    error = %e,
                    "filter reset failed"
                );
                false
            }
        }
    }

    pub fn name(&self) -> String {
        format!("{} filter reset", self.device.name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        DeviceMetadata {
            name: self.device.name().to_owned(),
            manufacturer: "SUEDWIND",
            model: "Ambientika",
            serial_number: self.device.serial_number().to_owned(),
        }
    }
}
