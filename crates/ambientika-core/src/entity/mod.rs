// ── Entity adapters ──
//
// One adapter per exposed capability, all sharing the same lifecycle:
// poll the bound device, hold at most one status snapshot, never let a
// fetch or action failure escape to the caller. A failed poll clears
// the snapshot (availability = false); the host's own schedule
// re-invokes the poll, so adapters never retry on their own.

mod binary_sensor;
mod button;
mod climate;
mod sensor;

pub use binary_sensor::{HumidityAlarmSensor, NightAlarmSensor};
pub use button::FilterResetButton;
pub use climate::{ClimateEntity, HvacMode};
pub use sensor::{AirQualitySensor, FilterStatusSensor, HumiditySensor, TemperatureSensor};

use std::sync::Arc;

use tracing::{debug, error};

use ambientika_api::OperatingMode;

use crate::device::DeviceHandle;
use crate::hub::Hub;
use crate::model::StatusSnapshot;

/// Registry metadata linking an entity to its physical device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceMetadata {
    pub name: String,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub serial_number: String,
}

/// Shared per-entity state: the bound device plus the last snapshot.
///
/// Each adapter embeds one of these; there is no shared mutable state
/// between adapters beyond the (read-only) device handle itself.
pub(crate) struct EntityCore {
    device: Arc<DeviceHandle>,
    snapshot: Option<StatusSnapshot>,
}

impl EntityCore {
    pub(crate) fn new(device: Arc<DeviceHandle>) -> Self {
        Self {
            device,
            snapshot: None,
        }
    }

    pub(crate) fn device(&self) -> &Arc<DeviceHandle> {
        &self.device
    }

    /// Fetch fresh status for the bound device.
    ///
    /// On success the held snapshot is replaced wholesale and the wire
    /// record's last-operating-mode (when reported) is returned so the
    /// climate adapter can seed its memory. On failure the snapshot is
    /// cleared and the error only logged -- never raised.
    pub(crate) async fn poll(&mut self) -> Option<OperatingMode> {
        match self.device.status().await {
            Ok(status) => {
                debug!(serial = self.device.serial_number(), "status poll ok");
                self.snapshot = Some(StatusSnapshot::from(&status));
                status.last_operating_mode
            }
            Err(e) => {
                error!(
                    serial = self.device.serial_number(),
                    error = %e,
                    "could not fetch device status"
                );
                self.snapshot = None;
                None
            }
        }
    }

    pub(crate) fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    pub(crate) fn replace_snapshot(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub(crate) fn available(&self) -> bool {
        self.snapshot.is_some()
    }

    pub(crate) fn metadata(&self) -> DeviceMetadata {
        DeviceMetadata {
            name: self.device.name().to_owned(),
            manufacturer: "SUEDWIND",
            model: "Ambientika",
            serial_number: self.device.serial_number().to_owned(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snapshot_for_test(&mut self, snapshot: Option<StatusSnapshot>) {
        self.snapshot = snapshot;
    }
}

/// The full entity set for one device.
pub struct DeviceEntities {
    pub climate: ClimateEntity,
    pub filter_reset: FilterResetButton,
    pub humidity_alarm: HumidityAlarmSensor,
    pub night_alarm: NightAlarmSensor,
    pub temperature: TemperatureSensor,
    pub humidity: HumiditySensor,
    pub air_quality: AirQualitySensor,
    pub filter_status: FilterStatusSensor,
}

impl DeviceEntities {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        Self {
            climate: ClimateEntity::new(Arc::clone(&device)),
            filter_reset: FilterResetButton::new(Arc::clone(&device)),
            humidity_alarm: HumidityAlarmSensor::new(Arc::clone(&device)),
            night_alarm: NightAlarmSensor::new(Arc::clone(&device)),
            temperature: TemperatureSensor::new(Arc::clone(&device)),
            humidity: HumiditySensor::new(Arc::clone(&device)),
            air_quality: AirQualitySensor::new(Arc::clone(&device)),
            filter_status: FilterStatusSensor::new(device),
        }
    }
}

/// Build the entity set for every device the hub currently knows.
pub fn build_entities(hub: &Hub) -> Vec<DeviceEntities> {
    hub.devices().into_iter().map(DeviceEntities::new).collect()
}
