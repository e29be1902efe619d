// ── Alarm binary sensors ──
//
// Humidity and night alarms, read straight off the status snapshot.
// `is_on()` is `None` while no snapshot is held, mirroring the climate
// adapter's availability behavior.

use std::sync::Arc;

use crate::device::DeviceHandle;

use super::{DeviceMetadata, EntityCore};

/// Reports whether the device's humidity alarm is raised.
pub struct HumidityAlarmSensor {
    core: EntityCore,
    unique_id: String,
}

impl HumidityAlarmSensor {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_humidity_alarm", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn is_on(&self) -> Option<bool> {
        self.core.snapshot().map(|s| s.humidity_alarm)
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} humidity alarm", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}

/// Reports whether the device's night alarm is raised.
pub struct NightAlarmSensor {
    core: EntityCore,
    unique_id: String,
}

impl NightAlarmSensor {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_night_alarm", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn is_on(&self) -> Option<bool> {
        self.core.snapshot().map(|s| s.night_alarm)
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} night alarm", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}
