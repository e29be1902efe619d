// ── Measurement sensors ──
//
// Numeric readings (temperature, relative humidity) and enumerated
// readings (air quality, filter wear). Enumerated sensors expose their
// closed option list so hosts can render a fixed value domain.

use std::sync::Arc;

use strum::IntoEnumIterator as _;

use ambientika_api::{AirQuality, FilterStatus};

use crate::device::DeviceHandle;

use super::{DeviceMetadata, EntityCore};

/// Measured temperature in °C.
pub struct TemperatureSensor {
    core: EntityCore,
    unique_id: String,
}

impl TemperatureSensor {
    pub const UNIT: &'static str = "°C";

    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_temperature", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn value(&self) -> Option<f64> {
        self.core.snapshot().map(|s| s.temperature)
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} temperature", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}

/// Measured relative humidity in %.
pub struct HumiditySensor {
    core: EntityCore,
    unique_id: String,
}

impl HumiditySensor {
    pub const UNIT: &'static str = "%";

    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_humidity", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn value(&self) -> Option<u8> {
        self.core.snapshot().map(|s| s.humidity)
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} humidity", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}

/// Air quality classification reported by the device.
pub struct AirQualitySensor {
    core: EntityCore,
    unique_id: String,
}

impl AirQualitySensor {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_air_quality", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn value(&self) -> Option<AirQuality> {
        self.core.snapshot().map(|s| s.air_quality)
    }

    /// The closed, ordered list of values this sensor can report.
    pub fn options() -> Vec<AirQuality> {
        AirQuality::iter().collect()
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} air quality", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}

/// Filter wear classification reported by the device.
pub struct FilterStatusSensor {
    core: EntityCore,
    unique_id: String,
}

impl FilterStatusSensor {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        let unique_id = format!("{}_filter_status", device.serial_number());
        Self {
            core: EntityCore::new(device),
            unique_id,
        }
    }

    pub async fn poll(&mut self) {
        self.core.poll().await;
    }

    pub fn value(&self) -> Option<FilterStatus> {
        self.core.snapshot().map(|s| s.filter_status)
    }

    /// The closed, ordered list of values this sensor can report.
    pub fn options() -> Vec<FilterStatus> {
        FilterStatus::iter().collect()
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> String {
        format!("{} filter status", self.core.device().name())
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatusSnapshot;
    use ambientika_api::{FanSpeed, HumidityLevel, OperatingMode};

    fn snapshot() -> StatusSnapshot {
        StatusSnapshot {
            operating_mode: OperatingMode::Smart,
            fan_speed: FanSpeed::High,
            humidity_level: HumidityLevel::Moist,
            temperature: 23.4,
            humidity: 61,
            air_quality: AirQuality::Medium,
            filter_status: FilterStatus::Bad,
            humidity_alarm: false,
            night_alarm: true,
        }
    }

    #[test]
    fn values_project_snapshot_fields() {
        let device = Arc::new(DeviceHandle::test_handle("SN-1", "Bedroom"));
        let mut temperature = TemperatureSensor::new(Arc::clone(&device));
        let mut filter = FilterStatusSensor::new(device);
        temperature.core.set_snapshot_for_test(Some(snapshot()));
        filter.core.set_snapshot_for_test(Some(snapshot()));
        assert_eq!(temperature.value(), Some(23.4));
        assert_eq!(filter.value(), Some(FilterStatus::Bad));
    }

    #[test]
    fn unavailable_sensors_report_no_value() {
        let device = Arc::new(DeviceHandle::test_handle("SN-1", "Bedroom"));
        let humidity = HumiditySensor::new(Arc::clone(&device));
        let air = AirQualitySensor::new(device);
        assert_eq!(humidity.value(), None);
        assert_eq!(air.value(), None);
        assert!(!air.available());
    }

    #[test]
    fn enumerated_sensors_expose_closed_option_lists() {
        assert_eq!(
            AirQualitySensor::options(),
            vec![
                AirQuality::VeryGood,
                AirQuality::Good,
                AirQuality::Medium,
                AirQuality::Poor,
                AirQuality::Bad,
            ]
        );
        assert_eq!(
            FilterStatusSensor::options(),
            vec![FilterStatus::Good, FilterStatus::Medium, FilterStatus::Bad]
        );
    }

    #[test]
    fn names_and_ids_derive_from_the_device() {
        let device = Arc::new(DeviceHandle::test_handle("SN-7", "Bedroom"));
        let temperature = TemperatureSensor::new(device);
        assert_eq!(temperature.name(), "Bedroom temperature");
        assert_eq!(temperature.unique_id(), "SN-7_temperature");
        assert_eq!(temperature.metadata().manufacturer, "SUEDWIND");
    }
}
