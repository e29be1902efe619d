// ── Status snapshot ──
//
// The immutable per-device status record held by entity adapters.
// A snapshot is either fully present (all fields from one successful
// fetch) or absent; actions produce a new snapshot by overlay instead
// of mutating fields in place, so transitions stay atomic.

use ambientika_api::{
    AirQuality, ChangeMode, DeviceStatus, FanSpeed, FilterStatus, HumidityLevel, OperatingMode,
};
use serde::Serialize;

/// Complete status of one device as of its last successful poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub operating_mode: OperatingMode,
    pub fan_speed: FanSpeed,
    pub humidity_level: HumidityLevel,
    /// Measured temperature in °C.
    pub temperature: f64,
    /// Measured relative humidity in %.
    pub humidity: u8,
    pub air_quality: AirQuality,
    pub filter_status: FilterStatus,
    pub humidity_alarm: bool,
    pub night_alarm: bool,
}

impl From<&DeviceStatus> for StatusSnapshot {
    fn from(status: &DeviceStatus) -> Self {
        Self {
            operating_mode: status.operating_mode,
            fan_speed: status.fan_speed,
            humidity_level: status.humidity_level,
            temperature: status.temperature,
            humidity: status.humidity,
            air_quality: status.air_quality,
            filter_status: status.filters_status,
            humidity_alarm: status.humidity_alarm,
            night_alarm: status.night_alarm,
        }
    }
}

impl StatusSnapshot {
    /// The current operating state as a full desired-state record.
    ///
    /// Mutating actions overlay their one change onto this, so the
    /// vendor API never receives a partial payload.
    pub fn desired_state(&self) -> ChangeMode {
        ChangeMode {
            operating_mode: self.operating_mode,
            fan_speed: self.fan_speed,
            humidity_level: self.humidity_level,
        }
    }

    /// A new snapshot with an applied mode change overlaid onto this one.
    ///
    /// Measured fields (temperature, humidity, air quality, filter wear,
    /// alarms) are carried over unchanged; the next poll reconciles them
    /// with the server's actual state.
    pub fn with_change(&self, change: ChangeMode) -> Self {
        Self {
            operating_mode: change.operating_mode,
            fan_speed: change.fan_speed,
            humidity_level: change.humidity_level,
            ..self.clone()
        }
    }
}
