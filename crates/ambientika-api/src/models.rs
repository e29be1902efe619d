// ── Wire model for the Ambientika cloud API ──
//
// Fixed-field structs with camelCase wire names. Enumerations are
// closed, ordered lists declared at compile time; display names derive
// from the member list directly (no runtime reflection).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ── Enumerations ────────────────────────────────────────────────────

/// Ventilation operating mode. `Off` and `Auto` are special-cased by
/// the climate adapter; the rest are vendor-defined named presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum OperatingMode {
    Smart,
    Auto,
    ManualHeatRecovery,
    Night,
    AwayHome,
    Surveillance,
    TimedExpulsion,
    Expulsion,
    Intake,
    MasterSlaveFlow,
    SlaveMasterFlow,
    Off,
}

/// Airflow level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum FanSpeed {
    Low,
    Medium,
    High,
}

/// Target humidity band. Exposed to users as the integers 1-3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum HumidityLevel {
    Dry,
    Normal,
    Moist,
}

impl HumidityLevel {
    /// The user-facing integer level (1-3).
    pub fn as_level(self) -> u8 {
        match self {
            Self::Dry => 1,
            Self::Normal => 2,
            Self::Moist => 3,
        }
    }

    /// Parse a user-facing integer level (1-3).
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Dry),
            2 => Some(Self::Normal),
            3 => Some(Self::Moist),
            _ => None,
        }
    }
}

/// Measured air quality category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum AirQuality {
    VeryGood,
    Good,
    Medium,
    Poor,
    Bad,
}

/// Filter wear category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum FilterStatus {
    Good,
    Medium,
    Bad,
}

// ── Hierarchy ───────────────────────────────────────────────────────

/// A configured house; the top of the house → room → device hierarchy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

/// A room grouping devices inside a house.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
}

/// One physical ventilation unit. The serial number is the stable
/// identity key across refreshes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub serial_number: String,
    pub name: String,
}

// ── Device status ───────────────────────────────────────────────────

/// Complete status record for one device, as returned by
/// `device/device-status`. All fields come from a single fetch; the
/// client never hands out partially-populated records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub operating_mode: OperatingMode,
    pub fan_speed: FanSpeed,
    pub humidity_level: HumidityLevel,
    /// Measured temperature in °C.
    pub temperature: f64,
    /// Measured relative humidity in %.
    pub humidity: u8,
    pub air_quality: AirQuality,
    pub filters_status: FilterStatus,
    pub humidity_alarm: bool,
    pub night_alarm: bool,
    /// Mode active before the device was last switched off. Not reported
    /// by all firmware revisions.
    #[serde(default)]
    pub last_operating_mode: Option<OperatingMode>,
}

// ── Mode change ─────────────────────────────────────────────────────

/// Full desired-state record for `device/change-mode`.
///
/// Every field is mandatory: the API replaces the whole operating state,
/// so a partial payload is unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeMode {
    pub operating_mode: OperatingMode,
    pub fan_speed: FanSpeed,
    pub humidity_level: HumidityLevel,
}

/// Wire payload for `device/change-mode`: a [`ChangeMode`] plus the
/// target device serial.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangeModeRequest<'a> {
    pub device_serial_number: &'a str,
    #[serde(flatten)]
    pub change: ChangeMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn humidity_level_round_trips_through_integer_levels() {
        for level in HumidityLevel::iter() {
            assert_eq!(HumidityLevel::from_level(level.as_level()), Some(level));
        }
        assert_eq!(HumidityLevel::from_level(0), None);
        assert_eq!(HumidityLevel::from_level(4), None);
    }

    #[test]
    fn operating_mode_list_is_closed_and_ordered() {
        let names: Vec<String> = OperatingMode::iter().map(|m| m.to_string()).collect();
        assert_eq!(names.first().map(String::as_str), Some("Smart"));
        assert_eq!(names.last().map(String::as_str), Some("Off"));
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn change_mode_serializes_every_field() {
        let req = ChangeModeRequest {
            device_serial_number: "AB1234",
            change: ChangeMode {
                operating_mode: OperatingMode::Auto,
                fan_speed: FanSpeed::High,
                humidity_level: HumidityLevel::Normal,
            },
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["deviceSerialNumber"], "AB1234");
        assert_eq!(value["operatingMode"], "Auto");
        assert_eq!(value["fanSpeed"], "High");
        assert_eq!(value["humidityLevel"], "Normal");
    }

    #[test]
    fn device_status_parses_a_full_record() {
        let body = serde_json::json!({
            "operatingMode": "Smart",
            "fanSpeed": "Medium",
            "humidityLevel": "Dry",
            "temperature": 21.5,
            "humidity": 48,
            "airQuality": "VeryGood",
            "filtersStatus": "Good",
            "humidityAlarm": false,
            "nightAlarm": true,
        });
        let status: DeviceStatus = serde_json::from_value(body).unwrap();
        assert_eq!(status.operating_mode, OperatingMode::Smart);
        assert_eq!(status.humidity, 48);
        assert_eq!(status.last_operating_mode, None);
        assert!(status.night_alarm);
    }
}
