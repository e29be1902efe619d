//! Output rendering: tables for humans, JSON for scripts.

use clap::ValueEnum;
use serde::Serialize;
use tabled::Tabled;
use tabled::settings::Style;

use ambientika_core::StatusSnapshot;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// One device in `ambientika devices` output.
#[derive(Debug, Serialize, Tabled)]
pub struct DeviceRow {
    #[tabled(rename = "SERIAL")]
    pub serial: String,
    #[tabled(rename = "NAME")]
    pub name: String,
}

/// One device status in `ambientika status` / `watch` output.
#[derive(Debug, Serialize, Tabled)]
pub struct StatusRow {
    #[tabled(rename = "SERIAL")]
    pub serial: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "MODE")]
    pub mode: String,
    #[tabled(rename = "FAN")]
    pub fan: String,
    #[tabled(rename = "TARGET")]
    pub humidity_target: u8,
    #[tabled(rename = "TEMP °C")]
    pub temperature: f64,
    #[tabled(rename = "HUMIDITY %")]
    pub humidity: u8,
    #[tabled(rename = "AIR")]
    pub air_quality: String,
    #[tabled(rename = "FILTER")]
    pub filter_status: String,
    #[tabled(rename = "ALARMS")]
    pub alarms: String,
}

impl StatusRow {
    pub fn new(serial: &str, name: &str, snapshot: &StatusSnapshot) -> Self {
        let alarms = match (snapshot.humidity_alarm, snapshot.night_alarm) {
            (true, true) => "humidity, night".to_owned(),
            (true, false) => "humidity".to_owned(),
            (false, true) => "night".to_owned(),
            (false, false) => "-".to_owned(),
        };
        Self {
            serial: serial.to_owned(),
            name: name.to_owned(),
            mode: snapshot.operating_mode.to_string(),
            fan: snapshot.fan_speed.to_string(),
            humidity_target: snapshot.humidity_level.as_level(),
            temperature: snapshot.temperature,
            humidity: snapshot.humidity,
            air_quality: snapshot.air_quality.to_string(),
            filter_status: snapshot.filter_status.to_string(),
            alarms,
        }
    }
}

/// Render rows in the requested format to stdout.
pub fn print_rows<T: Tabled + Serialize>(format: OutputFormat, rows: &[T]) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            let mut table = tabled::Table::new(rows);
            table.with(Style::sharp());
            println!("{table}");
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(rows).map_err(|e| CliError::Validation {
                    field: "output".into(),
                    reason: e.to_string(),
                })?;
            println!("{json}");
        }
    }
    Ok(())
}
