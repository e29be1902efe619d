//! Mode, speed, humidity, and power commands.
//!
//! All of these go through the climate adapter so the CLI exercises the
//! same overlay semantics a host runtime would: fetch the full current
//! state first, change one field, send the whole desired state.

use std::sync::Arc;

use ambientika_core::entity::ClimateEntity;
use ambientika_core::{FanSpeed, Hub, HumidityLevel, OperatingMode};

use crate::error::CliError;

use super::find_device;

pub async fn set_mode(hub: &Arc<Hub>, serial: &str, mode: OperatingMode) -> Result<(), CliError> {
    let mut climate = climate_for(hub, serial).await?;
    if !climate.set_operating_mode(mode).await {
        return Err(rejected("set-mode", serial));
    }
    eprintln!("{serial}: operating mode set to {mode}");
    Ok(())
}

pub async fn set_speed(hub: &Arc<Hub>, serial: &str, speed: FanSpeed) -> Result<(), CliError> {
    let mut climate = climate_for(hub, serial).await?;
    if !climate.set_fan_speed(speed).await {
        return Err(rejected("set-speed", serial));
    }
    eprintln!("{serial}: fan speed set to {speed}");
    Ok(())
}

pub async fn set_humidity(hub: &Arc<Hub>, serial: &str, level: u8) -> Result<(), CliError> {
    // clap already bounds the level to 1-3
    let level = HumidityLevel::from_level(level).ok_or_else(|| CliError::Validation {
        field: "level".into(),
        reason: format!("{level} is not in 1-3"),
    })?;
    let mut climate = climate_for(hub, serial).await?;
    if !climate.set_humidity_target(level).await {
        return Err(rejected("set-humidity", serial));
    }
    eprintln!("{serial}: humidity target set to {}", level.as_level());
    Ok(())
}

pub async fn turn_on(hub: &Arc<Hub>, serial: &str) -> Result<(), CliError> {
    let mut climate = climate_for(hub, serial).await?;
    if !climate.turn_on().await {
        return Err(rejected("on", serial));
    }
    match climate.preset_mode() {
        Some(mode) => eprintln!("{serial}: on ({mode})"),
        None => eprintln!("{serial}: on"),
    }
    Ok(())
}

pub async fn turn_off(hub: &Arc<Hub>, serial: &str) -> Result<(), CliError> {
    let mut climate = climate_for(hub, serial).await?;
    if !climate.turn_off().await {
        return Err(rejected("off", serial));
    }
    eprintln!("{serial}: off");
    Ok(())
}

/// Build a climate adapter for the device and poll it once; actions
/// need a current snapshot to overlay onto.
async fn climate_for(hub: &Arc<Hub>, serial: &str) -> Result<ClimateEntity, CliError> {
    let device = find_device(hub, serial)?;
    let mut climate = ClimateEntity::new(device);
    climate.poll().await;
    if !climate.available() {
        return Err(CliError::Unavailable {
            serial: serial.to_owned(),
        });
    }
    Ok(climate)
}

fn rejected(action: &str, serial: &str) -> CliError {
    CliError::Rejected {
        action: action.to_owned(),
        serial: serial.to_owned(),
    }
}
