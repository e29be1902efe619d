//! Command dispatch: bridges CLI args -> hub operations -> output.

pub mod control;
pub mod devices;
pub mod filter;
pub mod status;
pub mod watch;

use std::sync::Arc;

use ambientika_core::{DeviceHandle, Hub};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a cloud-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, hub: &Arc<Hub>, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Devices => devices::handle(hub, global),
        Command::Status { serial } => status::handle(hub, serial.as_deref(), global).await,
        Command::SetMode { serial, mode } => control::set_mode(hub, &serial, mode).await,
        Command::SetSpeed { serial, speed } => control::set_speed(hub, &serial, speed).await,
        Command::SetHumidity { serial, level } => {
            control::set_humidity(hub, &serial, level).await
        }
        Command::On { serial } => control::turn_on(hub, &serial).await,
        Command::Off { serial } => control::turn_off(hub, &serial).await,
        Command::ResetFilter { serial } => filter::handle(hub, &serial).await,
        Command::Watch { interval } => watch::handle(hub, interval, global).await,
        // Completions are handled before dispatch
        Command::Completions { .. } => unreachable!(),
    }
}

/// Look up a device by serial or fail with a listing hint.
pub fn find_device(hub: &Hub, serial: &str) -> Result<Arc<DeviceHandle>, CliError> {
    hub.device(serial).ok_or_else(|| CliError::DeviceNotFound {
        serial: serial.to_owned(),
    })
}
