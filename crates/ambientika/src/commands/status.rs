//! `ambientika status` -- print the current status of one or all devices.

use std::sync::Arc;

use ambientika_core::{DeviceHandle, Hub, StatusSnapshot};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, StatusRow};

use super::find_device;

pub async fn handle(
    hub: &Arc<Hub>,
    serial: Option<&str>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let targets: Vec<Arc<DeviceHandle>> = match serial {
        Some(serial) => vec![find_device(hub, serial)?],
        None => hub.devices(),
    };

    let mut rows = Vec::with_capacity(targets.len());
    for device in &targets {
        let status = device
            .status()
            .await
            .map_err(|e| {
                tracing::warn!(serial = device.serial_number(), error = %e, "status fetch failed");
                CliError::Unavailable {
                    serial: device.serial_number().to_owned(),
                }
            })?;
        let snapshot = StatusSnapshot::from(&status);
        rows.push(StatusRow::new(device.serial_number(), device.name(), &snapshot));
    }

    output::print_rows(global.output, &rows)
}
