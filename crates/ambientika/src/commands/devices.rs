//! `ambientika devices` -- list the discovered devices.

use std::sync::Arc;

use ambientika_core::Hub;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, DeviceRow};

pub fn handle(hub: &Arc<Hub>, global: &GlobalOpts) -> Result<(), CliError> {
    let rows: Vec<DeviceRow> = hub
        .devices()
        .iter()
        .map(|d| DeviceRow {
            serial: d.serial_number().to_owned(),
            name: d.name().to_owned(),
        })
        .collect();
    output::print_rows(global.output, &rows)
}
