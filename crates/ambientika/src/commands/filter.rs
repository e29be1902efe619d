//! `ambientika reset-filter` -- clear the filter-wear counter.

use std::sync::Arc;

use ambientika_core::Hub;
use ambientika_core::entity::FilterResetButton;

use crate::error::CliError;

use super::find_device;

pub async fn handle(hub: &Arc<Hub>, serial: &str) -> Result<(), CliError> {
    let device = find_device(hub, serial)?;
    let button = FilterResetButton::new(device);
    if !button.press().await {
        return Err(CliError::Rejected {
            action: "reset-filter".into(),
            serial: serial.to_owned(),
        });
    }
    eprintln!("{serial}: filter counter reset");
    Ok(())
}
