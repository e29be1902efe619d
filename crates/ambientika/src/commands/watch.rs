//! `ambientika watch` -- continuous polling until Ctrl-C.
//!
//! The hub's own refresh task re-lists devices at the configured
//! account-level interval; the `--interval` flag controls how often the
//! per-device status polls run and print.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use ambientika_core::{Hub, HubState, build_entities};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, StatusRow};

pub async fn handle(hub: &Arc<Hub>, interval: u64, global: &GlobalOpts) -> Result<(), CliError> {
    let cancel = CancellationToken::new();
    let refresh_task = hub.spawn_refresh_task(cancel.clone());
    let mut state = hub.subscribe_state();

    let mut entities = build_entities(hub);
    let mut tick = tokio::time::interval(Duration::from_secs(interval));
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    eprintln!("polling every {interval}s; press Ctrl-C to stop");

    let result = loop {
        tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => break Ok(()),
            changed = state.changed() => {
                if changed.is_err() || *state.borrow() == HubState::AuthFailed {
                    break Err(CliError::SessionExpired);
                }
            }
            _ = tick.tick() => {
                // Rebind when the refresh task changed the device set,
                // including same-count swaps of one serial for another.
                let devices = hub.devices();
                let rebind = {
                    let bound: Vec<&str> =
                        entities.iter().map(|set| set.climate.unique_id()).collect();
                    let current: Vec<&str> =
                        devices.iter().map(|d| d.serial_number()).collect();
                    device_set_changed(&bound, &current)
                };
                if rebind {
                    entities = build_entities(hub);
                }

                let mut rows = Vec::with_capacity(entities.len());
                for set in &mut entities {
                    set.climate.poll().await;
                    match set.climate.snapshot() {
                        Some(snapshot) => rows.push(StatusRow::new(
                            set.climate.unique_id(),
                            set.climate.name(),
                            snapshot,
                        )),
                        None => eprintln!("{}: unavailable", set.climate.unique_id()),
                    }
                }
                output::print_rows(global.output, &rows)?;
            }
        }
    };

    cancel.cancel();
    let _ = refresh_task.await;
    result
}

/// True when the bound entity serials no longer match the hub's device
/// list. The hub vends devices in a stable order, so a positional
/// comparison also catches an equal-count swap.
fn device_set_changed(bound: &[&str], current: &[&str]) -> bool {
    bound.len() != current.len() || bound.iter().zip(current).any(|(b, c)| b != c)
}
