// ── Climate adapter ──
//
// The one canonical climate/fan capability for a device: fan speed,
// operating-mode presets, humidity target, and on/off with
// last-operating-mode restore.

use std::sync::Arc;

use strum::IntoEnumIterator as _;
use tracing::{debug, error, warn};

use ambientika_api::{ChangeMode, FanSpeed, HumidityLevel, OperatingMode};

use crate::device::DeviceHandle;
use crate::model::StatusSnapshot;

use super::{DeviceMetadata, EntityCore};

/// Host-facing HVAC mode. The device is a ventilation unit, so anything
/// other than `Off` renders as fan-only operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HvacMode {
    Off,
    FanOnly,
}

/// Climate entity for one ventilation unit.
pub struct ClimateEntity {
    core: EntityCore,
    /// Mode active before the device was last switched off, so turn-on
    /// can restore it. Seeded from the wire status when the firmware
    /// reports one; otherwise populated on the first off-transition.
    last_operating_mode: Option<OperatingMode>,
}

impl ClimateEntity {
    pub fn new(device: Arc<DeviceHandle>) -> Self {
        Self {
            core: EntityCore::new(device),
            last_operating_mode: None,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Fetch fresh status. A failure clears the snapshot and is only
    /// logged; the host's poll schedule drives the retry.
    pub async fn poll(&mut self) {
        let wire_last_mode = self.core.poll().await;
        if self.last_operating_mode.is_none() {
            self.last_operating_mode = wire_last_mode;
        }
    }

    pub fn available(&self) -> bool {
        self.core.available()
    }

    pub fn name(&self) -> &str {
        self.core.device().name()
    }

    /// The device serial doubles as the climate entity's unique id.
    pub fn unique_id(&self) -> &str {
        self.core.device().serial_number()
    }

    pub fn metadata(&self) -> DeviceMetadata {
        self.core.metadata()
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.core.snapshot()
    }

    // ── Read accessors ───────────────────────────────────────────────

    /// Measured temperature in °C.
    pub fn current_temperature(&self) -> Option<f64> {
        self.core.snapshot().map(|s| s.temperature)
    }

    /// Measured relative humidity in %.
    pub fn current_humidity(&self) -> Option<u8> {
        self.core.snapshot().map(|s| s.humidity)
    }

    pub fn fan_mode(&self) -> Option<FanSpeed> {
        self.core.snapshot().map(|s| s.fan_speed)
    }

    /// The closed, ordered list of valid fan speeds.
    pub fn fan_modes() -> Vec<FanSpeed> {
        FanSpeed::iter().collect()
    }

    pub fn preset_mode(&self) -> Option<OperatingMode> {
        self.core.snapshot().map(|s| s.operating_mode)
    }

    /// The closed, ordered list of valid operating modes.
    pub fn preset_modes() -> Vec<OperatingMode> {
        OperatingMode::iter().collect()
    }

    pub fn hvac_mode(&self) -> Option<HvacMode> {
        self.core.snapshot().map(|s| {
            if s.operating_mode == OperatingMode::Off {
                HvacMode::Off
            } else {
                HvacMode::FanOnly
            }
        })
    }

    pub fn hvac_modes() -> [HvacMode; 2] {
        [HvacMode::Off, HvacMode::FanOnly]
    }

    /// User-facing humidity target level (1-3).
    pub fn humidity_target(&self) -> Option<u8> {
        self.core.snapshot().map(|s| s.humidity_level.as_level())
    }

    pub fn is_on(&self) -> Option<bool> {
        self.core
            .snapshot()
            .map(|s| s.operating_mode != OperatingMode::Off)
    }

    // ── Actions ──────────────────────────────────────────────────────
    //
    // Every action overlays its one change onto the full current state
    // so the vendor API never sees a partial payload. On success a new
    // snapshot is stored; on failure the old one is left untouched and
    // the next poll reconciles. The returned bool reports whether the
    // change was applied.

    pub async fn set_fan_speed(&mut self, speed: FanSpeed) -> bool {
        let Some(desired) = self.desired_state() else {
            return false;
        };
        self.apply(ChangeMode {
            fan_speed: speed,
            ..desired
        })
        .await
    }

    pub async fn set_operating_mode(&mut self, mode: OperatingMode) -> bool {
        let Some(desired) = self.desired_state() else {
            return false;
        };
        self.apply(ChangeMode {
            operating_mode: mode,
            ..desired
        })
        .await
    }

    pub async fn set_humidity_target(&mut self, level: HumidityLevel) -> bool {
        let Some(desired) = self.desired_state() else {
            return false;
        };
        self.apply(ChangeMode {
            humidity_level: level,
            ..desired
        })
        .await
    }

    pub async fn turn_off(&mut self) -> bool {
        self.set_operating_mode(OperatingMode::Off).await
    }

    /// Switch the device back on, restoring the mode active before the
    /// last turn-off when one is recorded (and not itself `Off`);
    /// otherwise fall back to `Auto`.
    pub async fn turn_on(&mut self) -> bool {
        match self.is_on() {
            None => false,
            Some(true) => true,
            Some(false) => {
                let target = turn_on_target(self.last_operating_mode);
                self.set_operating_mode(target).await
            }
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn desired_state(&self) -> Option<ChangeMode> {
        let desired = self.core.snapshot().map(StatusSnapshot::desired_state);
        if desired.is_none() {
            warn!(
                serial = self.core.device().serial_number(),
                "ignoring action: no status snapshot held"
            );
        }
        desired
    }

    async fn apply(&mut self, change: ChangeMode) -> bool {
        let Some(current) = self.core.snapshot().cloned() else {
            return false;
        };
        let device = Arc::clone(self.core.device());

        match device.change_mode(change).await {
            Ok(()) => {
                let old_mode = current.operating_mode;
                let new_mode = change.operating_mode;
                if new_mode == OperatingMode::Off && old_mode != OperatingMode::Off {
                    self.last_operating_mode = Some(old_mode);
                } else if old_mode == OperatingMode::Off && new_mode != OperatingMode::Off {
                    self.last_operating_mode = Some(OperatingMode::Off);
                }
                self.core.replace_snapshot(current.with_change(change));
                debug!(serial = device.serial_number(), ?change, "mode change applied");
                true
            }
            Err(e) => {
                error!(
                    serial = device.serial_number(),
                    error = %e,
                    "mode change failed; keeping local snapshot"
                );
                false
            }
        }
    }
}

/// Tie-break for turn-on: restore the recorded mode unless it is absent
/// or itself `Off`, in which case default to `Auto`.
fn turn_on_target(last: Option<OperatingMode>) -> OperatingMode {
    match last {
        Some(mode) if mode != OperatingMode::Off => mode,
        _ => OperatingMode::Auto,
    }
}
