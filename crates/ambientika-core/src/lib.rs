//! Polling hub and entity adapters between `ambientika-api` and a
//! consumer surface (CLI, bridge, or a home-automation runtime).
//!
//! This crate owns the integration logic for Ambientika ventilation
//! devices:
//!
//! - **[`Hub`]** — The single polling coordinator per configured account.
//!   [`login()`](Hub::login) authenticates and discovers devices once at
//!   setup (fatal on failure); [`refresh()`](Hub::refresh) re-lists
//!   devices on a fixed interval and classifies failures into "needs
//!   re-authentication" vs. "update failed".
//!
//! - **[`DeviceHandle`]** — Opaque reference to one physical unit,
//!   identified by serial number. Owned by the hub, shared read-only
//!   with entity adapters via `Arc`.
//!
//! - **Entity adapters** ([`entity`]) — One per exposed capability
//!   (climate, filter-reset button, alarm binary sensors, readout
//!   sensors). Each independently polls its bound device and holds at
//!   most one immutable [`StatusSnapshot`]; a failed poll clears it,
//!   driving availability to false until the next successful fetch.

pub mod config;
pub mod device;
pub mod entity;
pub mod error;
pub mod hub;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_POLL_INTERVAL, HubConfig};
pub use device::DeviceHandle;
pub use entity::{DeviceEntities, DeviceMetadata, build_entities};
pub use error::{CoreError, RefreshError};
pub use hub::{Hub, HubState};
pub use model::StatusSnapshot;

// Re-export the vendor vocabulary and connection types; consumers
// should not need a direct `ambientika-api` dependency.
pub use ambientika_api::{
    AirQuality, ChangeMode, Credentials, DEFAULT_HOST, FanSpeed, FilterStatus, HumidityLevel,
    OperatingMode, TransportConfig,
};
