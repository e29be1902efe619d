// ambientika-api: Async Rust client for the Ambientika cloud API

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use auth::{Credentials, DEFAULT_HOST};
pub use client::ApiClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use models::{
    AirQuality, ChangeMode, DeviceInfo, DeviceStatus, FanSpeed, FilterStatus, House,
    HumidityLevel, OperatingMode, Room,
};
