pub mod config;

pub use config::{ConfigError, FlightEnvelope, GameConfig, PickupConfig, PowerUpDurations};
