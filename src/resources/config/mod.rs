pub mod envelope;
pub mod game;
pub mod pickup;

pub use envelope::FlightEnvelope;
pub use game::{ConfigError, GameConfig};
pub use pickup::{PickupConfig, PowerUpDurations};
