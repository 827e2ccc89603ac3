pub mod config;
pub mod controls;
pub mod state;

use bevy::prelude::*;

pub use config::DroneConfig;
pub use controls::{ControlVector, PowerUpFlags, SteeringLock, TurnInputSource};
pub use state::{create_initial_state, DroneState};

/// Marks the drone driven by the player's controls.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerDrone;
