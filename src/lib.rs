//! Flight physics and spatial queries for an arcade drone game.
//!
//! The core is a pure per-frame [`step`] over a [`DroneState`] plus proximity
//! tests ([`is_colliding`], [`collect_coins`], [`is_within_pickup_range`]).
//! [`plugins::DroneFlightPlugin`] hosts both on a Bevy fixed timestep.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    create_initial_state, Collectible, Collidable, ControlVector, DroneState, PowerUpFlags,
    PowerUpKind, PowerUpPickup, SteeringLock, TurnInputSource,
};
pub use systems::{collect_coins, is_colliding, is_within_pickup_range, step, step_within};
