pub mod collisions;
pub mod flight;
mod frame;

pub use collisions::{
    collect_coins, collect_coins_with, collect_power_ups, collection_radius, detect_collision,
    is_colliding, is_colliding_with, is_within_pickup_range, magnet_pull_deltas, magnet_radius,
    overlaps, pickup_threshold, within_pickup_range, CollisionHit,
};
pub use flight::{enforce_envelope, step, step_within};
pub use frame::{drone_flight_system, pickup_system, restart_system};
