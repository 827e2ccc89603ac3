mod detection;
mod pickup;

pub use detection::{detect_collision, is_colliding, is_colliding_with, overlaps, CollisionHit};
pub use pickup::{
    collect_coins, collect_coins_with, collect_power_ups, collection_radius,
    is_within_pickup_range, magnet_pull_deltas, magnet_radius, pickup_threshold,
    within_pickup_range,
};
