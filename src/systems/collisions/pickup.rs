use nalgebra::Vector3;

use crate::components::{Collectible, PowerUpKind, PowerUpPickup};
use crate::resources::PickupConfig;

/// Base pickup reach of a drone, before the pickup's own radius is added.
pub fn collection_radius(config: &PickupConfig, drone_radius: f64) -> f64 {
    drone_radius * config.collection_radius_scale
}

/// Distance under which a pickup of `pickup_radius` counts as collected.
pub fn pickup_threshold(config: &PickupConfig, drone_radius: f64, pickup_radius: f64) -> f64 {
    collection_radius(config, drone_radius) + pickup_radius * config.pickup_generosity
}

/// Distance under which an active magnet pulls coins.
pub fn magnet_radius(config: &PickupConfig, drone_radius: f64) -> f64 {
    collection_radius(config, drone_radius) * config.magnet_radius_multiplier
}

/// Pickup test with the default radii policy.
pub fn is_within_pickup_range(
    drone_position: &Vector3<f64>,
    pickup_position: &Vector3<f64>,
    drone_radius: f64,
    pickup_radius: f64,
) -> bool {
    within_pickup_range(
        &PickupConfig::default(),
        drone_position,
        pickup_position,
        drone_radius,
        pickup_radius,
    )
}

pub fn within_pickup_range(
    config: &PickupConfig,
    drone_position: &Vector3<f64>,
    pickup_position: &Vector3<f64>,
    drone_radius: f64,
    pickup_radius: f64,
) -> bool {
    (drone_position - pickup_position).norm()
        < pickup_threshold(config, drone_radius, pickup_radius)
}

/// Offsets the magnet would move each uncollected coin in range by this frame.
///
/// Pure counterpart of the pull applied by [`collect_coins_with`].
pub fn magnet_pull_deltas(
    config: &PickupConfig,
    drone_position: &Vector3<f64>,
    drone_radius: f64,
    coins: &[Collectible],
) -> Vec<(usize, Vector3<f64>)> {
    let reach = magnet_radius(config, drone_radius);
    coins
        .iter()
        .enumerate()
        .filter(|(_, coin)| !coin.collected)
        .filter_map(|(index, coin)| {
            let offset = drone_position - coin.position;
            (offset.norm() <= reach).then(|| (index, offset * config.magnet_pull_strength))
        })
        .collect()
}

/// Coin collection with the default radii policy.
pub fn collect_coins(
    drone_position: &Vector3<f64>,
    drone_radius: f64,
    coins: &mut [Collectible],
    has_magnet: bool,
) -> Vec<usize> {
    collect_coins_with(
        &PickupConfig::default(),
        drone_position,
        drone_radius,
        coins,
        has_magnet,
    )
}

/// Reports uncollected coins within reach of the drone.
///
/// With `has_magnet`, coins inside the magnet radius are also moved a fixed
/// fraction of the way toward the drone. The `collected` flags are left for
/// the caller to set.
pub fn collect_coins_with(
    config: &PickupConfig,
    drone_position: &Vector3<f64>,
    drone_radius: f64,
    coins: &mut [Collectible],
    has_magnet: bool,
) -> Vec<usize> {
    let reach = magnet_radius(config, drone_radius);
    let mut collected = Vec::new();

    for (index, coin) in coins.iter_mut().enumerate() {
        if coin.collected {
            continue;
        }

        let offset = drone_position - coin.position;
        let distance = offset.norm();

        if has_magnet && distance <= reach {
            coin.position += offset * config.magnet_pull_strength;
        }

        if distance < pickup_threshold(config, drone_radius, coin.radius) {
            collected.push(index);
        }
    }

    collected
}

/// Reports uncollected power-ups within reach, with their kinds. No magnet pull.
pub fn collect_power_ups(
    config: &PickupConfig,
    drone_position: &Vector3<f64>,
    drone_radius: f64,
    power_ups: &[PowerUpPickup],
) -> Vec<(usize, PowerUpKind)> {
    power_ups
        .iter()
        .enumerate()
        .filter(|(_, pickup)| !pickup.item.collected)
        .filter(|(_, pickup)| {
            within_pickup_range(
                config,
                drone_position,
                &pickup.item.position,
                drone_radius,
                pickup.item.radius,
            )
        })
        .map(|(index, pickup)| (index, pickup.kind))
        .collect()
}
