use nalgebra::Vector3;
use rand::Rng;
use skydash::{
    collect_coins, is_within_pickup_range,
    resources::PickupConfig,
    systems::collisions::{collect_power_ups, magnet_pull_deltas},
    Collectible, PowerUpKind, PowerUpPickup,
};

use crate::common::{random_point, shield_at, test_rng};

#[test]
fn test_magnet_draws_coin_in_until_collected() {
    let drone = Vector3::new(1.0, 4.0, -2.0);
    let mut coins = vec![Collectible::new(drone + Vector3::new(6.0, 0.0, 0.0), 0.8)];

    let mut previous = (coins[0].position - drone).norm();
    let mut calls = 0;
    loop {
        calls += 1;
        assert!(calls < 50, "Coin never collected");

        let collected = collect_coins(&drone, 0.8, &mut coins, true);
        if !collected.is_empty() {
            assert_eq!(collected, vec![0]);
            assert!(previous < 2.16);
            break;
        }

        let distance = (coins[0].position - drone).norm();
        assert!(distance < previous, "Coin moved away: {} -> {}", previous, distance);
        previous = distance;
    }
}

#[test]
fn test_magnet_ignores_coins_out_of_reach() {
    let drone = Vector3::zeros();
    let start = Vector3::new(0.0, 0.0, 7.3);
    let mut coins = vec![Collectible::new(start, 0.8)];

    for _ in 0..10 {
        assert!(collect_coins(&drone, 0.8, &mut coins, true).is_empty());
    }
    assert_eq!(coins[0].position, start);
    assert!(magnet_pull_deltas(&PickupConfig::default(), &drone, 0.8, &coins).is_empty());
}

#[test]
fn test_collected_coins_are_never_reported_again() {
    let mut rng = test_rng(19);
    let mut coins: Vec<_> = (0..40)
        .map(|_| Collectible::new(random_point(&mut rng, 10.0), 0.8))
        .collect();
    let mut seen = vec![false; coins.len()];

    for _ in 0..200 {
        let drone = random_point(&mut rng, 10.0);
        let has_magnet = rng.gen_bool(0.3);
        let collected = collect_coins(&drone, 0.8, &mut coins, has_magnet);

        for window in collected.windows(2) {
            assert!(window[0] < window[1]);
        }
        for index in collected {
            assert!(!seen[index], "Coin {} reported twice", index);
            seen[index] = true;
            coins[index].collected = true;
        }
    }
}

#[test]
fn test_pickup_range_matches_threshold() {
    let drone = Vector3::new(0.0, 5.0, 0.0);

    assert!(is_within_pickup_range(&drone, &Vector3::new(0.0, 5.0, 2.15), 0.8, 0.8));
    assert!(!is_within_pickup_range(&drone, &Vector3::new(0.0, 5.0, 2.17), 0.8, 0.8));
    // Larger pickups reach further
    assert!(is_within_pickup_range(&drone, &Vector3::new(0.0, 5.0, 2.5), 0.8, 1.5));
}

#[test]
fn test_power_ups_are_reported_with_kind() {
    let drone = Vector3::new(0.0, 2.5, 0.0);
    let mut power_ups = vec![
        PowerUpPickup::new(PowerUpKind::Magnet, Vector3::new(0.0, 2.5, 1.0), 1.0),
        shield_at(40.0),
        PowerUpPickup::new(PowerUpKind::TimeFreeze, Vector3::new(1.0, 2.5, 0.0), 1.0),
    ];
    let config = PickupConfig::default();

    let found = collect_power_ups(&config, &drone, 0.8, &power_ups);
    assert_eq!(
        found,
        vec![(0, PowerUpKind::Magnet), (2, PowerUpKind::TimeFreeze)]
    );

    power_ups[0].item.collected = true;
    let found = collect_power_ups(&config, &drone, 0.8, &power_ups);
    assert_eq!(found, vec![(2, PowerUpKind::TimeFreeze)]);
    assert_eq!(power_ups[0].item.position, Vector3::new(0.0, 2.5, 1.0));
}
