use nalgebra::Vector3;
use rand::Rng;
use skydash::{is_colliding, resources::PickupConfig, Collidable};

use crate::common::{random_point, test_rng};

#[test]
fn test_collision_matches_margin_formula() {
    let margin = PickupConfig::default().collision_margin;
    let mut rng = test_rng(7);

    for i in 0..5000 {
        let drone = random_point(&mut rng, 20.0);
        let other = random_point(&mut rng, 20.0);
        // Every tenth sample uses a point-sized drone or obstacle
        let drone_radius = if i % 10 == 0 { 0.0 } else { rng.gen_range(0.0..3.0) };
        let obstacle_radius = if i % 10 == 5 { 0.0 } else { rng.gen_range(0.0..5.0) };

        let expected = (drone - other).norm() < drone_radius + obstacle_radius * margin;
        let forward = is_colliding(&drone, drone_radius, &[Collidable::new(other, obstacle_radius)]);
        let swapped = is_colliding(&other, drone_radius, &[Collidable::new(drone, obstacle_radius)]);

        assert_eq!(
            forward, expected,
            "drone {:?} r {} obstacle {:?} r {}",
            drone, drone_radius, other, obstacle_radius
        );
        assert_eq!(forward, swapped);
    }
}

#[test]
fn test_touching_exactly_at_reach_is_not_a_collision() {
    let margin = PickupConfig::default().collision_margin;
    // At the origin the distance to a point on the x axis is exact
    let drone = Vector3::zeros();

    for (drone_radius, obstacle_radius) in [(0.0, 0.0), (0.8, 0.0), (0.0, 2.5), (1.0, 2.5), (0.8, 2.0)]
    {
        let reach = drone_radius + obstacle_radius * margin;
        let at_reach = Collidable::new(drone + Vector3::new(reach, 0.0, 0.0), obstacle_radius);
        assert!(
            !is_colliding(&drone, drone_radius, &[at_reach]),
            "Collided at exactly {} (r {}, r2 {})",
            reach,
            drone_radius,
            obstacle_radius
        );

        if reach > 0.0 {
            let inside = Collidable::new(drone + Vector3::new(reach * 0.999, 0.0, 0.0), obstacle_radius);
            assert!(is_colliding(&drone, drone_radius, &[inside]));
        }
    }
}

#[test]
fn test_collision_with_many_is_any_of_each() {
    let mut rng = test_rng(11);

    for _ in 0..500 {
        let drone = random_point(&mut rng, 15.0);
        let obstacles: Vec<_> = (0..rng.gen_range(0..8))
            .map(|_| Collidable::new(random_point(&mut rng, 15.0), rng.gen_range(0.5..4.0)))
            .collect();

        let expected = obstacles
            .iter()
            .any(|obstacle| is_colliding(&drone, 0.8, std::slice::from_ref(obstacle)));
        assert_eq!(is_colliding(&drone, 0.8, &obstacles), expected);
    }
}

#[test]
fn test_empty_world_never_collides() {
    let mut rng = test_rng(3);
    for _ in 0..100 {
        assert!(!is_colliding(&random_point(&mut rng, 100.0), 0.8, &[]));
    }
}
