use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skydash::{
    components::WorldEntities, create_initial_state, Collectible, Collidable, ControlVector,
    DroneState, PowerUpKind, PowerUpPickup, SteeringLock, TurnInputSource,
};

pub const TEST_DT: f64 = 1.0 / 60.0;

/// Creates a drone at rest at the given position
pub fn create_test_drone(x: f64, y: f64, z: f64) -> DroneState {
    create_initial_state().at_position(Vector3::new(x, y, z))
}

pub fn full_throttle() -> ControlVector {
    ControlVector::new(1.0, 0.0, 0.0, 0.0)
}

/// Seeded generator shared by the property tests
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random controls, occasionally out of range and occasionally locking the steering
pub fn random_controls(rng: &mut ChaCha8Rng) -> ControlVector {
    let mut controls = ControlVector::new(
        rng.gen_range(-1.2..1.2),
        rng.gen_range(-1.2..1.2),
        rng.gen_range(-1.2..1.2),
        rng.gen_range(-1.2..1.2),
    );
    if rng.gen_bool(0.05) {
        let lock = SteeringLock::from_sign(rng.gen_range(-1..=1));
        let source = if rng.gen_bool(0.5) {
            TurnInputSource::KeyLock
        } else {
            TurnInputSource::Stick
        };
        controls = controls.with_steering_lock(lock, source);
    }
    controls
}

pub fn random_point(rng: &mut ChaCha8Rng, extent: f64) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

pub fn obstacle_at(x: f64, y: f64, z: f64, radius: f64) -> Collidable {
    Collidable::new(Vector3::new(x, y, z), radius)
}

pub fn coin_at(x: f64, y: f64, z: f64) -> Collectible {
    Collectible::new(Vector3::new(x, y, z), 0.8)
}

/// A straight corridor along +z at the default start altitude
pub fn create_test_world(obstacle_z: f64) -> WorldEntities {
    WorldEntities {
        obstacles: vec![obstacle_at(0.0, 2.5, obstacle_z, 2.0)],
        coins: (1..=5).map(|i| coin_at(0.0, 2.5, i as f64 * 2.0)).collect(),
        power_ups: Vec::new(),
    }
}

pub fn shield_at(z: f64) -> PowerUpPickup {
    PowerUpPickup::new(PowerUpKind::Shield, Vector3::new(0.0, 2.5, z), 1.0)
}
