use nalgebra::Vector3;
use rand::Rng;
use skydash::{
    resources::FlightEnvelope, step, step_within, utils::SPEED_BOOST_MULTIPLIER, DroneState,
    PowerUpFlags,
};

use crate::common::{create_test_drone, full_throttle, random_controls, test_rng, TEST_DT};

fn cap_for(state: &DroneState, flags: PowerUpFlags) -> f64 {
    if flags.speed_boost {
        state.max_speed * SPEED_BOOST_MULTIPLIER
    } else {
        state.max_speed
    }
}

#[test]
fn test_speed_stays_under_cap() {
    for (max_speed, boosted) in [(25.0, false), (10.0, true)] {
        let mut state = create_test_drone(0.0, 10.0, 0.0);
        state.drag = 0.0;
        state.max_speed = max_speed;
        let flags = PowerUpFlags {
            speed_boost: boosted,
        };
        let cap = cap_for(&state, flags);
        let tolerance = state.max_acceleration * TEST_DT;

        let mut fastest: f64 = 0.0;
        for _ in 0..300 {
            state = step(&state, &full_throttle(), flags, TEST_DT);
            fastest = fastest.max(state.speed());
            assert!(
                state.speed() <= cap + tolerance,
                "Speed {} over cap {}",
                state.speed(),
                cap
            );
        }
        assert!(fastest >= 0.8 * cap, "Never approached cap {}: {}", cap, fastest);
    }
}

#[test]
fn test_speed_returns_under_cap_when_boost_ends() {
    let mut state = create_test_drone(0.0, 10.0, 0.0);
    state.drag = 0.0;
    state.velocity = Vector3::new(0.0, 0.0, 54.0);
    let tolerance = state.max_acceleration * TEST_DT;

    for _ in 0..10 {
        state = step(&state, &full_throttle(), PowerUpFlags::boosted(), TEST_DT);
    }
    assert!(state.speed() > state.max_speed * 1.5);

    for _ in 0..180 {
        state = step(&state, &full_throttle(), PowerUpFlags::default(), TEST_DT);
        assert!(
            state.speed() <= state.max_speed + tolerance + 1e-9,
            "Speed {} over plain cap after boost ended",
            state.speed()
        );
    }
}

#[test]
fn test_random_boost_toggling_respects_current_cap() {
    let envelope = FlightEnvelope::default();

    for seed in 0..8 {
        let mut rng = test_rng(100 + seed);
        let mut state = create_test_drone(0.0, 2.5, 0.0);
        let mut flags = PowerUpFlags::default();
        // Envelope pushes are applied after the cap
        let slack = (state.max_acceleration
            + envelope.ceiling_push
            + 2.0 * envelope.boundary_push)
            * TEST_DT;

        for _ in 0..3000 {
            if rng.gen_bool(0.01) {
                flags.speed_boost = !flags.speed_boost;
            }
            let controls = random_controls(&mut rng);
            state = step_within(&state, &controls, flags, TEST_DT, &envelope);

            let cap = cap_for(&state, flags);
            assert!(
                state.speed() <= cap + slack + 1e-9,
                "Seed {}: speed {} above {} (boosted {})",
                seed,
                state.speed(),
                cap + slack,
                flags.speed_boost
            );
        }
    }
}
