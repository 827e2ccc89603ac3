use nalgebra::Vector3;
use skydash::{
    components::{CollisionComponent, GameSession, RestartRequested, WorldEntities},
    ControlVector,
};

use super::{drone_state, set_controls};
use crate::common::{assert_position_eq, create_test_world, full_throttle, shield_at, TestAppBuilder};

#[test]
fn test_obstacle_hit_crashes_and_freezes_drone() {
    let mut app = TestAppBuilder::new()
        .with_world(create_test_world(15.0))
        .build();
    set_controls(&mut app, full_throttle());

    app.run_steps(300);

    let session = app.resource::<GameSession>().clone();
    assert!(session.crashed);
    assert_eq!(session.coins_collected, 5);
    assert_eq!(session.score, 50);

    let collision = *app
        .query_single::<CollisionComponent>()
        .expect("Player drone should have a collision component");
    assert!(collision.collision_count >= 1);

    let frozen = drone_state(&mut app);
    assert!(frozen.position.z > 12.6 && frozen.position.z < 15.0);

    app.run_steps(30);
    assert_eq!(drone_state(&mut app).position, frozen.position);
}

#[test]
fn test_coins_ahead_raise_score() {
    let mut app = TestAppBuilder::new()
        .with_world(create_test_world(200.0))
        .build();
    set_controls(&mut app, full_throttle());

    app.run_steps(180);

    let session = app.resource::<GameSession>();
    assert!(!session.crashed);
    assert_eq!(session.coins_collected, 5);
    assert_eq!(session.score, 50);
    assert_eq!(app.resource::<WorldEntities>().remaining_coins(), 0);
}

#[test]
fn test_shield_absorbs_obstacle_hit() {
    let mut world = create_test_world(15.0);
    world.power_ups.push(shield_at(3.0));

    let mut app = TestAppBuilder::new().with_world(world).build();
    set_controls(&mut app, full_throttle());

    app.run_steps(180);

    let session = app.resource::<GameSession>();
    assert!(!session.crashed);
    assert!(session.has_shield());

    let collision = *app
        .query_single::<CollisionComponent>()
        .expect("Player drone should have a collision component");
    assert!(collision.collision_count > 0);
    assert!(drone_state(&mut app).position.z > 15.0);
}

#[test]
fn test_restart_after_crash_starts_a_fresh_run() {
    let mut app = TestAppBuilder::new()
        .with_world(create_test_world(15.0))
        .build();
    set_controls(&mut app, full_throttle());

    app.run_steps(300);
    assert!(app.resource::<GameSession>().crashed);
    assert_eq!(app.resource::<WorldEntities>().remaining_coins(), 0);

    app.app.world_mut().send_event(RestartRequested);
    app.run_steps(1);

    let session = app.resource::<GameSession>();
    assert!(!session.crashed);
    assert_eq!(session.score, 0);
    assert_eq!(session.coins_collected, 0);
    assert_eq!(app.resource::<WorldEntities>().remaining_coins(), 5);

    let state = drone_state(&mut app);
    assert_position_eq(&state.position, &Vector3::new(0.0, 2.5, 0.0), 1e-12);
    assert_eq!(state.velocity, Vector3::zeros());

    let collision = *app
        .query_single::<CollisionComponent>()
        .expect("Player drone should have a collision component");
    assert_eq!(collision.collision_count, 0);
    assert!(!collision.has_collided);
    assert_eq!(collision.radius, 0.8);

    let controls = *app
        .query_single::<ControlVector>()
        .expect("Player drone should have controls");
    assert_eq!(controls, ControlVector::default());
}

#[test]
fn test_restarted_run_can_collect_coins_again() {
    let mut app = TestAppBuilder::new()
        .with_world(create_test_world(200.0))
        .build();
    set_controls(&mut app, full_throttle());
    app.run_steps(180);
    assert_eq!(app.resource::<GameSession>().score, 50);

    app.app.world_mut().send_event(RestartRequested);
    app.run_steps(1);
    set_controls(&mut app, full_throttle());
    app.run_steps(180);

    let session = app.resource::<GameSession>();
    assert!(!session.crashed);
    assert_eq!(session.coins_collected, 5);
    assert_eq!(session.score, 50);
}
