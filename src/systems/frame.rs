use bevy::prelude::*;

use crate::components::{
    CoinCollected, CollisionComponent, ControlVector, DroneCrashed, DroneState, GameSession,
    PlayerDrone, PowerUpCollected, RestartRequested, WorldEntities,
};
use crate::resources::{FlightEnvelope, GameConfig, PickupConfig, PowerUpDurations};
use crate::systems::flight::step_within;
use crate::utils::MAX_FRAME_DELTA;

/// Advances every player drone by the fixed timestep.
///
/// Power-up timers tick first so an expiring boost stops applying this frame.
/// A crashed session freezes the drones until it is reset.
pub fn drone_flight_system(
    mut query: Query<(&mut DroneState, &ControlVector), With<PlayerDrone>>,
    mut session: ResMut<GameSession>,
    envelope: Res<FlightEnvelope>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64().min(MAX_FRAME_DELTA);
    session.timers.tick(dt);
    if session.crashed {
        return;
    }

    let power_ups = session.timers.flags();
    for (mut state, controls) in query.iter_mut() {
        *state = step_within(&state, controls, power_ups, dt, &envelope);
    }
}

/// Runs collision and pickup queries for the player drone and emits events.
pub fn pickup_system(
    mut query: Query<(Entity, &DroneState, &mut CollisionComponent), With<PlayerDrone>>,
    mut session: ResMut<GameSession>,
    mut world: ResMut<WorldEntities>,
    pickups: Res<PickupConfig>,
    durations: Res<PowerUpDurations>,
    time: Res<Time>,
    mut crashes: EventWriter<DroneCrashed>,
    mut coins: EventWriter<CoinCollected>,
    mut power_ups: EventWriter<PowerUpCollected>,
) {
    for (entity, state, mut collision) in query.iter_mut() {
        collision.has_collided = false;

        let report = session.resolve_frame(
            &state.position,
            collision.radius,
            &mut world,
            &pickups,
            &durations,
        );

        if report.shield_absorbed {
            collision.register_collision(time.elapsed_secs_f64());
        }
        if let Some(hit) = report.crash {
            collision.register_collision(time.elapsed_secs_f64());
            crashes.send(DroneCrashed {
                entity,
                obstacle: hit.index,
                impact_point: state.position,
                penetration_depth: hit.penetration_depth,
            });
        }
        // Each event carries the score as it stood right after that coin
        let mut score = session.score - pickups.coin_value * report.coins.len() as u64;
        for index in report.coins {
            score += pickups.coin_value;
            coins.send(CoinCollected { index, score });
        }
        for (index, kind) in report.power_ups {
            power_ups.send(PowerUpCollected { index, kind });
        }
    }
}

/// Handles restart requests: a fresh session, every pickup collectable again
/// and the player drone back at its configured start, at rest.
pub fn restart_system(
    mut restarts: EventReader<RestartRequested>,
    mut query: Query<
        (&mut DroneState, &mut ControlVector, &mut CollisionComponent),
        With<PlayerDrone>,
    >,
    mut session: ResMut<GameSession>,
    mut world: ResMut<WorldEntities>,
    config: Res<GameConfig>,
) {
    if restarts.read().count() == 0 {
        return;
    }

    info!(
        "Restarting session (score was {}, crashed {})",
        session.score, session.crashed
    );
    session.reset();
    world.reset_collected();

    for (mut state, mut controls, mut collision) in query.iter_mut() {
        *state = DroneState::from_config(&config.drone);
        *controls = ControlVector::default();
        collision.reset();
    }
}
