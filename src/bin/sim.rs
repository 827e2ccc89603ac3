use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use nalgebra::Vector3;
use std::{env, time::Duration};

use skydash::{
    components::{GameSession, PlayerDrone, WorldEntities},
    plugins::DroneFlightPlugin,
    resources::{ConfigError, GameConfig},
    utils::DEFAULT_TIMESTEP,
    Collectible, Collidable, ControlVector, DroneState, PowerUpKind, PowerUpPickup,
};

const DEFAULT_FRAMES: usize = 600;

/// Straight course along +z: a coin every 4 m, a magnet early on, and a
/// rock every 40 m alternating left and right of the centre line.
fn demo_course(altitude: f64) -> WorldEntities {
    let coins = (1..=40)
        .map(|i| Collectible::new(Vector3::new(0.0, altitude, i as f64 * 4.0), 0.8))
        .collect();
    let obstacles = (1..=4)
        .map(|i| {
            let side = if i % 2 == 0 { 3.5 } else { -3.5 };
            Collidable::new(Vector3::new(side, altitude, i as f64 * 40.0), 2.0)
        })
        .collect();
    let power_ups = vec![PowerUpPickup::new(
        PowerUpKind::Magnet,
        Vector3::new(0.0, altitude, 10.0),
        1.0,
    )];

    WorldEntities {
        obstacles,
        coins,
        power_ups,
    }
}

fn load_config(path: Option<&String>) -> Result<GameConfig, ConfigError> {
    match path {
        Some(path) => GameConfig::from_file(path),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: skydash_sim [config.yaml] [frames]
    let args: Vec<String> = env::args().collect();
    let config = load_config(args.get(1))?;
    let frames = match args.get(2) {
        Some(frames) => frames.parse()?,
        None => DEFAULT_FRAMES,
    };
    let course = demo_course(config.drone.start_position.y);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            DEFAULT_TIMESTEP,
        )))
        .add_plugins(DroneFlightPlugin::new(config))
        .insert_resource(course);

    // Spawn the drone before handing it controls
    app.update();
    {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&mut ControlVector, With<PlayerDrone>>();
        for mut controls in query.iter_mut(world) {
            *controls = ControlVector::new(1.0, 0.0, 0.0, 0.0);
        }
    }

    for _ in 0..frames {
        app.update();
        if app.world().resource::<GameSession>().crashed {
            break;
        }
    }

    let world = app.world_mut();
    let mut query = world.query_filtered::<&DroneState, With<PlayerDrone>>();
    let position = query.get_single(world).map(|state| state.position)?;
    let session = world.resource::<GameSession>();
    info!(
        "Finished at {:?}: score {}, coins {}, crashed {}",
        position, session.score, session.coins_collected, session.crashed
    );

    Ok(())
}
