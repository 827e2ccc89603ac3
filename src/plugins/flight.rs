use bevy::prelude::*;

use crate::components::{
    CoinCollected, CollisionComponent, ControlVector, DroneConfig, DroneCrashed, DroneState,
    GameSession, PlayerDrone, PowerUpCollected, RestartRequested, WorldEntities,
};
use crate::resources::GameConfig;
use crate::systems::{drone_flight_system, pickup_system, restart_system};
use crate::utils::DEFAULT_TIMESTEP;

/// Per-frame ordering: fly first, then resolve pickups at the new position.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Flight,
    Pickups,
}

/// Headless host for the flight core.
///
/// Spawns the player drone at startup and runs the flight step and the
/// spatial queries on the fixed timestep. Input sampling and rendering are
/// left to the application, which writes the drone's [`ControlVector`] and
/// fills [`WorldEntities`].
pub struct DroneFlightPlugin {
    config: GameConfig,
    timestep: f64,
}

impl Default for DroneFlightPlugin {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl DroneFlightPlugin {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            timestep: DEFAULT_TIMESTEP,
        }
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    fn spawn_drone(mut commands: Commands, config: &DroneConfig) {
        info!("Spawning {} at {:?}", config.name, config.start_position);
        commands.spawn((
            DroneState::from_config(config),
            ControlVector::default(),
            CollisionComponent::new(config.radius),
            PlayerDrone,
            Name::new(config.name.clone()),
        ));
    }
}

impl Plugin for DroneFlightPlugin {
    fn build(&self, app: &mut App) {
        let drone = self.config.drone.clone();

        app.insert_resource(self.config.envelope.clone())
            .insert_resource(self.config.pickups.clone())
            .insert_resource(self.config.power_ups.clone())
            .insert_resource(self.config.clone())
            .init_resource::<GameSession>()
            .init_resource::<WorldEntities>()
            .add_event::<DroneCrashed>()
            .add_event::<CoinCollected>()
            .add_event::<PowerUpCollected>()
            .add_event::<RestartRequested>();

        app.insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(FixedUpdate, (FlightSet::Flight, FlightSet::Pickups).chain())
            .add_systems(Startup, move |commands: Commands| {
                Self::spawn_drone(commands, &drone)
            })
            .add_systems(
                FixedUpdate,
                (
                    drone_flight_system.in_set(FlightSet::Flight),
                    pickup_system.in_set(FlightSet::Pickups),
                ),
            )
            .add_systems(Update, restart_system);
    }
}
