use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::DRONE_RADIUS;

/// Sphere snapshot of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collidable {
    pub position: Vector3<f64>,
    pub radius: f64,
}

impl Collidable {
    pub fn new(position: Vector3<f64>, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// Coin or power-up record. `collected` is owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub position: Vector3<f64>,
    pub radius: f64,
    pub collected: bool,
}

impl Collectible {
    pub fn new(position: Vector3<f64>, radius: f64) -> Self {
        Self {
            position,
            radius,
            collected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    SpeedBoost,
    Shield,
    Magnet,
    TimeFreeze,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::SpeedBoost,
        PowerUpKind::Shield,
        PowerUpKind::Magnet,
        PowerUpKind::TimeFreeze,
    ];

    pub fn index(self) -> usize {
        match self {
            PowerUpKind::SpeedBoost => 0,
            PowerUpKind::Shield => 1,
            PowerUpKind::Magnet => 2,
            PowerUpKind::TimeFreeze => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpPickup {
    pub item: Collectible,
    pub kind: PowerUpKind,
}

impl PowerUpPickup {
    pub fn new(kind: PowerUpKind, position: Vector3<f64>, radius: f64) -> Self {
        Self {
            item: Collectible::new(position, radius),
            kind,
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct DroneCrashed {
    /// Drone that crashed
    pub entity: Entity,
    /// Index of the obstacle hit
    pub obstacle: usize,
    /// Drone position at impact
    pub impact_point: Vector3<f64>,
    /// How far the drone sphere overlaps the shrunken obstacle sphere
    pub penetration_depth: f64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CoinCollected {
    pub index: usize,
    pub score: u64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PowerUpCollected {
    pub index: usize,
    pub kind: PowerUpKind,
}

#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionComponent {
    /// Radius of the drone's collision sphere
    pub radius: f64,
    /// Whether the drone touched an obstacle this frame
    #[serde(skip)]
    pub has_collided: bool,
    /// Obstacle contacts this session, shielded ones included
    #[serde(skip)]
    pub collision_count: u32,
    /// Time of last collision
    #[serde(skip)]
    pub last_collision_time: f64,
}

impl Default for CollisionComponent {
    fn default() -> Self {
        Self::new(DRONE_RADIUS)
    }
}

impl CollisionComponent {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            has_collided: false,
            collision_count: 0,
            last_collision_time: 0.0,
        }
    }

    /// Clears contact history for a new run; the radius is kept.
    pub fn reset(&mut self) {
        self.has_collided = false;
        self.collision_count = 0;
        self.last_collision_time = 0.0;
    }

    pub fn register_collision(&mut self, time: f64) {
        self.has_collided = true;
        self.collision_count += 1;
        self.last_collision_time = time;
    }
}
