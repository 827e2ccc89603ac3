use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::drone::{DroneConfig, SteeringLock};
use crate::utils::{horizontal_norm, is_finite_vector};

/// Kinematic state of a single drone.
///
/// Rotation is stored as (pitch, yaw, roll) on (x, y, z) in radians. The scalar
/// parameters are fixed when the state is created and carried through every step.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneState {
    /// Position in world space [m], y is altitude
    pub position: Vector3<f64>,
    /// Pitch, yaw, roll [rad]
    pub rotation: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Smoothed acceleration from the last step [m/s^2]
    pub acceleration: Vector3<f64>,
    pub mass: f64,
    pub drag: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub gravity: f64,
    pub steering_lock: SteeringLock,
    pub inertia: f64,
    pub stabilization: f64,
}

impl Default for DroneState {
    fn default() -> Self {
        Self::from_config(&DroneConfig::default())
    }
}

impl DroneState {
    /// Creates a drone at rest at the configured start position.
    pub fn from_config(config: &DroneConfig) -> Self {
        Self {
            position: config.start_position,
            rotation: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            mass: config.mass,
            drag: config.drag,
            max_speed: config.max_speed,
            max_acceleration: config.max_acceleration,
            gravity: config.gravity,
            steering_lock: SteeringLock::None,
            inertia: config.inertia,
            stabilization: config.stabilization,
        }
    }

    /// Same drone, placed at rest at `position`.
    pub fn at_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self.velocity = Vector3::zeros();
        self.acceleration = Vector3::zeros();
        self
    }

    pub fn pitch(&self) -> f64 {
        self.rotation.x
    }

    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    pub fn roll(&self) -> f64 {
        self.rotation.z
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn horizontal_speed(&self) -> f64 {
        horizontal_norm(&self.velocity)
    }

    /// Unit vector the nose points along in the horizontal plane
    pub fn forward(&self) -> Vector3<f64> {
        Vector3::new(self.yaw().sin(), 0.0, self.yaw().cos())
    }

    /// Unit vector positive yaw and roll push toward
    pub fn right(&self) -> Vector3<f64> {
        Vector3::new(self.yaw().cos(), 0.0, -self.yaw().sin())
    }

    pub fn is_finite(&self) -> bool {
        is_finite_vector(&self.position)
            && is_finite_vector(&self.rotation)
            && is_finite_vector(&self.velocity)
            && is_finite_vector(&self.acceleration)
    }
}

/// Starting state for a new game session.
pub fn create_initial_state() -> DroneState {
    DroneState::from_config(&DroneConfig::default())
}
