use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{
    DRONE_DRAG, DRONE_INERTIA, DRONE_MASS, DRONE_MAX_ACCELERATION, DRONE_MAX_SPEED, DRONE_RADIUS,
    DRONE_STABILIZATION, GRAVITY, START_ALTITUDE,
};

/// Fixed parameters a drone is created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    pub name: String,
    /// Spawn position in world space [m]
    pub start_position: Vector3<f64>,
    /// Collision sphere radius [m]
    pub radius: f64,
    pub mass: f64,
    /// Linear drag coefficient [1/s]
    pub drag: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub gravity: f64,
    /// Share of last frame's acceleration kept each step (0..1)
    pub inertia: f64,
    /// Self-leveling strength (0..1)
    pub stabilization: f64,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            name: "Drone".to_string(),
            start_position: Vector3::new(0.0, START_ALTITUDE, 0.0),
            radius: DRONE_RADIUS,
            mass: DRONE_MASS,
            drag: DRONE_DRAG,
            max_speed: DRONE_MAX_SPEED,
            max_acceleration: DRONE_MAX_ACCELERATION,
            gravity: GRAVITY,
            inertia: DRONE_INERTIA,
            stabilization: DRONE_STABILIZATION,
        }
    }
}

impl DroneConfig {
    /// Returns a description of the first invalid parameter, if any.
    pub fn invalid_parameter(&self) -> Option<String> {
        if !self.start_position.iter().all(|v| v.is_finite()) {
            return Some(format!("start_position must be finite, got {:?}", self.start_position));
        }
        let positive = [
            ("radius", self.radius),
            ("mass", self.mass),
            ("max_speed", self.max_speed),
            ("max_acceleration", self.max_acceleration),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Some(format!("{} must be positive, got {}", name, value));
            }
        }
        if !(self.drag.is_finite() && self.drag >= 0.0) {
            return Some(format!("drag must be non-negative, got {}", self.drag));
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return Some(format!("gravity must be non-negative, got {}", self.gravity));
        }
        if !(0.0..1.0).contains(&self.inertia) {
            return Some(format!("inertia must be in [0, 1), got {}", self.inertia));
        }
        if !(0.0..=1.0).contains(&self.stabilization) {
            return Some(format!(
                "stabilization must be in [0, 1], got {}",
                self.stabilization
            ));
        }
        None
    }
}
