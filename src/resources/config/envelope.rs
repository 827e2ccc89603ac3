use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    BOUNCE_COEFFICIENT, BOUNCE_THRESHOLD, BOUNDARY_BAND, BOUNDARY_PUSH, BOUNDARY_RESTITUTION,
    CEILING_BAND, CEILING_PUSH, GROUND_FRICTION, MAX_ALTITUDE, MIN_ALTITUDE, WORLD_BOUNDARY,
};

/// Region the drone is kept inside, and how hard the edges push back.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightEnvelope {
    /// Altitude floor [m]
    pub min_altitude: f64,
    /// Altitude ceiling [m]
    pub max_altitude: f64,
    /// Depth of the band below the ceiling with progressive resistance [m]
    pub ceiling_band: f64,
    /// Downward acceleration at the ceiling [m/s^2]
    pub ceiling_push: f64,
    /// Half-width of the square world on x and z [m]
    pub world_boundary: f64,
    /// Depth of the band inside the boundary with progressive push-back [m]
    pub boundary_band: f64,
    /// Inward acceleration at the boundary [m/s^2]
    pub boundary_push: f64,
    /// Velocity factor applied when the hard boundary is crossed
    pub boundary_restitution: f64,
    /// Share of impact speed returned as upward bounce
    pub bounce_coefficient: f64,
    /// Impact speed below which ground contact just stops the descent [m/s]
    pub bounce_threshold: f64,
    /// Horizontal velocity factor per step of ground contact
    pub ground_friction: f64,
}

impl Default for FlightEnvelope {
    fn default() -> Self {
        Self {
            min_altitude: MIN_ALTITUDE,
            max_altitude: MAX_ALTITUDE,
            ceiling_band: CEILING_BAND,
            ceiling_push: CEILING_PUSH,
            world_boundary: WORLD_BOUNDARY,
            boundary_band: BOUNDARY_BAND,
            boundary_push: BOUNDARY_PUSH,
            boundary_restitution: BOUNDARY_RESTITUTION,
            bounce_coefficient: BOUNCE_COEFFICIENT,
            bounce_threshold: BOUNCE_THRESHOLD,
            ground_friction: GROUND_FRICTION,
        }
    }
}

impl FlightEnvelope {
    pub fn invalid_parameter(&self) -> Option<String> {
        let all = [
            self.min_altitude,
            self.max_altitude,
            self.ceiling_band,
            self.ceiling_push,
            self.world_boundary,
            self.boundary_band,
            self.boundary_push,
            self.boundary_restitution,
            self.bounce_coefficient,
            self.bounce_threshold,
            self.ground_friction,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Some("flight envelope values must be finite".to_string());
        }
        if self.min_altitude >= self.max_altitude {
            return Some(format!(
                "min_altitude ({}) must be below max_altitude ({})",
                self.min_altitude, self.max_altitude
            ));
        }
        if self.world_boundary <= 0.0 {
            return Some(format!(
                "world_boundary must be positive, got {}",
                self.world_boundary
            ));
        }
        if self.ceiling_band < 0.0 || self.boundary_band < 0.0 {
            return Some("ceiling_band and boundary_band must be non-negative".to_string());
        }
        if self.boundary_band > self.world_boundary {
            return Some(format!(
                "boundary_band ({}) exceeds world_boundary ({})",
                self.boundary_band, self.world_boundary
            ));
        }
        if !(0.0..=1.0).contains(&self.bounce_coefficient)
            || !(0.0..=1.0).contains(&self.ground_friction)
            || !(-1.0..=0.0).contains(&self.boundary_restitution)
        {
            return Some(
                "bounce_coefficient and ground_friction must be in [0, 1], boundary_restitution in [-1, 0]"
                    .to_string(),
            );
        }
        None
    }
}
