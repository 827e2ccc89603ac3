use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::PowerUpKind;
use crate::utils::{
    COIN_VALUE, COLLECTION_RADIUS_SCALE, COLLISION_MARGIN, MAGNET_DURATION,
    MAGNET_PULL_STRENGTH, MAGNET_RADIUS_MULTIPLIER, PICKUP_GENEROSITY, SHIELD_DURATION,
    SPEED_BOOST_DURATION, TIME_FREEZE_DURATION,
};

/// Radii policy for collisions and pickups.
///
/// Obstacles are shrunk by `collision_margin` and pickups enlarged by
/// `pickup_generosity`, which keeps touch play forgiving.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    /// Scale applied to obstacle radii, below 1.0
    pub collision_margin: f64,
    /// Drone radius multiple used as the base collection radius
    pub collection_radius_scale: f64,
    /// Scale applied to pickup radii
    pub pickup_generosity: f64,
    /// Collection radius multiple inside which the magnet pulls coins
    pub magnet_radius_multiplier: f64,
    /// Fraction of the coin-to-drone offset closed per frame
    pub magnet_pull_strength: f64,
    pub coin_value: u64,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            collision_margin: COLLISION_MARGIN,
            collection_radius_scale: COLLECTION_RADIUS_SCALE,
            pickup_generosity: PICKUP_GENEROSITY,
            magnet_radius_multiplier: MAGNET_RADIUS_MULTIPLIER,
            magnet_pull_strength: MAGNET_PULL_STRENGTH,
            coin_value: COIN_VALUE,
        }
    }
}

impl PickupConfig {
    pub fn invalid_parameter(&self) -> Option<String> {
        let positive = [
            ("collision_margin", self.collision_margin),
            ("collection_radius_scale", self.collection_radius_scale),
            ("pickup_generosity", self.pickup_generosity),
            ("magnet_radius_multiplier", self.magnet_radius_multiplier),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Some(format!("{} must be positive, got {}", name, value));
            }
        }
        if !(self.magnet_pull_strength > 0.0 && self.magnet_pull_strength < 1.0) {
            return Some(format!(
                "magnet_pull_strength must be in (0, 1), got {}",
                self.magnet_pull_strength
            ));
        }
        None
    }
}

/// Active time of each power-up kind [s].
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpDurations {
    pub speed_boost: f64,
    pub shield: f64,
    pub magnet: f64,
    pub time_freeze: f64,
}

impl Default for PowerUpDurations {
    fn default() -> Self {
        Self {
            speed_boost: SPEED_BOOST_DURATION,
            shield: SHIELD_DURATION,
            magnet: MAGNET_DURATION,
            time_freeze: TIME_FREEZE_DURATION,
        }
    }
}

impl PowerUpDurations {
    pub fn for_kind(&self, kind: PowerUpKind) -> f64 {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_boost,
            PowerUpKind::Shield => self.shield,
            PowerUpKind::Magnet => self.magnet,
            PowerUpKind::TimeFreeze => self.time_freeze,
        }
    }

    pub fn invalid_parameter(&self) -> Option<String> {
        PowerUpKind::ALL
            .iter()
            .map(|&kind| (kind, self.for_kind(kind)))
            .find(|(_, seconds)| !(seconds.is_finite() && *seconds > 0.0))
            .map(|(kind, seconds)| format!("{:?} duration must be positive, got {}", kind, seconds))
    }
}
