use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{finite_or_zero, SHARP_TURN_THRESHOLD};

/// Locked-turn direction. Positive yaw turns toward `Right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteeringLock {
    Left,
    #[default]
    None,
    Right,
}

impl SteeringLock {
    /// -1 for left, 0 when unlocked, +1 for right
    pub fn sign(self) -> f64 {
        match self {
            SteeringLock::Left => -1.0,
            SteeringLock::None => 0.0,
            SteeringLock::Right => 1.0,
        }
    }

    pub fn is_locked(self) -> bool {
        self != SteeringLock::None
    }

    /// Maps the tri-state integer encoding (-1, 0, +1) used by input layers.
    pub fn from_sign(sign: i8) -> Self {
        match sign.signum() {
            -1 => SteeringLock::Left,
            1 => SteeringLock::Right,
            _ => SteeringLock::None,
        }
    }
}

/// Where a turn request came from.
///
/// Key locks produce sharper locked turns than stick-initiated ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnInputSource {
    Stick,
    KeyLock,
    #[default]
    None,
}

impl TurnInputSource {
    /// Recovers the source from a raw yaw magnitude, for input layers that
    /// signal key locks by sending a yaw beyond the stick range.
    pub fn infer(yaw: f64) -> Self {
        if yaw.abs() > SHARP_TURN_THRESHOLD {
            TurnInputSource::KeyLock
        } else if yaw != 0.0 {
            TurnInputSource::Stick
        } else {
            TurnInputSource::None
        }
    }

    /// Explicit tags win; `None` falls back to inference from `yaw`.
    pub fn resolve(self, yaw: f64) -> Self {
        match self {
            TurnInputSource::None => Self::infer(yaw),
            explicit => explicit,
        }
    }
}

/// Normalized control inputs for one frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlVector {
    /// Forward thrust and lift, nominally -1..1
    pub throttle: f64,
    /// Positive is nose-down
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    /// Replaces the drone's lock when present
    pub steering_lock: Option<SteeringLock>,
    pub turn_source: TurnInputSource,
}

impl ControlVector {
    pub fn new(throttle: f64, pitch: f64, yaw: f64, roll: f64) -> Self {
        Self {
            throttle,
            pitch,
            yaw,
            roll,
            ..Default::default()
        }
    }

    pub fn with_steering_lock(mut self, lock: SteeringLock, source: TurnInputSource) -> Self {
        self.steering_lock = Some(lock);
        self.turn_source = source;
        self
    }

    pub fn is_finite(&self) -> bool {
        [self.throttle, self.pitch, self.yaw, self.roll]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Copy with every non-finite axis replaced by zero.
    pub fn sanitized(&self) -> Self {
        if self.is_finite() {
            return *self;
        }
        warn!("Ignoring non-finite control axes: {:?}", self);
        Self {
            throttle: finite_or_zero(self.throttle),
            pitch: finite_or_zero(self.pitch),
            yaw: finite_or_zero(self.yaw),
            roll: finite_or_zero(self.roll),
            ..*self
        }
    }
}

/// Power-ups that change how the drone flies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpFlags {
    pub speed_boost: bool,
}

impl PowerUpFlags {
    pub fn boosted() -> Self {
        Self { speed_boost: true }
    }
}
