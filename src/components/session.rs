use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{Collectible, Collidable, PowerUpFlags, PowerUpKind, PowerUpPickup};
use crate::resources::{PickupConfig, PowerUpDurations};
use crate::systems::{collect_coins_with, collect_power_ups, detect_collision, CollisionHit};

/// Asks the host to start a fresh run: score, timers, collected flags and the
/// player drone all return to their starting values.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartRequested;

/// Entity snapshots the host generated for the current level.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldEntities {
    pub obstacles: Vec<Collidable>,
    pub coins: Vec<Collectible>,
    pub power_ups: Vec<PowerUpPickup>,
}

impl WorldEntities {
    pub fn remaining_coins(&self) -> usize {
        self.coins.iter().filter(|coin| !coin.collected).count()
    }

    /// Makes every coin and power-up collectable again.
    pub fn reset_collected(&mut self) {
        for coin in &mut self.coins {
            coin.collected = false;
        }
        for pickup in &mut self.power_ups {
            pickup.item.collected = false;
        }
    }
}

/// Seconds left on each power-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerUpTimers {
    remaining: [f64; 4],
}

impl PowerUpTimers {
    /// Starts `kind`, or refills it if already running.
    pub fn activate(&mut self, kind: PowerUpKind, durations: &PowerUpDurations) {
        let slot = &mut self.remaining[kind.index()];
        *slot = slot.max(durations.for_kind(kind));
    }

    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        for kind in PowerUpKind::ALL {
            let slot = &mut self.remaining[kind.index()];
            if *slot > 0.0 {
                *slot = (*slot - dt).max(0.0);
                if *slot == 0.0 {
                    debug!("{:?} expired", kind);
                }
            }
        }
    }

    pub fn remaining(&self, kind: PowerUpKind) -> f64 {
        self.remaining[kind.index()]
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining(kind) > 0.0
    }

    /// The subset the flight model reads.
    pub fn flags(&self) -> PowerUpFlags {
        PowerUpFlags {
            speed_boost: self.is_active(PowerUpKind::SpeedBoost),
        }
    }
}

/// What happened during one call to [`GameSession::resolve_frame`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Obstacle that ended the run
    pub crash: Option<CollisionHit>,
    /// An active shield absorbed a contact
    pub shield_absorbed: bool,
    pub coins: Vec<usize>,
    pub power_ups: Vec<(usize, PowerUpKind)>,
}

impl FrameReport {
    pub fn crashed(&self) -> bool {
        self.crash.is_some()
    }
}

/// Host-side game state: score, crash flag and power-up timers.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u64,
    pub coins_collected: u32,
    pub crashed: bool,
    pub timers: PowerUpTimers,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_magnet(&self) -> bool {
        self.timers.is_active(PowerUpKind::Magnet)
    }

    pub fn has_shield(&self) -> bool {
        self.timers.is_active(PowerUpKind::Shield)
    }

    /// Runs this frame's spatial queries and applies their effects.
    ///
    /// A crash ends the frame before any pickups are counted. Once crashed the
    /// session ignores further frames until [`GameSession::reset`].
    pub fn resolve_frame(
        &mut self,
        drone_position: &Vector3<f64>,
        drone_radius: f64,
        world: &mut WorldEntities,
        pickups: &PickupConfig,
        durations: &PowerUpDurations,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        if self.crashed {
            return report;
        }

        if let Some(hit) = detect_collision(
            drone_position,
            drone_radius,
            &world.obstacles,
            pickups.collision_margin,
        ) {
            if self.has_shield() {
                report.shield_absorbed = true;
            } else {
                info!(
                    "Drone crashed into obstacle {} at {:?}",
                    hit.index, drone_position
                );
                self.crashed = true;
                report.crash = Some(hit);
                return report;
            }
        }

        let has_magnet = self.has_magnet();
        report.coins = collect_coins_with(
            pickups,
            drone_position,
            drone_radius,
            &mut world.coins,
            has_magnet,
        );
        for &index in &report.coins {
            world.coins[index].collected = true;
            self.coins_collected += 1;
            self.score += pickups.coin_value;
        }

        report.power_ups =
            collect_power_ups(pickups, drone_position, drone_radius, &world.power_ups);
        for &(index, kind) in &report.power_ups {
            world.power_ups[index].item.collected = true;
            self.timers.activate(kind, durations);
            info!("{:?} activated for {:.1}s", kind, durations.for_kind(kind));
        }

        report
    }
}
