use bevy::prelude::*;
use nalgebra::Vector3;

use crate::resources::FlightEnvelope;
use crate::utils::FRICTION_REFERENCE_RATE;

/// Keeps a freshly integrated position inside the envelope.
///
/// Floor, then ceiling, then the horizontal boundary on x and z. Velocity is
/// adjusted alongside position so contacts read as bounce or resistance.
pub fn enforce_envelope(
    position: &mut Vector3<f64>,
    velocity: &mut Vector3<f64>,
    envelope: &FlightEnvelope,
    dt: f64,
) {
    enforce_floor(position, velocity, envelope, dt);
    enforce_ceiling(position, velocity, envelope, dt);
    contain_axis(&mut position.x, &mut velocity.x, envelope, dt);
    contain_axis(&mut position.z, &mut velocity.z, envelope, dt);
}

fn enforce_floor(
    position: &mut Vector3<f64>,
    velocity: &mut Vector3<f64>,
    envelope: &FlightEnvelope,
    dt: f64,
) {
    if position.y >= envelope.min_altitude {
        return;
    }
    position.y = envelope.min_altitude;

    if velocity.y < -envelope.bounce_threshold {
        debug!("Ground impact at {:.2} m/s, bouncing", -velocity.y);
        velocity.y = velocity.y.abs() * envelope.bounce_coefficient;
    } else {
        velocity.y = velocity.y.max(0.0);
    }

    let friction = ground_friction_factor(envelope.ground_friction, dt);
    velocity.x *= friction;
    velocity.z *= friction;
}

/// Friction over a step of `dt`, so ground slowdown is independent of frame rate.
fn ground_friction_factor(friction: f64, dt: f64) -> f64 {
    friction.clamp(0.0, 1.0).powf(dt.max(0.0) * FRICTION_REFERENCE_RATE)
}

fn enforce_ceiling(
    position: &mut Vector3<f64>,
    velocity: &mut Vector3<f64>,
    envelope: &FlightEnvelope,
    dt: f64,
) {
    let band_start = envelope.max_altitude - envelope.ceiling_band;
    if envelope.ceiling_band > 0.0 && position.y > band_start {
        let depth = ((position.y - band_start) / envelope.ceiling_band).min(1.0);
        velocity.y -= envelope.ceiling_push * depth * depth * dt;
    }

    if position.y > envelope.max_altitude {
        debug!("Ceiling reached at {:.2} m", position.y);
        position.y = envelope.max_altitude;
        velocity.y = velocity.y.min(0.0);
    }
}

fn contain_axis(coordinate: &mut f64, velocity: &mut f64, envelope: &FlightEnvelope, dt: f64) {
    let limit = envelope.world_boundary;
    let distance = coordinate.abs();
    let band_start = limit - envelope.boundary_band;

    if envelope.boundary_band > 0.0 && distance > band_start {
        let depth = ((distance - band_start) / envelope.boundary_band).min(1.0);
        *velocity -= coordinate.signum() * envelope.boundary_push * depth * dt;
    }

    if distance > limit {
        debug!("World boundary crossed at {:.2}", *coordinate);
        *coordinate = limit.copysign(*coordinate);
        *velocity *= envelope.boundary_restitution;
    }
}
