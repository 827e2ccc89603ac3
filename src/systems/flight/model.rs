use bevy::prelude::*;
use nalgebra::Vector3;

use super::boundary::enforce_envelope;
use crate::components::{ControlVector, DroneState, PowerUpFlags, SteeringLock, TurnInputSource};
use crate::resources::FlightEnvelope;
use crate::utils::{
    finite_or_zero, horizontal_norm, wrap_angle, CLIMB_THRUST, FORWARD_THRUST, LOCKED_ROLL_BOOST,
    LOCKED_YAW_GENTLE, LOCKED_YAW_SHARP, MIN_MASS, OVERSPEED_CORRECTION, PITCH_RATE_MULTIPLIER,
    PITCH_THRUST_COUPLING, QUADRATIC_DRAG, ROLL_LATERAL_FORCE, ROLL_RATE_MULTIPLIER,
    ROLL_SPEED_SCALING, ROTATION_RATE, SHARP_TURN_THRESHOLD, SHARP_YAW_RATE_MULTIPLIER,
    SOFT_SPEED_DAMPING, SOFT_SPEED_LIMIT_FRACTION, SPEED_BOOST_MULTIPLIER, STABILIZATION_DEADZONE,
    YAW_RATE_MULTIPLIER,
};

/// Advances a drone by one frame inside the default flight envelope.
///
/// `delta_time` is expected to be clamped by the caller (see
/// [`crate::utils::MAX_FRAME_DELTA`]).
pub fn step(
    state: &DroneState,
    controls: &ControlVector,
    power_ups: PowerUpFlags,
    delta_time: f64,
) -> DroneState {
    step_within(state, controls, power_ups, delta_time, &FlightEnvelope::default())
}

/// Advances a drone by one frame and returns the replacement state.
///
/// A zero, negative or non-finite `delta_time` leaves the kinematics untouched.
pub fn step_within(
    state: &DroneState,
    controls: &ControlVector,
    power_ups: PowerUpFlags,
    delta_time: f64,
    envelope: &FlightEnvelope,
) -> DroneState {
    let mut next = *state;
    if let Some(lock) = controls.steering_lock {
        next.steering_lock = lock;
    }
    if !(delta_time.is_finite() && delta_time > 0.0) {
        return next;
    }

    let dt = delta_time;
    let controls = controls.sanitized();
    let lock = next.steering_lock;

    let yaw_input = effective_yaw(&controls, lock);
    next.rotation = integrate_rotation(state, &controls, yaw_input, lock, dt);

    let target = resolve_acceleration(&next, &controls, lock);
    let acceleration = blend_acceleration(state, target);

    let mut velocity = state.velocity + acceleration * dt;
    velocity = apply_drag(velocity, state.drag, dt);
    let overshoot = state.max_acceleration.max(0.0) * dt;
    velocity = limit_speed(velocity, state.max_speed, power_ups.speed_boost, overshoot, dt);

    let mut position = state.position + velocity * dt;
    enforce_envelope(&mut position, &mut velocity, envelope, dt);

    next.acceleration = acceleration;
    next.velocity = velocity;
    next.position = position;

    if !next.is_finite() {
        warn!(
            "Discarding non-finite flight step (position {:?}, velocity {:?})",
            next.position, next.velocity
        );
        return recover(state, next.steering_lock, envelope);
    }

    trace!(
        "Drone step: position {:?}, speed {:.2}, lock {:?}",
        next.position,
        next.speed(),
        next.steering_lock
    );
    next
}

/// Previous state with any non-finite component zeroed and the position
/// put back inside the envelope.
fn recover(state: &DroneState, lock: SteeringLock, envelope: &FlightEnvelope) -> DroneState {
    let mut recovered = *state;
    recovered.steering_lock = lock;
    recovered.rotation = state.rotation.map(finite_or_zero);
    recovered.velocity = state.velocity.map(finite_or_zero);
    recovered.acceleration = state.acceleration.map(finite_or_zero);
    recovered.position = state.position.map(finite_or_zero);
    enforce_envelope(&mut recovered.position, &mut recovered.velocity, envelope, 0.0);
    recovered
}

/// Yaw command after steering lock is applied.
fn effective_yaw(controls: &ControlVector, lock: SteeringLock) -> f64 {
    if !lock.is_locked() {
        return controls.yaw;
    }
    let magnitude = match controls.turn_source.resolve(controls.yaw) {
        TurnInputSource::KeyLock => LOCKED_YAW_SHARP,
        _ => LOCKED_YAW_GENTLE,
    };
    lock.sign() * magnitude
}

fn integrate_rotation(
    state: &DroneState,
    controls: &ControlVector,
    yaw_input: f64,
    lock: SteeringLock,
    dt: f64,
) -> Vector3<f64> {
    let rotation_speed = ROTATION_RATE * dt;
    let yaw_multiplier = if yaw_input.abs() > SHARP_TURN_THRESHOLD {
        SHARP_YAW_RATE_MULTIPLIER
    } else {
        YAW_RATE_MULTIPLIER
    };

    let mut rotation = state.rotation;
    rotation.x += controls.pitch * rotation_speed * PITCH_RATE_MULTIPLIER;
    rotation.y += yaw_input * rotation_speed * yaw_multiplier;
    rotation.z += controls.roll * rotation_speed * ROLL_RATE_MULTIPLIER;

    if !lock.is_locked() {
        let retain = 1.0 - state.stabilization.clamp(0.0, 1.0);
        let inputs = [controls.pitch, controls.yaw, controls.roll];
        for (axis, input) in inputs.iter().enumerate() {
            if input.abs() < STABILIZATION_DEADZONE {
                rotation[axis] *= retain;
            }
        }
    }

    rotation.map(wrap_angle)
}

/// Acceleration the controls ask for this frame, before inertia smoothing.
fn resolve_acceleration(
    drone: &DroneState,
    controls: &ControlVector,
    lock: SteeringLock,
) -> Vector3<f64> {
    let mass = drone.mass.max(MIN_MASS);
    let pitch = drone.pitch();
    let roll = drone.roll();
    let forward_throttle = controls.throttle.max(0.0);

    // Nose-down tilts thrust forward
    let pitch_factor = (1.0 + pitch.sin() * PITCH_THRUST_COUPLING).max(0.0);
    let thrust = drone.forward() * (forward_throttle * FORWARD_THRUST * pitch_factor);

    let lock_boost = if lock.is_locked() {
        LOCKED_ROLL_BOOST
    } else {
        1.0
    };
    let speed_factor = 1.0 + horizontal_norm(&drone.velocity) * ROLL_SPEED_SCALING;
    let bank = drone.right() * (roll.sin() * ROLL_LATERAL_FORCE * lock_boost * speed_factor);

    // Full throttle exactly carries the drone's weight
    let lift = controls.throttle * drone.gravity - pitch.sin() * forward_throttle * CLIMB_THRUST;
    let vertical = Vector3::new(0.0, lift - drone.gravity, 0.0);

    (thrust + bank) / mass + vertical
}

fn blend_acceleration(state: &DroneState, target: Vector3<f64>) -> Vector3<f64> {
    let inertia = state.inertia.clamp(0.0, 1.0);
    let blended = state.acceleration * inertia + target * (1.0 - inertia);

    let magnitude = blended.norm();
    if magnitude > state.max_acceleration && magnitude > f64::EPSILON {
        blended * (state.max_acceleration.max(0.0) / magnitude)
    } else {
        blended
    }
}

/// Linear plus speed-squared drag.
fn apply_drag(velocity: Vector3<f64>, drag: f64, dt: f64) -> Vector3<f64> {
    let speed = velocity.norm();
    let factor = (1.0 - (drag + QUADRATIC_DRAG * speed) * dt).max(0.0);
    velocity * factor
}

/// Progressive speed cap: soft damping above 80 % of the cap, and half of any
/// excess over the cap removed per step. The remaining excess never exceeds
/// `max_overshoot`, so a boost running out cannot leave the drone far above
/// the plain cap.
fn limit_speed(
    velocity: Vector3<f64>,
    max_speed: f64,
    boosted: bool,
    max_overshoot: f64,
    dt: f64,
) -> Vector3<f64> {
    let cap = if boosted {
        max_speed * SPEED_BOOST_MULTIPLIER
    } else {
        max_speed
    };
    if cap <= f64::EPSILON {
        return Vector3::zeros();
    }

    let speed = velocity.norm();
    let soft_limit = cap * SOFT_SPEED_LIMIT_FRACTION;
    if speed <= soft_limit {
        return velocity;
    }

    if speed > cap {
        let excess = ((speed - cap) * (1.0 - OVERSPEED_CORRECTION)).min(max_overshoot);
        let corrected = cap + excess;
        return velocity * (corrected / speed);
    }

    let depth = (speed - soft_limit) / (cap - soft_limit);
    velocity * (1.0 - SOFT_SPEED_DAMPING * depth * dt).max(0.0)
}
