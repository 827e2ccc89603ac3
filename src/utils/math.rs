use nalgebra::Vector3;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into (-π, π]. Non-finite angles collapse to zero.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Replace NaN and infinities with zero
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[inline]
pub fn is_finite_vector(vector: &Vector3<f64>) -> bool {
    vector.iter().all(|v| v.is_finite())
}

/// Magnitude of the x/z components
#[inline]
pub fn horizontal_norm(vector: &Vector3<f64>) -> f64 {
    vector.x.hypot(vector.z)
}
