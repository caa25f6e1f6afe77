//! # Differential-Drive Forward Kinematics
//!
//! Integrates a pose forward by `t` time units given constant left/right wheel
//! speeds. The integration is exact for constant wheel speeds, so there is no
//! step-size error to manage.
//!
//! ## Branch selection
//!
//! The formula is chosen by comparing the wheel speeds with `==`. Speeds that
//! are mathematically equal but differ in their last bit take the curved
//! branch, where the turning radius blows up as `v_r - v_l -> 0`. For such
//! inputs the result is still finite but loses precision. This is the
//! intended behavior; callers that want a tolerance should snap the speeds
//! together before calling [`diffdrive`].

use crate::error::KinematicsError;
use crate::types::{Pose, Vec2, WheelVelocities};
use std::f32::consts::{PI, TAU};

/// Advance `pose` by `t` time units with the given wheel speeds on a vehicle
/// whose wheels are `track_width` apart.
///
/// # Errors
///
/// Returns [`KinematicsError::Domain`] if `track_width` is not a finite,
/// strictly positive number. The check happens before any arithmetic.
pub fn diffdrive(
    pose: Pose,
    wheels: WheelVelocities,
    t: f32,
    track_width: f32,
) -> Result<Pose, KinematicsError> {
    check_track_width(track_width)?;

    if wheels.is_straight() {
        let distance = wheels.v_l * t;
        return Ok(Pose::new(
            pose.x + distance * pose.theta.cos(),
            pose.y + distance * pose.theta.sin(),
            pose.theta,
        ));
    }

    let center = curvature_center(pose, wheels, track_width);
    let dtheta = (wheels.v_r - wheels.v_l) / track_width * t;
    let position = rotate_point(pose.position(), center, dtheta);

    Ok(Pose::new(position.x, position.y, pose.theta + dtheta))
}

/// Signed distance from the midpoint between the wheels to the center of
/// curvature. Positive radii lie to the vehicle's left.
///
/// Returns `None` on the straight-line branch, where the radius is infinite.
///
/// # Errors
///
/// Returns [`KinematicsError::Domain`] for a degenerate `track_width`.
pub fn turning_radius(
    wheels: WheelVelocities,
    track_width: f32,
) -> Result<Option<f32>, KinematicsError> {
    check_track_width(track_width)?;
    if wheels.is_straight() {
        return Ok(None);
    }
    Ok(Some(radius(wheels, track_width)))
}

/// Instantaneous center of curvature for `pose` under `wheels`.
///
/// Returns `None` on the straight-line branch.
///
/// # Errors
///
/// Returns [`KinematicsError::Domain`] for a degenerate `track_width`.
pub fn icc(
    pose: Pose,
    wheels: WheelVelocities,
    track_width: f32,
) -> Result<Option<Vec2>, KinematicsError> {
    check_track_width(track_width)?;
    if wheels.is_straight() {
        return Ok(None);
    }
    Ok(Some(curvature_center(pose, wheels, track_width)))
}

/// Rate of change of heading, in radians per time unit.
///
/// # Errors
///
/// Returns [`KinematicsError::Domain`] for a degenerate `track_width`.
pub fn angular_velocity(wheels: WheelVelocities, track_width: f32) -> Result<f32, KinematicsError> {
    check_track_width(track_width)?;
    Ok((wheels.v_r - wheels.v_l) / track_width)
}

/// Rotate `point` counter-clockwise by `angle` radians about `center`.
#[must_use]
pub fn rotate_point(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Vec2::new(
        cos * d.x - sin * d.y + center.x,
        sin * d.x + cos * d.y + center.y,
    )
}

/// Wrap a heading into `(-PI, PI]`.
///
/// The motion model never calls this; headings accumulate freely across
/// steps unless the caller wraps them.
#[must_use]
pub fn normalize_angle(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

fn check_track_width(track_width: f32) -> Result<(), KinematicsError> {
    if track_width.is_finite() && track_width > 0.0 {
        Ok(())
    } else {
        Err(KinematicsError::Domain { track_width })
    }
}

// Callers guarantee `!wheels.is_straight()` and a valid track width.
fn radius(wheels: WheelVelocities, track_width: f32) -> f32 {
    track_width / 2.0 * ((wheels.v_l + wheels.v_r) / (wheels.v_r - wheels.v_l))
}

fn curvature_center(pose: Pose, wheels: WheelVelocities, track_width: f32) -> Vec2 {
    let r = radius(wheels, track_width);
    let (sin, cos) = pose.theta.sin_cos();
    Vec2::new(pose.x - r * sin, pose.y + r * cos)
}
