#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # ControlBot Kinematics
//!
//! Closed-form forward kinematics for a two-wheeled differential-drive
//! vehicle moving on a plane.
//!
//! This crate is the leaf of the ControlBot workspace. It has no notion of
//! episodes, rewards, or field bounds; it only answers one question: given
//! where the vehicle is and how fast each wheel turns, where is it after `t`
//! time units?
//!
//! ## Key Components
//!
//! -   **Value types:** [`Pose`] (position + heading), [`WheelVelocities`]
//!     (left/right wheel speeds) and [`Vec2`], all defined in the [`types`]
//!     module. They are `#[repr(C)]` plain-old-data so they can be flattened
//!     into `f32` slices with `bytemuck`.
//! -   **Motion model:** [`diffdrive`] in the [`diffdrive`] module integrates
//!     one step. The model splits on wheel-speed equality: equal speeds move
//!     the vehicle along a straight line, unequal speeds rotate it about the
//!     instantaneous center of curvature.
//!
//! ## Usage
//!
//! ```rust
//! use kinematics::{diffdrive, Pose, WheelVelocities};
//!
//! let start = Pose::new(300.0, 300.0, 0.0);
//! let next = diffdrive(start, WheelVelocities::new(2.0, 2.0), 1.0, 5.0)?;
//! assert_eq!(next, Pose::new(302.0, 300.0, 0.0));
//! # Ok::<(), kinematics::KinematicsError>(())
//! ```

pub mod diffdrive;
pub mod error;
pub mod types;

pub use diffdrive::{
    angular_velocity, diffdrive, icc, normalize_angle, rotate_point, turning_radius,
};
pub use error::KinematicsError;
pub use types::{Pose, Vec2, WheelVelocities};
