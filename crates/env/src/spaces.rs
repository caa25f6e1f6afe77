//! Bounds for actions and observations.
//!
//! Every scalar in the ControlBot contract lives in a closed interval, so a
//! single [`BoxSpace`] type covers them all.

use crate::controlbot::{Action, Observation};
use std::f32::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxSpace {
    pub low: f32,
    pub high: f32,
}

impl BoxSpace {
    #[must_use]
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Symmetric interval `[-bound, bound]`.
    #[must_use]
    pub fn symmetric(bound: f32) -> Self {
        Self::new(-bound, bound)
    }

    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Uniform sample from `[low, high)`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> f32 {
        self.low + rng.f32() * (self.high - self.low)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActionSpace {
    pub v_l: BoxSpace,
    pub v_r: BoxSpace,
}

impl ActionSpace {
    #[must_use]
    pub fn new(max_speed: f32) -> Self {
        Self {
            v_l: BoxSpace::symmetric(max_speed),
            v_r: BoxSpace::symmetric(max_speed),
        }
    }

    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.v_l.contains(action.v_l) && self.v_r.contains(action.v_r)
    }

    pub fn sample(&self, rng: &mut fastrand::Rng) -> Action {
        Action::new(self.v_l.sample(rng), self.v_r.sample(rng))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObservationSpace {
    pub x: BoxSpace,
    pub y: BoxSpace,
    pub dl: BoxSpace,
    pub dr: BoxSpace,
    pub theta: BoxSpace,
}

impl ObservationSpace {
    #[must_use]
    pub fn new(field_size: f32, max_speed: f32) -> Self {
        Self {
            x: BoxSpace::new(0.0, field_size),
            y: BoxSpace::new(0.0, field_size),
            dl: BoxSpace::symmetric(max_speed),
            dr: BoxSpace::symmetric(max_speed),
            theta: BoxSpace::symmetric(PI),
        }
    }

    /// Headings are not wrapped by the environment, so a long turning episode
    /// leaves this space through `theta` without terminating.
    #[must_use]
    pub fn contains(&self, obs: &Observation) -> bool {
        self.x.contains(obs.x)
            && self.y.contains(obs.y)
            && self.dl.contains(obs.dl)
            && self.dr.contains(obs.dr)
            && self.theta.contains(obs.theta)
    }
}
