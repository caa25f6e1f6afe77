use std::ops::{Add, Sub};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Planar pose of the vehicle.
///
/// `theta` is the heading in radians measured counter-clockwise from the +x
/// axis. Nothing here wraps it; see [`crate::normalize_angle`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub theta: f32,
}

impl Pose {
    #[must_use]
    pub const fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

/// Signed left/right wheel speeds, in field units per time unit.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WheelVelocities {
    pub v_l: f32,
    pub v_r: f32,
}

impl WheelVelocities {
    pub const STOPPED: Self = Self { v_l: 0.0, v_r: 0.0 };

    #[must_use]
    pub const fn new(v_l: f32, v_r: f32) -> Self {
        Self { v_l, v_r }
    }

    /// True when the two speeds compare equal with `==`, which is the
    /// condition the motion model uses to pick the straight-line formula.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_straight(&self) -> bool {
        self.v_l == self.v_r
    }
}
