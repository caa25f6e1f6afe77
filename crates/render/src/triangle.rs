use glam::Vec2;
use kinematics::{rotate_point, Pose};

/// Corners of the vehicle marker in field coordinates.
///
/// The unrotated marker has its base on the vertical line through the pose,
/// spanning `side` units, and its apex `1.5 * side` units ahead along +x.
/// All three corners are then rotated by the heading about
/// `(x, y + 1.5 * side / 3)`.
#[must_use]
pub fn vehicle_triangle(pose: &Pose, side: f32) -> [Vec2; 3] {
    let height = 1.5 * side;
    let pivot = kinematics::Vec2::new(pose.x, pose.y + height / 3.0);

    [
        kinematics::Vec2::new(pose.x, pose.y - side / 2.0),
        kinematics::Vec2::new(pose.x, pose.y + side / 2.0),
        kinematics::Vec2::new(pose.x + height, pose.y),
    ]
    .map(|corner| {
        let p = rotate_point(corner, pivot, pose.theta);
        Vec2::new(p.x, p.y)
    })
}
