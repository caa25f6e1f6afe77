//! # ControlBot Rendering
//!
//! Software renderer for the ControlBot field. A frame is a square RGB image,
//! one pixel per field unit, with a white background and the vehicle drawn as
//! a filled red triangle pointing along its heading.
//!
//! Rendering is pull-based: callers hand the renderer a [`Pose`] whenever
//! they want a frame. The renderer never sees, and cannot change, the
//! simulation that produced the pose.
//!
//! Image rows run top to bottom while field `y` runs bottom to top, so frames
//! are flipped vertically: the field origin is the bottom-left pixel.

pub mod frames;
pub mod triangle;

pub use frames::{save_png, FrameWriter};
pub use triangle::vehicle_triangle;

use anyhow::{ensure, Result};
use glam::Vec2;
use image::{Rgb, RgbImage};
use kinematics::Pose;

/// Side length of the drawn vehicle, in field units.
pub const VEHICLE_SIDE: f32 = 10.0;
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const VEHICLE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Largest field the renderer will allocate a frame for.
const MAX_FRAME_SIDE: u32 = 8192;

pub struct Renderer {
    side: u32,
}

impl Renderer {
    /// Renderer for a `field_size` x `field_size` field.
    ///
    /// # Errors
    ///
    /// Fails if `field_size` does not round to a side in `1..=8192` pixels.
    pub fn new(field_size: f32) -> Result<Self> {
        ensure!(
            field_size.is_finite() && field_size >= 1.0,
            "field size must be at least one pixel, got {field_size}"
        );
        let rounded = field_size.round();
        ensure!(
            rounded <= MAX_FRAME_SIDE as f32,
            "field size {field_size} exceeds the {MAX_FRAME_SIDE}px frame limit"
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let side = rounded as u32;
        tracing::debug!(side, "renderer ready");
        Ok(Self { side })
    }

    #[must_use]
    pub const fn side(&self) -> u32 {
        self.side
    }

    /// Draw a fresh frame showing the vehicle at `pose`.
    #[must_use]
    pub fn render(&self, pose: &Pose) -> RgbImage {
        let mut frame = RgbImage::from_pixel(self.side, self.side, BACKGROUND);
        self.draw_vehicle(&mut frame, pose);
        frame
    }

    /// Draw the vehicle onto an existing frame. Parts of the triangle that
    /// fall outside the frame are clipped.
    pub fn draw_vehicle(&self, frame: &mut RgbImage, pose: &Pose) {
        let height = self.side as f32;
        let [a, b, c] = vehicle_triangle(pose, VEHICLE_SIDE).map(|p| Vec2::new(p.x, height - p.y));
        fill_triangle(frame, [a, b, c], VEHICLE_COLOR);
    }
}

/// Fill every pixel whose center lies inside the triangle, in either winding.
fn fill_triangle(frame: &mut RgbImage, [a, b, c]: [Vec2; 3], color: Rgb<u8>) {
    let area = (b - a).perp_dot(c - a);
    if area == 0.0 || !area.is_finite() {
        return;
    }

    let min = a.min(b).min(c).floor().max(Vec2::ZERO);
    let max = a
        .max(b)
        .max(c)
        .ceil()
        .min(Vec2::new(frame.width() as f32, frame.height() as f32));
    if min.x >= max.x || min.y >= max.y {
        return;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (x0, y0, x1, y1) = (min.x as u32, min.y as u32, max.x as u32, max.y as u32);
    for py in y0..y1 {
        for px in x0..x1 {
            let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let w0 = (b - a).perp_dot(p - a);
            let w1 = (c - b).perp_dot(p - b);
            let w2 = (a - c).perp_dot(p - c);
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if inside {
                frame.put_pixel(px, py, color);
            }
        }
    }
}
