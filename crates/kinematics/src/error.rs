use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// The wheel separation must be a finite, strictly positive length.
    #[error("track width must be finite and > 0, got {track_width}")]
    Domain { track_width: f32 },
}
