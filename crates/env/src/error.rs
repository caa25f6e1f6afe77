use kinematics::KinematicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("action (v_l={v_l}, v_r={v_r}) outside [-{max_speed}, {max_speed}]")]
    InvalidAction { v_l: f32, v_r: f32, max_speed: f32 },
    #[error("invalid configuration: `{field}` must be finite and > 0, got {value}")]
    InvalidConfig { field: &'static str, value: f32 },
    #[error(transparent)]
    Domain(#[from] KinematicsError),
    #[error("start pose ({x}, {y}) lies outside the field")]
    PoseOutOfBounds { x: f32, y: f32 },
    #[error("no active episode: call reset before stepping")]
    NeedsReset,
    #[error("unknown environment id `{0}`")]
    UnknownEnv(String),
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
