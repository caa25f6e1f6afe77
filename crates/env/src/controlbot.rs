//! # ControlBot Episode Controller
//!
//! [`ControlBotEnv`] drives a differential-drive vehicle around a square field.
//!
//! Every episode starts with the vehicle parked at the field center, facing
//! +x. Each [`Action`] sets both wheel speeds for one unit of time. The
//! vehicle earns `1.0` for every step it ends inside the field; the step that
//! carries it outside earns `0.0` and terminates the episode.
//!
//! ## Episode lifecycle
//!
//! ```text
//! Initialized --reset--> Active --step(in bounds)--> Active
//!                          |
//!                          +--step(out of bounds)--> Terminated --reset--> Active
//! ```
//!
//! Stepping while not [`EpisodeState::Active`] fails with
//! [`EnvError::NeedsReset`]. Failed steps never touch the pose or wheel
//! speeds.

use crate::config::EnvConfig;
use crate::env::{Env, Info, StepResult};
use crate::error::EnvError;
use crate::spaces::{ActionSpace, ObservationSpace};
use kinematics::{diffdrive, Pose, WheelVelocities};
use serde::{Deserialize, Serialize};

/// Every step integrates the model over exactly one time unit.
pub const STEP_DURATION: f32 = 1.0;

const ALIVE_REWARD: f32 = 1.0;
const TERMINAL_REWARD: f32 = 0.0;

/// Wheel speeds requested for the next step.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Action {
    pub v_l: f32,
    pub v_r: f32,
}

impl Action {
    #[must_use]
    pub const fn new(v_l: f32, v_r: f32) -> Self {
        Self { v_l, v_r }
    }
}

impl From<[f32; 2]> for Action {
    fn from([v_l, v_r]: [f32; 2]) -> Self {
        Self::new(v_l, v_r)
    }
}

impl From<Action> for WheelVelocities {
    fn from(action: Action) -> Self {
        Self::new(action.v_l, action.v_r)
    }
}

/// Snapshot of the controller state. `dl`/`dr` echo the wheel speeds of the
/// last accepted action.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Observation {
    pub x: f32,
    pub y: f32,
    pub dl: f32,
    pub dr: f32,
    pub theta: f32,
}

impl Observation {
    pub const SIZE: usize = 5;

    #[must_use]
    pub fn new(pose: Pose, wheels: WheelVelocities) -> Self {
        Self {
            x: pose.x,
            y: pose.y,
            dl: wheels.v_l,
            dr: wheels.v_r,
            theta: pose.theta,
        }
    }

    /// Flatten as `[x, y, dl, dr, theta]`.
    #[must_use]
    pub fn to_array(self) -> [f32; Self::SIZE] {
        bytemuck::cast(self)
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<f32> {
        self.to_array().to_vec()
    }

    #[must_use]
    pub const fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.theta)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeState {
    /// Constructed but never reset.
    Initialized,
    Active,
    /// Left the field. Absorbing until the next reset.
    Terminated,
}

/// Episode controller for a differential-drive vehicle on a square field.
///
/// The controller is a plain owned value. Run several episodes in parallel by
/// constructing several controllers; nothing is shared between them.
#[derive(Debug)]
pub struct ControlBotEnv {
    config: EnvConfig,
    pose: Pose,
    wheels: WheelVelocities,
    state: EpisodeState,
    elapsed_steps: u64,
    rng: fastrand::Rng,
}

impl ControlBotEnv {
    /// Build a controller after validating `config`.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite constants; a bad track width is
    /// reported as [`EnvError::Domain`].
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        tracing::debug!(?config, "created ControlBot environment");
        Ok(Self {
            config,
            pose: config.start_pose(),
            wheels: WheelVelocities::STOPPED,
            state: EpisodeState::Initialized,
            elapsed_steps: 0,
            rng: fastrand::Rng::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub const fn wheels(&self) -> WheelVelocities {
        self.wheels
    }

    #[must_use]
    pub const fn state(&self) -> EpisodeState {
        self.state
    }

    /// Steps accepted since the last reset.
    #[must_use]
    pub const fn elapsed_steps(&self) -> u64 {
        self.elapsed_steps
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::new(self.pose, self.wheels)
    }

    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::new(self.config.max_speed)
    }

    #[must_use]
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::new(self.config.field_size, self.config.max_speed)
    }

    /// Generator reseeded by [`Env::reset`] when a seed is supplied. The
    /// dynamics are deterministic and never draw from it.
    pub fn rng_mut(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }

    /// Draw a uniformly random action from the action space.
    pub fn sample_action(&mut self) -> Action {
        let space = self.action_space();
        space.sample(&mut self.rng)
    }

    /// Start a new episode from `pose` instead of the field center, with
    /// both wheels stopped. The RNG is left alone.
    ///
    /// # Errors
    ///
    /// [`EnvError::PoseOutOfBounds`] if `pose` is not finite or lies outside
    /// the field; the controller is unchanged in that case.
    pub fn reset_with_pose(&mut self, pose: Pose) -> Result<(Observation, Info), EnvError> {
        if !pose.is_finite() || !self.config.in_bounds(pose) {
            return Err(EnvError::PoseOutOfBounds {
                x: pose.x,
                y: pose.y,
            });
        }
        self.pose = pose;
        self.wheels = WheelVelocities::STOPPED;
        self.state = EpisodeState::Active;
        self.elapsed_steps = 0;
        tracing::debug!(?pose, "episode reset to explicit pose");
        Ok((self.observation(), Info::new()))
    }

    fn check_action(&self, action: &Action) -> Result<(), EnvError> {
        if self.action_space().contains(action) {
            Ok(())
        } else {
            Err(EnvError::InvalidAction {
                v_l: action.v_l,
                v_r: action.v_r,
                max_speed: self.config.max_speed,
            })
        }
    }
}

impl Env for ControlBotEnv {
    type Action = Action;
    type Observation = Observation;

    fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng.seed(seed);
        }
        self.pose = self.config.start_pose();
        self.wheels = WheelVelocities::STOPPED;
        self.state = EpisodeState::Active;
        self.elapsed_steps = 0;
        tracing::debug!(?seed, pose = ?self.pose, "episode reset");
        (self.observation(), Info::new())
    }

    fn step(&mut self, action: Action) -> Result<StepResult<Observation>, EnvError> {
        self.check_action(&action)?;
        if self.state != EpisodeState::Active {
            return Err(EnvError::NeedsReset);
        }

        let wheels = WheelVelocities::from(action);
        let pose = diffdrive(self.pose, wheels, STEP_DURATION, self.config.track_width)?;

        self.wheels = wheels;
        self.pose = pose;
        self.elapsed_steps += 1;

        let terminated = !self.config.in_bounds(pose);
        if terminated {
            self.state = EpisodeState::Terminated;
            tracing::debug!(
                steps = self.elapsed_steps,
                x = pose.x,
                y = pose.y,
                "vehicle left the field, episode terminated"
            );
        }

        Ok(StepResult {
            observation: self.observation(),
            reward: if terminated { TERMINAL_REWARD } else { ALIVE_REWARD },
            terminated,
            truncated: false,
            info: Info::new(),
        })
    }

    fn obs_size(&self) -> usize {
        Observation::SIZE
    }

    fn action_size(&self) -> usize {
        2
    }
}
