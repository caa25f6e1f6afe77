#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # ControlBot Environment
//!
//! Episodic observation/action/reward loop around the differential-drive
//! [`kinematics`] model.
//!
//! The crate follows the classic Gym shape: an environment is reset to a
//! canonical start, then stepped one action at a time. Each step returns an
//! observation, a scalar reward, and whether the episode has ended.
//!
//! ## Key Components
//!
//! -   **[`Env`]:** the trait every environment implements, plus the
//!     [`StepResult`] record it returns.
//! -   **[`ControlBotEnv`]:** the episode controller. It owns the vehicle
//!     pose and wheel speeds, validates actions, advances the kinematic model
//!     by one unit step, and ends the episode when the vehicle leaves the
//!     square field.
//! -   **[`EnvConfig`]:** construction-time constants (top speed, field size,
//!     track width), loadable from JSON.
//! -   **[`spaces`]:** bounds for actions and observations, with sampling.
//! -   **[`TimeLimit`]:** wrapper that truncates episodes after a fixed
//!     number of steps.
//! -   **[`Registry`]:** maps environment ids such as `"ControlBot-v0"` to
//!     configurations. Registries are ordinary values; there is no global one.
//!
//! ## Usage
//!
//! ```rust
//! use env::{Action, ControlBotEnv, Env, EnvConfig};
//!
//! let mut env = ControlBotEnv::new(EnvConfig::default())?;
//! let (obs, _info) = env.reset(None);
//! assert_eq!((obs.x, obs.y), (300.0, 300.0));
//!
//! let result = env.step(Action::new(2.0, 2.0))?;
//! assert_eq!(result.observation.x, 302.0);
//! assert_eq!(result.reward, 1.0);
//! assert!(!result.terminated);
//! # Ok::<(), env::EnvError>(())
//! ```

pub mod config;
pub mod controlbot;
pub mod env;
pub mod error;
pub mod registry;
pub mod spaces;
pub mod time_limit;

pub use config::EnvConfig;
pub use controlbot::{Action, ControlBotEnv, EpisodeState, Observation};
pub use env::{Env, Info, StepResult};
pub use error::EnvError;
pub use registry::{Registry, CONTROLBOT_V0};
pub use spaces::{ActionSpace, BoxSpace, ObservationSpace};
pub use time_limit::TimeLimit;

pub use kinematics::{Pose, WheelVelocities};
