//! # ControlBot
//!
//! A differential-drive vehicle on a square field, exposed as an episodic
//! simulation and driven by hand, by a random policy, or by your own code.
//!
//! ## Project Architecture
//!
//! -   **[`kinematics`]:** closed-form forward kinematics for a two-wheeled
//!     vehicle. Pure functions over plain value types.
//! -   **[`env`]:** the episode controller ([`env::ControlBotEnv`]) with its
//!     action/observation contract, configuration, time-limit wrapper and
//!     registry.
//! -   **[`render`]:** software renderer producing RGB frames and PNG files.
//! -   **`controlbot`:** this crate. Manual keyboard-style control
//!     ([`manual`]), the CSV step log ([`logger`]) and the command-line
//!     application ([`app`]).
//!
//! ## Getting Started
//!
//! ```text
//! controlbot manual                  # type L / R / space / r / q, one line per tick
//! controlbot manual --script drive.txt --frames frames/
//! controlbot random --episodes 20 --seed 1
//! controlbot render --out pose.png --steps 30 --vl 2 --vr 3
//! ```

pub mod app;
pub mod logger;
pub mod manual;

pub use env;
pub use kinematics;
pub use render;
