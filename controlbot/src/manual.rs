//! # Manual Control
//!
//! Keyboard-style driving of a [`ControlBotEnv`].
//!
//! Each tick the driver receives the set of keys currently held and turns it
//! into wheel speeds:
//!
//! -   **Left / right shift:** while held, that wheel speeds up by `dv` per
//!     tick; while released, it slows down by `dv`. Speeds stay within
//!     `[vmin, vmax]`.
//! -   **Space:** stop both wheels.
//! -   **r:** stop both wheels and start a new episode.
//! -   **q:** end the session.
//!
//! Key states come from any line-oriented source, one line per tick, so a
//! session can be typed live on stdin or replayed from a script file. A line
//! lists the keys held during that tick, separated by spaces or commas; an
//! empty line means no keys are held.
//!
//! ```text
//! L R        # both shifts: accelerate straight ahead
//! L          # left only: curve right
//! space
//! r
//! q
//! ```
//!
//! Anything after `#` on a line is ignored.

use crate::logger::StepLogger;
use anyhow::{bail, Context, Result};
use env::{Action, ControlBotEnv, Env, EpisodeState};
use render::{FrameWriter, Renderer};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::{Duration, Instant};

pub const DEFAULT_DV: f32 = 0.1;
pub const DEFAULT_VMIN: f32 = 0.0;
pub const DEFAULT_VMAX: f32 = 10.0;

/// Keys held during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left_shift: bool,
    pub right_shift: bool,
    pub space: bool,
    pub reset: bool,
    pub quit: bool,
}

impl FromStr for KeyState {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let keys = line.split('#').next().unwrap_or_default();
        let mut state = Self::default();
        for token in keys.split(|c: char| c.is_whitespace() || c == ',') {
            match token {
                "" => {}
                "L" | "lshift" | "left" => state.left_shift = true,
                "R" | "rshift" | "right" => state.right_shift = true,
                "space" | "stop" => state.space = true,
                "r" | "reset" => state.reset = true,
                "q" | "quit" => state.quit = true,
                other => bail!("unknown key `{other}`"),
            }
        }
        Ok(state)
    }
}

/// What the driver should do after a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlCommand {
    /// Start a new episode before stepping.
    pub reset: bool,
    pub action: Action,
}

/// Turns key states into wheel speeds. Holds only the two speeds it is
/// ramping; the environment is owned elsewhere.
#[derive(Clone, Debug)]
pub struct ManualController {
    vl: f32,
    vr: f32,
    dv: f32,
    vmin: f32,
    vmax: f32,
}

impl Default for ManualController {
    fn default() -> Self {
        Self::new(DEFAULT_DV, DEFAULT_VMIN, DEFAULT_VMAX)
    }
}

impl ManualController {
    #[must_use]
    pub fn new(dv: f32, vmin: f32, vmax: f32) -> Self {
        Self {
            vl: 0.0,
            vr: 0.0,
            dv,
            vmin,
            vmax,
        }
    }

    #[must_use]
    pub const fn speeds(&self) -> (f32, f32) {
        (self.vl, self.vr)
    }

    pub fn update(&mut self, keys: &KeyState) -> ControlCommand {
        if keys.reset || keys.space {
            self.vl = 0.0;
            self.vr = 0.0;
        }
        self.vl = self.ramp(self.vl, keys.left_shift);
        self.vr = self.ramp(self.vr, keys.right_shift);
        ControlCommand {
            reset: keys.reset,
            action: Action::new(self.vl, self.vr),
        }
    }

    fn ramp(&self, speed: f32, held: bool) -> f32 {
        let delta = if held { self.dv } else { -self.dv };
        (speed + delta).clamp(self.vmin, self.vmax)
    }
}

/// Counters reported at the end of a manual session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub steps: u64,
    pub resets: u64,
    pub terminations: u64,
    pub records: u64,
    pub frames: u32,
}

/// Optional outputs of a session.
pub struct SessionOutputs<'a, W: Write> {
    pub logger: Option<&'a mut StepLogger<W>>,
    pub frames: Option<(&'a Renderer, &'a mut FrameWriter)>,
    /// Minimum wall-clock time per tick; `None` runs as fast as input
    /// arrives.
    pub tick: Option<Duration>,
}

impl<W: Write> Default for SessionOutputs<'_, W> {
    fn default() -> Self {
        Self {
            logger: None,
            frames: None,
            tick: None,
        }
    }
}

/// Drive `env` from key-state lines until `q` or end of input.
///
/// The environment is reset once before the first tick. A terminated
/// episode is not reset automatically; ticks without `r` are skipped until
/// the user resets.
///
/// # Errors
///
/// Fails on unreadable input, unknown keys (with the line number), rejected
/// actions, and logger or frame write failures.
pub fn drive<R: BufRead, W: Write>(
    env: &mut ControlBotEnv,
    input: R,
    controller: &mut ManualController,
    mut outputs: SessionOutputs<'_, W>,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let (obs, _) = env.reset(None);
    let mut last_theta = obs.theta;
    let mut warned_terminated = false;

    for (index, line) in input.lines().enumerate() {
        let tick_start = Instant::now();
        let line = line.context("failed to read key input")?;
        let keys: KeyState = line
            .parse()
            .with_context(|| format!("bad key line {}: `{line}`", index + 1))?;
        if keys.quit {
            tracing::info!("Quit requested after {} ticks.", summary.ticks);
            break;
        }
        summary.ticks += 1;

        let command = controller.update(&keys);
        if command.reset {
            let (obs, _) = env.reset(None);
            last_theta = obs.theta;
            warned_terminated = false;
            summary.resets += 1;
        }

        if env.state() == EpisodeState::Terminated {
            if !warned_terminated {
                tracing::warn!("Vehicle is off the field; press `r` to reset.");
                warned_terminated = true;
            }
            continue;
        }

        let result = env.step(command.action)?;
        summary.steps += 1;
        if result.terminated {
            summary.terminations += 1;
            tracing::info!(
                "Episode terminated at x={:.1}, y={:.1}.",
                result.observation.x,
                result.observation.y
            );
        }

        let theta = result.observation.theta;
        let d_theta = theta - last_theta;
        last_theta = theta;

        let Action { v_l, v_r } = command.action;
        if let Some(logger) = outputs.logger.as_deref_mut() {
            if v_l != 0.0 || v_r != 0.0 {
                logger.record(v_l, v_r, d_theta)?;
                summary.records += 1;
            }
        }

        if let Some((renderer, writer)) = outputs.frames.as_mut() {
            writer.write(&renderer.render(&env.pose()))?;
            summary.frames += 1;
        }

        if let Some(tick) = outputs.tick {
            let elapsed = tick_start.elapsed();
            if elapsed < tick {
                std::thread::sleep(tick - elapsed);
            }
        }
    }

    Ok(summary)
}
