//! # ControlBot Application Logic
//!
//! The three things the `controlbot` binary can do, each callable on its own:
//!
//! -   [`run_manual`]: drive the vehicle from key-state lines, logging steps
//!     to CSV and optionally dumping PNG frames.
//! -   [`run_random`]: roll out a uniformly random policy for a number of
//!     time-limited episodes and report how long the vehicle survived.
//! -   [`run_render`]: hold a fixed command for some steps and save the final
//!     frame.
//!
//! All of them take an environment built by [`make_env`], which resolves an
//! id against a fresh [`Registry`].

use crate::logger::{StepLogger, DEFAULT_LOG_DIR};
use crate::manual::{self, ManualController, SessionOutputs, SessionSummary};
use anyhow::{Context, Result};
use clap::Args;
use env::{Action, ControlBotEnv, Env, EnvConfig, Registry, TimeLimit, CONTROLBOT_V0};
use render::{FrameWriter, Renderer};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Id used when none is given on the command line.
pub const DEFAULT_ENV_ID: &str = CONTROLBOT_V0;

/// Build the environment registered as `env_id`, optionally re-registering
/// it with the configuration stored at `config`.
///
/// # Errors
///
/// Fails on unreadable or invalid configuration files and unknown ids.
pub fn make_env(env_id: &str, config: Option<&Path>) -> Result<ControlBotEnv> {
    let mut registry = Registry::with_defaults();
    if let Some(path) = config {
        let loaded = EnvConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::info!("Loaded {loaded:?} from {}", path.display());
        registry.register(env_id, loaded);
    }
    registry
        .make(env_id)
        .with_context(|| format!("failed to make environment `{env_id}`"))
}

#[derive(Args, Debug, Clone)]
pub struct ManualOptions {
    /// Read key states from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,
    /// Directory for per-tick PNG frames.
    #[arg(long)]
    pub frames: Option<PathBuf>,
    /// Directory for the CSV step log.
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
    /// Do not write a step log.
    #[arg(long)]
    pub no_log: bool,
    /// Ticks per second; 0 runs as fast as input arrives.
    #[arg(long, default_value_t = 0.0)]
    pub fps: f32,
}

/// Run a manual-control session.
///
/// # Errors
///
/// Fails when the key source, log file, or frame directory cannot be opened,
/// and on any error reported by [`manual::drive`].
pub fn run_manual(mut env: ControlBotEnv, options: &ManualOptions) -> Result<SessionSummary> {
    let input: Box<dyn BufRead> = match &options.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open script {}", path.display()))?,
        )),
        None => {
            tracing::info!("Reading key states from stdin (L, R, space, r, q; one line per tick).");
            Box::new(io::stdin().lock())
        }
    };

    let mut logger = if options.no_log {
        None
    } else {
        Some(StepLogger::create_in(&options.log_dir)?.0)
    };

    let field_size = env.config().field_size;
    let mut frames = options
        .frames
        .as_ref()
        .map(|dir| -> Result<_> {
            Ok((Renderer::new(field_size)?, FrameWriter::new(dir.clone())?))
        })
        .transpose()?;

    let tick = (options.fps > 0.0).then(|| Duration::from_secs_f32(1.0 / options.fps));
    let outputs = SessionOutputs {
        logger: logger.as_mut(),
        frames: frames.as_mut().map(|(renderer, writer)| (&*renderer, writer)),
        tick,
    };

    let mut controller = ManualController::default();
    let summary = manual::drive(&mut env, input, &mut controller, outputs)?;

    if let Some(logger) = logger {
        logger.finish()?;
    }
    tracing::info!("Manual session finished: {summary:?}");
    Ok(summary)
}

#[derive(Args, Debug, Clone)]
pub struct RandomOptions {
    /// Number of episodes to roll out.
    #[arg(long, default_value_t = 10)]
    pub episodes: u32,
    /// Truncate episodes after this many steps.
    #[arg(long, default_value_t = 1_000)]
    pub max_steps: u64,
    /// Seed for the first episode; episode `i` uses `seed + i`, wrapping.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeStats {
    pub steps: u64,
    pub total_reward: f32,
    pub terminated: bool,
}

/// Roll out a uniformly random policy.
///
/// # Errors
///
/// Propagates environment errors; with a valid environment none occur.
pub fn run_random(env: ControlBotEnv, options: &RandomOptions) -> Result<Vec<EpisodeStats>> {
    let mut env = TimeLimit::new(env, options.max_steps);
    let mut stats = Vec::with_capacity(options.episodes as usize);

    for episode in 0..options.episodes {
        env.reset(options.seed.map(|seed| seed.wrapping_add(u64::from(episode))));
        let mut total_reward = 0.0;
        let mut steps = 0;
        loop {
            let action = env.inner_mut().sample_action();
            let result = env.step(action)?;
            total_reward += result.reward;
            steps += 1;
            if result.done() {
                stats.push(EpisodeStats {
                    steps,
                    total_reward,
                    terminated: result.terminated,
                });
                break;
            }
        }
        tracing::info!(
            "Episode {} finished after {} steps (return {}).",
            episode + 1,
            steps,
            total_reward
        );
    }

    if !stats.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean = stats.iter().map(|s| s.steps as f64).sum::<f64>() / stats.len() as f64;
        let left_field = stats.iter().filter(|s| s.terminated).count();
        tracing::info!(
            "Random policy: mean episode length {mean:.1} steps, {left_field}/{} episodes left the field.",
            stats.len()
        );
    }
    Ok(stats)
}

#[derive(Args, Debug, Clone)]
pub struct RenderOptions {
    /// Where to write the PNG.
    #[arg(long)]
    pub out: PathBuf,
    /// Steps to hold the command before drawing.
    #[arg(long, default_value_t = 0)]
    pub steps: u32,
    /// Left wheel speed.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub vl: f32,
    /// Right wheel speed.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub vr: f32,
}

/// Drive with a constant command, then save the frame. Stops early if the
/// vehicle leaves the field. Returns the steps actually taken.
///
/// # Errors
///
/// Fails on an out-of-range command or when the PNG cannot be written.
pub fn run_render(mut env: ControlBotEnv, options: &RenderOptions) -> Result<u32> {
    env.reset(None);
    let action = Action::new(options.vl, options.vr);
    let mut taken = 0;
    for _ in 0..options.steps {
        let result = env.step(action)?;
        taken += 1;
        if result.terminated {
            tracing::warn!("Vehicle left the field after {taken} steps.");
            break;
        }
    }

    let renderer = Renderer::new(env.config().field_size)?;
    render::save_png(&renderer.render(&env.pose()), &options.out)?;
    tracing::info!("Wrote frame of {:?} to {}", env.pose(), options.out.display());
    Ok(taken)
}
