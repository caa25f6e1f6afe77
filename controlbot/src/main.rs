#![deny(clippy::all, clippy::pedantic)]
//! # ControlBot Runtime
//!
//! Entry point for the `controlbot` binary. Parses the command line, installs
//! the tracing subscriber, builds the requested environment and hands it to
//! one of the [`controlbot::app`] runners.

use anyhow::Result;
use clap::{Parser, Subcommand};
use controlbot::app::{self, ManualOptions, RandomOptions, RenderOptions, DEFAULT_ENV_ID};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "controlbot", version, about = "Differential-drive vehicle simulator")]
struct Cli {
    /// JSON file with `max_speed`, `field_size` and `track_width`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Registered environment id.
    #[arg(long = "env", global = true, default_value = DEFAULT_ENV_ID)]
    env_id: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive the vehicle from key-state lines on stdin or a script.
    Manual(ManualOptions),
    /// Roll out a uniformly random policy.
    Random(RandomOptions),
    /// Hold a wheel command for some steps and save the frame as PNG.
    Render(RenderOptions),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();

    tracing::info!("Initializing environment `{}`...", cli.env_id);
    let env = app::make_env(&cli.env_id, cli.config.as_deref())?;

    match &cli.command {
        Command::Manual(options) => {
            app::run_manual(env, options)?;
        }
        Command::Random(options) => {
            app::run_random(env, options)?;
        }
        Command::Render(options) => {
            app::run_render(env, options)?;
        }
    }
    Ok(())
}
