//! CSV step log.
//!
//! One line per logged step, no header: `v_l,v_r,d_theta`, where `d_theta`
//! is the heading change the step produced.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "logs";

pub struct StepLogger<W: Write> {
    out: W,
    records: u64,
}

impl<W: Write> StepLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    #[must_use]
    pub const fn records(&self) -> u64 {
        self.records
    }

    /// Append one step record.
    ///
    /// # Errors
    ///
    /// Propagates write errors from the underlying sink.
    pub fn record(&mut self, v_l: f32, v_r: f32, d_theta: f32) -> Result<()> {
        writeln!(self.out, "{v_l},{v_r},{d_theta}").context("failed to write step log record")?;
        self.records += 1;
        Ok(())
    }

    /// Flush and hand back the sink.
    ///
    /// # Errors
    ///
    /// Propagates flush errors.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("failed to flush step log")?;
        Ok(self.out)
    }
}

impl StepLogger<BufWriter<File>> {
    /// Open `log_YYYYmmdd_HHMMSS.csv` under `dir`, creating `dir` if needed.
    ///
    /// # Errors
    ///
    /// Fails if the directory or file cannot be created.
    pub fn create_in(dir: impl AsRef<Path>) -> Result<(Self, PathBuf)> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let path = dir.join(log_file_name(&Local::now()));
        let file = File::create(&path)
            .with_context(|| format!("failed to create step log {}", path.display()))?;
        tracing::info!("Logging steps to {}", path.display());
        Ok((Self::new(BufWriter::new(file)), path))
    }
}

fn log_file_name<Tz: chrono::TimeZone>(now: &chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("log_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
