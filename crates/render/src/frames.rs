use anyhow::{Context, Result};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `frame` as a PNG at `path`.
///
/// # Errors
///
/// Propagates encoder and filesystem errors with the target path attached.
pub fn save_png(frame: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    frame
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write frame to {}", path.display()))
}

/// Writes a numbered sequence of frames (`frame_00000.png`, `frame_00001.png`,
/// ...) into a directory.
pub struct FrameWriter {
    dir: PathBuf,
    next_index: u32,
}

impl FrameWriter {
    /// Create `dir` if needed and start numbering at zero.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create frame directory {}", dir.display()))?;
        tracing::info!("Writing frames to {}", dir.display());
        Ok(Self { dir, next_index: 0 })
    }

    #[must_use]
    pub const fn frames_written(&self) -> u32 {
        self.next_index
    }

    /// Save the next frame and return where it went.
    ///
    /// # Errors
    ///
    /// See [`save_png`].
    pub fn write(&mut self, frame: &RgbImage) -> Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:05}.png", self.next_index));
        save_png(frame, &path)?;
        self.next_index += 1;
        Ok(path)
    }
}
