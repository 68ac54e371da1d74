use std::path::{Path, PathBuf};
use anyhow::{bail, Result};
use clap::Parser;
use crate::constants::*;
use crate::durations::DurationTable;
use crate::texture_loader::load_sorted_sprite_paths;

#[derive(Parser, Debug)]
#[command(name = "logo-rotator")]
#[command(about = "Cycles through a set of logo sprites, one at a time, forever")]
pub struct Args {
    /// Directory holding the sprite images, ordered by file name
    #[arg(default_value = LOGO_DIR)]
    pub sprite_dir: PathBuf,

    /// Display time per sprite in milliseconds: one value for all, or one per sprite
    #[arg(long = "duration-ms", value_delimiter = ',')]
    pub duration_ms: Vec<u32>,

    /// Discrete steps of the reveal effect
    #[arg(long, default_value_t = TRANSITION_STEPS)]
    pub steps: u32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Simulate this many milliseconds without a window and log the timeline
    #[arg(long = "dry-run", value_name = "MS")]
    pub dry_run: Option<u64>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            bail!("--steps must be at least 1");
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            bail!("--fps must be between 1 and {}", MAX_FPS);
        }
        Ok(())
    }

    /// Sprites to simulate in a dry run. Only the default container may be
    /// missing, in which case the stock logo's sprite count is used.
    pub fn dry_run_sprite_count(&self) -> Result<usize> {
        if self.sprite_dir.is_dir() {
            return Ok(load_sorted_sprite_paths(&self.sprite_dir)?.len());
        }
        if self.sprite_dir != Path::new(LOGO_DIR) {
            bail!("Sprite directory not found: {}", self.sprite_dir.display());
        }
        log::info!("{} not found, simulating the stock {} sprites", LOGO_DIR, SPRITE_COUNT);
        Ok(SPRITE_COUNT)
    }

    /// Duration table for a container of `sprite_count` sprites.
    pub fn durations_for(&self, sprite_count: usize) -> Result<DurationTable> {
        match self.duration_ms.as_slice() {
            [] => DurationTable::uniform(sprite_count, SPRITE_DURATION_MS),
            [single] => DurationTable::uniform(sprite_count, *single),
            many if many.len() == sprite_count => DurationTable::new(many.to_vec()),
            many => bail!(
                "Got {} durations for {} sprites; pass one value or exactly one per sprite",
                many.len(),
                sprite_count
            ),
        }
    }
}
