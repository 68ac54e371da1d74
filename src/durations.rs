use std::time::Duration;
use anyhow::{bail, Result};

/// Per-sprite display durations in milliseconds, parallel to the sprite set by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationTable {
    millis: Vec<u32>,
}

impl DurationTable {
    pub fn new(millis: Vec<u32>) -> Result<Self> {
        if millis.is_empty() {
            bail!("Duration table must hold at least one entry");
        }
        if let Some(index) = millis.iter().position(|&ms| ms == 0) {
            bail!("Duration for sprite {} must be positive", index);
        }
        Ok(Self { millis })
    }

    /// Same duration for every sprite.
    pub fn uniform(count: usize, millis: u32) -> Result<Self> {
        Self::new(vec![millis; count])
    }

    pub fn len(&self) -> usize {
        self.millis.len()
    }

    pub fn millis(&self, index: usize) -> u32 {
        self.millis[index]
    }

    pub fn get(&self, index: usize) -> Duration {
        Duration::from_millis(self.millis(index) as u64)
    }

    /// Length of one full rotation cycle.
    pub fn cycle(&self) -> Duration {
        self.millis.iter().map(|&ms| Duration::from_millis(ms as u64)).sum()
    }
}
