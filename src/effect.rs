use std::fmt;
use std::time::Duration;
use crate::constants::EFFECT_PREFIX;

/// Stepped reveal attached to a sprite while it is shown.
///
/// Runs once over `duration` using `steps(n, end)` timing and then holds its
/// final state (`forwards` fill).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEffect {
    index: usize,
    duration: Duration,
    steps: u32,
}

impl TransitionEffect {
    pub fn new(index: usize, duration: Duration, steps: u32) -> Self {
        Self { index, duration, steps: steps.max(1) }
    }

    /// Effects are named after the 1-indexed sprite they belong to.
    pub fn name(&self) -> String {
        format!("{}{}", EFFECT_PREFIX, self.index + 1)
    }

    /// Completed steps after `elapsed`, in `0..=steps`.
    pub fn step_at(&self, elapsed: Duration) -> u32 {
        let total = self.duration.as_nanos();
        if total == 0 || elapsed >= self.duration {
            return self.steps;
        }
        let step = elapsed.as_nanos() * self.steps as u128 / total;
        step.min(self.steps as u128) as u32
    }

    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        self.step_at(elapsed) as f32 / self.steps as f32
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

impl fmt::Display for TransitionEffect {
    // CSS animation shorthand, e.g. "animateLogo1 4.5s steps(20, end) forwards"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}s steps({}, end) forwards",
            self.name(),
            self.duration.as_millis() as f64 / 1000.0,
            self.steps
        )
    }
}
