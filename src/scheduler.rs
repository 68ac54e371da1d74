use std::time::Duration;
use crate::rotator::SpriteRotator;
use crate::surface::SpriteSurface;

/// Recurring task driving a rotator from frame time.
///
/// Holds exactly one pending deadline. Leftover time past a deadline is
/// carried into the next one, so long or uneven frames do not drift the
/// rotation.
#[derive(Debug, Default)]
pub struct RotationTimer {
    remaining: Option<Duration>,
    delay: Duration,
    elapsed: Duration,
}

impl RotationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<S: SpriteSurface>(&mut self, rotator: &mut SpriteRotator<S>) {
        self.delay = rotator.start();
        self.remaining = Some(self.delay);
        self.elapsed = Duration::ZERO;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time until the pending `advance`, if started.
    #[cfg(test)]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time the current sprite has been showing, including leftover from a late step.
    pub fn since_last_step(&self) -> Duration {
        match self.remaining {
            Some(remaining) => self.delay - remaining,
            None => Duration::ZERO,
        }
    }

    /// Consumes `dt` and returns how many rotation steps fired.
    pub fn tick<S: SpriteSurface>(&mut self, dt: Duration, rotator: &mut SpriteRotator<S>) -> usize {
        let Some(mut remaining) = self.remaining else {
            return 0;
        };
        self.elapsed += dt;

        let mut left = dt;
        let mut fired = 0;
        while left >= remaining {
            left -= remaining;
            remaining = rotator.advance();
            self.delay = remaining;
            fired += 1;
        }
        self.remaining = Some(remaining - left);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::durations::DurationTable;
    use crate::trace::TraceSurface;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn started(durations: Vec<u32>) -> (RotationTimer, SpriteRotator<TraceSurface>) {
        let surface = TraceSurface::new(durations.len());
        let mut rotator = SpriteRotator::new(surface, DurationTable::new(durations).unwrap(), 20).unwrap();
        rotator.initialize();
        let mut timer = RotationTimer::new();
        timer.start(&mut rotator);
        (timer, rotator)
    }

    #[test]
    fn does_nothing_before_start() {
        let surface = TraceSurface::new(2);
        let mut rotator = SpriteRotator::new(surface, DurationTable::uniform(2, 100).unwrap(), 20).unwrap();
        let mut timer = RotationTimer::new();
        assert_eq!(timer.tick(ms(1000), &mut rotator), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn stock_logo_full_cycle() {
        let (mut timer, mut rotator) = started(vec![4500; 8]);
        assert_eq!(rotator.surface().visible_indices(), vec![0]);

        timer.tick(ms(4499), &mut rotator);
        assert_eq!(rotator.current_index(), 0);

        timer.tick(ms(1), &mut rotator);
        assert_eq!(rotator.surface().visible_indices(), vec![1]);

        timer.tick(ms(4500 * 7), &mut rotator);
        assert_eq!(timer.elapsed(), ms(36_000));
        assert_eq!(rotator.surface().visible_indices(), vec![0]);
    }

    #[test]
    fn next_step_waits_for_the_shown_sprites_duration() {
        let (mut timer, mut rotator) = started(vec![100, 300, 50]);
        assert_eq!(timer.remaining(), Some(ms(100)));

        timer.tick(ms(100), &mut rotator);
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(timer.remaining(), Some(ms(300)));

        timer.tick(ms(299), &mut rotator);
        assert_eq!(rotator.current_index(), 1);
        timer.tick(ms(1), &mut rotator);
        assert_eq!(rotator.current_index(), 2);
        assert_eq!(timer.remaining(), Some(ms(50)));
    }

    #[test]
    fn long_frame_fires_every_due_step_and_carries_leftover() {
        let (mut timer, mut rotator) = started(vec![100, 300, 50]);
        // 100 + 300 + 50 = 450 fires three steps, 10 ms into sprite 0's 100 ms
        assert_eq!(timer.tick(ms(460), &mut rotator), 3);
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(timer.remaining(), Some(ms(90)));
        assert_eq!(timer.since_last_step(), ms(10));
    }

    #[test]
    fn since_last_step_restarts_on_each_step() {
        let (mut timer, mut rotator) = started(vec![100, 300]);
        timer.tick(ms(40), &mut rotator);
        assert_eq!(timer.since_last_step(), ms(40));
        timer.tick(ms(60), &mut rotator);
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(timer.since_last_step(), ms(0));
    }

    #[test]
    fn exactly_one_sprite_visible_across_uneven_frames() {
        let (mut timer, mut rotator) = started(vec![70, 20, 45, 90]);
        for frame in [16, 17, 33, 5, 120, 16, 1, 250] {
            timer.tick(ms(frame), &mut rotator);
            assert_eq!(rotator.surface().visible_indices().len(), 1);
        }
    }
}
