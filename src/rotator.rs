use std::time::Duration;
use anyhow::{bail, Result};
use crate::durations::DurationTable;
use crate::effect::TransitionEffect;
use crate::surface::SpriteSurface;

/// Owns the rotation state and shows exactly one sprite at a time.
///
/// The rotator never schedules anything itself: `start` and `advance` return
/// the delay until the next `advance` is due, and the caller's timer fires it.
pub struct SpriteRotator<S: SpriteSurface> {
    surface: S,
    durations: DurationTable,
    steps: u32,
    current_index: usize,
}

impl<S: SpriteSurface> SpriteRotator<S> {
    pub fn new(surface: S, durations: DurationTable, steps: u32) -> Result<Self> {
        let count = surface.sprite_count();
        if count == 0 {
            bail!("Cannot rotate an empty sprite set");
        }
        if durations.len() != count {
            bail!("Got {} durations for {} sprites", durations.len(), count);
        }
        Ok(Self { surface, durations, steps, current_index: 0 })
    }

    /// First sprite visible, all others hidden, no effect running anywhere.
    pub fn initialize(&mut self) {
        for index in 0..self.surface.sprite_count() {
            self.surface.reset(index, index == 0);
        }
        self.current_index = 0;
    }

    /// Shows the first sprite and returns the delay before the first `advance`.
    pub fn start(&mut self) -> Duration {
        self.show(self.current_index);
        self.durations.get(self.current_index)
    }

    pub fn show(&mut self, index: usize) {
        let effect = self.effect_for(index);
        self.surface.show(index, &effect);
    }

    pub fn hide(&mut self, index: usize) {
        self.surface.hide(index);
    }

    /// One rotation step. The returned delay belongs to the sprite just shown.
    pub fn advance(&mut self) -> Duration {
        self.hide(self.current_index);
        self.current_index = (self.current_index + 1) % self.surface.sprite_count();
        self.show(self.current_index);
        log::debug!("rotated to sprite {}", self.current_index);
        self.durations.get(self.current_index)
    }

    pub fn effect_for(&self, index: usize) -> TransitionEffect {
        TransitionEffect::new(index, self.durations.get(index), self.steps)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SpriteState;
    use crate::trace::{SurfaceEvent, TraceSurface};

    fn rotator(durations: Vec<u32>) -> SpriteRotator<TraceSurface> {
        let surface = TraceSurface::new(durations.len());
        let mut rotator = SpriteRotator::new(surface, DurationTable::new(durations).unwrap(), 20).unwrap();
        rotator.initialize();
        rotator
    }

    #[test]
    fn rejects_mismatched_durations() {
        let table = DurationTable::uniform(3, 4500).unwrap();
        assert!(SpriteRotator::new(TraceSurface::new(8), table, 20).is_err());
    }

    #[test]
    fn rejects_empty_sprite_set() {
        let table = DurationTable::uniform(1, 4500).unwrap();
        assert!(SpriteRotator::new(TraceSurface::new(0), table, 20).is_err());
    }

    #[test]
    fn initialize_leaves_only_the_first_sprite_visible() {
        let rotator = rotator(vec![4500; 8]);
        assert_eq!(rotator.surface().visible_indices(), vec![0]);
        for index in 0..8 {
            assert_eq!(rotator.surface().effect(index), None);
        }
    }

    #[test]
    fn visible_index_after_k_steps_is_k_mod_n() {
        let mut rotator = rotator(vec![4500; 5]);
        rotator.start();
        for k in 1..=17 {
            rotator.advance();
            assert_eq!(rotator.current_index(), k % 5);
            assert_eq!(rotator.surface().visible_indices(), vec![k % 5]);
        }
    }

    #[test]
    fn advance_hides_then_shows_and_returns_new_sprites_duration() {
        let mut rotator = rotator(vec![1000, 2000, 3000]);
        assert_eq!(rotator.start(), Duration::from_millis(1000));
        rotator.surface_mut().clear_events();

        assert_eq!(rotator.advance(), Duration::from_millis(2000));
        assert_eq!(
            rotator.surface().events(),
            &[
                SurfaceEvent::Hide { index: 0 },
                SurfaceEvent::Show { index: 1, effect: "animateLogo2 2s steps(20, end) forwards".into() },
            ]
        );
        assert_eq!(rotator.advance(), Duration::from_millis(3000));
        assert_eq!(rotator.advance(), Duration::from_millis(1000));
        assert_eq!(rotator.current_index(), 0);
    }

    #[test]
    fn single_sprite_stays_visible_and_retriggers() {
        let mut rotator = rotator(vec![4500]);
        rotator.start();
        rotator.surface_mut().clear_events();
        for _ in 0..3 {
            assert_eq!(rotator.advance(), Duration::from_millis(4500));
            assert_eq!(rotator.current_index(), 0);
            assert_eq!(rotator.surface().state(0), SpriteState::Visible);
        }
        let shows = rotator
            .surface()
            .events()
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Show { index: 0, .. }))
            .count();
        assert_eq!(shows, 3);
    }

    #[test]
    fn hiding_a_hidden_sprite_is_harmless() {
        let mut rotator = rotator(vec![4500; 3]);
        rotator.hide(2);
        rotator.hide(2);
        assert_eq!(rotator.surface().state(2), SpriteState::Hidden);
        assert_eq!(rotator.surface().visible_indices(), vec![0]);
    }
}
