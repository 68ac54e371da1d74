use crate::effect::TransitionEffect;
use crate::state::SpriteState;
use crate::surface::SpriteSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Reset { index: usize, visible: bool },
    Show { index: usize, effect: String },
    Hide { index: usize },
}

/// Headless surface: keeps sprite states and logs every call.
pub struct TraceSurface {
    states: Vec<SpriteState>,
    effects: Vec<Option<TransitionEffect>>,
    events: Vec<SurfaceEvent>,
}

impl TraceSurface {
    pub fn new(sprite_count: usize) -> Self {
        Self {
            states: vec![SpriteState::Hidden; sprite_count],
            effects: vec![None; sprite_count],
            events: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> SpriteState {
        self.states[index]
    }

    pub fn effect(&self, index: usize) -> Option<&TransitionEffect> {
        self.effects[index].as_ref()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_visible())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    #[cfg(test)]
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl SpriteSurface for TraceSurface {
    fn sprite_count(&self) -> usize {
        self.states.len()
    }

    fn reset(&mut self, index: usize, visible: bool) {
        log::debug!("reset sprite {} visible={}", index, visible);
        self.states[index] = SpriteState::from_visible(visible);
        self.effects[index] = None;
        self.events.push(SurfaceEvent::Reset { index, visible });
    }

    fn show(&mut self, index: usize, effect: &TransitionEffect) {
        log::info!("show sprite {} [{}]", index, effect);
        self.states[index] = SpriteState::Visible;
        self.effects[index] = Some(effect.clone());
        self.events.push(SurfaceEvent::Show { index, effect: effect.to_string() });
    }

    fn hide(&mut self, index: usize) {
        log::info!("hide sprite {}", index);
        self.states[index] = SpriteState::Hidden;
        self.effects[index] = None;
        self.events.push(SurfaceEvent::Hide { index });
    }
}
