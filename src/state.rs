#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SpriteState {
    #[default]
    Hidden,  // Not drawn, no effect running
    Visible, // Drawn, effect running or holding its end state
}

impl SpriteState {
    pub fn from_visible(visible: bool) -> Self {
        if visible { SpriteState::Visible } else { SpriteState::Hidden }
    }

    pub fn is_visible(self) -> bool {
        self == SpriteState::Visible
    }
}
