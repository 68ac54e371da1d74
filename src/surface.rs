use crate::effect::TransitionEffect;

/// Display capability the rotator drives. Implemented by the raylib logo and
/// by the headless trace.
pub trait SpriteSurface {
    fn sprite_count(&self) -> usize;
    /// Set visibility directly and clear any running effect.
    fn reset(&mut self, index: usize, visible: bool);
    fn show(&mut self, index: usize, effect: &TransitionEffect);
    /// Cancel the effect and hide. Hiding a hidden sprite is a no-op.
    fn hide(&mut self, index: usize);
}
