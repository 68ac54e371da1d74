use std::time::Duration;
use raylib::prelude::*;
use crate::effect::TransitionEffect;
use crate::state::SpriteState;

pub struct Sprite {
    image: Texture2D,
    frames: u32,

    pub state: SpriteState,

    effect: Option<TransitionEffect>,
    effect_timer: Duration,
}

/// A texture `steps` times wider than it is tall is read as a strip of
/// square frames, one per reveal step. Anything else is a single frame
/// revealed by stepped opacity.
pub fn strip_frames(width: i32, height: i32, steps: u32) -> u32 {
    let is_strip = steps > 1 && height > 0 && width as i64 == height as i64 * steps as i64;
    if is_strip { steps } else { 1 }
}

// Strip frame and opacity for the current step; no effect means the plain first frame
pub fn reveal_frame(effect: Option<&TransitionEffect>, elapsed: Duration, frames: u32) -> (u32, f32) {
    match effect {
        Some(effect) if frames > 1 => (effect.step_at(elapsed).min(frames - 1), 1.0),
        Some(effect) => (0, effect.progress_at(elapsed)),
        None => (0, 1.0),
    }
}

impl Sprite {
    pub fn new(image: Texture2D, steps: u32) -> Self {
        let frames = strip_frames(image.width(), image.height(), steps);
        Self {
            image,
            frames,
            state: SpriteState::Hidden,
            effect: None,
            effect_timer: Duration::ZERO,
        }
    }

    pub fn reset(&mut self, visible: bool) {
        self.state = SpriteState::from_visible(visible);
        self.stop_effect();
    }

    pub fn start_effect(&mut self, effect: &TransitionEffect) {
        self.state = SpriteState::Visible;
        self.effect = Some(effect.clone());
        self.effect_timer = Duration::ZERO;
    }

    /// Moves the effect clock, e.g. to the time already spent past a late step.
    pub fn seek_effect(&mut self, elapsed: Duration) {
        if self.effect.is_some() {
            self.effect_timer = elapsed;
        }
    }

    pub fn stop_effect(&mut self) {
        self.effect = None;
        self.effect_timer = Duration::ZERO;
    }

    pub fn is_animating(&self) -> bool {
        self.effect.as_ref().is_some_and(|effect| !effect.is_finished(self.effect_timer))
    }

    pub fn update(&mut self, dt: Duration) {
        if self.is_animating() {
            self.effect_timer += dt;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32, screen_height: f32) {
        if !self.state.is_visible() {
            return;
        }

        let frame_width = self.image.width() as f32 / self.frames as f32;
        let frame_height = self.image.height() as f32;

        // Fit into 90% of the screen, never upscale
        let scale = (screen_width * 0.9 / frame_width)
            .min(screen_height * 0.9 / frame_height)
            .min(1.0);

        let scaled_width = frame_width * scale;
        let scaled_height = frame_height * scale;

        let (frame, alpha) = reveal_frame(self.effect.as_ref(), self.effect_timer, self.frames);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(frame as f32 * frame_width, 0.0, frame_width, frame_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE.fade(alpha),
        );
    }
}
