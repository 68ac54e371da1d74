use std::path::PathBuf;
use std::time::Duration;
use anyhow::Result;
use raylib::prelude::*;
use crate::effect::TransitionEffect;
use crate::sprite::Sprite;
use crate::surface::SpriteSurface;
use crate::texture_loader::load_texture_with_exif_rotation;

/// raylib binding for the sprite set.
pub struct Logo {
    sprites: Vec<Sprite>,
}

impl Logo {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &[PathBuf], steps: u32) -> Result<Self> {
        let mut sprites = Vec::with_capacity(paths.len());
        // A missing sprite would shift every later index, so any failure aborts
        for path in paths {
            let texture = load_texture_with_exif_rotation(rl, thread, path)?;
            log::debug!("loaded sprite {} from {}", sprites.len(), path.display());
            sprites.push(Sprite::new(texture, steps));
        }
        Ok(Self { sprites })
    }

    pub fn update(&mut self, dt: Duration) {
        for sprite in self.sprites.iter_mut() {
            sprite.update(dt);
        }
    }

    /// Puts a sprite's effect clock at `elapsed`, for a step that fired late in a frame.
    pub fn seek_effect(&mut self, index: usize, elapsed: Duration) {
        self.sprites[index].seek_effect(elapsed);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::BLACK);
        for sprite in self.sprites.iter() {
            sprite.draw(d, sw, sh);
        }
    }
}

impl SpriteSurface for Logo {
    fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    fn reset(&mut self, index: usize, visible: bool) {
        self.sprites[index].reset(visible);
    }

    fn show(&mut self, index: usize, effect: &TransitionEffect) {
        self.sprites[index].start_effect(effect);
    }

    fn hide(&mut self, index: usize) {
        self.sprites[index].reset(false);
    }
}
