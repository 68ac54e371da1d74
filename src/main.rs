//! logo-rotator: shows one logo sprite at a time and rotates through them forever
//!
//! Usage: logo-rotator [SPRITE_DIR] [--duration-ms MS[,MS...]] [--dry-run MS]

use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod config;
mod constants;
mod durations;
mod effect;
mod logo;
mod rotator;
mod scheduler;
mod sprite;
mod state;
mod surface;
mod texture_loader;
mod trace;

use crate::config::Args;
use crate::constants::*;
use crate::logo::Logo;
use crate::rotator::SpriteRotator;
use crate::scheduler::RotationTimer;
use crate::surface::SpriteSurface;
use crate::texture_loader::load_sorted_sprite_paths;
use crate::trace::TraceSurface;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    args.validate()?;

    match args.dry_run {
        Some(span_ms) => dry_run(&args, Duration::from_millis(span_ms)),
        None => run_window(&args),
    }
}

fn frame_time(fps: u32) -> Duration {
    Duration::from_secs(1) / fps
}

fn start_rotation<S: SpriteSurface>(args: &Args, surface: S) -> Result<(SpriteRotator<S>, RotationTimer)> {
    let durations = args.durations_for(surface.sprite_count())?;
    log::info!(
        "Rotating {} sprites, {} steps per reveal, full cycle {:?}",
        durations.len(),
        args.steps,
        durations.cycle()
    );

    let mut rotator = SpriteRotator::new(surface, durations, args.steps)?;
    rotator.initialize();

    let mut timer = RotationTimer::new();
    timer.start(&mut rotator);
    Ok((rotator, timer))
}

// Headless: drive the rotation at the frame rate against the trace surface
fn dry_run(args: &Args, span: Duration) -> Result<()> {
    let sprite_count = args.dry_run_sprite_count()?;

    let (mut rotator, mut timer) = start_rotation(args, TraceSurface::new(sprite_count))?;
    let dt = frame_time(args.fps);
    let mut steps = 0;
    while timer.elapsed() < span {
        steps += timer.tick(dt, &mut rotator);
    }

    log::info!(
        "Simulated {:?}: {} rotation steps, {} surface calls, visible {:?} running {}",
        timer.elapsed(),
        steps,
        rotator.surface().events().len(),
        rotator.surface().visible_indices(),
        rotator
            .surface()
            .effect(rotator.current_index())
            .map_or_else(|| "no effect".to_string(), |effect| effect.to_string())
    );
    Ok(())
}

fn run_window(args: &Args) -> Result<()> {
    let paths = load_sorted_sprite_paths(&args.sprite_dir)?;
    log::info!("Found {} sprites in {}", paths.len(), args.sprite_dir.display());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Logo")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let logo = Logo::load(&mut rl, &thread, &paths, args.steps)?;
    let (mut rotator, mut timer) = start_rotation(args, logo)?;

    // --- Main Loop: runs until the window closes ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());

        // Effect clocks first; a sprite shown this frame is then placed at the timer's leftover
        rotator.surface_mut().update(dt);
        if timer.tick(dt, &mut rotator) > 0 {
            let index = rotator.current_index();
            rotator.surface_mut().seek_effect(index, timer.since_last_step());
        }

        let mut d = rl.begin_drawing(&thread);
        rotator.surface().draw(&mut d);
    }
    Ok(())
}
