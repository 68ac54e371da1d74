pub const RENDER_WIDTH: i32 = 640;            // Width of the render texture
pub const RENDER_HEIGHT: i32 = 360;           // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const MAX_FPS: u32 = 1000;                // Upper bound for --fps

pub const SPRITE_COUNT: usize = 8;            // Sprites in the stock logo
pub const SPRITE_DURATION_MS: u32 = 4500;     // Time each sprite stays on screen (milliseconds)
pub const TRANSITION_STEPS: u32 = 20;         // Discrete steps of the reveal effect
pub const EFFECT_PREFIX: &str = "animateLogo"; // Effect names are 1-indexed: animateLogo1..animateLogoN
pub const LOGO_DIR: &str = "logo";            // Default sprite container
