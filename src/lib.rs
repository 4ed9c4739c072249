//! Solo Pong - one paddle, one ball, three walls
//!
//! Core modules:
//! - `sim`: Simulation (paddle/ball motion, collisions, frame pacing)
//! - `renderer`: wgpu rectangle rendering
//! - `platform`: Keyboard/window input sampling
//! - `settings`: Window size and initial ball velocity
//! - `game`: Window/renderer lifecycle and the frame loop

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{InitError, SettingsError};
pub use game::{Game, run};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Depth of the walls, and the width of the ball and paddle (pixels)
    pub const THICKNESS: f32 = 15.0;

    /// Paddle height (pixels)
    pub const PADDLE_HEIGHT: f32 = 128.0;
    pub const PADDLE_HALF_HEIGHT: f32 = PADDLE_HEIGHT / 2.0;
    /// Paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Minimum time between ticks (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Delta-time ceiling, prevents large jumps after a stall
    pub const MAX_DT: f32 = 0.05;

    /// Defaults used by the binary
    pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;
    pub const DEFAULT_WINDOW_HEIGHT: u32 = 768;
    pub const DEFAULT_BALL_VELOCITY: [f32; 2] = [-200.0, 235.0];
    pub const DEFAULT_WINDOW_TITLE: &str = "solo-pong";
    /// Window position on screen
    pub const WINDOW_POSITION: (i32, i32) = (100, 100);
}
