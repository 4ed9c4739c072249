//! Simulation module
//!
//! All gameplay logic lives here. Apart from frame pacing in `timestep`,
//! this module is pure arithmetic over `GameState`:
//! - No rendering or platform dependencies
//! - No failure paths

pub mod collision;
pub mod state;
pub mod tick;
pub mod timestep;

pub use collision::{Wall, ball_hits_paddle, ball_hits_wall, ball_is_lost};
pub use state::{Ball, GameEvent, GameState, Paddle, PaddleDir};
pub use tick::{TickInput, advance, tick};
pub use timestep::{FrameClock, clamp_delta};
