//! Game state and core simulation types
//!
//! A single `GameState` is built at startup and mutated once per frame.

use glam::Vec2;

use super::collision::Wall;
use super::timestep::FrameClock;
use crate::consts::*;

/// Paddle movement intent derived from held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDir {
    Up,
    #[default]
    Idle,
    Down,
}

impl PaddleDir {
    /// Signed direction (-1 up, 0 idle, +1 down); screen y grows downward
    pub fn signum(self) -> f32 {
        match self {
            PaddleDir::Up => -1.0,
            PaddleDir::Idle => 0.0,
            PaddleDir::Down => 1.0,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce(Wall),
    PaddleHit,
    /// Ball left through the paddle side, ends the game
    BallLost,
}

/// The ball, as a point with velocity (pixels, pixels/s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// The player's paddle. `pos` is the paddle's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub dir: PaddleDir,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            dir: PaddleDir::Idle,
        }
    }

    /// Vertical range the paddle centre may occupy in a window of `height`
    pub fn y_bounds(height: f32) -> (f32, f32) {
        (
            PADDLE_HALF_HEIGHT + THICKNESS,
            height - PADDLE_HALF_HEIGHT - THICKNESS,
        )
    }

    /// Move by `dir * speed * dt` and clamp into the window.
    ///
    /// Clamps with max-then-min so a window shorter than the paddle band
    /// pins the paddle instead of panicking.
    pub fn step(&mut self, dt: f32, height: f32) {
        if self.dir == PaddleDir::Idle {
            return;
        }
        let (lo, hi) = Self::y_bounds(height);
        self.pos.y += self.dir.signum() * PADDLE_SPEED * dt;
        self.pos.y = self.pos.y.max(lo).min(hi);
    }

    pub fn top(&self) -> f32 {
        self.pos.y - PADDLE_HALF_HEIGHT
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + PADDLE_HALF_HEIGHT
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    running: bool,
    width: u32,
    height: u32,
    /// Frame pacing (holds the last tick time)
    pub clock: FrameClock,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Ball starts at the window centre, paddle at the left edge
    pub fn new(width: u32, height: u32, ball_vel: Vec2) -> Self {
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        Self {
            running: true,
            width,
            height,
            clock: FrameClock::new(),
            ball: Ball::new(center, ball_vel),
            paddle: Paddle::new(Vec2::new(THICKNESS, center.y)),
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// End the game. There is no way back to running.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Game over");
        }
        self.running = false;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1024, 768, Vec2::new(-200.0, 235.0));
        assert!(state.is_running());
        assert_eq!(state.ball.pos, Vec2::new(512.0, 384.0));
        assert_eq!(state.ball.vel, Vec2::new(-200.0, 235.0));
        assert_eq!(state.paddle.pos, Vec2::new(15.0, 384.0));
        assert_eq!(state.paddle.dir, PaddleDir::Idle);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_stop_is_final() {
        let mut state = GameState::new(1024, 768, Vec2::ZERO);
        state.stop();
        assert!(!state.is_running());
        state.stop();
        assert!(!state.is_running());
    }

    #[test]
    fn test_paddle_clamps() {
        let mut paddle = Paddle::new(Vec2::new(15.0, 80.0));
        paddle.dir = PaddleDir::Up;
        paddle.step(0.05, 768.0);
        assert_eq!(paddle.pos.y, 79.0);

        paddle.pos.y = 680.0;
        paddle.dir = PaddleDir::Down;
        paddle.step(0.05, 768.0);
        assert_eq!(paddle.pos.y, 768.0 - 79.0);
    }

    #[test]
    fn test_idle_paddle_is_not_clamped() {
        // Clamping only happens while moving
        let mut paddle = Paddle::new(Vec2::new(15.0, 10.0));
        paddle.step(0.05, 768.0);
        assert_eq!(paddle.pos.y, 10.0);
    }

    #[test]
    fn test_tiny_window_does_not_panic() {
        let mut paddle = Paddle::new(Vec2::new(15.0, 50.0));
        paddle.dir = PaddleDir::Down;
        paddle.step(0.016, 100.0);
        let (_, hi) = Paddle::y_bounds(100.0);
        assert_eq!(paddle.pos.y, hi);
    }
}
