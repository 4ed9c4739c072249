//! Per-frame simulation update
//!
//! `tick` advances the game by a given delta; `advance` paces the frame
//! with the state's clock first.

use super::collision::{Wall, ball_hits_paddle, ball_hits_wall, ball_is_lost, reflect_off_wall};
use super::state::{GameEvent, GameState, PaddleDir};
use crate::consts::MAX_DT;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Window close was requested
    pub close_requested: bool,
    /// Escape is held
    pub escape: bool,
    /// Up is held
    pub up: bool,
    /// Down is held
    pub down: bool,
}

impl TickInput {
    /// Paddle direction for the held keys. Down wins over Up.
    pub fn paddle_dir(&self) -> PaddleDir {
        let mut dir = PaddleDir::Idle;
        if self.up {
            dir = PaddleDir::Up;
        }
        if self.down {
            dir = PaddleDir::Down;
        }
        dir
    }

    pub fn wants_quit(&self) -> bool {
        self.close_requested || self.escape
    }
}

/// Wait for the next frame deadline, then tick with the measured delta
pub fn advance(state: &mut GameState, input: &TickInput) {
    let dt = state.clock.wait_and_tick();
    tick(state, input, dt);
}

/// Advance the game state by `dt` seconds (capped at `MAX_DT`)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.wants_quit() {
        state.stop();
    }
    state.paddle.dir = input.paddle_dir();

    let dt = dt.clamp(0.0, MAX_DT);
    let size = state.size();

    state.paddle.step(dt, size.y);

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    for wall in Wall::ALL {
        if ball_hits_wall(ball, wall, size) {
            ball.vel = reflect_off_wall(ball.vel, wall);
            state.events.push(GameEvent::WallBounce(wall));
        }
    }

    if ball_hits_paddle(ball, &state.paddle) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::PaddleHit);
    }

    if ball_is_lost(ball) {
        state.events.push(GameEvent::BallLost);
        state.stop();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;

    fn new_state() -> GameState {
        GameState::new(1024, 768, Vec2::new(-200.0, 235.0))
    }

    #[test]
    fn test_direction_tie_break() {
        let both = TickInput {
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(both.paddle_dir(), PaddleDir::Down);
        assert_eq!(TickInput::default().paddle_dir(), PaddleDir::Idle);

        let mut state = new_state();
        tick(&mut state, &both, 0.016);
        assert_eq!(state.paddle.dir, PaddleDir::Down);
        assert!((state.paddle.pos.y - (384.0 + 300.0 * 0.016)).abs() < 1e-3);
    }

    #[test]
    fn test_quit_signals() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default(), 0.016);
        assert!(state.is_running());

        let escape = TickInput {
            escape: true,
            ..Default::default()
        };
        tick(&mut state, &escape, 0.016);
        assert!(!state.is_running());

        let mut state = new_state();
        let close = TickInput {
            close_requested: true,
            ..Default::default()
        };
        tick(&mut state, &close, 0.016);
        assert!(!state.is_running());

        // Releasing the key does not resume the game
        tick(&mut state, &TickInput::default(), 0.016);
        assert!(!state.is_running());
    }

    #[test]
    fn test_delta_is_capped() {
        let mut a = new_state();
        let mut b = new_state();
        tick(&mut a, &TickInput::default(), 0.05);
        tick(&mut b, &TickInput::default(), 2.0);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert!((a.ball.pos - Vec2::new(502.0, 395.75)).length() < 1e-3);
    }

    #[test]
    fn test_paddle_bounce_scenario() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(15.0, 384.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.016);

        assert!(state.ball.pos.x < 15.0);
        assert_eq!(state.ball.vel, Vec2::new(200.0, 0.0));
        assert_eq!(state.events, vec![GameEvent::PaddleHit]);
        assert!(state.is_running());
    }

    #[test]
    fn test_single_bounce_per_approach() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(15.0, 384.0);
        state.ball.vel = Vec2::new(-20.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(state.ball.vel.x, 20.0);

        // Still inside the overlap zone, but moving right now
        tick(&mut state, &TickInput::default(), 0.016);
        assert!(state.ball.pos.x <= state.paddle.pos.x + THICKNESS / 2.0);
        assert_eq!(state.ball.vel.x, 20.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_top_wall_scenario() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(500.0, 10.0);
        state.ball.vel = Vec2::new(0.0, -50.0);
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ball.vel.y, 50.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce(Wall::Top)]);
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(1020.0, 760.0);
        state.ball.vel = Vec2::new(100.0, 100.0);
        tick(&mut state, &TickInput::default(), 0.016);
        assert_eq!(state.ball.vel, Vec2::new(-100.0, -100.0));
        assert_eq!(
            state.events,
            vec![
                GameEvent::WallBounce(Wall::Right),
                GameEvent::WallBounce(Wall::Bottom)
            ]
        );
    }

    #[test]
    fn test_missed_paddle_ends_game() {
        let mut state = new_state();
        state.paddle.pos.y = 100.0;
        state.ball.pos = Vec2::new(2.0, 600.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);
        tick(&mut state, &TickInput::default(), 0.016);
        assert!(!state.is_running());
        assert_eq!(state.events, vec![GameEvent::BallLost]);
    }

    #[test]
    fn test_advance_uses_clock() {
        let mut state = new_state();
        let before = state.clock.last_tick();
        advance(&mut state, &TickInput::default());
        assert!(state.clock.last_tick() > before);
        assert!(state.ball.pos.x < 512.0);
    }
}
