//! Collision detection for the ball against walls and paddle
//!
//! The ball is treated as a point. Every check requires the ball to be
//! moving toward the surface, so a bounce cannot fire twice while the ball
//! is still inside the overlap region.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::THICKNESS;

/// The three static walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Right,
    Bottom,
}

impl Wall {
    pub const ALL: [Wall; 3] = [Wall::Top, Wall::Right, Wall::Bottom];
}

/// Check whether the ball should bounce off `wall` in a window of `size`
pub fn ball_hits_wall(ball: &Ball, wall: Wall, size: Vec2) -> bool {
    match wall {
        Wall::Top => ball.pos.y <= THICKNESS && ball.vel.y < 0.0,
        Wall::Right => ball.pos.x >= size.x - THICKNESS && ball.vel.x > 0.0,
        Wall::Bottom => ball.pos.y >= size.y - THICKNESS && ball.vel.y > 0.0,
    }
}

/// Check whether the ball should bounce off the paddle face.
///
/// The vertical test is strict: a ball exactly level with the paddle's
/// top or bottom edge misses.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.vel.x < 0.0
        && ball.pos.x <= paddle.pos.x + THICKNESS / 2.0
        && ball.pos.y > paddle.top()
        && ball.pos.y < paddle.bottom()
}

/// Ball has left through the left edge
pub fn ball_is_lost(ball: &Ball) -> bool {
    ball.pos.x < 0.0
}

/// Flip the velocity component normal to `wall`
pub fn reflect_off_wall(vel: Vec2, wall: Wall) -> Vec2 {
    match wall {
        Wall::Top | Wall::Bottom => Vec2::new(vel.x, -vel.y),
        Wall::Right => Vec2::new(-vel.x, vel.y),
    }
}
