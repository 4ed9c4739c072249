//! Shape generation for 2D primitives
//!
//! The scene is a handful of filled, axis-aligned rectangles in window
//! pixels (origin top-left, y down). They are tessellated into triangles
//! and mapped to normalized device coordinates for upload.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{PADDLE_HEIGHT, THICKNESS};
use crate::sim::GameState;

/// Integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on `center`, truncated to pixels
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(
            (center.x - w / 2.0) as i32,
            (center.y - h / 2.0) as i32,
            w as i32,
            h as i32,
        )
    }
}

/// A rectangle to fill and its colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// Top, right and bottom walls for a window of `width`×`height`
pub fn walls(width: u32, height: u32) -> [Rect; 3] {
    let (w, h) = (width as i32, height as i32);
    let t = THICKNESS as i32;
    [
        Rect::new(0, 0, w, t),
        Rect::new(w - t, 0, t, h),
        Rect::new(0, h - t, w, t),
    ]
}

/// Everything drawn in one frame, in draw order
pub fn scene(state: &GameState) -> Vec<FilledRect> {
    let mut rects: Vec<FilledRect> = walls(state.width(), state.height())
        .into_iter()
        .map(|rect| FilledRect {
            rect,
            color: colors::WALL,
        })
        .collect();

    rects.push(FilledRect {
        rect: Rect::centered(state.ball.pos, THICKNESS, THICKNESS),
        color: colors::BALL,
    });
    rects.push(FilledRect {
        rect: Rect::centered(state.paddle.pos, THICKNESS, PADDLE_HEIGHT),
        color: colors::PADDLE,
    });

    rects
}

/// Map a window pixel to normalized device coordinates
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, width: u32, height: u32) -> (f32, f32) {
    (
        x / width as f32 * 2.0 - 1.0,
        1.0 - y / height as f32 * 2.0,
    )
}

/// Two triangles covering `rect`, in NDC
pub fn rect(rect: Rect, color: [f32; 4], width: u32, height: u32) -> [Vertex; 6] {
    let (x0, y0) = pixel_to_ndc(rect.x as f32, rect.y as f32, width, height);
    let (x1, y1) = pixel_to_ndc(
        (rect.x + rect.w) as f32,
        (rect.y + rect.h) as f32,
        width,
        height,
    );

    [
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Tessellate a list of filled rectangles
pub fn tessellate(rects: &[FilledRect], width: u32, height: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rects.len() * 6);
    for r in rects {
        vertices.extend_from_slice(&rect(r.rect, r.color, width, height));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls() {
        let [top, right, bottom] = walls(1024, 768);
        assert_eq!(top, Rect::new(0, 0, 1024, 15));
        assert_eq!(right, Rect::new(1009, 0, 15, 768));
        assert_eq!(bottom, Rect::new(0, 753, 1024, 15));
    }

    #[test]
    fn test_scene_layout() {
        let mut state = GameState::new(1024, 768, Vec2::new(-200.0, 235.0));
        state.ball.pos = Vec2::new(100.9, 200.2);

        let rects = scene(&state);
        assert_eq!(rects.len(), 5);
        // Ball: (100.9 - 7.5, 200.2 - 7.5) truncated
        assert_eq!(rects[3].rect, Rect::new(93, 192, 15, 15));
        // Paddle at (15, 384)
        assert_eq!(rects[4].rect, Rect::new(7, 320, 15, 128));
        assert!(rects.iter().all(|r| r.color == colors::WALL));
    }

    #[test]
    fn test_truncation_toward_zero() {
        // Ball partly past the left edge
        let r = Rect::centered(Vec2::new(3.0, 50.0), THICKNESS, THICKNESS);
        assert_eq!(r.x, -4);
    }

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(0.0, 0.0, 1024, 768), (-1.0, 1.0));
        assert_eq!(pixel_to_ndc(1024.0, 768.0, 1024, 768), (1.0, -1.0));
        assert_eq!(pixel_to_ndc(512.0, 384.0, 1024, 768), (0.0, 0.0));
    }

    #[test]
    fn test_tessellate() {
        let rects = [FilledRect {
            rect: Rect::new(0, 0, 512, 384),
            color: colors::BALL,
        }];
        let vertices = tessellate(&rects, 1024, 768);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [-1.0, 1.0]);
        assert_eq!(vertices[5].position, [0.0, 0.0]);
    }
}
