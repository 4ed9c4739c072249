//! wgpu rendering module
//!
//! Immediate-mode: every frame clears the surface and fills the scene's
//! rectangles from scratch.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{FilledRect, Rect, scene};
