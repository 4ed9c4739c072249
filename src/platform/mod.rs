//! Platform abstraction layer
//!
//! Turns winit window/keyboard events into per-frame simulation input.

pub mod input;

pub use input::InputState;
