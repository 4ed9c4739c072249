//! Keyboard and window input
//!
//! Window events are discrete, but the game wants continuous "is held"
//! state, so key presses and releases are folded into a set of held keys
//! and sampled once per frame.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::TickInput;

/// Keys the game reacts to
const UP_KEYS: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        if let PhysicalKey::Code(code) = key {
            match state {
                ElementState::Pressed => self.key_down(code),
                ElementState::Released => self.key_up(code),
            }
        }
    }

    pub fn key_down(&mut self, code: KeyCode) {
        self.held.insert(code);
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// The window's close button was pressed. Latches until the game exits.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Drop held keys, e.g. when the window loses focus and releases
    /// would never arrive
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Snapshot the current input for one tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            close_requested: self.close_requested,
            escape: self.is_held(KeyCode::Escape),
            up: UP_KEYS.iter().any(|k| self.is_held(*k)),
            down: DOWN_KEYS.iter().any(|k| self.is_held(*k)),
        }
    }
}
