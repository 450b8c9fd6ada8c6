//! Keyboard and cursor input
//!
//! The host shell pushes raw key events into an [`InputState`]; the game
//! polls it once per frame through [`InputProvider`] and turns it into a
//! [`TickInput`].

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::TickInput;

/// Keys the game reacts to, named after `KeyboardEvent.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    KeyA,
    KeyD,
    Space,
    Escape,
}

impl KeyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyD => "KeyD",
            KeyCode::Space => "Space",
            KeyCode::Escape => "Escape",
        }
    }

    /// Parse a `KeyboardEvent.code` string; unrelated keys give `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(KeyCode::ArrowLeft),
            "ArrowRight" => Some(KeyCode::ArrowRight),
            "KeyA" => Some(KeyCode::KeyA),
            "KeyD" => Some(KeyCode::KeyD),
            "Space" => Some(KeyCode::Space),
            "Escape" => Some(KeyCode::Escape),
            _ => None,
        }
    }
}

/// Read-only view of input, polled once per frame
pub trait InputProvider {
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Cursor position in normalized device coordinates
    fn cursor(&self) -> Vec2;
}

/// Held keys and last cursor position, fed by the host's event handlers
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press by its `KeyboardEvent.code`
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = KeyCode::from_code(code) {
            self.keys.insert(key);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = KeyCode::from_code(code) {
            self.keys.remove(&key);
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Set the cursor from pixel coordinates within a `width` x `height` surface
    ///
    /// Screen y grows downward; NDC y grows upward.
    pub fn set_cursor_pixels(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.cursor = Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0);
    }
}

impl InputProvider for InputState {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

/// Turns polled key state into per-frame tick input
///
/// Movement is level-triggered. Pause fires once per press of Space or
/// Escape, not on every frame the key is held.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    pause_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, input: &impl InputProvider) -> TickInput {
        let pause_down =
            input.is_key_pressed(KeyCode::Space) || input.is_key_pressed(KeyCode::Escape);
        let pause = pause_down && !self.pause_held;
        self.pause_held = pause_down;

        TickInput {
            left: input.is_key_pressed(KeyCode::ArrowLeft) || input.is_key_pressed(KeyCode::KeyA),
            right: input.is_key_pressed(KeyCode::ArrowRight)
                || input.is_key_pressed(KeyCode::KeyD),
            pause,
        }
    }
}
