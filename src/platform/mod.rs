//! Platform abstraction layer
//!
//! Handles the boundary with whatever shell hosts the game:
//! - Input events (keyboard state, cursor position)
//! - Time/frame deltas

pub mod input;
pub mod time;

pub use input::{InputProvider, InputSampler, InputState, KeyCode};
pub use time::FrameClock;
