//! Brick Breaker - arcade ball-and-paddle simulation
//!
//! Core modules:
//! - `sim`: Frame simulation (geometry, collisions, game state, tick)
//! - `renderer`: Draw instructions, sprite atlas lookup, uniform packing
//! - `platform`: Input sampling and frame clock
//! - `settings`: Physics tuning loaded from JSON
//! - `ui`: Status line output for lives, score and outcome
//! - `game`: Frame driver tying clock, input and simulation together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Coordinates are normalized device-like units: origin at the center,
/// x and y roughly in [-1, 1], y growing upward.
pub mod consts {
    /// Play-area edges
    pub const WALL_LEFT: f32 = -1.0;
    pub const WALL_RIGHT: f32 = 1.0;
    pub const CEILING: f32 = 1.0;
    /// Ball center below this line costs a life
    pub const BOTTOM_BOUNDARY: f32 = -1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.03;
    pub const BALL_START_X: f32 = 0.0;
    pub const BALL_START_Y: f32 = -0.3;
    pub const BALL_START_VEL_X: f32 = 0.3;
    /// Vertical serve speed (always upward)
    pub const BALL_SERVE_SPEED: f32 = 0.4;
    /// Width of the uniform range the serve's horizontal speed is drawn from
    pub const BALL_SERVE_SPREAD: f32 = 0.6;

    /// Paddle defaults
    pub const PADDLE_START_Y: f32 = -0.6;
    pub const PADDLE_WIDTH: f32 = 0.3;
    pub const PADDLE_HEIGHT: f32 = 0.1;
    pub const PADDLE_MAX_SPEED: f32 = 1.5;
    /// Units/s² the paddle velocity moves toward its target
    pub const PADDLE_ACCELERATION: f32 = 8.0;
    /// Velocity retained per 60 Hz frame while no direction is held
    pub const PADDLE_FRICTION: f32 = 0.85;
    /// Below this speed a coasting paddle stops
    pub const PADDLE_STOP_THRESHOLD: f32 = 0.01;
    /// Speed-up applied to the ball on every paddle hit
    pub const PADDLE_SPEED_MULTIPLIER: f32 = 1.02;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_WIDTH: f32 = 0.15;
    pub const BRICK_HEIGHT: f32 = 0.08;
    pub const BRICK_SPACING: f32 = 0.02;
    /// Center of the top-left brick
    pub const BRICK_START_X: f32 = -0.7;
    pub const BRICK_START_Y: f32 = 0.6;

    pub const STARTING_LIVES: u32 = 3;

    /// Frames longer than this (seconds) are dropped, e.g. after a backgrounded tab
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp `value` into `[min, max]`
///
/// Unlike `f32::clamp` this never panics: with an inverted range `min` wins.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}
