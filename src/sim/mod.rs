//! Frame simulation module
//!
//! All gameplay logic lives here:
//! - Single-threaded, one tick per displayed frame
//! - Seeded RNG only (ball re-serves)
//! - Stable iteration order (bricks by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{
    bounce_direction, circle_rect_overlap, paddle_bounce, paddle_hit_position, reflect_velocity,
};
pub use geometry::{Rect, integrate};
pub use state::{
    Ball, Brick, BrickTier, GameEvent, GameOutcome, GamePhase, GameState, Paddle, ServeSource,
    brick_layout,
};
pub use tick::{TickInput, tick};
