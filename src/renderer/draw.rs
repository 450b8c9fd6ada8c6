//! Draw instructions for the sprite renderer
//!
//! The simulation never touches a graphics API. Each frame the renderer asks
//! for a list of `(sprite, center, scale, rotation, tint)` instructions built
//! from a read-only `GameState`.

use glam::Vec2;

use crate::sim::{BrickTier, GameState};

/// Which sprite an instruction draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Paddle,
    Ball,
    Brick(BrickTier),
}

impl SpriteKind {
    /// Atlas sprite name
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKind::Paddle => "paddle",
            SpriteKind::Ball => "ball",
            SpriteKind::Brick(tier) => tier.sprite_name(),
        }
    }
}

/// Tints (rgb)
pub mod tints {
    pub const NORMAL: [f32; 3] = [1.0, 1.0, 1.0];
    /// Entities frozen while paused or after the game ends
    pub const DIMMED: [f32; 3] = [0.5, 0.5, 0.5];
}

/// One sprite to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub sprite: SpriteKind,
    /// Center position in game coordinates
    pub center: Vec2,
    /// Full width and height in game coordinates
    pub scale: Vec2,
    /// Radians, counter-clockwise
    pub rotation: Option<f32>,
    pub tint: [f32; 3],
}

/// Build this frame's draw list: live bricks in id order, then paddle, then ball
///
/// Destroyed bricks are not drawn.
pub fn draw_list(state: &GameState) -> Vec<DrawInstruction> {
    let frozen_tint = if state.is_paused() || state.is_game_over() {
        tints::DIMMED
    } else {
        tints::NORMAL
    };

    let mut list = Vec::with_capacity(state.bricks_remaining() + 2);

    list.extend(
        state
            .bricks
            .iter()
            .filter(|b| !b.destroyed)
            .map(|b| DrawInstruction {
                sprite: SpriteKind::Brick(b.tier),
                center: b.pos,
                scale: Vec2::new(b.width, b.height),
                rotation: None,
                tint: frozen_tint,
            }),
    );

    list.push(DrawInstruction {
        sprite: SpriteKind::Paddle,
        center: state.paddle.pos,
        scale: Vec2::new(state.paddle.width, state.paddle.height),
        rotation: None,
        tint: tints::NORMAL,
    });

    let diameter = state.ball.radius * 2.0;
    list.push(DrawInstruction {
        sprite: SpriteKind::Ball,
        center: state.ball.pos,
        scale: Vec2::splat(diameter),
        rotation: None,
        tint: frozen_tint,
    });

    list
}
