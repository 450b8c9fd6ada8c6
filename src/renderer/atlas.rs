//! Sprite atlas layout
//!
//! The atlas texture is generated elsewhere; this is the name → rectangle
//! table the renderer uses to find each sprite in it.

use std::collections::HashMap;

use super::draw::SpriteKind;

/// Atlas texture dimensions in pixels
pub const ATLAS_WIDTH: u32 = 256;
pub const ATLAS_HEIGHT: u32 = 128;

/// A sprite's location in the atlas, in pixels and in UV space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    pub name: &'static str,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub u: f32,
    pub v: f32,
    pub u_width: f32,
    pub v_height: f32,
}

impl SpriteInfo {
    fn new(name: &'static str, x: u32, y: u32, width: u32, height: u32) -> Self {
        let (aw, ah) = (ATLAS_WIDTH as f32, ATLAS_HEIGHT as f32);
        Self {
            name,
            x,
            y,
            width,
            height,
            u: x as f32 / aw,
            v: y as f32 / ah,
            u_width: width as f32 / aw,
            v_height: height as f32 / ah,
        }
    }
}

/// Named sprite lookup
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    pub width: u32,
    pub height: u32,
    sprites: HashMap<&'static str, SpriteInfo>,
}

impl Default for SpriteAtlas {
    fn default() -> Self {
        Self::breakout()
    }
}

impl SpriteAtlas {
    /// The game's atlas: paddle, ball and plain brick on the first row,
    /// tier-colored bricks on the second
    pub fn breakout() -> Self {
        const BRICK_W: u32 = 64;
        const BRICK_H: u32 = 32;

        let entries = [
            SpriteInfo::new("paddle", 0, 0, 96, 32),
            SpriteInfo::new("ball", 96, 0, 32, 32),
            SpriteInfo::new("brick", 128, 0, BRICK_W, BRICK_H),
            SpriteInfo::new("brick_blue", 0, 32, BRICK_W, BRICK_H),
            SpriteInfo::new("brick_green", BRICK_W, 32, BRICK_W, BRICK_H),
            SpriteInfo::new("brick_yellow", 2 * BRICK_W, 32, BRICK_W, BRICK_H),
        ];

        Self {
            width: ATLAS_WIDTH,
            height: ATLAS_HEIGHT,
            sprites: entries.into_iter().map(|s| (s.name, s)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SpriteInfo> {
        self.sprites.get(name)
    }

    /// Look up the sprite for a draw instruction
    ///
    /// A missing sprite is logged and skipped; it never stops the frame.
    pub fn lookup(&self, kind: SpriteKind) -> Option<&SpriteInfo> {
        let info = self.get(kind.name());
        if info.is_none() {
            log::warn!("Sprite '{}' not found in atlas", kind.name());
        }
        info
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
