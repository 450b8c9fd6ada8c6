//! Rendering boundary
//!
//! The crate stops short of the GPU: it produces draw instructions from the
//! game state, resolves them against the sprite atlas table and packs them
//! into shader uniform layouts for whatever backend uploads them.

pub mod atlas;
pub mod draw;
pub mod uniform;

pub use atlas::{SpriteAtlas, SpriteInfo};
pub use draw::{DrawInstruction, SpriteKind, draw_list};
pub use uniform::{SpriteInstance, SpriteTransform, SpriteUv, build_instances};
