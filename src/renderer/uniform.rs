//! GPU-side sprite data
//!
//! Layouts match the sprite shader's uniforms: a 32-byte transform and a
//! 16-byte UV rect per sprite.

use bytemuck::{Pod, Zeroable};

use super::atlas::{SpriteAtlas, SpriteInfo};
use super::draw::DrawInstruction;

/// Per-sprite transform uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteTransform {
    pub position: [f32; 2],
    pub scale: [f32; 2],
    pub color: [f32; 3],
    /// Radians; 0 when the instruction has no rotation
    pub rotation: f32,
}

impl SpriteTransform {
    pub fn from_instruction(draw: &DrawInstruction) -> Self {
        Self {
            position: draw.center.to_array(),
            scale: draw.scale.to_array(),
            color: draw.tint,
            rotation: draw.rotation.unwrap_or(0.0),
        }
    }
}

/// Per-sprite UV rect uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteUv {
    pub offset: [f32; 2],
    pub size: [f32; 2],
}

impl SpriteUv {
    pub fn from_info(info: &SpriteInfo) -> Self {
        Self {
            offset: [info.u, info.v],
            size: [info.u_width, info.v_height],
        }
    }
}

/// Everything the shader needs for one sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub transform: SpriteTransform,
    pub uv: SpriteUv,
}

/// Resolve a draw list against the atlas into uploadable instances
///
/// Instructions whose sprite is missing from the atlas are dropped.
pub fn build_instances(draws: &[DrawInstruction], atlas: &SpriteAtlas) -> Vec<SpriteInstance> {
    draws
        .iter()
        .filter_map(|draw| {
            let info = atlas.lookup(draw.sprite)?;
            Some(SpriteInstance {
                transform: SpriteTransform::from_instruction(draw),
                uv: SpriteUv::from_info(info),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw::{SpriteKind, draw_list, tints};
    use crate::sim::GameState;
    use glam::Vec2;

    #[test]
    fn test_uniform_sizes() {
        assert_eq!(std::mem::size_of::<SpriteTransform>(), 32);
        assert_eq!(std::mem::size_of::<SpriteUv>(), 16);
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 48);
    }

    #[test]
    fn test_transform_layout() {
        let draw = DrawInstruction {
            sprite: SpriteKind::Ball,
            center: Vec2::new(0.25, -0.5),
            scale: Vec2::splat(0.06),
            rotation: None,
            tint: tints::NORMAL,
        };
        let transform = SpriteTransform::from_instruction(&draw);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&transform));
        assert_eq!(floats, &[0.25, -0.5, 0.06, 0.06, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_build_instances_for_new_game() {
        let state = GameState::new(1);
        let atlas = SpriteAtlas::breakout();
        let instances = build_instances(&draw_list(&state), &atlas);

        assert_eq!(instances.len(), 42);
        let ball = instances[41];
        assert_eq!(ball.uv.offset, [96.0 / 256.0, 0.0]);
        assert_eq!(ball.transform.position, [0.0, -0.3]);
        assert_eq!(bytemuck::cast_slice::<_, u8>(instances.as_slice()).len(), 42 * 48);
    }
}
