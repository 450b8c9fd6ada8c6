//! Axis-aligned rectangle geometry for bricks and paddle
//!
//! Entities store a center position and a size. Collision and rendering both
//! derive the rectangle in min-corner form:
//! - x = center.x - width/2
//! - y = center.y - height/2

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// An axis-aligned rectangle in min-corner form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x (left edge)
    pub x: f32,
    /// Minimum y (bottom edge, y grows upward)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Derive the rectangle of an entity from its center and size
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            width: size.x,
            height: size.y,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Closest point on (or inside) the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp(point.x, self.x, self.x + self.width),
            clamp(point.y, self.y, self.y + self.height),
        )
    }

    /// Inclusive containment test
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Explicit Euler step: `pos + vel * dt`
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2, dt: f32) -> Vec2 {
    pos + vel * dt
}
