//! Collision detection and response for the ball
//!
//! Everything the ball can hit is an axis-aligned rectangle, so detection is a
//! single circle-vs-rect overlap test. Response is arcade-style: bricks flip
//! one velocity axis, the paddle re-aims the ball by where it was struck.
//!
//! There is no time-of-impact solve. A fast ball on a long frame can pass
//! through thin geometry between two samples.

use glam::Vec2;

use super::geometry::Rect;
use crate::clamp;

/// Steepest outgoing paddle angle from vertical (60°)
pub const MAX_PADDLE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

/// Check whether a circle overlaps a rectangle
///
/// Uses the closest point on the rectangle to the circle center. The
/// comparison is strict, so a circle exactly tangent to the rectangle does
/// not collide.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) < radius * radius
}

/// Outgoing velocity for a ball that hit a brick
///
/// The hit is classified by comparing the ball's offset from the rect center,
/// scaled by the rect's extents on each axis. A horizontal hit flips `x`,
/// anything else (ties included) flips `y`.
pub fn bounce_direction(ball_pos: Vec2, ball_vel: Vec2, rect: &Rect) -> Vec2 {
    let rel = ball_pos - rect.center();

    if rel.x.abs() / rect.width > rel.y.abs() / rect.height {
        Vec2::new(-ball_vel.x, ball_vel.y)
    } else {
        Vec2::new(ball_vel.x, -ball_vel.y)
    }
}

/// Where along the paddle the ball struck: -1 (left edge) to 1 (right edge)
#[inline]
pub fn paddle_hit_position(ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    clamp((ball_x - paddle_x) / (paddle_width / 2.0), -1.0, 1.0)
}

/// Outgoing velocity after a paddle hit
///
/// The hit position maps linearly onto [-60°, 60°] from vertical. The ball
/// always leaves upward, whatever its incoming direction, at the incoming
/// speed scaled by `speed_multiplier`.
pub fn paddle_bounce(ball_vel: Vec2, hit_position: f32, speed_multiplier: f32) -> Vec2 {
    let angle = hit_position * MAX_PADDLE_ANGLE;
    let speed = ball_vel.length() * speed_multiplier;

    Vec2::new(angle.sin() * speed, angle.cos().abs() * speed)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n, with `normal` unit length.
/// The brick grid is axis-aligned and goes through [`bounce_direction`]
/// instead; this is for surfaces at arbitrary angles.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
