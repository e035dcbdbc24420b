//! Collision detection and response for circles
//!
//! Circles bounce off the left, right and bottom walls and off each other.
//! Circle/circle response is deliberately simple: each circle keeps its own
//! speed and is sent along the line between the two centers.

use glam::Vec2;

/// Result of a circle/circle overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circles overlap
    pub hit: bool,
    /// Unit vector from the second center toward the first
    pub normal: Vec2,
    /// Overlap depth along `normal` (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check two circles for overlap
///
/// Touching circles (distance equal to the radius sum) do not collide.
/// Coincident centers give `atan2(0, 0) = 0`, so the normal is +x.
pub fn circle_circle_collision(
    pos_a: Vec2,
    radius_a: f32,
    pos_b: Vec2,
    radius_b: f32,
) -> CollisionResult {
    let delta = pos_a - pos_b;
    let distance = delta.length();
    let radii = radius_a + radius_b;

    if distance >= radii {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        normal: Vec2::from_angle(delta.y.atan2(delta.x)),
        penetration: radii - distance,
    }
}

/// Point-in-circle test (strict)
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    center.distance(point) < radius
}

/// Wall a circle was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Bottom,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Inward-facing normal of a wall (screen coordinates, y grows downward)
#[inline]
pub fn wall_normal(wall: Wall) -> Vec2 {
    match wall {
        Wall::Left => Vec2::X,
        Wall::Right => Vec2::NEG_X,
        Wall::Bottom => Vec2::NEG_Y,
    }
}
