//! The particle entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    Wall, circle_circle_collision, point_in_circle, reflect_velocity, wall_normal,
};
use super::state::Bounds;
use crate::color::Color;
use crate::consts::{BORDER_WIDTH, OPACITY_EPSILON};
use crate::render::Surface;

/// A drifting circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant after creation
    pub radius: f32,
    /// Color currently drawn (highlight while hovered)
    pub color: Color,
    pub original_color: Color,
    /// 1.0 when spawned, removed from the simulation at 0.0
    pub opacity: f32,
    pub fading: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            original_color: color,
            opacity: 1.0,
            fading: false,
        }
    }

    /// Fully faded and ready for removal
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.opacity <= 0.0
    }

    /// Current speed (velocity magnitude)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Draw a filled, black-bordered circle at the current opacity.
    /// Global alpha is reset to 1 afterwards.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        surface.set_fill_color(self.color);
        surface.set_stroke_color(Color::BLACK);
        surface.set_line_width(BORDER_WIDTH);
        surface.set_global_alpha(self.opacity);
        surface.circle(self.pos, self.radius);
        surface.fill();
        surface.stroke();
        surface.set_global_alpha(1.0);
    }

    /// Advance one frame: fade, integrate, then keep inside the bounds.
    ///
    /// Left, right and bottom walls reflect. Leaving through the top moves
    /// the particle to just below the bottom edge instead.
    pub fn advance(&mut self, bounds: &Bounds, fade_step: f32) {
        if self.fading {
            self.opacity -= fade_step;
            if self.opacity <= OPACITY_EPSILON {
                self.opacity = 0.0;
                self.fading = false;
            }
        }

        self.pos += self.vel;

        if self.pos.x + self.radius > bounds.width {
            self.pos.x = bounds.width - self.radius;
            self.bounce(Wall::Right);
        }
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.bounce(Wall::Left);
        }
        if self.pos.y + self.radius > bounds.height {
            self.pos.y = bounds.height - self.radius;
            self.bounce(Wall::Bottom);
        }
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = bounds.height + self.radius;
        }
    }

    fn bounce(&mut self, wall: Wall) {
        self.vel = reflect_velocity(self.vel, wall_normal(wall));
    }

    /// Centers closer than the sum of the radii
    pub fn intersects(&self, other: &Particle) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Push two overlapping particles apart.
    ///
    /// Each keeps its own speed; `self` heads away from `other` along the
    /// line between centers and `other` heads the opposite way. Positions
    /// are then corrected by half the overlap each. Returns whether the
    /// particles were touching.
    pub fn resolve_collision(&mut self, other: &mut Particle) -> bool {
        let result = circle_circle_collision(self.pos, self.radius, other.pos, other.radius);
        if !result.hit {
            return false;
        }

        let speed = self.speed();
        let other_speed = other.speed();
        self.vel = result.normal * speed;
        other.vel = -result.normal * other_speed;

        let offset = result.normal * result.penetration / 2.0;
        self.pos += offset;
        other.pos -= offset;
        true
    }

    /// Point lies strictly inside the circle
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point_in_circle(point, self.pos, self.radius)
    }

    /// Highlight while the pointer is over the particle, restore otherwise.
    /// Returns whether it is highlighted.
    pub fn highlight_if_hovered(&mut self, pointer: Vec2) -> bool {
        if self.contains_point(pointer) {
            self.color = Color::HIGHLIGHT;
            true
        } else {
            self.color = self.original_color;
            false
        }
    }

    /// Start fading out. Returns false if already fading.
    pub fn begin_fade(&mut self) -> bool {
        if self.fading {
            return false;
        }
        self.fading = true;
        true
    }
}
