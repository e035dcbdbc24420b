//! Simulation state and spawning
//!
//! All mutable simulation data lives in [`SimState`]; the driver owns one
//! and hands it to [`tick`](super::tick) every frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use crate::color::random_palette_color;
use crate::config::SimConfig;

/// Simulation area, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size the area from the host viewport: full container width (window
    /// width when there is no usable container) and a fraction of the
    /// window height
    pub fn from_viewport(
        container_width: Option<f32>,
        window_width: f32,
        window_height: f32,
        height_fraction: f32,
    ) -> Self {
        Self {
            width: container_width.unwrap_or(window_width),
            height: window_height * height_fraction,
        }
    }
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub config: SimConfig,
    pub bounds: Bounds,
    /// Live particles. Order decides collision pairing.
    pub particles: Vec<Particle>,
    /// Particles ever spawned
    pub total_spawned: u64,
    /// Particles removed after fading out
    pub removed_count: u64,
    /// Starts at 1, only increases
    pub level: u32,
    /// Frames simulated
    pub frame: u64,
}

impl SimState {
    /// Create a state and spawn the first batch at level speed
    pub fn new(seed: u64, bounds: Bounds, config: SimConfig) -> Self {
        let mut state = Self::empty(seed, bounds, config);
        let batch = state.config.batch_size;
        state.spawn_batch(batch, state.level as f32);
        state
    }

    /// Create a state with no particles
    pub fn empty(seed: u64, bounds: Bounds, config: SimConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            bounds,
            particles: Vec::new(),
            total_spawned: 0,
            removed_count: 0,
            level: 1,
            frame: 0,
        }
    }

    /// Removals needed before the next level-up
    pub fn level_threshold(&self) -> u64 {
        self.level as u64 * self.config.batch_size as u64
    }

    /// Spawn `count` particles just below the bottom edge.
    ///
    /// Each velocity component is `(rand - 0.5) * speed`.
    pub fn spawn_batch(&mut self, count: u32, speed: f32) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let particle = self.random_particle(speed);
            self.particles.push(particle);
            self.total_spawned += 1;
        }
    }

    fn random_particle(&mut self, speed: f32) -> Particle {
        let rng = &mut self.rng;
        let x = rng.random::<f32>() * self.bounds.width;
        let y = self.bounds.height + rng.random::<f32>() * self.config.spawn_depth;
        let radius = (rng.random::<f32>() * self.config.radius_spread + self.config.min_radius).floor();
        let color = random_palette_color(rng);
        let dx = (rng.random::<f32>() - 0.5) * speed;
        let dy = (rng.random::<f32>() - 0.5) * speed;
        Particle::new(Vec2::new(x, y), Vec2::new(dx, dy), radius, color)
    }

    /// Drop particles that finished fading. Returns how many were removed.
    pub fn remove_faded(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_gone());
        let removed = before - self.particles.len();
        self.removed_count += removed as u64;
        removed
    }

    /// Share of spawned particles removed so far, in percent
    pub fn removed_percentage(&self) -> f64 {
        if self.total_spawned == 0 {
            return 0.0;
        }
        self.removed_count as f64 / self.total_spawned as f64 * 100.0
    }
}
