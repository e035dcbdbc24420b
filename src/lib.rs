//! Bubble Pop - drifting circles on a canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particles, collisions, leveling)
//! - `render`: Drawing-surface abstraction and its backends
//! - `input`: Pointer events (hover highlight, click to fade)
//! - `hud`: On-canvas statistics overlay
//! - `config`: Data-driven tuning loaded from JSON

pub mod color;
pub mod config;
pub mod error;
pub mod hud;
pub mod input;
pub mod render;
pub mod sim;

pub use color::Color;
pub use config::SimConfig;
pub use error::{ConfigError, PlatformError};

/// Simulation constants
pub mod consts {
    /// Particles spawned per batch (initial batch and every level-up)
    pub const BATCH_SIZE: u32 = 10;
    /// Opacity lost per frame while fading
    pub const FADE_STEP: f32 = 0.01;
    /// Opacity residue treated as fully faded (absorbs float drift)
    pub const OPACITY_EPSILON: f32 = 1e-4;

    /// Smallest spawned radius
    pub const MIN_RADIUS: f32 = 20.0;
    /// Spawned radius is `MIN_RADIUS + floor(rand * RADIUS_SPREAD)`
    pub const RADIUS_SPREAD: f32 = 50.0;
    /// How far below the bottom edge new particles may appear
    pub const SPAWN_DEPTH: f32 = 100.0;

    /// Canvas height as a fraction of the window height
    pub const HEIGHT_FRACTION: f32 = 0.8;

    /// Particle border
    pub const BORDER_WIDTH: f32 = 3.0;

    /// Frames the native demo runs by default (~20 s at 60 Hz)
    pub const HEADLESS_FRAMES: u32 = 1200;
}
