//! Deterministic simulation module
//!
//! All particle logic lives here. This module must stay deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - Drawing only through the `Surface` trait

pub mod collision;
pub mod particle;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Wall, circle_circle_collision, reflect_velocity};
pub use particle::Particle;
pub use state::{Bounds, SimState};
pub use tick::{TickReport, tick, tick_with_fps};
