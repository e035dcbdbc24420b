//! Per-frame simulation step
//!
//! Core loop that advances the simulation deterministically and draws it.

use super::state::SimState;
use crate::hud::{HudStats, draw_hud};
use crate::render::Surface;

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Faded particles dropped at the start of the frame
    pub removed: usize,
    /// Particle pairs that were touching and got pushed apart
    pub collisions: usize,
    /// New level, if this frame leveled up
    pub level_up: Option<u32>,
    /// Particles spawned by a level-up
    pub spawned: u32,
}

/// Advance the simulation one frame and draw it, HUD included
pub fn tick<S: Surface + ?Sized>(state: &mut SimState, surface: &mut S) -> TickReport {
    tick_with_fps(state, surface, None)
}

/// Same as [`tick`], with a measured frame rate for the HUD
pub fn tick_with_fps<S: Surface + ?Sized>(
    state: &mut SimState,
    surface: &mut S,
    fps: Option<u32>,
) -> TickReport {
    let mut report = TickReport::default();
    let bounds = state.bounds;

    surface.clear_rect(0.0, 0.0, bounds.width, bounds.height);

    report.removed = state.remove_faded();

    // Particle i is drawn and advanced before its pairs (i, j > i) resolve,
    // so j sees every earlier particle's push this frame.
    let fade_step = state.config.fade_step;
    for i in 0..state.particles.len() {
        let (head, tail) = state.particles.split_at_mut(i + 1);
        let particle = &mut head[i];
        particle.draw(surface);
        particle.advance(&bounds, fade_step);
        for other in tail.iter_mut() {
            if particle.resolve_collision(other) {
                report.collisions += 1;
            }
        }
    }

    if state.removed_count >= state.level_threshold() {
        state.level += 1;
        let batch = state.config.batch_size;
        state.spawn_batch(batch, state.level as f32);
        report.level_up = Some(state.level);
        report.spawned = batch;
        log::info!(
            "Level {} reached ({} removed), spawned {} particles",
            state.level,
            state.removed_count,
            batch
        );
    }

    let show_fps = if state.config.show_fps { fps } else { None };
    draw_hud(surface, &HudStats::from_state(state).with_fps(show_fps));

    state.frame += 1;
    report
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::color::Color;
    use crate::config::SimConfig;
    use crate::render::{DrawCommand, NullSurface, RecordingSurface};
    use crate::sim::{Bounds, Particle};

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn still(x: f32, y: f32, radius: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, radius, Color::WHITE)
    }

    #[test]
    fn test_frame_order() {
        let mut state = SimState::new(12345, bounds(), SimConfig::default());
        let mut surface = RecordingSurface::new();
        tick(&mut state, &mut surface);

        assert!(matches!(
            surface.commands.first(),
            Some(DrawCommand::ClearRect { w, h, .. }) if *w == 800.0 && *h == 600.0
        ));
        assert_eq!(surface.circle_count(), 10);
        assert_eq!(surface.texts(), vec!["Removed: 0", "Percentage: 0.00%", "Level: 1"]);
        assert_eq!(surface.global_alpha, 1.0);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_faded_particles_are_removed() {
        let mut state = SimState::new(1, bounds(), SimConfig::default());
        state.particles[0].opacity = 0.0;
        state.particles[3].opacity = 0.0;

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.removed, 2);
        assert_eq!(state.removed_count, 2);
        assert_eq!(state.particles.len(), 8);
        assert_eq!(report.level_up, None);
    }

    #[test]
    fn test_clicked_particle_removed_after_fade() {
        let mut state = SimState::empty(1, bounds(), SimConfig::default());
        state.particles.push(still(400.0, 300.0, 30.0));
        state.total_spawned = 1;
        state.particles[0].begin_fade();

        // Reaches 0 on frame 100, dropped at the start of frame 101
        for _ in 0..100 {
            tick(&mut state, &mut NullSurface);
        }
        assert_eq!(state.particles.len(), 1);
        assert_eq!(state.particles[0].opacity, 0.0);

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.removed, 1);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_level_up_spawns_scaled_batch() {
        let mut state = SimState::new(42, bounds(), SimConfig::default());
        for p in &mut state.particles {
            p.opacity = 0.0;
        }

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.removed, 10);
        assert_eq!(report.level_up, Some(2));
        assert_eq!(report.spawned, 10);
        assert_eq!(state.level, 2);
        assert_eq!(state.particles.len(), 10);
        assert_eq!(state.total_spawned, 20);

        // Same RNG draws as spawning at speed 2 straight after the initial batch
        let mut reference = SimState::new(42, bounds(), SimConfig::default());
        reference.particles.clear();
        reference.spawn_batch(10, 2.0);
        for (p, r) in state.particles.iter().zip(&reference.particles) {
            assert_eq!(p.vel, r.vel);
            assert_eq!(p.pos, r.pos);
            assert!(p.vel.x.abs() <= 1.0 && p.vel.y.abs() <= 1.0);
        }

        // Level-1 speed keeps every component within 0.5
        let fastest = state
            .particles
            .iter()
            .map(|p| p.vel.x.abs().max(p.vel.y.abs()))
            .fold(0.0f32, f32::max);
        assert!(fastest > 0.5, "fastest component {} not scaled", fastest);
    }

    #[test]
    fn test_at_most_one_level_up_per_frame() {
        let mut state = SimState::new(42, bounds(), SimConfig::default());
        state.removed_count = 35;

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.level_up, Some(2));
        assert_eq!(state.level, 2);

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.level_up, Some(3));
        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.level_up, Some(4));
        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.level_up, None);
        assert_eq!(state.level, 4);
    }

    #[test]
    fn test_each_pair_resolved_once() {
        let mut state = SimState::empty(1, bounds(), SimConfig::default());
        state.particles.push(still(400.0, 300.0, 30.0));
        state.particles.push(still(440.0, 300.0, 30.0));
        state.particles.push(still(100.0, 300.0, 30.0));

        let report = tick(&mut state, &mut NullSurface);
        assert_eq!(report.collisions, 1);
        assert!(state.particles[0].pos.distance(state.particles[1].pos) >= 60.0 - 1e-3);
    }

    #[test]
    fn test_hud_reports_percentage() {
        let mut state = SimState::empty(1, bounds(), SimConfig::default());
        state.total_spawned = 20;
        state.removed_count = 5;
        state.level = 1;

        let mut surface = RecordingSurface::new();
        tick(&mut state, &mut surface);
        assert_eq!(surface.texts()[1], "Percentage: 25.00%");
    }

    #[test]
    fn test_fps_line_follows_config() {
        let mut state = SimState::new(3, bounds(), SimConfig::default());
        let mut surface = RecordingSurface::new();
        tick_with_fps(&mut state, &mut surface, Some(59));
        assert_eq!(surface.texts().len(), 3);

        let config = SimConfig {
            show_fps: true,
            ..Default::default()
        };
        let mut state = SimState::new(3, bounds(), config);
        let mut surface = RecordingSurface::new();
        tick_with_fps(&mut state, &mut surface, Some(59));
        assert_eq!(surface.texts().last(), Some(&"FPS: 59"));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SimState::new(99999, bounds(), SimConfig::default());
        let mut state2 = SimState::new(99999, bounds(), SimConfig::default());

        for frame in 0..500 {
            if frame % 50 == 0 {
                state1.particles[0].begin_fade();
                state2.particles[0].begin_fade();
            }
            let r1 = tick(&mut state1, &mut NullSurface);
            let r2 = tick(&mut state2, &mut NullSurface);
            assert_eq!(r1, r2);
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }

    #[test]
    fn test_counters_are_monotonic() {
        let mut state = SimState::new(2024, bounds(), SimConfig::default());
        let mut last = (state.removed_count, state.level, state.total_spawned);
        for frame in 0..2000 {
            if frame % 7 == 0 {
                if let Some(p) = state.particles.iter_mut().find(|p| !p.fading) {
                    p.begin_fade();
                }
            }
            tick(&mut state, &mut NullSurface);
            assert!(state.removed_count >= last.0);
            assert!(state.level >= last.1);
            assert!(state.total_spawned >= last.2);
            for p in &state.particles {
                assert!((0.0..=1.0).contains(&p.opacity));
            }
            last = (state.removed_count, state.level, state.total_spawned);
        }
        assert!(state.level > 1);
    }
}
