//! On-canvas statistics overlay

use crate::color::Color;
use crate::render::{Surface, TextAlign, TextBaseline};
use crate::sim::SimState;

pub const HUD_FONT: &str = "20px 'Press Start 2P', cursive";
/// Left margin and first line offset
pub const HUD_ORIGIN: (f32, f32) = (10.0, 10.0);
pub const HUD_LINE_HEIGHT: f32 = 30.0;

/// Numbers shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub removed: u64,
    /// Removed share of all spawned particles, in percent
    pub percentage: f64,
    pub level: u32,
    /// Measured by the driver; shown only when set
    pub fps: Option<u32>,
}

impl HudStats {
    pub fn from_state(state: &SimState) -> Self {
        Self {
            removed: state.removed_count,
            percentage: state.removed_percentage(),
            level: state.level,
            fps: None,
        }
    }

    pub fn with_fps(mut self, fps: Option<u32>) -> Self {
        self.fps = fps;
        self
    }

    /// Removed share of all spawned particles, two decimals, e.g. `25.00`
    pub fn percentage_text(&self) -> String {
        format!("{:.2}", self.percentage)
    }

    /// HUD lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Removed: {}", self.removed),
            format!("Percentage: {}%", self.percentage_text()),
            format!("Level: {}", self.level),
        ];
        if let Some(fps) = self.fps {
            lines.push(format!("FPS: {}", fps));
        }
        lines
    }
}

/// Draw the HUD in the top-left corner
pub fn draw_hud<S: Surface + ?Sized>(surface: &mut S, stats: &HudStats) {
    surface.set_fill_color(Color::WHITE);
    surface.set_text_align(TextAlign::Left);
    surface.set_text_baseline(TextBaseline::Top);
    surface.set_font(HUD_FONT);

    let (x, y) = HUD_ORIGIN;
    for (i, line) in stats.lines().iter().enumerate() {
        surface.fill_text(line, x, y + i as f32 * HUD_LINE_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::render::{DrawCommand, RecordingSurface};
    use crate::sim::Bounds;

    fn stats(removed: u64, percentage: f64, level: u32) -> HudStats {
        HudStats {
            removed,
            percentage,
            level,
            fps: None,
        }
    }

    fn state_stats(removed: u64, total_spawned: u64) -> HudStats {
        let mut state = SimState::empty(1, Bounds::new(800.0, 600.0), SimConfig::default());
        state.removed_count = removed;
        state.total_spawned = total_spawned;
        HudStats::from_state(&state)
    }

    #[test]
    fn test_percentage_two_decimals() {
        assert_eq!(state_stats(5, 20).percentage_text(), "25.00");
        assert_eq!(state_stats(1, 3).percentage_text(), "33.33");
        assert_eq!(state_stats(0, 10).percentage_text(), "0.00");
        assert_eq!(state_stats(0, 0).percentage_text(), "0.00");
        assert_eq!(stats(3, 12.5, 1).percentage_text(), "12.50");
    }

    #[test]
    fn test_lines() {
        let lines = stats(5, 25.0, 2).lines();
        assert_eq!(lines, vec!["Removed: 5", "Percentage: 25.00%", "Level: 2"]);

        let lines = stats(5, 25.0, 2).with_fps(Some(60)).lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "FPS: 60");
    }

    #[test]
    fn test_draw_hud_layout() {
        let mut surface = RecordingSurface::new();
        draw_hud(&mut surface, &stats(5, 25.0, 2));

        assert!(surface.commands.contains(&DrawCommand::FillColor(Color::WHITE)));
        assert!(surface.commands.contains(&DrawCommand::TextAlign(TextAlign::Left)));
        assert!(surface.commands.contains(&DrawCommand::TextBaseline(TextBaseline::Top)));
        assert!(surface.commands.contains(&DrawCommand::Font(HUD_FONT.to_string())));

        let positions: Vec<(f32, f32)> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![(10.0, 10.0), (10.0, 40.0), (10.0, 70.0)]);
    }
}
