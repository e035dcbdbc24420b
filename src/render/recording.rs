//! Surface that records every call
//!
//! Used by tests to check draw order and state restoration, and by the
//! native demo to report how much was drawn.

use glam::Vec2;

use super::{Surface, TextAlign, TextBaseline};
use crate::color::Color;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    Circle { center: Vec2, radius: f32 },
    Fill,
    Stroke,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    GlobalAlpha(f32),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillText { text: String, x: f32, y: f32 },
}

/// Command log plus the tracked global alpha
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// Current global alpha, as a real context would hold it
    pub global_alpha: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            global_alpha: 1.0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of circles drawn
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha;
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
