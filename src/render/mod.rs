//! Drawing surface abstraction
//!
//! The simulation draws through [`Surface`], a small slice of the Canvas 2D
//! API. The browser context implements it on wasm32; headless runs use
//! [`NullSurface`] and tests use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::color::Color;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// A 2D drawing target
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    /// Append a full circle to the current path
    fn circle(&mut self, center: Vec2, radius: f32);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_global_alpha(&mut self, alpha: f32);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn begin_path(&mut self) {}
    fn circle(&mut self, _center: Vec2, _radius: f32) {}
    fn fill(&mut self) {}
    fn stroke(&mut self) {}
    fn set_fill_color(&mut self, _color: Color) {}
    fn set_stroke_color(&mut self, _color: Color) {}
    fn set_line_width(&mut self, _width: f32) {}
    fn set_global_alpha(&mut self, _alpha: f32) {}
    fn set_font(&mut self, _font: &str) {}
    fn set_text_align(&mut self, _align: TextAlign) {}
    fn set_text_baseline(&mut self, _baseline: TextBaseline) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}
}
