//! Canvas 2D backend (wasm32 only)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Surface, TextAlign, TextBaseline};
use crate::color::Color;

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        // Only fails for a negative radius
        if let Err(e) = self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f32) {
        CanvasRenderingContext2d::set_line_width(self, width as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha as f64);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        CanvasRenderingContext2d::set_text_align(self, align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        CanvasRenderingContext2d::set_text_baseline(self, baseline.as_str());
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
