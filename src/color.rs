//! Particle colors

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Shown while the pointer hovers a particle
    pub const HIGHLIGHT: Color = Color::rgb(0xFF, 0x00, 0x00);

    /// CSS hex form, e.g. `#FF5733`
    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colors new particles are drawn from
pub const PALETTE: [Color; 10] = [
    Color::rgb(0xFF, 0x57, 0x33),
    Color::rgb(0x33, 0xFF, 0x57),
    Color::rgb(0x33, 0x57, 0xFF),
    Color::rgb(0xF3, 0x9C, 0x12),
    Color::rgb(0x9B, 0x59, 0xB6),
    Color::rgb(0xE7, 0x4C, 0x3C),
    Color::rgb(0x1A, 0xBC, 0x9C),
    Color::rgb(0x29, 0x80, 0xB9),
    Color::rgb(0x8E, 0x44, 0xAD),
    Color::rgb(0xD3, 0x54, 0x00),
];

/// Pick a palette color uniformly
pub fn random_palette_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}
