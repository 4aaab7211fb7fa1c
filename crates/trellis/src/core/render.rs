//! The drawing interface widgets paint through.

use std::fmt;

use crate::geom::{Expanse, Point};

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0x0000_00FF);
    /// Opaque red.
    pub const RED: Self = Self::rgba(0xFF00_00FF);
    /// Opaque green.
    pub const GREEN: Self = Self::rgba(0x00FF_00FF);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgba(0x0000_FFFF);
    /// Opaque purple.
    pub const PURPLE: Self = Self::rgba(0x8000_80FF);
    /// Opaque dark gray.
    pub const DARK_GRAY: Self = Self::rgba(0x2222_22FF);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0x0000_0000);

    /// Build a color from a packed `0xRRGGBBAA` value.
    pub const fn rgba(v: u32) -> Self {
        Self {
            r: ((v >> 24) & 0xFF) as f32 / 255.0,
            g: ((v >> 16) & 0xFF) as f32 / 255.0,
            b: ((v >> 8) & 0xFF) as f32 / 255.0,
            a: (v & 0xFF) as f32 / 255.0,
        }
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub const fn rgb(v: u32) -> Self {
        Self::rgba((v << 8) | 0xFF)
    }

    /// Parse six hex digits, `"ff8800"`. Returns `None` on anything else.
    pub fn from_hex(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = |v: f32| (v * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            c(self.r),
            c(self.g),
            c(self.b),
            c(self.a)
        )
    }
}

/// Visual treatments a renderer can apply to a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Rounded corners.
    Rounded,
    /// Animated noise.
    Static,
    /// Diagonal stripes.
    Striped,
}

/// A drawing surface. Widgets call it once per frame in painter's order; no
/// values flow back into layout.
pub trait Renderer {
    /// Fill a rectangle.
    fn draw_quad(&mut self, position: Point, size: Expanse, color: Color, effect: Option<Effect>);

    /// Draw a run of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, color: Color);

    /// The window framebuffer changed size.
    fn resize(&mut self, _size: Expanse) {}
}
