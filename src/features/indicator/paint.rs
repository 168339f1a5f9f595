//! Paint configuration for indicator circles
//!
//! Paints are plain values (a color plus a style kind). They carry no drawing
//! context; the renderer binding decides how a style maps onto its primitives.

use iced::Color;

/// A packed `0xAARRGGBB` color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque white, the default for both paints
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Convert to an iced color
    pub fn to_color(self) -> Color {
        Color::from_rgba8(
            self.red(),
            self.green(),
            self.blue(),
            f32::from(self.alpha()) / 255.0,
        )
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for Color {
    fn from(argb: Argb) -> Self {
        argb.to_color()
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// How a circle is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    /// Outline only
    Stroke,
    /// Solid interior
    Fill,
}

/// Color + style pair used for one class of circles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Argb,
    pub style: PaintStyle,
}

impl Paint {
    pub const fn stroke(color: Argb) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
        }
    }

    pub const fn fill(color: Argb) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_components() {
        let c = Argb(0x80FF_4020);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0xFF);
        assert_eq!(c.green(), 0x40);
        assert_eq!(c.blue(), 0x20);
    }

    #[test]
    fn test_white_converts_to_opaque_white() {
        assert_eq!(Argb::WHITE.to_color(), Color::WHITE);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Argb(0xFF00_FF00).to_string(), "#FF00FF00");
    }
}
