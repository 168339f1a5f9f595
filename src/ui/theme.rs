//! Theme for the demo host
//! Supports both dark and light modes with a small shared palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use crate::features::indicator::Argb;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Accent color - deep pink
pub const ACCENT_PINK: Color = color!(0xff1493);

/// Accent hover
pub const ACCENT_PINK_HOVER: Color = color!(0xff69b4);

// ============================================================================
// Indicator swatches
// ============================================================================

/// Fill colors the demo cycles through
pub const FILL_SWATCHES: [Argb; 4] = [
    Argb::WHITE,
    Argb(0xFFFF_1493),
    Argb(0xFF1E_90FF),
    Argb(0xFF32_CD32),
];

/// Stroke colors the demo cycles through
pub const STROKE_SWATCHES: [Argb; 3] = [Argb::WHITE, Argb(0x80FF_FFFF), Argb(0xFFB3_B3B3)];

// ============================================================================
// Styles
// ============================================================================

/// Main content background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// One page inside the pager
pub fn page_card(theme: &Theme, hue: usize) -> container::Style {
    const DARK_TINTS: [Color; 4] = [
        color!(0x2d1b3d),
        color!(0x1b2d3d),
        color!(0x1b3d2a),
        color!(0x3d2f1b),
    ];
    const LIGHT_TINTS: [Color; 4] = [
        color!(0xf3e5f5),
        color!(0xe3f2fd),
        color!(0xe8f5e9),
        color!(0xfff3e0),
    ];
    let tints = if is_dark(theme) {
        &DARK_TINTS
    } else {
        &LIGHT_TINTS
    };
    container::Style {
        background: Some(Background::Color(tints[hue % tints.len()])),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Strip holding the indicator
pub fn indicator_strip(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Primary button - filled with accent color
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT_PINK)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_PINK_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_secondary(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_secondary(theme),
            ..base
        },
        _ => base,
    }
}
