//! Light/dark color palette.
//!
//! Pure data consumed by the styling layer. The two variants mirror the
//! original design: white page with gray-900 text in light mode, gray-900
//! page with white text in dark mode, blue-500 accent in both. Dark mode
//! swaps colors only; panel content is untouched.

use iced::{Color, Theme};

/// Semantic colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Cards and the navigation bar.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// De-emphasized text (inactive nav items, hints, placeholders).
    pub muted: Color,
    /// Interactive highlight (active nav item, primary buttons).
    pub accent: Color,
    /// Accent on hover.
    pub accent_hover: Color,
    /// Accent while pressed.
    pub accent_pressed: Color,
    /// Text on accent backgrounds.
    pub on_accent: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            surface: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            text: Color::from_rgb8(0x11, 0x18, 0x27),
            muted: Color::from_rgb8(0x4B, 0x55, 0x63),
            accent: Color::from_rgb8(0x3B, 0x82, 0xF6),
            accent_hover: Color::from_rgb8(0x25, 0x63, 0xEB),
            accent_pressed: Color::from_rgb8(0x1D, 0x4E, 0xD8),
            on_accent: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x11, 0x18, 0x27),
            surface: Color::from_rgb8(0x1F, 0x29, 0x37),
            text: Color::WHITE,
            muted: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            accent: Color::from_rgb8(0x3B, 0x82, 0xF6),
            accent_hover: Color::from_rgb8(0x60, 0xA5, 0xFA),
            accent_pressed: Color::from_rgb8(0x25, 0x63, 0xEB),
            on_accent: Color::WHITE,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Maps the dark-mode flag to the built-in iced theme, which supplies the
/// default text and widget colors the palette does not override.
pub fn iced_theme(dark_mode: bool) -> Theme {
    if dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}
