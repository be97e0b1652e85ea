//! # UI Styling Module
//!
//! Centralized styling utilities for consistent UI appearance across components.
//! All styles are parameterized by the current [`Palette`] so that toggling
//! dark mode changes colors and nothing else.

use crate::ui::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Vector};

/// Style for navigation bar buttons based on whether their tab is active
pub fn nav_button_style(
    is_active: bool,
    palette: Palette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme: &iced::Theme, status: button::Status| {
        let accent_border = Border {
            color: palette.accent,
            width: 2.0,
            radius: 2.0.into(),
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: None,
                text_color: palette.accent,
                border: if is_active {
                    accent_border
                } else {
                    Border::default()
                },
                ..Default::default()
            },
            _ => {
                if is_active {
                    // Active tab: accent text with an accent outline
                    button::Style {
                        background: None,
                        text_color: palette.accent,
                        border: accent_border,
                        ..Default::default()
                    }
                } else {
                    // Inactive tab: muted text, no chrome
                    button::Style {
                        background: None,
                        text_color: palette.muted,
                        border: Border::default(),
                        ..Default::default()
                    }
                }
            }
        }
    }
}

/// Style for primary action buttons ("Explore My Work", "Send Message")
pub fn primary_button_style(
    palette: Palette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme: &iced::Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette.accent_hover,
            button::Status::Pressed => palette.accent_pressed,
            button::Status::Disabled => palette.muted,
            button::Status::Active => palette.accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.on_accent,
            border: Border {
                color: background,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Style for the dark-mode toggle: transparent, muted text
pub fn toggle_button_style(
    palette: Palette,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme: &iced::Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette.text,
            _ => palette.muted,
        },
        border: Border::default(),
        ..Default::default()
    }
}

/// Style for the fixed navigation bar container
pub fn navbar_style(palette: Palette) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme: &iced::Theme| container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        shadow: Shadow {
            color: Color {
                a: 0.25,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Style for content cards (project tiles, the profile-picture placeholder)
pub fn card_style(palette: Palette) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme: &iced::Theme| container::Style {
        background: Some(Background::Color(palette.surface)),
        text_color: Some(palette.text),
        border: Border {
            color: palette.surface,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Style for contact form text inputs
pub fn text_input_style(
    palette: Palette,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style {
    move |_theme: &iced::Theme, status: text_input::Status| {
        let border_color = match status {
            text_input::Status::Focused => palette.accent,
            _ => palette.muted,
        };

        text_input::Style {
            background: Background::Color(palette.background),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 4.0.into(),
            },
            icon: palette.muted,
            placeholder: palette.muted,
            value: palette.text,
            selection: Color {
                a: 0.4,
                ..palette.accent
            },
        }
    }
}
