//! Theme configuration
//!
//! Dark slate palette with an indigo accent, matching the backend's web UI.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

pub const BACKGROUND: Color = Color::from_rgb(0.06, 0.09, 0.16);
pub const SURFACE: Color = Color::from_rgb(0.12, 0.16, 0.23);
pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.17, 0.22, 0.31);
pub const BORDER: Color = Color::from_rgb(0.2, 0.25, 0.33);
pub const PRIMARY: Color = Color::from_rgb(0.39, 0.4, 0.95);
pub const PRIMARY_HOVER: Color = Color::from_rgb(0.31, 0.27, 0.9);
pub const TEXT: Color = Color::from_rgb(0.95, 0.96, 0.98);
pub const TEXT_MUTED: Color = Color::from_rgb(0.58, 0.64, 0.72);
pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.42, 0.48, 0.56);

pub fn root(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..Default::default()
    }
}

pub fn search_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn search_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: TEXT_MUTED,
        placeholder: TEXT_PLACEHOLDER,
        value: TEXT,
        selection: PRIMARY,
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_HIGHLIGHT)),
        border: Border::default().rounded(12),
        ..Default::default()
    }
}

pub fn download_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY_HOVER,
        _ => PRIMARY,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT,
        border: Border::default().rounded(8),
        shadow: Shadow::default(),
    }
}
