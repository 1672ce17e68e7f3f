use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const CHOOSE_ACTIVE: Color = Color::from_rgb(0.231, 0.510, 0.965);
const CHOOSE_HOVERED: Color = Color::from_rgb(0.145, 0.388, 0.922);
const CHOOSE_PRESSED: Color = Color::from_rgb(0.114, 0.306, 0.847);

const DOWNLOAD_ACTIVE: Color = Color::from_rgb(0.133, 0.773, 0.369);
const DOWNLOAD_HOVERED: Color = Color::from_rgb(0.086, 0.639, 0.290);
const DOWNLOAD_PRESSED: Color = Color::from_rgb(0.082, 0.502, 0.239);

const DISABLED_BACKGROUND: Color = Color::from_rgb(0.612, 0.639, 0.686);

const DROP_ZONE_IDLE_BORDER: Color = Color::from_rgb(0.820, 0.835, 0.859);
const DROP_ZONE_ACTIVE_BORDER: Color = Color::from_rgb(0.231, 0.510, 0.965);
const DROP_ZONE_ACTIVE_BACKGROUND: Color = Color::from_rgba(0.231, 0.510, 0.965, 0.08);

const PILL_RADIUS: f32 = 24.0;
const PANEL_RADIUS: f32 = 12.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.08, 0.11),
                text: Color::from_rgb(0.93, 0.94, 0.96),
                primary: CHOOSE_ACTIVE,
                success: DOWNLOAD_ACTIVE,
                danger: Color::from_rgb(0.94, 0.27, 0.27),
                warning: Color::from_rgb(0.96, 0.62, 0.04),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.94, 0.96, 1.0),
                text: Color::from_rgb(0.22, 0.25, 0.32),
                primary: CHOOSE_ACTIVE,
                success: DOWNLOAD_ACTIVE,
                danger: Color::from_rgb(0.86, 0.15, 0.15),
                warning: Color::from_rgb(0.85, 0.47, 0.02),
            },
        ),
    }
}

fn pill_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: PILL_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn filled_button_style(
    status: button::Status,
    active: Color,
    hovered: Color,
    pressed: Color,
) -> button::Style {
    match status {
        button::Status::Active => pill_button(active, Color::WHITE, false),
        button::Status::Hovered => pill_button(hovered, Color::WHITE, false),
        button::Status::Pressed => pill_button(pressed, Color::WHITE, true),
        button::Status::Disabled => pill_button(DISABLED_BACKGROUND, Color::WHITE, false),
    }
}

pub fn choose_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(status, CHOOSE_ACTIVE, CHOOSE_HOVERED, CHOOSE_PRESSED)
}

pub fn download_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(status, DOWNLOAD_ACTIVE, DOWNLOAD_HOVERED, DOWNLOAD_PRESSED)
}

pub fn secondary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let muted = Color {
        a: 0.7,
        ..palette.text
    };

    let (text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette.text, palette.text),
        button::Status::Active | button::Status::Disabled => (muted, muted),
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: PILL_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn drop_zone_style(drag_active: bool) -> container::Style {
    let (border_color, background) = if drag_active {
        (
            DROP_ZONE_ACTIVE_BORDER,
            Some(Background::Color(DROP_ZONE_ACTIVE_BACKGROUND)),
        )
    } else {
        (DROP_ZONE_IDLE_BORDER, None)
    };

    container::Style {
        background,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: PANEL_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.04,
            ..palette.text
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.15,
                ..palette.text
            },
            width: 1.0,
            radius: PANEL_RADIUS.into(),
        },
        ..Default::default()
    }
}
