// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (enable music, add photos).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round play/pause button of the music control.
pub fn play_round(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Borderless icon button (mute, settings, delete).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: Color {
            a: if matches!(status, button::Status::Disabled) {
                opacity::OVERLAY_MEDIUM
            } else {
                opacity::OPAQUE
            },
            ..text
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Position dot below the stage; the active dot is filled with the brand color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::PRIMARY_500
        } else {
            let alpha = match status {
                button::Status::Hovered => opacity::OVERLAY_STRONG,
                _ => opacity::OVERLAY_MEDIUM,
            };
            Color {
                a: alpha,
                ..palette::GRAY_400
            }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Tab header in the management panel.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let (background, text_color) = if selected {
            (Some(Background::Color(palette::PRIMARY_500)), WHITE)
        } else if matches!(status, button::Status::Hovered) {
            (
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                })),
                text,
            )
        } else {
            (None, text)
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Dashed-looking drop zone used as the "add" buttons of the panel.
pub fn drop_zone(theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        },
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_200
        })),
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
