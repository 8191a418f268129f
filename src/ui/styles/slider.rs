// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Thin volume slider with a round brand-colored thumb.
pub fn volume(_theme: &Theme, status: slider::Status) -> slider::Style {
    let radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 8.0,
        slider::Status::Active => 7.0,
    };
    let rail = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::PRIMARY_500
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(rail),
            ),
            width: 6.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 3.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius },
            background: Background::Color(palette::PRIMARY_500),
            border_width: 2.0,
            border_color: palette::WHITE,
        },
    }
}
