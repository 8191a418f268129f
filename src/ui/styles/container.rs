// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::PI;

/// Page background: a diagonal gradient across the window.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let (start, middle, end) = (colors.page_start, colors.page_middle, colors.page_end);
    move |_theme: &Theme| {
        let gradient = Linear::new(Radians(3.0 * PI / 4.0))
            .add_stop(0.0, start)
            .add_stop(0.5, middle)
            .add_stop(1.0, end);
        container::Style {
            background: Some(Background::Gradient(Gradient::Linear(gradient))),
            ..Default::default()
        }
    }
}

/// Frosted card (music control, caption card).
pub fn glass(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface_glass;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::XL.into(),
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Generic panel surface used for the management panel and the prompt card.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal content.
pub fn backdrop(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Rounded frame around the photo stage.
pub fn stage(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..weak
        })),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Circle behind the chevron hints on the stage.
pub fn chevron_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::GLASS,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Row inside the management panel.
pub fn list_row(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..weak
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
