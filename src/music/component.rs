// SPDX-License-Identifier: MPL-2.0
//! Music control card and the enable-music prompt.

use super::state::{Message, State};
use crate::app::config::VOLUME_STEP;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, slider, tooltip, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Play/pause, mute and volume in a frosted card.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let playback = state.playback();

    let (play_icon, play_label) = if playback.is_playing {
        (icons::pause(), ctx.i18n.tr("music-pause"))
    } else {
        (icons::play(), ctx.i18n.tr("music-play"))
    };
    let play_button = button(
        Container::new(icons::tinted(
            icons::sized(play_icon, sizing::ICON_MD),
            iced::Color::WHITE,
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::PLAY_BUTTON))
    .height(Length::Fixed(sizing::PLAY_BUTTON))
    .padding(0)
    .style(styles::button::play_round)
    .on_press(Message::TogglePlay);

    let (speaker_icon, speaker_label) = if playback.shows_muted() {
        (icons::volume_mute(), ctx.i18n.tr("music-unmute"))
    } else {
        (icons::volume(), ctx.i18n.tr("music-mute"))
    };
    let mute_button = button(icons::themed(icons::sized(speaker_icon, sizing::ICON_MD)))
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .on_press(Message::ToggleMute);

    let volume_slider = slider(0.0..=1.0, playback.volume.value(), Message::VolumeChanged)
        .step(VOLUME_STEP)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
        .style(styles::slider::volume);

    let percent = format!("{:.0}%", playback.volume.value() * 100.0);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(tooltip(play_button, Text::new(play_label), tooltip::Position::Bottom).gap(4))
        .push(tooltip(mute_button, Text::new(speaker_label), tooltip::Position::Bottom).gap(4))
        .push(
            tooltip(
                volume_slider,
                Text::new(ctx.i18n.tr("music-volume")),
                tooltip::Position::Bottom,
            )
            .gap(4),
        )
        .push(
            Text::new(percent)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    Container::new(row)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::glass(ctx.colors))
        .into()
}

/// Modal asking the user to enable music after autoplay was refused.
///
/// Returns `None` while the prompt is hidden. Pressing the backdrop counts
/// as accepting, like the enable button.
pub fn prompt<'a>(state: &State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.show_prompt() {
        return None;
    }

    let note = Container::new(icons::tinted(
        icons::sized(icons::music_note(), sizing::ICON_XL),
        ctx.colors.brand_primary,
    ))
    .padding(spacing::SM);

    let enable = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(
                icons::sized(icons::play(), sizing::ICON_SM),
                iced::Color::WHITE,
            ))
            .push(Text::new(ctx.i18n.tr("music-prompt-button")).size(typography::BODY)),
    )
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::PromptAccepted);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(note)
            .push(Text::new(ctx.i18n.tr("music-prompt-title")).size(typography::TITLE_MD))
            .push(
                Text::new(ctx.i18n.tr("music-prompt-text"))
                    .size(typography::BODY_SM)
                    .align_x(Horizontal::Center)
                    .color(ctx.colors.text_secondary),
            )
            .push(enable),
    )
    .width(Length::Fixed(sizing::PROMPT_WIDTH))
    .padding(spacing::XL)
    .style(styles::container::panel);

    // The card swallows its own presses; only the button and the
    // backdrop accept.
    let card = mouse_area(card)
        .on_press(Message::PromptCardPressed)
        .interaction(iced::mouse::Interaction::Idle);

    let backdrop = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop(ctx.colors));

    Some(mouse_area(backdrop).on_press(Message::PromptAccepted).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{Config, MusicConfig};
    use crate::error::AudioError;
    use crate::music::player::{PlayOrigin, PlayerEvent};

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), None, &Config::default())
    }

    #[test]
    fn prompt_hidden_until_autoplay_fails() {
        let i18n = i18n();
        let colors = ColorScheme::light();
        let mut state = State::new(&MusicConfig::default(), None);
        assert!(prompt(&state, ViewContext { i18n: &i18n, colors: &colors }).is_none());

        let _ = state.handle(Message::AutoplayDue);
        let _ = state.handle(Message::Player(PlayerEvent::PlayResolved {
            origin: PlayOrigin::Autoplay,
            result: Err(AudioError::AutoplayBlocked),
        }));
        assert!(prompt(&state, ViewContext { i18n: &i18n, colors: &colors }).is_some());
    }
}
