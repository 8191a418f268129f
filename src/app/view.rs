// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls vertically: header, music control, gallery, footer.
//! The settings button, management panel (over a closing backdrop), the
//! enable-music prompt and toasts are layered on top.

use super::Message;
use crate::gallery::component::{self as gallery, ViewContext as GalleryViewContext};
use crate::gallery::PhotoLibrary;
use crate::i18n::fluent::I18n;
use crate::music::component::{self as music_view, ViewContext as MusicViewContext};
use crate::music::state as music;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::manager::{self, ViewContext as ManagerViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, scrollable, Column, Container, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub library: &'a PhotoLibrary,
    pub gallery: &'a gallery::State,
    pub music: &'a music::State,
    pub manager: Option<&'a manager::State>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery
        .view(GalleryViewContext {
            library: ctx.library,
            i18n: ctx.i18n,
            colors: ctx.colors,
        })
        .map(Message::Gallery);

    let music_view = music_view::view(
        ctx.music,
        MusicViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    )
    .map(Message::Music);

    let page = Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(header(ctx.i18n, ctx.colors))
        .push(music_view)
        .push(gallery_view)
        .push(footer(ctx.i18n, ctx.colors));

    let background = Container::new(scrollable(page).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background);

    if let Some(state) = ctx.manager {
        if state.is_open() {
            // Blocks the page underneath; a press outside the panel closes it.
            let backdrop = Container::new(Space::new().width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop(ctx.colors));
            layers = layers.push(
                mouse_area(backdrop).on_press(Message::Manager(manager::Message::Close)),
            );
        }
        layers = layers.push(
            Container::new(manager::toggle_button(state, ctx.i18n).map(Message::Manager))
                .padding(spacing::LG),
        );
        if state.is_open() {
            let panel = manager::view(
                state,
                ManagerViewContext {
                    i18n: ctx.i18n,
                    colors: ctx.colors,
                    library: ctx.library,
                    track: ctx.music.track().map(|path| path.as_path()),
                },
            )
            .map(Message::Manager);
            layers = layers.push(
                Container::new(panel)
                    .height(Length::Fill)
                    .padding(iced::Padding {
                        top: spacing::LG + sizing::PLAY_BUTTON + spacing::SM,
                        right: 0.0,
                        bottom: spacing::LG,
                        left: spacing::LG,
                    })
                    .align_x(Horizontal::Left),
            );
        }
    }

    if let Some(prompt) = music_view::prompt(
        ctx.music,
        MusicViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    ) {
        layers = layers.push(prompt.map(Message::Music));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn header<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let intro = Container::new(
        Text::new(i18n.tr("page-intro"))
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center)
            .width(Length::Fill),
    )
    .padding(spacing::LG)
    .max_width(sizing::STAGE_MAX_WIDTH * 0.75)
    .style(styles::container::glass(colors));

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("👶").size(typography::EMOJI))
        .push(
            Text::new(i18n.tr("page-title"))
                .size(typography::DISPLAY)
                .align_x(Horizontal::Center)
                .color(colors.text_primary),
        )
        .push(
            Text::new(i18n.tr("page-subtitle"))
                .size(typography::TITLE_MD)
                .color(colors.text_secondary),
        )
        .push(intro)
        .into()
}

fn footer<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("page-footer"))
            .size(typography::CAPTION)
            .color(colors.text_tertiary),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .into()
}
