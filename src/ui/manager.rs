// SPDX-License-Identifier: MPL-2.0
//! Content management panel.
//!
//! Lets the user append photos, edit captions, delete entries and swap the
//! background track for the current run. The panel never mutates the
//! library itself: it reports [`Event`]s and the application applies them.
//! Nothing chosen here survives a restart.

use crate::gallery::{PhotoId, PhotoLibrary};
use crate::i18n::fluent::I18n;
use crate::media::{self, AUDIO_EXTENSIONS, IMAGE_EXTENSIONS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{Element, Length, Task};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Photos,
    Music,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    tab: Tab,
    dialog_open: bool,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    SelectTab(Tab),
    PickPhotos,
    PhotosPicked(Vec<PathBuf>),
    PickMusic,
    MusicPicked(Option<PathBuf>),
    CaptionChanged(PhotoId, String),
    RemovePhoto(PhotoId),
    RemoveMusic,
}

/// Changes the application applies to its content.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    PhotosAdded(Vec<PathBuf>),
    PhotoRemoved(PhotoId),
    CaptionChanged(PhotoId, String),
    MusicReplaced(PathBuf),
    MusicRemoved,
}

pub fn update(state: &mut State, message: Message) -> (Event, Task<Message>) {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            (Event::None, Task::none())
        }
        Message::Close => {
            state.open = false;
            (Event::None, Task::none())
        }
        Message::SelectTab(tab) => {
            state.tab = tab;
            (Event::None, Task::none())
        }
        Message::PickPhotos => {
            if state.dialog_open {
                return (Event::None, Task::none());
            }
            state.dialog_open = true;
            (Event::None, pick_photos())
        }
        Message::PhotosPicked(paths) => {
            state.dialog_open = false;
            let paths: Vec<PathBuf> = paths
                .into_iter()
                .filter(|path| media::is_supported_image(path))
                .collect();
            if paths.is_empty() {
                (Event::None, Task::none())
            } else {
                (Event::PhotosAdded(paths), Task::none())
            }
        }
        Message::PickMusic => {
            if state.dialog_open {
                return (Event::None, Task::none());
            }
            state.dialog_open = true;
            (Event::None, pick_music())
        }
        Message::MusicPicked(path) => {
            state.dialog_open = false;
            match path {
                Some(path) if media::is_supported_audio(&path) => {
                    (Event::MusicReplaced(path), Task::none())
                }
                Some(path) => {
                    tracing::warn!(path = %path.display(), "ignoring unsupported audio file");
                    (Event::None, Task::none())
                }
                None => (Event::None, Task::none()),
            }
        }
        Message::CaptionChanged(id, caption) => (Event::CaptionChanged(id, caption), Task::none()),
        Message::RemovePhoto(id) => (Event::PhotoRemoved(id), Task::none()),
        Message::RemoveMusic => (Event::MusicRemoved, Task::none()),
    }
}

fn pick_photos() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| handles.iter().map(|h| h.path().to_path_buf()).collect())
                .unwrap_or_default()
        },
        Message::PhotosPicked,
    )
}

fn pick_music() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Audio", AUDIO_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::MusicPicked,
    )
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub library: &'a PhotoLibrary,
    pub track: Option<&'a Path>,
}

/// Round settings button that opens the panel.
pub fn toggle_button<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let icon = if state.open { icons::cross() } else { icons::cog() };
    iced::widget::tooltip(
        button(
            Container::new(icons::themed(icons::sized(icon, sizing::ICON_MD)))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::PLAY_BUTTON))
        .height(Length::Fixed(sizing::PLAY_BUTTON))
        .padding(0)
        .style(styles::button::ghost)
        .on_press(Message::Toggle),
        Text::new(i18n.tr("manager-settings")),
        iced::widget::tooltip::Position::Right,
    )
    .gap(4)
    .into()
}

/// The side panel. Callers only render it while [`State::is_open`].
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::themed(icons::sized(icons::cog(), sizing::ICON_MD)))
        .push(Text::new(ctx.i18n.tr("manager-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
                .padding(spacing::XXS)
                .style(styles::button::ghost)
                .on_press(Message::Close),
        );

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab_button(Tab::Photos, state.tab, ctx.i18n.tr("manager-tab-photos")))
        .push(tab_button(Tab::Music, state.tab, ctx.i18n.tr("manager-tab-music")));

    let body = match state.tab {
        Tab::Photos => photos_tab(state, &ctx),
        Tab::Music => music_tab(state, &ctx),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(tabs)
        .push(scrollable(body).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn tab_button<'a>(tab: Tab, selected: Tab, label: String) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::tab(tab == selected))
        .on_press(Message::SelectTab(tab))
        .into()
}

fn upload_zone<'a>(
    title: String,
    hint: Option<String>,
    message: Option<Message>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(icons::themed(icons::sized(icons::upload(), sizing::ICON_LG)))
        .push(Text::new(title).size(typography::BODY));
    if let Some(hint) = hint {
        column = column.push(Text::new(hint).size(typography::CAPTION));
    }

    button(Container::new(column).width(Length::Fill).align_x(Horizontal::Center))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::button::drop_zone)
        .on_press_maybe(message)
        .into()
}

fn photos_tab<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pick = (!state.dialog_open).then_some(Message::PickPhotos);
    let mut column = Column::new().spacing(spacing::SM).push(upload_zone(
        ctx.i18n.tr("manager-photos-upload"),
        Some(ctx.i18n.tr("manager-photos-upload-hint")),
        pick,
    ));

    if ctx.library.is_empty() {
        return column
            .push(
                Container::new(
                    Text::new(ctx.i18n.tr("manager-photos-empty"))
                        .size(typography::BODY_SM)
                        .color(ctx.colors.text_secondary),
                )
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center),
            )
            .into();
    }

    let placeholder = ctx.i18n.tr("manager-caption-placeholder");
    let tertiary = ctx.colors.text_tertiary;
    for record in ctx.library.iter() {
        let id = record.id;
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icons::themed(icons::sized(icons::image(), sizing::ICON_MD)))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(
                        text_input(&placeholder, &record.caption)
                            .on_input(move |caption| Message::CaptionChanged(id, caption))
                            .size(typography::BODY_SM)
                            .padding(spacing::XS),
                    )
                    .push(
                        Text::new(format!("#{id}"))
                            .size(typography::CAPTION)
                            .color(tertiary),
                    ),
            )
            .push(
                button(icons::tinted(
                    icons::sized(icons::trash(), sizing::ICON_SM),
                    ctx.colors.error,
                ))
                .padding(spacing::XS)
                .style(styles::button::ghost)
                .on_press(Message::RemovePhoto(id)),
            );
        column = column.push(
            Container::new(row)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::list_row),
        );
    }

    column.into()
}

fn music_tab<'a>(state: &State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pick = (!state.dialog_open).then_some(Message::PickMusic);
    let mut column = Column::new().spacing(spacing::SM).push(upload_zone(
        ctx.i18n.tr("manager-music-upload"),
        Some(ctx.i18n.tr("manager-music-upload-hint")),
        pick,
    ));

    let secondary = ctx.colors.text_secondary;
    match ctx.track {
        Some(track) => {
            let name = track
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| track.display().to_string());
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::tinted(
                    icons::sized(icons::music_note(), sizing::ICON_MD),
                    ctx.colors.brand_primary,
                ))
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .width(Length::Fill)
                        .push(Text::new(ctx.i18n.tr("manager-music-title")).size(typography::BODY))
                        .push(Text::new(name).size(typography::CAPTION).color(secondary))
                        .push(
                            Text::new(ctx.i18n.tr("manager-music-loaded"))
                                .size(typography::CAPTION)
                                .color(ctx.colors.success),
                        ),
                )
                .push(
                    button(icons::tinted(
                        icons::sized(icons::trash(), sizing::ICON_SM),
                        ctx.colors.error,
                    ))
                    .padding(spacing::XS)
                    .style(styles::button::ghost)
                    .on_press(Message::RemoveMusic),
                );
            column = column
                .push(
                    Container::new(row)
                        .padding(spacing::SM)
                        .width(Length::Fill)
                        .style(styles::container::list_row),
                )
                .push(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(icons::tinted(icons::sized(icons::info(), sizing::ICON_SM), secondary))
                        .push(
                            Text::new(ctx.i18n.tr("manager-music-session-note"))
                                .size(typography::CAPTION)
                                .color(secondary),
                        ),
                );
        }
        None => {
            column = column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(Horizontal::Center)
                        .push(
                            Text::new(ctx.i18n.tr("manager-music-empty"))
                                .size(typography::BODY_SM)
                                .color(secondary),
                        )
                        .push(
                            Text::new(ctx.i18n.tr("manager-music-empty-hint"))
                                .size(typography::CAPTION)
                                .color(ctx.colors.text_tertiary),
                        ),
                )
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center),
            );
        }
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut state = State::default();
        let _ = update(&mut state, Message::Toggle);
        assert!(state.is_open());
        let _ = update(&mut state, Message::Toggle);
        assert!(!state.is_open());
        let _ = update(&mut state, Message::Toggle);
        let _ = update(&mut state, Message::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn picked_photos_keep_only_images() {
        let mut state = State::default();
        let (event, _) = update(
            &mut state,
            Message::PhotosPicked(vec![
                PathBuf::from("/tmp/a.jpg"),
                PathBuf::from("/tmp/notes.txt"),
                PathBuf::from("/tmp/b.PNG"),
            ]),
        );
        assert_eq!(
            event,
            Event::PhotosAdded(vec![PathBuf::from("/tmp/a.jpg"), PathBuf::from("/tmp/b.PNG")])
        );
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::PhotosPicked(Vec::new())).0, Event::None);
        assert_eq!(update(&mut state, Message::MusicPicked(None)).0, Event::None);
    }

    #[test]
    fn picked_music_replaces_track() {
        let mut state = State::default();
        let (event, _) = update(&mut state, Message::MusicPicked(Some(PathBuf::from("/tmp/song.mp3"))));
        assert_eq!(event, Event::MusicReplaced(PathBuf::from("/tmp/song.mp3")));

        let (event, _) = update(&mut state, Message::MusicPicked(Some(PathBuf::from("/tmp/x.pdf"))));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn row_actions_become_events() {
        let mut state = State::default();
        let id = PhotoId::new(4);
        assert_eq!(
            update(&mut state, Message::CaptionChanged(id, "Море".into())).0,
            Event::CaptionChanged(id, "Море".into())
        );
        assert_eq!(update(&mut state, Message::RemovePhoto(id)).0, Event::PhotoRemoved(id));
        assert_eq!(update(&mut state, Message::RemoveMusic).0, Event::MusicRemoved);
    }

    #[test]
    fn tab_selection_sticks() {
        let mut state = State::default();
        assert_eq!(state.tab(), Tab::Photos);
        let _ = update(&mut state, Message::SelectTab(Tab::Music));
        assert_eq!(state.tab(), Tab::Music);
    }
}
