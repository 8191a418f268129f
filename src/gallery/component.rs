// SPDX-License-Identifier: MPL-2.0
//! Gallery component: the photo stage, its navigation affordances and the
//! position indicator.
//!
//! The photo list itself belongs to the application and is passed in on
//! every call, so the component only owns view state (position, gesture,
//! transition and decoded pixels).

use super::cache::{self, PhotoCache};
use super::carousel::CarouselState;
use super::catalog::{PhotoId, PhotoRecord};
use super::gesture::{GestureState, Navigate, Zone};
use super::library::PhotoLibrary;
use super::transition::{Frame, SlideTransition};
use crate::app::paths;
use crate::app::config::GalleryConfig;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::tooltip::Position;
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{mouse, Background, Color, ContentFit, Element, Length, Padding, Task, Theme};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    GoTo(usize),
    ZoneEntered(Zone),
    ZoneExited(Zone),
    ZonePressed(Zone),
    /// Pointer or finger x coordinate in window space.
    PointerMoved(f32),
    /// A finger touched the window at this x coordinate.
    PointerDown(f32),
    /// Any button or finger release, wherever it happens in the window.
    PointerReleased,
    PhotoLoaded(PhotoId, Result<ImageData>),
    Tick(Instant),
}

/// Outcome the application reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The photo on stage could not be decoded.
    PhotoFailed { caption: String },
}

pub struct State {
    carousel: CarouselState,
    gesture: GestureState,
    transition: Option<SlideTransition>,
    cache: PhotoCache,
    /// Photo the stage currently shows or waits for.
    shown: Option<PhotoId>,
    current: Option<ImageData>,
    failed: Option<PhotoId>,
    pending: HashSet<PhotoId>,
    loading_since: Option<Instant>,
    swipe_threshold: f32,
    content_root: PathBuf,
    now: Instant,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryState")
            .field("carousel", &self.carousel)
            .field("shown", &self.shown)
            .field("failed", &self.failed)
            .field("pending", &self.pending.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Everything the view borrows from the application.
pub struct ViewContext<'a> {
    pub library: &'a PhotoLibrary,
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

impl State {
    #[must_use]
    pub fn new(config: &GalleryConfig, content_root: PathBuf) -> Self {
        Self {
            carousel: CarouselState::new(),
            gesture: GestureState::default(),
            transition: None,
            cache: PhotoCache::with_capacity(config.cache_capacity()),
            shown: None,
            current: None,
            failed: None,
            pending: HashSet::new(),
            loading_since: None,
            swipe_threshold: config.swipe_threshold(),
            content_root,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    #[must_use]
    pub fn content_root(&self) -> &std::path::Path {
        &self.content_root
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageData> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed.is_some() && self.failed == self.shown
    }

    /// Whether something on stage is animating and needs the tick.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.loading_since.is_some()
    }

    /// Loads the photo at the current position and prefetches its neighbours.
    ///
    /// Called at start-up and after the application changed the library.
    pub fn sync(&mut self, library: &PhotoLibrary) -> Task<Message> {
        self.carousel.clamp_to(library.len());
        self.refresh(library, Instant::now())
    }

    /// Drops cached pixels of a photo that left the library.
    pub fn forget(&mut self, id: PhotoId) {
        self.cache.remove(id);
        self.pending.remove(&id);
        if self.failed == Some(id) {
            self.failed = None;
        }
    }

    /// Ends a gesture in progress, e.g. when a modal opens over the stage.
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
    }

    pub fn handle(&mut self, message: Message, library: &PhotoLibrary) -> (Effect, Task<Message>) {
        let len = library.len();
        match message {
            Message::Next => {
                let changed = self.carousel.next(len);
                (Effect::None, self.navigated(changed, library))
            }
            Message::Previous => {
                let changed = self.carousel.previous(len);
                (Effect::None, self.navigated(changed, library))
            }
            Message::GoTo(index) => {
                let changed = self.carousel.go_to(index, len);
                (Effect::None, self.navigated(changed, library))
            }
            Message::ZoneEntered(zone) => {
                self.gesture.enter(zone);
                (Effect::None, Task::none())
            }
            Message::ZoneExited(zone) => {
                self.gesture.exit(zone);
                (Effect::None, Task::none())
            }
            Message::ZonePressed(zone) => {
                self.gesture.press(zone);
                (Effect::None, Task::none())
            }
            Message::PointerMoved(x) => {
                self.gesture.pointer_moved(x);
                (Effect::None, Task::none())
            }
            Message::PointerDown(x) => {
                self.gesture.anchor(x);
                (Effect::None, Task::none())
            }
            Message::PointerReleased => {
                let changed = match self.gesture.release(self.swipe_threshold) {
                    Some(Navigate::Previous) => self.carousel.previous(len),
                    Some(Navigate::Next) => self.carousel.next(len),
                    None => false,
                };
                (Effect::None, self.navigated(changed, library))
            }
            Message::PhotoLoaded(id, result) => (self.loaded(id, result, library), Task::none()),
            Message::Tick(now) => {
                self.now = now;
                if self.transition.is_some_and(|t| !t.is_active(now)) {
                    self.transition = None;
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn navigated(&mut self, changed: bool, library: &PhotoLibrary) -> Task<Message> {
        if !changed {
            return Task::none();
        }
        let now = Instant::now();
        self.now = now;
        self.transition = Some(SlideTransition::start(self.carousel.direction(), now));
        self.refresh(library, now)
    }

    fn refresh(&mut self, library: &PhotoLibrary, now: Instant) -> Task<Message> {
        let Some(record) = library.get(self.carousel.current_index()) else {
            self.shown = None;
            self.current = None;
            self.failed = None;
            self.loading_since = None;
            self.transition = None;
            return Task::none();
        };

        let id = record.id;
        if self.shown != Some(id) {
            self.shown = Some(id);
            self.current = None;
            self.failed = None;
            self.carousel.invalidate();
        }

        let mut tasks = Vec::new();
        if !self.carousel.image_loaded() && self.failed.is_none() {
            if let Some(image) = self.cache.get(id) {
                self.show(image);
            } else {
                self.loading_since.get_or_insert(now);
                if !self.pending.contains(&id) {
                    tasks.push(self.load(record));
                }
            }
        }

        for index in self.carousel.neighbours(library.len()) {
            if let Some(neighbour) = library.get(index) {
                if !self.cache.contains(neighbour.id) && !self.pending.contains(&neighbour.id) {
                    tasks.push(self.load(neighbour));
                }
            }
        }

        Task::batch(tasks)
    }

    fn load(&mut self, record: &PhotoRecord) -> Task<Message> {
        self.pending.insert(record.id);
        let path = paths::resolve_locator(&self.content_root, &record.url);
        tracing::debug!(id = %record.id, path = %path.display(), "loading photo");
        Task::perform(cache::load_photo(record.id, path), |(id, result)| {
            Message::PhotoLoaded(id, result)
        })
    }

    fn show(&mut self, image: ImageData) {
        self.current = Some(image);
        self.carousel.mark_loaded();
        self.loading_since = None;
    }

    fn loaded(&mut self, id: PhotoId, result: Result<ImageData>, library: &PhotoLibrary) -> Effect {
        self.pending.remove(&id);
        if library.position(id).is_none() {
            // Removed while decoding.
            return Effect::None;
        }
        let on_stage = self.shown == Some(id);

        match result {
            Ok(image) => {
                self.cache.insert(id, image.clone());
                if on_stage && !self.carousel.image_loaded() {
                    self.show(image);
                }
                Effect::None
            }
            Err(error) => {
                let caption = library
                    .position(id)
                    .and_then(|index| library.get(index))
                    .map(|record| record.caption.clone())
                    .unwrap_or_default();
                if on_stage {
                    tracing::warn!(%id, %error, "photo could not be loaded");
                    self.failed = Some(id);
                    self.loading_since = None;
                    Effect::PhotoFailed { caption }
                } else {
                    tracing::debug!(%id, %error, "prefetch failed");
                    Effect::None
                }
            }
        }
    }

    fn frame(&self) -> Frame {
        self.transition
            .map_or(Frame::SETTLED, |transition| transition.frame(self.now))
    }

    fn spinner_rotation(&self) -> f32 {
        self.loading_since.map_or(0.0, |since| {
            animated_spinner::rotation_at(self.now.saturating_duration_since(since))
        })
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let library = ctx.library;
        let Some(record) = library.get(self.carousel.current_index()) else {
            return self.empty_view(&ctx);
        };

        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .max_width(sizing::STAGE_MAX_WIDTH)
            .push(self.stage(record, &ctx))
            .push(caption_card(&record.caption, ctx.colors));

        if library.len() > 1 {
            content = content.push(self.dots(library.len(), ctx.i18n));
        }
        content = content.push(self.indicator(library.len(), ctx.colors));

        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    }

    fn stage<'a>(&'a self, record: &'a PhotoRecord, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let photo_layer: Element<'a, Message> = match (&self.current, self.has_failed()) {
            (_, true) => unavailable(&record.caption, ctx.i18n, ctx.colors),
            (Some(current), false) => {
                let frame = self.frame();
                let inset = (1.0 - frame.scale) * sizing::STAGE_HEIGHT / 2.0;
                Container::new(
                    image(current.handle.clone())
                        .content_fit(ContentFit::Contain)
                        .opacity(frame.opacity)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .padding(Padding {
                    top: inset,
                    bottom: inset,
                    left: (inset + frame.offset_x).max(0.0),
                    right: (inset - frame.offset_x).max(0.0),
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
            }
            (None, false) => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STAGE_HEIGHT))
            .push(photo_layer);

        if self.loading_since.is_some() {
            let spinner =
                AnimatedSpinner::new(ctx.colors.brand_primary, self.spinner_rotation()).into_element();
            stack = stack.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::SM)
                        .align_x(Horizontal::Center)
                        .push(spinner)
                        .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY_SM)),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
            );
        }

        let navigable = ctx.library.len() > 1;
        stack = stack.push(
            Row::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(self.zone(Zone::Previous, navigable))
                .push(self.zone(Zone::Center, navigable))
                .push(self.zone(Zone::Next, navigable)),
        );

        Container::new(stack)
            .width(Length::Fill)
            .clip(true)
            .style(styles::container::stage)
            .into()
    }

    /// One third of the stage. Chevrons only show while hovered.
    fn zone<'a>(&self, zone: Zone, navigable: bool) -> Element<'a, Message> {
        let chevron = match zone {
            Zone::Previous => Some((icons::chevron_left(), Horizontal::Left)),
            Zone::Next => Some((icons::chevron_right(), Horizontal::Right)),
            Zone::Center => None,
        };

        let inner: Element<'a, Message> = match chevron {
            Some((icon, align)) if navigable && self.gesture.hovered() == Some(zone) => {
                Container::new(
                    Container::new(icons::tinted(
                        icons::sized(icon, sizing::ICON_LG),
                        Color::from_rgb(0.15, 0.15, 0.15),
                    ))
                    .padding(spacing::XS)
                    .style(styles::container::chevron_badge),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(align)
                .align_y(Vertical::Center)
                .into()
            }
            _ => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        let interaction = if navigable && zone != Zone::Center {
            mouse::Interaction::Pointer
        } else if self.gesture.is_pressed() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        Container::new(
            mouse_area(inner)
                .on_enter(Message::ZoneEntered(zone))
                .on_exit(Message::ZoneExited(zone))
                .on_press(Message::ZonePressed(zone))
                .interaction(interaction),
        )
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .into()
    }

    fn dots<'a>(&self, len: usize, i18n: &I18n) -> Element<'a, Message> {
        let current = self.carousel.current_index();
        let dots = (0..len).map(|index| {
            let active = index == current;
            let width = if active { sizing::DOT_ACTIVE_WIDTH } else { sizing::DOT };
            let dot = button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .style(styles::button::dot(active))
                .on_press(Message::GoTo(index));
            let number = (index + 1).to_string();
            let label = i18n.tr_with_args("gallery-dot-label", &[("number", number.as_str())]);
            tooltip(dot, Text::new(label).size(typography::CAPTION), Position::Top)
                .gap(4)
                .into()
        });

        Row::with_children(dots)
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .into()
    }

    fn indicator<'a>(&self, len: usize, colors: &ColorScheme) -> Element<'a, Message> {
        let (position, total) = self.carousel.counter(len);
        let filled = sizing::PROGRESS_WIDTH * self.carousel.progress(len);
        let track = colors.text_tertiary;
        let fill = colors.brand_primary;

        let bar = Container::new(
            Container::new(Space::new())
                .width(Length::Fixed(filled))
                .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
                .style(move |_theme: &Theme| rounded_fill(fill)),
        )
        .width(Length::Fixed(sizing::PROGRESS_WIDTH))
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| rounded_fill(Color { a: 0.25, ..track }));

        let secondary = colors.text_secondary;
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(format!("{position} / {total}"))
                    .size(typography::BODY_SM)
                    .color(secondary),
            )
            .push(bar)
            .into()
    }

    fn empty_view<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let folder = self.content_root.join("photos");
        let folder = folder.display().to_string();
        let hint = ctx
            .i18n
            .tr_with_args("gallery-empty-hint", &[("path", folder.as_str())]);
        let secondary = ctx.colors.text_secondary;

        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(icons::tinted(icons::sized(icons::image(), sizing::ICON_XL), secondary))
            .push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::TITLE_SM))
            .push(Text::new(hint).size(typography::BODY_SM).color(secondary));

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::STAGE_MAX_WIDTH)
            .height(Length::Fixed(sizing::STAGE_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::stage)
            .into()
    }
}

fn caption_card<'a>(caption: &'a str, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(caption)
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::glass(colors))
    .into()
}

fn unavailable<'a>(caption: &'a str, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let warning = colors.warning;
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(icons::tinted(icons::sized(icons::warning(), sizing::ICON_XL), warning))
            .push(Text::new(i18n.tr("gallery-photo-unavailable")).size(typography::TITLE_SM))
            .push(Text::new(caption).size(typography::BODY_SM)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn rounded_fill(color: Color) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(Background::Color(color)),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::catalog::PhotoRecord;

    fn library(count: u64) -> PhotoLibrary {
        PhotoLibrary::from_records(
            (1..=count)
                .map(|n| PhotoRecord::new(PhotoId::new(n), format!("/photos/{n}.jpg"), format!("Фото {n}")))
                .collect(),
        )
    }

    fn state() -> State {
        State::new(&GalleryConfig::default(), PathBuf::from("/nonexistent"))
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    fn loaded(state: &mut State, library: &PhotoLibrary, id: u64) -> Effect {
        state
            .handle(Message::PhotoLoaded(PhotoId::new(id), Ok(pixel())), library)
            .0
    }

    #[test]
    fn sync_waits_for_first_photo() {
        let library = library(3);
        let mut state = state();
        let _ = state.sync(&library);

        assert!(!state.carousel().image_loaded());
        assert!(state.is_animating());
        assert!(state.current_image().is_none());

        loaded(&mut state, &library, 1);
        assert!(state.carousel().image_loaded());
        assert!(state.current_image().is_some());
        assert!(!state.is_animating());
    }

    #[test]
    fn next_wraps_and_starts_transition() {
        let library = library(2);
        let mut state = state();
        let _ = state.sync(&library);

        let _ = state.handle(Message::Next, &library);
        assert_eq!(state.carousel().current_index(), 1);
        let _ = state.handle(Message::Next, &library);
        assert_eq!(state.carousel().current_index(), 0);
        assert!(state.transition.is_some());
    }

    #[test]
    fn prefetched_neighbour_shows_immediately() {
        let library = library(3);
        let mut state = state();
        let _ = state.sync(&library);
        loaded(&mut state, &library, 1);
        // Neighbour result arrives before navigation.
        loaded(&mut state, &library, 2);
        assert_eq!(state.carousel().current_index(), 0);

        let _ = state.handle(Message::Next, &library);
        assert!(state.carousel().image_loaded());
    }

    #[test]
    fn stale_result_does_not_mark_loaded() {
        let library = library(5);
        let mut state = state();
        let _ = state.sync(&library);
        let _ = state.handle(Message::GoTo(3), &library);

        loaded(&mut state, &library, 1);
        assert!(!state.carousel().image_loaded());

        loaded(&mut state, &library, 4);
        assert!(state.carousel().image_loaded());
    }

    #[test]
    fn failure_on_stage_reports_caption() {
        let library = library(2);
        let mut state = state();
        let _ = state.sync(&library);

        let (effect, _) = state.handle(
            Message::PhotoLoaded(PhotoId::new(1), Err(Error::Io("missing".into()))),
            &library,
        );
        assert_eq!(
            effect,
            Effect::PhotoFailed {
                caption: "Фото 1".into()
            }
        );
        assert!(state.has_failed());
        assert!(!state.carousel().image_loaded());
        assert!(state.loading_since.is_none());
    }

    #[test]
    fn failed_prefetch_is_silent() {
        let library = library(3);
        let mut state = state();
        let _ = state.sync(&library);

        let (effect, _) = state.handle(
            Message::PhotoLoaded(PhotoId::new(2), Err(Error::Io("missing".into()))),
            &library,
        );
        assert_eq!(effect, Effect::None);
        assert!(!state.has_failed());
    }

    #[test]
    fn drag_left_on_stage_goes_next() {
        let library = library(4);
        let mut state = state();
        let _ = state.sync(&library);

        let _ = state.handle(Message::PointerMoved(300.0), &library);
        let _ = state.handle(Message::ZonePressed(Zone::Center), &library);
        let _ = state.handle(Message::PointerMoved(180.0), &library);
        let _ = state.handle(Message::PointerReleased, &library);
        assert_eq!(state.carousel().current_index(), 1);
    }

    #[test]
    fn tap_on_left_third_goes_previous() {
        let library = library(4);
        let mut state = state();
        let _ = state.sync(&library);

        let _ = state.handle(Message::PointerMoved(20.0), &library);
        let _ = state.handle(Message::ZonePressed(Zone::Previous), &library);
        let _ = state.handle(Message::PointerReleased, &library);
        assert_eq!(state.carousel().current_index(), 3);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let library = library(4);
        let mut state = state();
        let _ = state.sync(&library);

        let _ = state.handle(Message::PointerReleased, &library);
        assert_eq!(state.carousel().current_index(), 0);
        assert!(state.transition.is_none());
    }

    #[test]
    fn empty_library_ignores_navigation() {
        let library = PhotoLibrary::empty();
        let mut state = state();
        let _ = state.sync(&library);

        let _ = state.handle(Message::Next, &library);
        let _ = state.handle(Message::Previous, &library);
        let _ = state.handle(Message::GoTo(0), &library);
        assert_eq!(state.carousel().current_index(), 0);
        assert!(!state.is_animating());
    }

    #[test]
    fn removing_the_last_photo_clamps_and_reloads() {
        let mut library = library(3);
        let mut state = state();
        let _ = state.sync(&library);
        let _ = state.handle(Message::GoTo(2), &library);
        loaded(&mut state, &library, 3);

        library.remove(PhotoId::new(3));
        state.forget(PhotoId::new(3));
        let _ = state.sync(&library);

        assert_eq!(state.carousel().current_index(), 1);
        assert!(!state.carousel().image_loaded());
        assert_eq!(state.shown, Some(PhotoId::new(2)));
    }

    #[test]
    fn removing_the_photo_on_stage_loads_its_successor() {
        let mut library = library(3);
        let mut state = state();
        let _ = state.sync(&library);
        loaded(&mut state, &library, 1);
        assert!(state.carousel().image_loaded());

        library.remove(PhotoId::new(1));
        state.forget(PhotoId::new(1));
        let _ = state.sync(&library);

        assert_eq!(state.carousel().current_index(), 0);
        assert_eq!(state.shown, Some(PhotoId::new(2)));
        assert!(!state.carousel().image_loaded());
        assert!(state.current_image().is_none());
    }

    #[test]
    fn result_for_removed_photo_is_dropped() {
        let mut library = library(3);
        let mut state = state();
        let _ = state.sync(&library);
        library.remove(PhotoId::new(2));

        loaded(&mut state, &library, 2);
        assert!(!state.cache.contains(PhotoId::new(2)));
    }

    #[test]
    fn tick_ends_finished_transition() {
        let library = library(2);
        let mut state = state();
        let _ = state.sync(&library);
        let _ = state.handle(Message::Next, &library);

        let later = Instant::now() + crate::app::config::SLIDE_DURATION * 2;
        let _ = state.handle(Message::Tick(later), &library);
        assert!(state.transition.is_none());
    }
}
