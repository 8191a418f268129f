// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their state; the effects and events
//! they return are turned into library mutations and toasts here.

use super::Message;
use crate::gallery::component::{self as gallery, Effect as GalleryEffect};
use crate::gallery::PhotoLibrary;
use crate::music::state::{self as music, Effect as MusicEffect};
use crate::ui::manager::{self, Event as ManagerEvent};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Mutable borrows of the application state a handler may touch.
pub struct UpdateContext<'a> {
    pub library: &'a mut PhotoLibrary,
    pub gallery: &'a mut gallery::State,
    pub music: &'a mut music::State,
    pub manager: &'a mut Option<manager::State>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    if panel_open(ctx) && is_stage_input(&message) {
        tracing::trace!(?message, "stage input ignored while the panel is open");
        return Task::none();
    }
    let (effect, task) = ctx.gallery.handle(message, ctx.library);
    match effect {
        GalleryEffect::None => {}
        GalleryEffect::PhotoFailed { caption } => {
            ctx.notifications
                .push(Notification::warning("notification-photo-load-error").with_arg("caption", caption));
        }
    }
    task.map(Message::Gallery)
}

fn panel_open(ctx: &UpdateContext<'_>) -> bool {
    ctx.manager.as_ref().is_some_and(|state| state.is_open())
}

/// Navigation and gesture input coming from the stage, the dots or the keyboard.
fn is_stage_input(message: &gallery::Message) -> bool {
    matches!(
        message,
        gallery::Message::Next
            | gallery::Message::Previous
            | gallery::Message::GoTo(_)
            | gallery::Message::ZoneEntered(_)
            | gallery::Message::ZonePressed(_)
            | gallery::Message::PointerDown(_)
            | gallery::Message::PointerMoved(_)
    )
}

pub fn handle_music_message(ctx: &mut UpdateContext<'_>, message: music::Message) -> Task<Message> {
    match ctx.music.handle(message) {
        MusicEffect::None => {}
        MusicEffect::PlayFailed(err) => {
            tracing::warn!(%err, "music could not be started");
            ctx.notifications.push(Notification::warning(err.i18n_key()));
        }
    }
    Task::none()
}

/// Any press in the window: feeds the touch anchor and the music unlock.
pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>, x: Option<f32>) -> Task<Message> {
    let task = match x {
        Some(x) => handle_gallery_message(ctx, gallery::Message::PointerDown(x)),
        None => Task::none(),
    };
    let unlock = handle_music_message(ctx, music::Message::UserInteraction);
    Task::batch([task, unlock])
}

pub fn handle_manager_message(ctx: &mut UpdateContext<'_>, message: manager::Message) -> Task<Message> {
    let Some(state) = ctx.manager.as_mut() else {
        return Task::none();
    };
    let (event, task) = manager::update(state, message);
    if state.is_open() {
        ctx.gallery.cancel_gesture();
    }
    let follow_up = apply_manager_event(ctx, event);
    Task::batch([task.map(Message::Manager), follow_up])
}

fn apply_manager_event(ctx: &mut UpdateContext<'_>, event: ManagerEvent) -> Task<Message> {
    match event {
        ManagerEvent::None => Task::none(),
        ManagerEvent::PhotosAdded(paths) => {
            let added = ctx.library.add_files(&paths);
            tracing::info!(count = added.len(), "photos added");
            ctx.notifications.push(
                Notification::success("notification-photos-added")
                    .with_arg("count", added.len().to_string()),
            );
            ctx.gallery.sync(ctx.library).map(Message::Gallery)
        }
        ManagerEvent::PhotoRemoved(id) => {
            if ctx.library.remove(id).is_none() {
                return Task::none();
            }
            tracing::debug!(%id, "photo removed");
            ctx.gallery.forget(id);
            ctx.gallery.sync(ctx.library).map(Message::Gallery)
        }
        ManagerEvent::CaptionChanged(id, caption) => {
            ctx.library.set_caption(id, caption);
            Task::none()
        }
        ManagerEvent::MusicReplaced(path) => {
            tracing::info!(path = %path.display(), "background track replaced");
            ctx.music.set_track(Some(path));
            ctx.notifications
                .push(Notification::success("notification-music-replaced"));
            Task::none()
        }
        ManagerEvent::MusicRemoved => {
            tracing::info!("background track removed");
            ctx.music.set_track(None);
            Task::none()
        }
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    handle_gallery_message(ctx, gallery::Message::Tick(now))
}
