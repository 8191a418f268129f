// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the gallery (keyboard arrows, pointer
//! tracking for swipes) and to the music control (first interaction after
//! autoplay was refused).

use super::Message;
use crate::gallery::component as gallery;
use crate::music::player::{self, MusicSource, PlayerEvent};
use crate::music::state as music;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, Event, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Slow tick that only drives toast auto-dismiss.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Keyboard, pointer and touch routing.
///
/// Arrow keys are only honoured when no widget captured them, so typing in
/// a caption field does not flip photos.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: Event, status: event::Status, _window: iced::window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => route_key(&key, status),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Gallery(gallery::Message::PointerMoved(position.x)))
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed(None)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Gallery(gallery::Message::PointerReleased))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::PointerPressed(Some(position.x)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::Gallery(gallery::Message::PointerMoved(position.x)))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::Gallery(gallery::Message::PointerReleased))
        }
        _ => None,
    }
}

fn route_key(key: &Key, status: event::Status) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Gallery(gallery::Message::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::Gallery(gallery::Message::Next)),
        _ => None,
    }
}

/// Fast tick while something animates, slow tick while toasts are up.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// One-shot autoplay timer; dropped once the attempt was made.
pub fn create_autoplay_subscription(attempted: bool, delay: Duration) -> Subscription<Message> {
    if attempted {
        return Subscription::none();
    }
    // A zero period would spin.
    time::every(delay.max(Duration::from_millis(1)))
        .map(|_| Message::Music(music::Message::AutoplayDue))
}

/// Playback engine for the current audio source.
pub fn create_player_subscription(source: MusicSource) -> Subscription<Message> {
    player::subscription(source).map(player_event)
}

fn player_event(event: PlayerEvent) -> Message {
    Message::Music(music::Message::Player(event))
}
