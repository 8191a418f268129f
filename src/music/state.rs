// SPDX-License-Identifier: MPL-2.0
//! Background music control state.
//!
//! Holds what the music control shows (playing, muted, volume), the
//! enable-music prompt and the one-shot unlock listener, and talks to the
//! engine through a [`PlayerHandle`]. Play requests made before the
//! engine is ready are kept and sent once it reports in.

use super::player::{MusicSource, PlayOrigin, PlayerEvent, PlayerHandle};
use super::Volume;
use crate::app::config::MusicConfig;
use crate::error::AudioError;
use std::path::PathBuf;

/// What the music control displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub volume: Volume,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_muted: false,
            volume: Volume::default(),
        }
    }
}

impl PlaybackState {
    /// Whether the speaker icon shows the muted glyph.
    #[must_use]
    pub fn shows_muted(&self) -> bool {
        self.is_muted || self.volume.is_zero()
    }
}

/// Messages for the music control.
#[derive(Debug, Clone)]
pub enum Message {
    /// The startup delay has elapsed.
    AutoplayDue,
    /// Play/pause button.
    TogglePlay,
    /// Speaker button.
    ToggleMute,
    /// Volume slider moved.
    VolumeChanged(f32),
    /// Enable button or backdrop of the prompt.
    PromptAccepted,
    /// A press on the prompt card itself; absorbed so it does not reach
    /// the backdrop.
    PromptCardPressed,
    /// A click or touch anywhere in the window.
    UserInteraction,
    /// Event from the engine subscription.
    Player(PlayerEvent),
}

/// Effects the root has to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A play request made by the user failed.
    PlayFailed(AudioError),
}

#[derive(Debug)]
pub struct State {
    playback: PlaybackState,
    show_prompt: bool,
    autoplay_enabled: bool,
    autoplay_attempted: bool,
    unlock_armed: bool,
    track: Option<PathBuf>,
    session: u64,
    handle: Option<PlayerHandle>,
    pending_play: Option<PlayOrigin>,
}

impl State {
    /// Creates the control for `track` with the configured volume and mute.
    #[must_use]
    pub fn new(config: &MusicConfig, track: Option<PathBuf>) -> Self {
        let volume = Volume::new(config.volume.unwrap_or(crate::app::config::DEFAULT_VOLUME));
        Self {
            playback: PlaybackState {
                is_playing: false,
                is_muted: config.muted.unwrap_or(false),
                volume,
            },
            show_prompt: false,
            autoplay_enabled: config.autoplay.unwrap_or(true),
            autoplay_attempted: false,
            unlock_armed: false,
            track,
            session: 0,
            handle: None,
            pending_play: None,
        }
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn show_prompt(&self) -> bool {
        self.show_prompt
    }

    #[must_use]
    pub fn is_unlock_armed(&self) -> bool {
        self.unlock_armed
    }

    #[must_use]
    pub fn autoplay_attempted(&self) -> bool {
        self.autoplay_attempted
    }

    #[must_use]
    pub fn track(&self) -> Option<&PathBuf> {
        self.track.as_ref()
    }

    #[must_use]
    pub fn is_engine_ready(&self) -> bool {
        self.handle.is_some()
    }

    /// The source the engine subscription must run for.
    #[must_use]
    pub fn source(&self) -> MusicSource {
        MusicSource::new(self.track.clone(), self.session)
    }

    /// Replaces (or removes) the audio source.
    ///
    /// The running engine is dropped. If music was playing, playback
    /// resumes with the new source once its engine is ready.
    pub fn set_track(&mut self, track: Option<PathBuf>) {
        self.track = track;
        self.session = self.session.wrapping_add(1);
        self.handle = None;
        self.pending_play = if self.playback.is_playing {
            Some(PlayOrigin::Manual)
        } else {
            None
        };
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::AutoplayDue => {
                if self.autoplay_attempted {
                    return Effect::None;
                }
                self.autoplay_attempted = true;
                if self.playback.is_playing {
                    return Effect::None;
                }
                if !self.autoplay_enabled {
                    return self.resolve(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked));
                }
                self.request_play(PlayOrigin::Autoplay)
            }
            Message::TogglePlay => {
                let effect = if self.playback.is_playing {
                    self.pause();
                    Effect::None
                } else {
                    self.request_play(PlayOrigin::Manual)
                };
                if effect == Effect::None {
                    self.playback.is_playing = !self.playback.is_playing;
                }
                self.hide_prompt();
                effect
            }
            Message::ToggleMute => {
                self.playback.is_muted = !self.playback.is_muted;
                self.sync_muted();
                Effect::None
            }
            Message::VolumeChanged(value) => {
                self.playback.volume = Volume::new(value);
                if self.playback.volume.is_zero() {
                    self.playback.is_muted = true;
                } else if self.playback.is_muted {
                    self.playback.is_muted = false;
                }
                self.sync_volume();
                self.sync_muted();
                Effect::None
            }
            Message::PromptAccepted => {
                let effect = if self.playback.is_playing {
                    Effect::None
                } else {
                    self.request_play(PlayOrigin::Prompt)
                };
                if effect == Effect::None {
                    self.playback.is_playing = true;
                }
                self.hide_prompt();
                effect
            }
            Message::PromptCardPressed => Effect::None,
            Message::UserInteraction => {
                if !self.unlock_armed {
                    return Effect::None;
                }
                self.unlock_armed = false;
                if self.playback.is_playing {
                    return Effect::None;
                }
                self.request_play(PlayOrigin::Unlock)
            }
            Message::Player(PlayerEvent::Ready(handle)) => {
                self.handle = Some(handle);
                self.sync_volume();
                self.sync_muted();
                if let Some(origin) = self.pending_play.take() {
                    return self.request_play(origin);
                }
                Effect::None
            }
            Message::Player(PlayerEvent::PlayResolved { origin, result }) => {
                self.resolve(origin, result)
            }
        }
    }

    fn request_play(&mut self, origin: PlayOrigin) -> Effect {
        let Some(handle) = &self.handle else {
            tracing::debug!(?origin, "music engine not ready, deferring play");
            self.pending_play = Some(origin);
            return Effect::None;
        };
        match handle.play(origin) {
            Ok(()) => Effect::None,
            Err(err) => {
                self.handle = None;
                self.resolve(origin, Err(err))
            }
        }
    }

    fn pause(&mut self) {
        self.pending_play = None;
        if let Some(handle) = &self.handle {
            if handle.pause().is_err() {
                self.handle = None;
            }
        }
    }

    fn hide_prompt(&mut self) {
        self.show_prompt = false;
        self.unlock_armed = false;
    }

    fn sync_volume(&mut self) {
        if let Some(handle) = &self.handle {
            if handle.set_volume(self.playback.volume).is_err() {
                self.handle = None;
            }
        }
    }

    fn sync_muted(&mut self) {
        if let Some(handle) = &self.handle {
            if handle.set_muted(self.playback.is_muted).is_err() {
                self.handle = None;
            }
        }
    }

    fn resolve(&mut self, origin: PlayOrigin, result: Result<(), AudioError>) -> Effect {
        match (origin, result) {
            (PlayOrigin::Autoplay | PlayOrigin::Unlock, Ok(())) => {
                self.playback.is_playing = true;
                self.hide_prompt();
                Effect::None
            }
            // The button already flipped the state optimistically.
            (PlayOrigin::Manual | PlayOrigin::Prompt, Ok(())) => Effect::None,
            (PlayOrigin::Autoplay, Err(err)) => {
                tracing::info!(%err, "autoplay refused, asking the user");
                self.playback.is_playing = false;
                self.show_prompt = true;
                self.unlock_armed = true;
                Effect::None
            }
            // The unlock retry is single-shot; the prompt stays up.
            (PlayOrigin::Unlock, Err(_)) => Effect::None,
            (PlayOrigin::Manual | PlayOrigin::Prompt, Err(err)) => {
                self.playback.is_playing = false;
                Effect::PlayFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::player::Command;
    use crate::test_utils::assert_abs_diff_eq;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn state() -> State {
        State::new(
            &MusicConfig::default(),
            Some(PathBuf::from("/music/background.mp3")),
        )
    }

    fn ready_state() -> (State, UnboundedReceiver<Command>) {
        let mut state = state();
        let (handle, mut rx) = PlayerHandle::detached();
        state.handle(Message::Player(PlayerEvent::Ready(handle)));
        // Ready pushes volume and mute to the engine.
        assert!(matches!(rx.try_recv(), Ok(Command::SetVolume(_))));
        assert!(matches!(rx.try_recv(), Ok(Command::SetMuted(false))));
        (state, rx)
    }

    fn resolved(origin: PlayOrigin, result: Result<(), AudioError>) -> Message {
        Message::Player(PlayerEvent::PlayResolved { origin, result })
    }

    #[test]
    fn initial_state_uses_config() {
        let config = MusicConfig {
            volume: Some(0.2),
            muted: Some(true),
            ..MusicConfig::default()
        };
        let state = State::new(&config, None);
        assert!(!state.playback().is_playing);
        assert!(state.playback().is_muted);
        assert_abs_diff_eq!(state.playback().volume.value(), 0.2);
        assert!(!state.show_prompt());
    }

    #[test]
    fn autoplay_is_attempted_once() {
        let (mut state, mut rx) = ready_state();

        state.handle(Message::AutoplayDue);
        state.handle(Message::AutoplayDue);

        assert_eq!(
            rx.try_recv().ok(),
            Some(Command::Play {
                origin: PlayOrigin::Autoplay
            })
        );
        assert!(rx.try_recv().is_err());
        assert!(state.autoplay_attempted());
    }

    #[test]
    fn autoplay_success_plays_without_prompt() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::AutoplayDue);
        state.handle(resolved(PlayOrigin::Autoplay, Ok(())));

        assert!(state.playback().is_playing);
        assert!(!state.show_prompt());
        assert!(!state.is_unlock_armed());
    }

    #[test]
    fn autoplay_failure_shows_prompt_and_arms_unlock() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::AutoplayDue);
        let effect = state.handle(resolved(
            PlayOrigin::Autoplay,
            Err(AudioError::NoOutputDevice),
        ));

        assert_eq!(effect, Effect::None);
        assert!(!state.playback().is_playing);
        assert!(state.show_prompt());
        assert!(state.is_unlock_armed());
    }

    #[test]
    fn disabled_autoplay_is_blocked_without_engine_call() {
        let config = MusicConfig {
            autoplay: Some(false),
            ..MusicConfig::default()
        };
        let mut state = State::new(&config, Some(PathBuf::from("/music/a.mp3")));
        let (handle, mut rx) = PlayerHandle::detached();
        state.handle(Message::Player(PlayerEvent::Ready(handle)));
        while rx.try_recv().is_ok() {}

        state.handle(Message::AutoplayDue);

        assert!(rx.try_recv().is_err());
        assert!(state.show_prompt());
        assert!(state.is_unlock_armed());
    }

    #[test]
    fn unlock_retries_exactly_once() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::AutoplayDue);
        let _ = rx.try_recv();
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));

        state.handle(Message::UserInteraction);
        state.handle(Message::UserInteraction);

        assert_eq!(
            rx.try_recv().ok(),
            Some(Command::Play {
                origin: PlayOrigin::Unlock
            })
        );
        assert!(rx.try_recv().is_err());
        assert!(!state.is_unlock_armed());
    }

    #[test]
    fn failed_unlock_changes_nothing() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::AutoplayDue);
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));
        state.handle(Message::UserInteraction);

        let effect = state.handle(resolved(
            PlayOrigin::Unlock,
            Err(AudioError::NoOutputDevice),
        ));

        assert_eq!(effect, Effect::None);
        assert!(state.show_prompt());
        assert!(!state.playback().is_playing);
    }

    #[test]
    fn successful_unlock_hides_prompt() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::AutoplayDue);
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));
        state.handle(Message::UserInteraction);
        state.handle(resolved(PlayOrigin::Unlock, Ok(())));

        assert!(state.playback().is_playing);
        assert!(!state.show_prompt());
    }

    #[test]
    fn interaction_without_prompt_does_nothing() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::UserInteraction);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn toggle_play_is_optimistic() {
        let (mut state, mut rx) = ready_state();

        state.handle(Message::TogglePlay);
        assert!(state.playback().is_playing);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Command::Play {
                origin: PlayOrigin::Manual
            })
        );

        state.handle(Message::TogglePlay);
        assert!(!state.playback().is_playing);
        assert_eq!(rx.try_recv().ok(), Some(Command::Pause));
    }

    #[test]
    fn manual_play_failure_reports_and_resets() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::TogglePlay);

        let effect = state.handle(resolved(PlayOrigin::Manual, Err(AudioError::NoTrack)));

        assert_eq!(effect, Effect::PlayFailed(AudioError::NoTrack));
        assert!(!state.playback().is_playing);
    }

    #[test]
    fn toggle_play_hides_prompt() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::AutoplayDue);
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));

        state.handle(Message::TogglePlay);

        assert!(!state.show_prompt());
        assert!(!state.is_unlock_armed());
    }

    #[test]
    fn prompt_accept_plays() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::AutoplayDue);
        let _ = rx.try_recv();
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));

        state.handle(Message::PromptAccepted);

        assert!(state.playback().is_playing);
        assert!(!state.show_prompt());
        assert_eq!(
            rx.try_recv().ok(),
            Some(Command::Play {
                origin: PlayOrigin::Prompt
            })
        );
    }

    #[test]
    fn press_on_prompt_card_keeps_prompt_open() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::AutoplayDue);
        let _ = rx.try_recv();
        state.handle(resolved(PlayOrigin::Autoplay, Err(AudioError::AutoplayBlocked)));

        let effect = state.handle(Message::PromptCardPressed);

        assert_eq!(effect, Effect::None);
        assert!(state.show_prompt());
        assert!(state.is_unlock_armed());
        assert!(!state.playback().is_playing);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn toggle_mute_flips() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::ToggleMute);
        assert!(state.playback().is_muted);
        assert_eq!(rx.try_recv().ok(), Some(Command::SetMuted(true)));
        state.handle(Message::ToggleMute);
        assert!(!state.playback().is_muted);
    }

    #[test]
    fn zero_volume_mutes() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::VolumeChanged(0.0));
        assert!(state.playback().is_muted);
        assert!(state.playback().shows_muted());
    }

    #[test]
    fn raising_volume_unmutes() {
        let (mut state, mut rx) = ready_state();
        state.handle(Message::ToggleMute);
        let _ = rx.try_recv();

        state.handle(Message::VolumeChanged(0.4));

        assert!(!state.playback().is_muted);
        assert_abs_diff_eq!(state.playback().volume.value(), 0.4);
        assert_eq!(rx.try_recv().ok(), Some(Command::SetVolume(Volume::new(0.4))));
        assert_eq!(rx.try_recv().ok(), Some(Command::SetMuted(false)));
    }

    #[test]
    fn volume_is_clamped() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::VolumeChanged(3.0));
        assert_abs_diff_eq!(state.playback().volume.value(), 1.0);
    }

    #[test]
    fn play_before_ready_is_deferred() {
        let mut state = state();
        state.handle(Message::TogglePlay);
        assert!(state.playback().is_playing);

        let (handle, mut rx) = PlayerHandle::detached();
        state.handle(Message::Player(PlayerEvent::Ready(handle)));

        let commands: Vec<Command> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(
            commands.last(),
            Some(&Command::Play {
                origin: PlayOrigin::Manual
            })
        );
    }

    #[test]
    fn pause_cancels_deferred_play() {
        let mut state = state();
        state.handle(Message::TogglePlay);
        state.handle(Message::TogglePlay);

        let (handle, mut rx) = PlayerHandle::detached();
        state.handle(Message::Player(PlayerEvent::Ready(handle)));

        let commands: Vec<Command> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::Play { .. })));
    }

    #[test]
    fn stopped_engine_fails_manual_play() {
        let (mut state, rx) = ready_state();
        drop(rx);

        let effect = state.handle(Message::TogglePlay);

        assert_eq!(effect, Effect::PlayFailed(AudioError::EngineStopped));
        assert!(!state.playback().is_playing);
        assert!(!state.is_engine_ready());
    }

    #[test]
    fn replacing_track_restarts_session() {
        let (mut state, _rx) = ready_state();
        let before = state.source();

        state.set_track(Some(PathBuf::from("/tmp/new.ogg")));

        assert_ne!(state.source(), before);
        assert!(!state.is_engine_ready());
    }

    #[test]
    fn replacing_track_while_playing_resumes_on_ready() {
        let (mut state, _rx) = ready_state();
        state.handle(Message::TogglePlay);
        state.set_track(Some(PathBuf::from("/tmp/new.ogg")));

        let (handle, mut rx) = PlayerHandle::detached();
        state.handle(Message::Player(PlayerEvent::Ready(handle)));

        let commands: Vec<Command> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Play { .. })));
    }
}
