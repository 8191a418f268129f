// SPDX-License-Identifier: MPL-2.0
//! Iced subscription running the background music engine.
//!
//! One engine runs per audio source. It announces itself with
//! [`PlayerEvent::Ready`] and then serves [`Command`]s sent through the
//! [`PlayerHandle`]. The output device is opened and the track decoded on
//! the first play request, so a gallery that never plays music never
//! touches the audio hardware.

use super::decoder::{decode_track, OutputFormat};
use super::output::AudioOutput;
use super::Volume;
use crate::error::AudioError;
use iced::futures::{SinkExt, Stream};
use iced::{stream, Subscription};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Identifies one engine run.
///
/// The session counter changes whenever the source is replaced, so the
/// subscription is recreated even if the same file is picked again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MusicSource {
    pub track: Option<PathBuf>,
    pub session: u64,
}

impl MusicSource {
    #[must_use]
    pub fn new(track: Option<PathBuf>, session: u64) -> Self {
        Self { track, session }
    }
}

/// What triggered a play request.
///
/// The outcome is handled differently for each origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    /// The timed attempt made shortly after startup.
    Autoplay,
    /// The retry made on the first interaction after a failed autoplay.
    Unlock,
    /// The play/pause button.
    Manual,
    /// The enable-music prompt.
    Prompt,
}

/// Commands accepted by a running engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play { origin: PlayOrigin },
    Pause,
    SetVolume(Volume),
    SetMuted(bool),
}

/// Cloneable sender for engine commands.
#[derive(Clone)]
pub struct PlayerHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl PlayerHandle {
    /// Sends a command to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::EngineStopped`] if the engine has exited.
    pub fn send(&self, command: Command) -> Result<(), AudioError> {
        self.tx.send(command).map_err(|_| AudioError::EngineStopped)
    }

    pub fn play(&self, origin: PlayOrigin) -> Result<(), AudioError> {
        self.send(Command::Play { origin })
    }

    pub fn pause(&self) -> Result<(), AudioError> {
        self.send(Command::Pause)
    }

    pub fn set_volume(&self, volume: Volume) -> Result<(), AudioError> {
        self.send(Command::SetVolume(volume))
    }

    pub fn set_muted(&self, muted: bool) -> Result<(), AudioError> {
        self.send(Command::SetMuted(muted))
    }

    /// A handle wired to a plain receiver instead of an engine.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl std::fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Messages emitted by the engine subscription.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// The engine is running and accepts commands.
    Ready(PlayerHandle),
    /// Answer to a [`Command::Play`].
    PlayResolved {
        origin: PlayOrigin,
        result: Result<(), AudioError>,
    },
}

/// Runs the engine for `source` for as long as the subscription is kept.
pub fn subscription(source: MusicSource) -> Subscription<PlayerEvent> {
    Subscription::run_with(source, engine)
}

fn engine(source: &MusicSource) -> impl Stream<Item = PlayerEvent> {
    let track = source.track.clone();
    let session = source.session;

    stream::channel(16, move |mut output| async move {
        let (tx, mut rx) = mpsc::unbounded_channel();
        if output
            .send(PlayerEvent::Ready(PlayerHandle { tx }))
            .await
            .is_err()
        {
            return;
        }
        tracing::debug!(session, track = ?track, "music engine started");

        let mut engine = Engine::new(track);
        while let Some(command) = rx.recv().await {
            match command {
                Command::Play { origin } => {
                    let result = engine.play().await;
                    match &result {
                        Ok(()) => tracing::info!(?origin, "background music playing"),
                        Err(err) => tracing::warn!(?origin, %err, "background music did not start"),
                    }
                    if output
                        .send(PlayerEvent::PlayResolved { origin, result })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Command::Pause => engine.pause(),
                Command::SetVolume(volume) => engine.set_volume(volume),
                Command::SetMuted(muted) => engine.set_muted(muted),
            }
        }

        tracing::debug!(session, "music engine stopped");
    })
}

/// Engine state owned by the subscription task.
struct Engine {
    track: Option<PathBuf>,
    output: Option<AudioOutput>,
    loaded: bool,
    volume: Volume,
    muted: bool,
}

impl Engine {
    fn new(track: Option<PathBuf>) -> Self {
        Self {
            track,
            output: None,
            loaded: false,
            volume: Volume::default(),
            muted: false,
        }
    }

    async fn play(&mut self) -> Result<(), AudioError> {
        let track = self.track.clone().ok_or(AudioError::NoTrack)?;
        if !track.exists() {
            return Err(AudioError::TrackMissing(track.display().to_string()));
        }

        let format = self.ensure_output().await?;

        if !self.loaded {
            let decoded = tokio::task::spawn_blocking(move || decode_track(&track, format))
                .await
                .map_err(|e| AudioError::DecodingFailed(format!("decode task failed: {e}")))??;
            tracing::debug!(
                seconds = decoded.duration_secs(),
                "background track decoded"
            );
            if let Some(output) = &self.output {
                output.load(decoded.samples);
            }
            self.loaded = true;
        }

        match &self.output {
            Some(output) => {
                output.play();
                Ok(())
            }
            None => Err(AudioError::NoOutputDevice),
        }
    }

    /// Opens the output device on first use and returns its format.
    async fn ensure_output(&mut self) -> Result<OutputFormat, AudioError> {
        if let Some(output) = &self.output {
            return Ok(output.format());
        }

        let (volume, muted) = (self.volume, self.muted);
        let output = tokio::task::spawn_blocking(move || AudioOutput::open(volume, muted))
            .await
            .map_err(|e| AudioError::OutputFailed(format!("output task failed: {e}")))??;
        let format = output.format();
        self.output = Some(output);
        Ok(format)
    }

    fn pause(&mut self) {
        if let Some(output) = &self.output {
            output.pause();
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(output) = &self.output {
            output.set_volume(volume);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(output) = &self.output {
            output.set_muted(muted);
        }
    }
}
