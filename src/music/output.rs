// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal.
//!
//! The decoded track is looped straight out of memory by the device
//! callback. Volume, mute and pause are shared through atomics so the
//! callback never waits on the UI.
//!
//! The cpal stream is owned by a dedicated thread: it is not `Send` on
//! every platform, while the handle returned here must travel through async
//! tasks.

use super::decoder::{OutputFormat, Samples};
use super::Volume;
use crate::error::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

/// Largest sample value handed to integer formats.
/// Exactly 1.0 overflows when converted to i16.
const MAX_SAMPLE: f32 = 0.999_999_9;

/// Shared state between the audio thread and the engine.
#[derive(Debug)]
pub struct SharedState {
    /// Perceptual gain (stored as u32 bits of f32 for atomic access).
    gain_bits: AtomicU32,
    muted: AtomicBool,
    paused: AtomicBool,
}

impl SharedState {
    #[must_use]
    pub fn new(volume: Volume, muted: bool) -> Self {
        Self {
            gain_bits: AtomicU32::new(volume.perceptual_gain().to_bits()),
            muted: AtomicBool::new(muted),
            paused: AtomicBool::new(true),
        }
    }

    #[must_use]
    pub fn gain(&self) -> f32 {
        f32::from_bits(self.gain_bits.load(Ordering::Relaxed))
    }

    pub fn set_volume(&self, volume: Volume) {
        self.gain_bits
            .store(volume.perceptual_gain().to_bits(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }
}

/// A track plus the read position inside it.
#[derive(Debug, Clone)]
pub struct LoopBuffer {
    samples: Samples,
    cursor: usize,
}

impl LoopBuffer {
    #[must_use]
    pub fn new(samples: Samples) -> Self {
        Self { samples, cursor: 0 }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Fills `out` from `track`, wrapping to the start at the end of the track.
///
/// Paused, muted or trackless output is silence; a paused track keeps
/// its position.
pub fn fill(out: &mut [f32], track: Option<&mut LoopBuffer>, state: &SharedState) {
    let Some(track) = track else {
        out.fill(0.0);
        return;
    };
    if state.is_paused() || track.samples.is_empty() {
        out.fill(0.0);
        return;
    }

    let muted = state.is_muted();
    let gain = state.gain();
    let len = track.samples.len();
    for sample in out.iter_mut() {
        let value = track.samples[track.cursor];
        track.cursor = (track.cursor + 1) % len;
        *sample = if muted {
            0.0
        } else {
            (value * gain).clamp(-1.0, MAX_SAMPLE)
        };
    }
}

type SharedTrack = Arc<Mutex<Option<LoopBuffer>>>;

/// Handle to a running output stream.
///
/// Dropping the handle stops the stream and joins nothing: the owning
/// thread notices the closed channel and exits on its own.
#[derive(Debug)]
pub struct AudioOutput {
    shared: Arc<SharedState>,
    track: SharedTrack,
    format: OutputFormat,
    _keep_alive: mpsc::Sender<()>,
}

impl AudioOutput {
    /// Opens the default output device.
    ///
    /// Blocks until the device answers; call it from `spawn_blocking`.
    ///
    /// # Errors
    ///
    /// Returns an error if no output device is found or the stream
    /// cannot be built or started.
    pub fn open(volume: Volume, muted: bool) -> Result<Self, AudioError> {
        let shared = Arc::new(SharedState::new(volume, muted));
        let track: SharedTrack = Arc::new(Mutex::new(None));

        let (ready_tx, ready_rx) = mpsc::channel::<Result<OutputFormat, AudioError>>();
        let (keep_alive, stop_rx) = mpsc::channel::<()>();

        let thread_shared = Arc::clone(&shared);
        let thread_track = Arc::clone(&track);
        thread::Builder::new()
            .name("keepsake-audio".into())
            .spawn(move || {
                let stream = match start_stream(thread_track, thread_shared) {
                    Ok((stream, format)) => {
                        let _ = ready_tx.send(Ok(format));
                        stream
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                // Blocks until every sender is dropped.
                while stop_rx.recv().is_ok() {}
                drop(stream);
                tracing::debug!("audio output stream closed");
            })
            .map_err(|e| AudioError::OutputFailed(format!("cannot spawn audio thread: {e}")))?;

        let format = ready_rx
            .recv()
            .map_err(|_| AudioError::OutputFailed("audio thread exited".into()))??;

        tracing::info!(
            sample_rate = format.sample_rate,
            channels = format.channels,
            "audio output opened"
        );

        Ok(Self {
            shared,
            track,
            format,
            _keep_alive: keep_alive,
        })
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Replaces the looped track and rewinds to its start.
    pub fn load(&self, samples: Samples) {
        if let Ok(mut track) = self.track.lock() {
            *track = Some(LoopBuffer::new(samples));
        }
    }

    #[must_use]
    pub fn has_track(&self) -> bool {
        self.track.lock().map(|t| t.is_some()).unwrap_or(false)
    }

    pub fn play(&self) {
        self.shared.set_paused(false);
    }

    pub fn pause(&self) {
        self.shared.set_paused(true);
    }

    pub fn set_volume(&self, volume: Volume) {
        self.shared.set_volume(volume);
    }

    pub fn set_muted(&self, muted: bool) {
        self.shared.set_muted(muted);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.shared.is_paused()
    }
}

fn start_stream(
    track: SharedTrack,
    shared: Arc<SharedState>,
) -> Result<(cpal::Stream, OutputFormat), AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;

    let supported_config = device
        .default_output_config()
        .map_err(|e| AudioError::OutputFailed(format!("Failed to get audio config: {e}")))?;

    let format = OutputFormat {
        sample_rate: supported_config.sample_rate().0,
        channels: supported_config.channels(),
    };

    let stream = match supported_config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &supported_config.into(), track, shared)?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &supported_config.into(), track, shared)?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &supported_config.into(), track, shared)?
        }
        other => {
            return Err(AudioError::OutputFailed(format!(
                "Unsupported audio sample format: {other}"
            )))
        }
    };

    stream
        .play()
        .map_err(|e| AudioError::OutputFailed(format!("Failed to start audio stream: {e}")))?;

    Ok((stream, format))
}

/// Builds an output stream for a specific sample format.
fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    track: SharedTrack,
    shared: Arc<SharedState>,
) -> Result<cpal::Stream, AudioError> {
    let mut scratch: Vec<f32> = Vec::new();
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                scratch.resize(data.len(), 0.0);
                match track.lock() {
                    Ok(mut guard) => fill(&mut scratch, guard.as_mut(), &shared),
                    // Poisoned: a previous callback panicked; stay silent.
                    Err(_) => scratch.fill(0.0),
                }
                for (out, value) in data.iter_mut().zip(scratch.iter()) {
                    *out = T::from_sample(*value);
                }
            },
            |err| {
                tracing::warn!(%err, "audio output error");
            },
            None,
        )
        .map_err(|e| AudioError::OutputFailed(format!("Failed to build audio stream: {e}")))
}
