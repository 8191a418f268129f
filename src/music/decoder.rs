// SPDX-License-Identifier: MPL-2.0
//! Whole-track audio decoding with FFmpeg.
//!
//! A background track is short enough to keep in memory, so it is decoded
//! once, resampled to the output device's rate and channel count, and then
//! looped from memory without touching the file again.

use crate::error::AudioError;
use std::path::Path;
use std::sync::{Arc, Once};

static FFMPEG_INIT: Once = Once::new();

/// Interleaved f32 samples normalized to [-1.0, 1.0].
pub type Samples = Arc<Vec<f32>>;

/// Sample layout requested by the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// A fully decoded track.
#[derive(Debug, Clone)]
pub struct DecodedTrack {
    pub samples: Samples,
    pub format: OutputFormat,
}

impl DecodedTrack {
    /// Track length in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        let per_second = f64::from(self.format.sample_rate) * f64::from(self.format.channels);
        if per_second == 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / per_second
    }
}

/// Initializes FFmpeg once per process and silences its console logging.
pub fn init_ffmpeg() -> Result<(), AudioError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(AudioError::DecodingFailed(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decodes `path` completely into `target` format.
///
/// This blocks; call it from `spawn_blocking`.
pub fn decode_track(path: &Path, target: OutputFormat) -> Result<DecodedTrack, AudioError> {
    if !path.exists() {
        return Err(AudioError::TrackMissing(path.display().to_string()));
    }

    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| AudioError::from_message(&e.to_string()))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or(AudioError::NoAudioStream)?;
    let stream_index = input.index();

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::DecodingFailed(format!("codec context: {e}")))?;
    let mut decoder = context
        .decoder()
        .audio()
        .map_err(|e| AudioError::DecodingFailed(format!("audio decoder: {e}")))?;

    // Some containers leave the layout unset; derive it from the channel count.
    let mut source_layout = decoder.channel_layout();
    if source_layout.is_empty() {
        source_layout = ffmpeg_next::ChannelLayout::default(i32::from(decoder.channels()));
    }

    let target_layout = match target.channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    };
    let produced_channels = if target.channels == 1 { 1 } else { 2 };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        source_layout,
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        target_layout,
        target.sample_rate,
    )
    .map_err(|e| AudioError::DecodingFailed(format!("resampler: {e}")))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut decoded = ffmpeg_next::frame::Audio::empty();

    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!(%e, "skipping undecodable audio packet");
            continue;
        }
        while decoder.receive_frame(&mut decoded).is_ok() {
            // A fresh frame per run: the resampler sizes its output from the input.
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            resampler
                .run(&decoded, &mut resampled)
                .map_err(|e| AudioError::DecodingFailed(format!("resampling: {e}")))?;
            append_samples(&resampled, produced_channels, &mut samples);
        }
    }

    // Drain frames still buffered inside the decoder.
    if decoder.send_eof().is_ok() {
        while decoder.receive_frame(&mut decoded).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            if resampler.run(&decoded, &mut resampled).is_ok() {
                append_samples(&resampled, produced_channels, &mut samples);
            }
        }
    }

    flush_resampler(&mut resampler, target_layout, produced_channels, &mut samples);

    if samples.is_empty() {
        return Err(AudioError::DecodingFailed("track contains no samples".into()));
    }

    let samples = expand_channels(samples, produced_channels, target.channels);

    Ok(DecodedTrack {
        samples: Arc::new(samples),
        format: target,
    })
}

/// Number of frames requested per resampler flush.
const FLUSH_CHUNK: usize = 1024;

/// Appends the tail the resampler still holds for its filter delay.
/// Without it the loop point loses a few milliseconds.
fn flush_resampler(
    resampler: &mut ffmpeg_next::software::resampling::Context,
    layout: ffmpeg_next::ChannelLayout,
    channels: u16,
    out: &mut Vec<f32>,
) {
    loop {
        // `flush` does not allocate, so the frame carries its own buffer.
        let mut tail = ffmpeg_next::frame::Audio::new(
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
            FLUSH_CHUNK,
            layout,
        );
        match resampler.flush(&mut tail) {
            Ok(_) if tail.samples() > 0 => append_samples(&tail, channels, out),
            Ok(_) => break,
            Err(e) => {
                tracing::debug!(%e, "resampler flush failed");
                break;
            }
        }
    }
}

/// Appends the packed f32 samples of a resampled frame.
fn append_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, out: &mut Vec<f32>) {
    let data = frame.data(0);
    let count = frame.samples() * channels as usize;
    out.extend(
        data.chunks_exact(4)
            .take(count)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]])),
    );
}

/// Spreads stereo samples over devices with more than two channels.
///
/// Left and right land on the first two channels; the rest stay silent.
#[must_use]
pub fn expand_channels(samples: Vec<f32>, from: u16, to: u16) -> Vec<f32> {
    if to <= from || from == 0 {
        return samples;
    }
    let from = from as usize;
    let to = to as usize;
    let mut out = Vec::with_capacity(samples.len() / from * to);
    for frame in samples.chunks_exact(from) {
        out.extend_from_slice(frame);
        out.extend(std::iter::repeat_n(0.0, to - from));
    }
    out
}
