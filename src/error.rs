// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Audio(AudioError),
}

/// Failures of the background music engine.
/// Each variant maps to a localized, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No default output device is available.
    NoOutputDevice,

    /// The output device refused the stream configuration or failed to start.
    OutputFailed(String),

    /// The configured track file does not exist.
    TrackMissing(String),

    /// The file opened but carries no audio stream.
    NoAudioStream,

    /// FFmpeg could not decode the track.
    DecodingFailed(String),

    /// No audio source is configured (it was removed).
    NoTrack,

    /// Automatic playback was refused before any user interaction.
    AutoplayBlocked,

    /// The engine task ended and can no longer accept commands.
    EngineStopped,
}

impl AudioError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AudioError::NoOutputDevice => "error-audio-no-device",
            AudioError::OutputFailed(_) => "error-audio-output",
            AudioError::TrackMissing(_) => "error-audio-track-missing",
            AudioError::NoAudioStream => "error-audio-no-stream",
            AudioError::DecodingFailed(_) => "error-audio-decoding",
            AudioError::NoTrack => "error-audio-no-track",
            AudioError::AutoplayBlocked => "error-audio-autoplay-blocked",
            AudioError::EngineStopped => "error-audio-engine-stopped",
        }
    }

    /// Categorizes a raw FFmpeg message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file") || msg_lower.contains("not found") {
            return AudioError::TrackMissing(msg.to_string());
        }

        if msg_lower.contains("no audio stream") || msg_lower.contains("stream not found") {
            return AudioError::NoAudioStream;
        }

        AudioError::DecodingFailed(msg.to_string())
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "No audio output device found"),
            AudioError::OutputFailed(msg) => write!(f, "Audio output failed: {}", msg),
            AudioError::TrackMissing(path) => write!(f, "Audio track not found: {}", path),
            AudioError::NoAudioStream => write!(f, "No audio stream found"),
            AudioError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            AudioError::NoTrack => write!(f, "No audio track configured"),
            AudioError::AutoplayBlocked => write!(f, "Autoplay was blocked"),
            AudioError::EngineStopped => write!(f, "Audio engine is not running"),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Image(_) => "error-photo-load",
            Error::Audio(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_converts_into_error() {
        let err: Error = AudioError::NoOutputDevice.into();
        assert!(matches!(err, Error::Audio(AudioError::NoOutputDevice)));
        assert_eq!(err.i18n_key(), "error-audio-no-device");
    }

    #[test]
    fn audio_error_from_message_missing_file() {
        let err = AudioError::from_message("No such file or directory");
        assert!(matches!(err, AudioError::TrackMissing(_)));
    }

    #[test]
    fn audio_error_from_message_no_stream() {
        let err = AudioError::from_message("Stream not found");
        assert_eq!(err, AudioError::NoAudioStream);
    }

    #[test]
    fn audio_error_from_message_falls_back_to_decoding() {
        let err = AudioError::from_message("Invalid data found when processing input");
        assert!(matches!(err, AudioError::DecodingFailed(_)));
    }

    #[test]
    fn audio_error_i18n_keys_are_distinct() {
        let keys = [
            AudioError::NoOutputDevice.i18n_key(),
            AudioError::OutputFailed(String::new()).i18n_key(),
            AudioError::TrackMissing(String::new()).i18n_key(),
            AudioError::NoAudioStream.i18n_key(),
            AudioError::DecodingFailed(String::new()).i18n_key(),
            AudioError::NoTrack.i18n_key(),
            AudioError::AutoplayBlocked.i18n_key(),
            AudioError::EngineStopped.i18n_key(),
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn image_error_display() {
        let err = Error::Image("truncated".to_string());
        assert!(format!("{}", err).contains("truncated"));
        assert_eq!(err.i18n_key(), "error-photo-load");
    }
}
