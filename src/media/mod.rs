// SPDX-License-Identifier: MPL-2.0
//! Photo decoding and the file types the gallery accepts.

pub mod image;

pub use image::{load_image, ImageData};

/// Extensions offered by the photo picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// Extensions offered by the music picker.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "ogg", "oga", "opus", "flac", "wav", "m4a", "aac"];

/// Whether `path` has one of the photo extensions (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &std::path::Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

/// Whether `path` has one of the audio extensions (case-insensitive).
#[must_use]
pub fn is_supported_audio(path: &std::path::Path) -> bool {
    has_extension(path, AUDIO_EXTENSIONS)
}

fn has_extension(path: &std::path::Path, accepted: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| accepted.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}
