// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Swipe threshold, image cache and content locations
//! - **Music**: Track locator, volume and autoplay timing
//! - **Transition**: Slide animation timing

use std::time::Duration;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Content root used when neither the CLI nor the config names one.
pub const DEFAULT_CONTENT_DIR: &str = "public";

/// Horizontal drag distance (in logical pixels) that turns a press/release into a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Number of decoded photos kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 8;

/// Minimum cache size (current photo plus one neighbour).
pub const MIN_CACHE_MAX_IMAGES: usize = 2;

/// Maximum cache size.
pub const MAX_CACHE_MAX_IMAGES: usize = 32;

/// Upper bound on the bytes held by decoded photos (256 MB).
pub const CACHE_MAX_BYTES: usize = 256 * 1024 * 1024;

/// Longest edge of a decoded photo; larger photos are downscaled on load.
pub const MAX_PHOTO_EDGE_PX: u32 = 2560;

// ==========================================================================
// Music Defaults
// ==========================================================================

/// Locator of the background track, relative to the content root.
pub const DEFAULT_MUSIC_TRACK: &str = "/music/background.mp3";

/// Initial playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Step of the volume slider.
pub const VOLUME_STEP: f32 = 0.01;

/// Delay between startup and the single autoplay attempt (milliseconds).
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 500;

/// Longest accepted autoplay delay (milliseconds).
pub const MAX_AUTOPLAY_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the slide between two photos.
pub const SLIDE_DURATION: Duration = Duration::from_millis(350);

/// Distance (in logical pixels) the entering photo travels.
pub const SLIDE_DISTANCE: f32 = 120.0;

/// Scale of the entering photo at the start of the slide.
pub const SLIDE_START_SCALE: f32 = 0.9;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Swipe threshold validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Cache validation
    assert!(MIN_CACHE_MAX_IMAGES >= 2);
    assert!(MAX_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES <= MAX_CACHE_MAX_IMAGES);
    // Two full-size photos must always fit.
    assert!(CACHE_MAX_BYTES >= 2 * (MAX_PHOTO_EDGE_PX as usize) * (MAX_PHOTO_EDGE_PX as usize) * 4);

    // Volume validation
    assert!(MIN_VOLUME == 0.0);
    assert!(MAX_VOLUME == 1.0);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Autoplay validation
    assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);

    // Transition validation
    assert!(SLIDE_DISTANCE > 0.0);
    assert!(SLIDE_START_SCALE > 0.0);
    assert!(SLIDE_START_SCALE <= 1.0);
};
