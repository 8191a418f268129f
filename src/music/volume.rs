// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for background music.
//!
//! This module provides a type-safe wrapper for volume values,
//! ensuring they are always within the valid range (0.0–1.0).

use crate::app::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME};

/// Volume level, guaranteed to be within `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use keepsake::music::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert_eq!(Volume::new(-1.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    /// NaN maps to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// True only for exactly zero; the slider snaps to its minimum.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= MIN_VOLUME
    }

    /// Gain actually applied to samples.
    ///
    /// A quadratic curve makes the slider feel linear to the ear:
    /// 50% on the slider plays at 25% amplitude (about -12 dB).
    #[must_use]
    pub fn perceptual_gain(self) -> f32 {
        self.0 * self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
    }

    #[test]
    fn nan_is_silence() {
        assert!(Volume::new(f32::NAN).is_zero());
    }

    #[test]
    fn default_is_half() {
        assert_abs_diff_eq!(Volume::default().value(), 0.5);
    }

    #[test]
    fn is_zero_only_at_minimum() {
        assert!(Volume::new(0.0).is_zero());
        assert!(!Volume::new(0.001).is_zero());
    }

    #[test]
    fn perceptual_gain_is_quadratic() {
        assert_abs_diff_eq!(Volume::new(0.5).perceptual_gain(), 0.25);
        assert_abs_diff_eq!(Volume::new(1.0).perceptual_gain(), 1.0);
        assert_abs_diff_eq!(Volume::new(0.0).perceptual_gain(), 0.0);
    }
}
