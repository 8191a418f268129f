// SPDX-License-Identifier: MPL-2.0
//! Directional slide between two photos.
//!
//! All queries take `now` explicitly so the animation can be sampled
//! deterministically in tests and from the tick subscription.

use super::carousel::Direction;
use crate::app::config::{SLIDE_DISTANCE, SLIDE_DURATION, SLIDE_START_SCALE};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    started_at: Instant,
    direction: Direction,
    duration: Duration,
}

/// Sampled visual state of the entering photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Horizontal offset in logical pixels.
    pub offset_x: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Frame {
    pub const SETTLED: Frame = Frame {
        offset_x: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
}

impl SlideTransition {
    #[must_use]
    pub fn start(direction: Direction, now: Instant) -> Self {
        Self {
            started_at: now,
            direction,
            duration: SLIDE_DURATION,
        }
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.duration
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let p = self.progress(now);
        let remaining = 1.0 - p;
        Frame {
            // Forward navigation brings the new photo in from the right.
            offset_x: self.direction.sign() * SLIDE_DISTANCE * remaining,
            opacity: p,
            scale: SLIDE_START_SCALE + (1.0 - SLIDE_START_SCALE) * p,
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn starts_offscreen_and_transparent() {
        let now = Instant::now();
        let slide = SlideTransition::start(Direction::Forward, now);
        let frame = slide.frame(now);
        assert_abs_diff_eq!(frame.offset_x, SLIDE_DISTANCE);
        assert_abs_diff_eq!(frame.opacity, 0.0);
        assert_abs_diff_eq!(frame.scale, SLIDE_START_SCALE);
    }

    #[test]
    fn backward_enters_from_the_left() {
        let now = Instant::now();
        let slide = SlideTransition::start(Direction::Backward, now);
        assert!(slide.frame(now).offset_x < 0.0);
    }

    #[test]
    fn settles_after_duration() {
        let now = Instant::now();
        let slide = SlideTransition::start(Direction::Forward, now);
        let end = now + SLIDE_DURATION;
        assert!(!slide.is_active(end));
        let frame = slide.frame(end);
        assert_abs_diff_eq!(frame.offset_x, 0.0);
        assert_abs_diff_eq!(frame.opacity, 1.0);
        assert_abs_diff_eq!(frame.scale, 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let now = Instant::now();
        let slide = SlideTransition::start(Direction::Forward, now);
        let mut last = -1.0;
        for ms in (0..=400).step_by(20) {
            let p = slide.progress(now + Duration::from_millis(ms));
            assert!(p >= last);
            last = p;
        }
    }
}
