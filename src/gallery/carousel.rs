// SPDX-License-Identifier: MPL-2.0
//! Carousel position state.
//!
//! The length of the photo list is passed into every operation rather than
//! stored, so the carousel can never disagree with the library it indexes.

/// Direction of the last index change; drives the slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    /// -1, 0 or 1.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Backward => -1.0,
            Direction::None => 0.0,
            Direction::Forward => 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    direction: Direction,
    image_loaded: bool,
}

impl CarouselState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    /// Advances with wrap-around. Returns true when the index changed.
    pub fn next(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.direction = Direction::Forward;
        self.image_loaded = false;
        self.current_index = (self.current_index + 1) % len;
        true
    }

    /// Steps back with wrap-around. Returns true when the index changed.
    pub fn previous(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.direction = Direction::Backward;
        self.image_loaded = false;
        self.current_index = (self.current_index + len - 1) % len;
        true
    }

    /// Jumps to `index`. Going to the current index or past the end does nothing.
    pub fn go_to(&mut self, index: usize, len: usize) -> bool {
        if index >= len || index == self.current_index {
            return false;
        }
        self.direction = if index > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.image_loaded = false;
        self.current_index = index;
        true
    }

    pub fn mark_loaded(&mut self) {
        self.image_loaded = true;
    }

    /// A different photo now sits at the current index (the previous one
    /// was removed), so it has to load again.
    pub fn invalidate(&mut self) {
        self.image_loaded = false;
    }

    /// Keeps the index valid after the list shrank.
    /// Returns true when the index had to move.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        if len == 0 {
            let changed = self.current_index != 0;
            self.current_index = 0;
            self.image_loaded = false;
            return changed;
        }
        if self.current_index >= len {
            self.current_index = len - 1;
            self.direction = Direction::Backward;
            self.image_loaded = false;
            return true;
        }
        false
    }

    /// `(position, total)` as shown in the counter, 1-based.
    #[must_use]
    pub fn counter(&self, len: usize) -> (usize, usize) {
        if len == 0 {
            (0, 0)
        } else {
            (self.current_index + 1, len)
        }
    }

    /// Fraction of the list seen so far, for the progress bar.
    #[must_use]
    pub fn progress(&self, len: usize) -> f32 {
        let (position, total) = self.counter(len);
        if total == 0 {
            0.0
        } else {
            position as f32 / total as f32
        }
    }

    /// Indices adjacent to the current one (previous, next), deduplicated.
    #[must_use]
    pub fn neighbours(&self, len: usize) -> Vec<usize> {
        if len < 2 {
            return Vec::new();
        }
        let next = (self.current_index + 1) % len;
        let previous = (self.current_index + len - 1) % len;
        if next == previous {
            vec![next]
        } else {
            vec![next, previous]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = CarouselState::new();
        for _ in 0..3 {
            carousel.next(3);
        }
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut carousel = CarouselState::new();
        carousel.previous(35);
        assert_eq!(carousel.current_index(), 34);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_navigation() {
        let mut carousel = CarouselState::new();
        let len = 7;
        for step in 0..200 {
            if step % 3 == 0 {
                carousel.previous(len);
            } else {
                carousel.next(len);
            }
            assert!(carousel.current_index() < len);
        }
    }

    #[test]
    fn navigation_resets_loaded_flag() {
        let mut carousel = CarouselState::new();
        carousel.mark_loaded();
        carousel.next(5);
        assert!(!carousel.image_loaded());

        carousel.mark_loaded();
        carousel.previous(5);
        assert!(!carousel.image_loaded());

        carousel.mark_loaded();
        carousel.go_to(3, 5);
        assert!(!carousel.image_loaded());
    }

    #[test]
    fn go_to_sets_direction_from_target() {
        let mut carousel = CarouselState::new();
        assert!(carousel.go_to(4, 10));
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(carousel.go_to(1, 10));
        assert_eq!(carousel.direction(), Direction::Backward);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn go_to_current_index_is_noop() {
        let mut carousel = CarouselState::new();
        carousel.mark_loaded();
        assert!(!carousel.go_to(0, 10));
        assert!(carousel.image_loaded());
        assert_eq!(carousel.direction(), Direction::None);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = CarouselState::new();
        assert!(!carousel.go_to(10, 10));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn empty_list_navigation_is_noop() {
        let mut carousel = CarouselState::new();
        assert!(!carousel.next(0));
        assert!(!carousel.previous(0));
        assert!(!carousel.go_to(0, 0));
        assert_eq!(carousel.counter(0), (0, 0));
        assert_abs_diff_eq!(carousel.progress(0), 0.0);
    }

    #[test]
    fn single_photo_wraps_onto_itself() {
        let mut carousel = CarouselState::new();
        assert!(carousel.next(1));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.neighbours(1).is_empty());
    }

    #[test]
    fn clamp_after_shrink() {
        let mut carousel = CarouselState::new();
        carousel.go_to(9, 10);
        assert!(carousel.clamp_to(5));
        assert_eq!(carousel.current_index(), 4);
        assert!(!carousel.clamp_to(5));
        carousel.clamp_to(0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn counter_and_progress() {
        let mut carousel = CarouselState::new();
        carousel.go_to(9, 35);
        assert_eq!(carousel.counter(35), (10, 35));
        assert_abs_diff_eq!(carousel.progress(35), 10.0 / 35.0, epsilon = 1e-6);
    }

    #[test]
    fn neighbours_of_two_photos_is_single_index() {
        let carousel = CarouselState::new();
        assert_eq!(carousel.neighbours(2), vec![1]);
        assert_eq!(carousel.neighbours(5), vec![1, 4]);
    }
}
