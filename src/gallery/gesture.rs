// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture tracking for the photo stage.
//!
//! The stage is split into three click zones. A press starts a gesture; the
//! matching release either classifies as a horizontal swipe (when it moved
//! farther than the threshold) or falls back to a tap on the zone where the
//! press happened.

/// Third of the stage under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Previous,
    Center,
    Next,
}

/// Navigation requested by a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigate {
    Previous,
    Next,
}

impl Zone {
    /// Navigation triggered by tapping this zone.
    #[must_use]
    pub fn tap(self) -> Option<Navigate> {
        match self {
            Zone::Previous => Some(Navigate::Previous),
            Zone::Center => None,
            Zone::Next => Some(Navigate::Next),
        }
    }
}

/// Classifies a finished gesture.
///
/// A drag to the right (`dx > threshold`) reveals the previous photo, a drag
/// to the left (`dx < -threshold`) the next one. Shorter movements count as a tap.
#[must_use]
pub fn classify(dx: f32, threshold: f32, origin: Zone) -> Option<Navigate> {
    if dx > threshold {
        Some(Navigate::Previous)
    } else if dx < -threshold {
        Some(Navigate::Next)
    } else {
        origin.tap()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    zone: Zone,
    start_x: Option<f32>,
}

/// Hover and press tracking for the stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    hovered: Option<Zone>,
    pointer_x: Option<f32>,
    press: Option<Press>,
}

impl GestureState {
    #[must_use]
    pub fn hovered(&self) -> Option<Zone> {
        self.hovered
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn enter(&mut self, zone: Zone) {
        self.hovered = Some(zone);
    }

    pub fn exit(&mut self, zone: Zone) {
        if self.hovered == Some(zone) {
            self.hovered = None;
        }
    }

    /// Records the latest pointer x coordinate (window space).
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
        if let Some(press) = self.press.as_mut() {
            if press.start_x.is_none() {
                press.start_x = Some(x);
            }
        }
    }

    /// Pins the pointer to `x` at the moment a finger touched down.
    ///
    /// Touch screens report no motion before the press, so a press already
    /// recorded from the stage may carry a stale start position.
    pub fn anchor(&mut self, x: f32) {
        self.pointer_x = Some(x);
        if let Some(press) = self.press.as_mut() {
            press.start_x = Some(x);
        }
    }

    /// Starts a gesture on `zone` at the last known pointer position.
    pub fn press(&mut self, zone: Zone) {
        self.press = Some(Press {
            zone,
            start_x: self.pointer_x,
        });
    }

    /// Ends the current gesture. Releases without a press are ignored.
    pub fn release(&mut self, threshold: f32) -> Option<Navigate> {
        let press = self.press.take()?;
        let dx = match (press.start_x, self.pointer_x) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        };
        classify(dx, threshold, press.zone)
    }

    /// Drops any gesture in progress (focus lost, overlay opened).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 50.0;

    #[test]
    fn touch_anchor_replaces_stale_start() {
        let mut gesture = GestureState::default();
        gesture.pointer_moved(900.0);
        gesture.press(Zone::Center);
        gesture.anchor(300.0);
        gesture.pointer_moved(200.0);
        assert_eq!(gesture.release(THRESHOLD), Some(Navigate::Next));
    }

    #[test]
    fn drag_right_goes_to_previous() {
        assert_eq!(classify(51.0, THRESHOLD, Zone::Center), Some(Navigate::Previous));
    }

    #[test]
    fn drag_left_goes_to_next() {
        assert_eq!(classify(-51.0, THRESHOLD, Zone::Center), Some(Navigate::Next));
    }

    #[test]
    fn threshold_itself_is_not_a_swipe() {
        assert_eq!(classify(50.0, THRESHOLD, Zone::Center), None);
        assert_eq!(classify(-50.0, THRESHOLD, Zone::Center), None);
    }

    #[test]
    fn short_drag_falls_back_to_zone_tap() {
        assert_eq!(classify(10.0, THRESHOLD, Zone::Next), Some(Navigate::Next));
        assert_eq!(classify(-10.0, THRESHOLD, Zone::Previous), Some(Navigate::Previous));
    }

    #[test]
    fn swipe_overrides_zone() {
        // Swiping right while starting on the "next" third still goes back.
        assert_eq!(classify(120.0, THRESHOLD, Zone::Next), Some(Navigate::Previous));
    }

    #[test]
    fn press_move_release_sequence() {
        let mut gesture = GestureState::default();
        gesture.pointer_moved(300.0);
        gesture.press(Zone::Center);
        gesture.pointer_moved(200.0);

        assert_eq!(gesture.release(THRESHOLD), Some(Navigate::Next));
        assert!(!gesture.is_pressed());
    }

    #[test]
    fn press_before_first_move_uses_next_position_as_origin() {
        let mut gesture = GestureState::default();
        gesture.press(Zone::Center);
        gesture.pointer_moved(100.0);
        gesture.pointer_moved(180.0);

        assert_eq!(gesture.release(THRESHOLD), Some(Navigate::Previous));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gesture = GestureState::default();
        gesture.pointer_moved(10.0);
        assert_eq!(gesture.release(THRESHOLD), None);
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut gesture = GestureState::default();
        gesture.pointer_moved(0.0);
        gesture.press(Zone::Next);
        gesture.cancel();
        assert_eq!(gesture.release(THRESHOLD), None);
    }

    #[test]
    fn hover_tracks_enter_and_exit() {
        let mut gesture = GestureState::default();
        gesture.enter(Zone::Previous);
        gesture.enter(Zone::Next);
        gesture.exit(Zone::Previous);
        assert_eq!(gesture.hovered(), Some(Zone::Next));
        gesture.exit(Zone::Next);
        assert_eq!(gesture.hovered(), None);
    }
}
