// SPDX-License-Identifier: MPL-2.0
//! Auto-hide state for the playback controls overlay.
//!
//! Any interaction shows the controls and (re)arms a single hide deadline.
//! When the deadline passes, the controls hide only if playback is
//! confirmed playing at that moment; while paused they stay visible.

use std::time::Instant;

use crate::domain::ui::ControlsHideDelay;

#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    visible: bool,
    hide_at: Option<Instant>,
    delay: ControlsHideDelay,
}

impl ControlsVisibility {
    /// Controls start visible with no deadline armed.
    #[must_use]
    pub fn new(delay: ControlsHideDelay) -> Self {
        Self {
            visible: true,
            hide_at: None,
            delay,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// When the armed deadline fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    #[must_use]
    pub fn delay(&self) -> ControlsHideDelay {
        self.delay
    }

    /// Shows the controls and replaces any pending deadline with `now + delay`.
    pub fn rearm(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = Some(now + self.delay.as_duration());
    }

    /// Pointer left the player: hide at once while playing.
    ///
    /// Returns true if visibility changed.
    pub fn pointer_left(&mut self, is_playing: bool) -> bool {
        if is_playing && self.visible {
            self.visible = false;
            self.hide_at = None;
            return true;
        }
        false
    }

    /// Fires the deadline if it has passed. Returns true if the controls hid.
    pub fn tick(&mut self, now: Instant, is_playing: bool) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                if is_playing && self.visible {
                    self.visible = false;
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Drops the pending deadline without changing visibility.
    pub fn cancel(&mut self) {
        self.hide_at = None;
    }
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new(ControlsHideDelay::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn starts_visible_without_deadline() {
        let controls = ControlsVisibility::default();
        assert!(controls.is_visible());
        assert!(controls.deadline().is_none());
    }

    #[test]
    fn hides_after_delay_while_playing() {
        let mut controls = ControlsVisibility::new(ControlsHideDelay::new(3000));
        let start = Instant::now();
        controls.rearm(start);

        assert!(!controls.tick(start + Duration::from_millis(2999), true));
        assert!(controls.is_visible());
        assert!(controls.tick(start + Duration::from_millis(3000), true));
        assert!(!controls.is_visible());
    }

    #[test]
    fn stays_visible_when_paused_at_deadline() {
        let mut controls = ControlsVisibility::default();
        let start = Instant::now();
        controls.rearm(start);

        assert!(!controls.tick(start + Duration::from_secs(10), false));
        assert!(controls.is_visible());
        assert!(controls.deadline().is_none());
    }

    #[test]
    fn rearm_replaces_pending_deadline() {
        let mut controls = ControlsVisibility::new(ControlsHideDelay::new(3000));
        let start = Instant::now();
        controls.rearm(start);
        controls.rearm(start + Duration::from_secs(2));

        assert!(!controls.tick(start + Duration::from_millis(3500), true));
        assert!(controls.is_visible());
        assert_eq!(
            controls.deadline(),
            Some(start + Duration::from_secs(5))
        );
    }

    #[test]
    fn pointer_leave_hides_only_while_playing() {
        let mut controls = ControlsVisibility::default();
        assert!(!controls.pointer_left(false));
        assert!(controls.is_visible());

        assert!(controls.pointer_left(true));
        assert!(!controls.is_visible());
    }

    #[test]
    fn cancel_disarms_timer() {
        let mut controls = ControlsVisibility::default();
        let start = Instant::now();
        controls.rearm(start);
        controls.cancel();

        assert!(!controls.tick(start + Duration::from_secs(60), true));
        assert!(controls.is_visible());
    }
}
