// SPDX-License-Identifier: MPL-2.0
//! Chapter metadata overlaid on the timeline.

use serde::{Deserialize, Serialize};

/// A named span of the video.
///
/// Chapters are supplied externally as an ordered, non-overlapping sequence
/// and are never mutated by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

impl Chapter {
    #[must_use]
    pub fn new(title: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Returns true if `time` lies in `[start, end]` (both ends inclusive).
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Checks `0 <= start < end <= video_length`.
    #[must_use]
    pub fn is_within(&self, video_length: f64) -> bool {
        0.0 <= self.start && self.start < self.end && self.end <= video_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let intro = Chapter::new("Intro", 0.0, 30.0);
        assert!(intro.contains(0.0));
        assert!(intro.contains(15.0));
        assert!(intro.contains(30.0));
        assert!(!intro.contains(30.1));
        assert!(!intro.contains(-0.1));
    }

    #[test]
    fn is_within_checks_ordering_and_bounds() {
        assert!(Chapter::new("a", 0.0, 10.0).is_within(10.0));
        assert!(!Chapter::new("b", 5.0, 5.0).is_within(10.0));
        assert!(!Chapter::new("c", 5.0, 11.0).is_within(10.0));
        assert!(!Chapter::new("d", -1.0, 5.0).is_within(10.0));
    }
}
