// SPDX-License-Identifier: MPL-2.0
//! Confirmed playback state of the media output.

use super::newtypes::{PlaybackRate, Volume};

/// Authoritative playback state as last confirmed by the media output.
///
/// `duration_secs == 0.0` means the duration is not known yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in seconds.
    pub current_time_secs: f64,
    /// Media duration in seconds, 0 while unknown.
    pub duration_secs: f64,
    /// Whether the output confirmed that it is playing.
    pub is_playing: bool,
    /// Output volume level, independent of mute.
    pub volume: Volume,
    /// Whether the output is muted.
    pub is_muted: bool,
    /// Playback rate.
    pub playback_rate: PlaybackRate,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time_secs: 0.0,
            duration_secs: 0.0,
            is_playing: false,
            volume: Volume::default(),
            is_muted: false,
            playback_rate: PlaybackRate::default(),
        }
    }
}

impl PlaybackState {
    /// Returns true once the output reported a duration.
    #[must_use]
    pub fn has_duration(&self) -> bool {
        self.duration_secs > 0.0
    }

    /// Fraction of the media played, in `[0, 1]`. Zero while duration is unknown.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        progress_ratio(self.current_time_secs, self.duration_secs)
    }

    /// Returns true if nothing is audible, either muted or at zero volume.
    #[must_use]
    pub fn is_effectively_silent(&self) -> bool {
        self.is_muted || self.volume.is_silent()
    }
}

/// `current / duration` clamped to `[0, 1]`, or 0 when `duration` is not positive.
#[must_use]
pub fn progress_ratio(current_secs: f64, duration_secs: f64) -> f64 {
    if duration_secs > 0.0 && current_secs.is_finite() {
        (current_secs / duration_secs).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
