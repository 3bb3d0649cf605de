// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// Volume and mute are independent: muting never changes the stored level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN collapses to the minimum.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level itself is zero (independent of mute).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Increases volume by `step`, clamping to maximum.
    #[must_use]
    pub fn increase(self, step: VolumeStep) -> Self {
        Self::new(self.0 + step.value())
    }

    /// Decreases volume by `step`, clamping to minimum.
    #[must_use]
    pub fn decrease(self, step: VolumeStep) -> Self {
        Self::new(self.0 - step.value())
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// VolumeStep
// =============================================================================

/// Volume step bounds (1% to 50% per key press).
pub mod volume_step_bounds {
    /// Minimum volume step.
    pub const MIN: f32 = 0.01;
    /// Maximum volume step.
    pub const MAX: f32 = 0.5;
    /// Default volume step (10%).
    pub const DEFAULT: f32 = 0.1;
}

/// Amount added or removed by one ArrowUp/ArrowDown press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeStep(f32);

impl VolumeStep {
    /// Creates a new volume step, clamping to valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_nan() {
            return Self::default();
        }
        Self(step.clamp(volume_step_bounds::MIN, volume_step_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for VolumeStep {
    fn default() -> Self {
        Self(volume_step_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate bounds (0.25x to 2.0x).
pub mod rate_bounds {
    /// Minimum playback rate (quarter speed).
    pub const MIN: f64 = 0.25;
    /// Maximum playback rate (double speed).
    pub const MAX: f64 = 2.0;
    /// Default playback rate (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Playback rate, guaranteed to be within valid range (0.25x - 2.0x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, clamping to valid range.
    ///
    /// NaN falls back to normal speed.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self::default();
        }
        Self(rate.clamp(rate_bounds::MIN, rate_bounds::MAX))
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if this is the minimum rate.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - rate_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum rate.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - rate_bounds::MAX).abs() < 0.001
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(rate_bounds::DEFAULT)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (1 to 60 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default keyboard seek step in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Keyboard seek step in seconds for ArrowLeft/ArrowRight.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step value, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
