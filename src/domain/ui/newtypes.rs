// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

/// Controls hide delay bounds (0.5 to 30 seconds, in milliseconds).
pub mod hide_delay_bounds {
    /// Minimum delay in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u64 = 3000;
}

/// Delay after the last pointer activity before playback controls hide.
///
/// # Example
///
/// ```
/// use adaptive_player::domain::ui::ControlsHideDelay;
///
/// let delay = ControlsHideDelay::new(2000);
/// assert_eq!(delay.as_millis(), 2000);
///
/// // Values outside range are clamped
/// let too_long = ControlsHideDelay::new(100_000);
/// assert_eq!(too_long.as_millis(), 30_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsHideDelay(u64);

impl ControlsHideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ControlsHideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_MS)
    }
}
