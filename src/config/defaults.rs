// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Output volume bounds and keyboard step
//! - **Playback Rate**: Playback rate bounds
//! - **Keyboard Seek**: Arrow-key seek step
//! - **Controls**: Auto-hide delay for the control overlay
//! - **Streaming**: Adaptive-streaming session options
//! - **Diagnostics**: Activity log buffer capacity

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default output volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per ArrowUp/ArrowDown press (10%).
pub const DEFAULT_VOLUME_STEP: f32 = 0.1;

/// Minimum volume step.
pub const MIN_VOLUME_STEP: f32 = 0.01;

/// Maximum volume step.
pub const MAX_VOLUME_STEP: f32 = 0.5;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Minimum playback rate.
pub const MIN_PLAYBACK_RATE: f64 = 0.25;

/// Maximum playback rate.
pub const MAX_PLAYBACK_RATE: f64 = 2.0;

// ==========================================================================
// Keyboard Seek Defaults
// ==========================================================================

/// Default keyboard seek step in seconds (ArrowLeft/ArrowRight).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum keyboard seek step in seconds.
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum keyboard seek step in seconds.
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default delay before the control overlay hides during playback (in milliseconds).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Minimum controls hide delay (in milliseconds).
pub const MIN_CONTROLS_HIDE_DELAY_MS: u64 = 500;

/// Maximum controls hide delay (in milliseconds).
pub const MAX_CONTROLS_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Streaming Defaults
// ==========================================================================

/// Whether the streaming engine may offload demuxing to a worker.
pub const DEFAULT_ENABLE_WORKER: bool = true;

/// Whether the streaming engine runs in low-latency mode.
pub const DEFAULT_LOW_LATENCY_MODE: bool = false;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the activity log ring buffer (in events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum activity log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum activity log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(MIN_VOLUME_STEP > 0.0);
    assert!(DEFAULT_VOLUME_STEP >= MIN_VOLUME_STEP);
    assert!(DEFAULT_VOLUME_STEP <= MAX_VOLUME_STEP);

    // Playback rate validation
    assert!(MIN_PLAYBACK_RATE > 0.0);
    assert!(MAX_PLAYBACK_RATE > MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE >= MIN_PLAYBACK_RATE);
    assert!(DEFAULT_PLAYBACK_RATE <= MAX_PLAYBACK_RATE);

    // Keyboard seek validation
    assert!(MIN_KEYBOARD_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS >= MIN_KEYBOARD_SEEK_STEP_SECS);
    assert!(DEFAULT_KEYBOARD_SEEK_STEP_SECS <= MAX_KEYBOARD_SEEK_STEP_SECS);

    // Controls validation
    assert!(MIN_CONTROLS_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS >= MIN_CONTROLS_HIDE_DELAY_MS);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS <= MAX_CONTROLS_HIDE_DELAY_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_defaults_are_valid() {
        assert_abs_diff_eq!(DEFAULT_VOLUME, 1.0);
        assert_abs_diff_eq!(DEFAULT_VOLUME_STEP, 0.1);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    }

    #[test]
    fn playback_rate_defaults_are_valid() {
        assert_abs_diff_eq!(MIN_PLAYBACK_RATE, 0.25);
        assert_abs_diff_eq!(MAX_PLAYBACK_RATE, 2.0);
        assert_abs_diff_eq!(DEFAULT_PLAYBACK_RATE, 1.0);
    }

    #[test]
    fn keyboard_seek_defaults_are_valid() {
        assert_abs_diff_eq!(DEFAULT_KEYBOARD_SEEK_STEP_SECS, 10.0);
    }

    #[test]
    fn controls_hide_delay_default_is_three_seconds() {
        assert_eq!(DEFAULT_CONTROLS_HIDE_DELAY_MS, 3000);
    }
}
