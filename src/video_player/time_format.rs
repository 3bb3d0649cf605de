// SPDX-License-Identifier: MPL-2.0
//! Display formatting for playback times.

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Formats a time in seconds for the control bar and timeline tooltip.
///
/// Fractional seconds are floored. Under one hour the format is `m:ss`,
/// otherwise `h:mm:ss`. Negative, NaN and infinite inputs render as `0:00`.
///
/// # Examples
///
/// ```
/// use adaptive_player::video_player::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(75.9), "1:15");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // guarded by the finite/positive check
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };

    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Formats `"current / total"` as shown next to the play button.
#[must_use]
pub fn format_position(current_secs: f64, duration_secs: f64) -> String {
    format!("{} / {}", format_time(current_secs), format_time(duration_secs))
}
