// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects that are
//! independent of any presentation or infrastructure concerns.

pub mod chapter;
pub mod newtypes;
pub mod playback;
pub mod quality;

// Re-export commonly used types
pub use chapter::Chapter;
pub use newtypes::{KeyboardSeekStep, PlaybackRate, Volume, VolumeStep};
pub use playback::{progress_ratio, PlaybackState};
pub use quality::{resolution_label, QualityLevel, AUTO_LABEL, AUTO_LEVEL_INDEX};
