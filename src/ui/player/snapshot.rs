// SPDX-License-Identifier: MPL-2.0
//! Immutable view of the player handed to the presentation layer.

use crate::domain::error::PlayerError;
use crate::domain::video::QualityLevel;
use crate::video_player::{format_time, ChapterSegment, HoverPreview};

/// Tooltip shown above the timeline while hovering.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTooltip {
    /// Horizontal anchor as a fraction of the track width.
    pub ratio: f64,
    /// Formatted hover time, e.g. `"1:05"`.
    pub title: String,
    /// Title of the chapter under the pointer.
    pub subtitle: Option<String>,
}

impl HoverTooltip {
    #[must_use]
    pub fn from_preview(preview: &HoverPreview, duration_secs: f64) -> Option<Self> {
        if !preview.is_active {
            return None;
        }
        let ratio = if duration_secs > 0.0 {
            (preview.time_secs / duration_secs).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(Self {
            ratio,
            title: format_time(preview.time_secs),
            subtitle: preview.chapter.as_ref().map(|chapter| chapter.title.clone()),
        })
    }
}

/// Everything needed to draw the player at one instant.
///
/// `duration_secs` is the display duration: the reported one once known,
/// the nominal video length before that.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub current_time_secs: f64,
    pub duration_secs: f64,
    pub is_playing: bool,
    pub volume: f32,
    pub is_muted: bool,
    pub playback_rate: f64,

    pub progress_ratio: f64,
    /// `"m:ss / m:ss"` (or `h:mm:ss`).
    pub formatted_position: String,

    pub hover: HoverPreview,
    pub hover_tooltip: Option<HoverTooltip>,
    pub chapter_segments: Vec<ChapterSegment>,

    /// Empty when no quality selector should be shown.
    pub quality_levels: Vec<QualityLevel>,
    pub current_level: i32,
    pub quality_menu_open: bool,

    pub error: Option<PlayerError>,
    pub controls_visible: bool,
    /// Mute icon is drawn dimmed when nothing is audible.
    pub mute_icon_dimmed: bool,
}
