// SPDX-License-Identifier: MPL-2.0
//! Selectable stream renditions.

/// Level index reserved for adaptive ("Auto") selection.
pub const AUTO_LEVEL_INDEX: i32 = -1;

/// Label of the adaptive entry.
pub const AUTO_LABEL: &str = "Auto";

/// Resolution label thresholds, highest first.
const RESOLUTION_LABELS: &[(u32, &str)] = &[
    (1080, "1080p"),
    (720, "720p"),
    (480, "480p"),
    (360, "360p"),
    (240, "240p"),
];

/// One user-selectable rendition of the stream.
///
/// Engine-reported levels have `index >= 0`; [`AUTO_LEVEL_INDEX`] is the
/// adaptive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityLevel {
    pub index: i32,
    pub height: u32,
    pub width: u32,
    pub bitrate_bps: u64,
    pub label: String,
}

impl QualityLevel {
    /// The adaptive entry, always first in a quality list.
    #[must_use]
    pub fn auto() -> Self {
        Self {
            index: AUTO_LEVEL_INDEX,
            height: 0,
            width: 0,
            bitrate_bps: 0,
            label: AUTO_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.index == AUTO_LEVEL_INDEX
    }
}

/// Maps a rendition height to its display label.
///
/// Heights snap down to the nearest standard label; heights under 240 keep
/// their own value, and 0 means unknown ("Auto").
#[must_use]
pub fn resolution_label(height: u32) -> String {
    if let Some((_, label)) = RESOLUTION_LABELS.iter().find(|(min, _)| height >= *min) {
        return (*label).to_string();
    }
    if height > 0 {
        format!("{height}p")
    } else {
        AUTO_LABEL.to_string()
    }
}
