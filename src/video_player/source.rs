// SPDX-License-Identifier: MPL-2.0
//! Input contract describing what the player should play.

use serde::{Deserialize, Serialize};

use crate::domain::video::Chapter;

/// What to play: the manifest URL, the nominal length and chapter markers.
///
/// Field names follow the camelCase form used by the hosting page's data,
/// so a JSON payload can be deserialized directly.
///
/// # Examples
///
/// ```
/// use adaptive_player::video_player::VideoSource;
///
/// let source: VideoSource = serde_json::from_str(
///     r#"{"sourceUrl":"https://cdn.example/a.m3u8","videoLength":95.0,
///         "chapters":[{"title":"Intro","start":0.0,"end":10.0}]}"#,
/// ).unwrap();
/// assert_eq!(source.chapters.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    #[serde(default)]
    pub source_url: Option<String>,
    /// Length in seconds used until the output reports the real duration.
    #[serde(default)]
    pub video_length: f64,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl VideoSource {
    #[must_use]
    pub fn new(source_url: impl Into<String>, video_length: f64) -> Self {
        Self {
            source_url: Some(source_url.into()),
            video_length,
            chapters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }

    /// Chapters that do not fit `[0, video_length]` with `start < end`.
    ///
    /// They are still drawn; this is only used for logging.
    pub fn invalid_chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters
            .iter()
            .filter(|chapter| !chapter.is_within(self.video_length))
    }
}
