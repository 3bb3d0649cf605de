// SPDX-License-Identifier: MPL-2.0
//! Timeline interaction: pointer/touch position to media time, hover
//! preview and chapter lookup.
//!
//! Positions are in the same coordinate space as the track bounds, so the
//! host can pass window coordinates together with the track's layout
//! rectangle.

use iced_core::Rectangle;

use crate::domain::video::{progress_ratio, Chapter};

/// Maps a horizontal pointer position on `track` to a time in `[0, duration]`.
///
/// A track with no width maps every position to 0.
///
/// # Examples
///
/// ```
/// use adaptive_player::video_player::time_from_position;
/// use iced_core::Rectangle;
///
/// let track = Rectangle { x: 100.0, y: 0.0, width: 200.0, height: 6.0 };
/// assert_eq!(time_from_position(200.0, track, 60.0), 30.0);
/// assert_eq!(time_from_position(50.0, track, 60.0), 0.0);
/// ```
#[must_use]
pub fn time_from_position(client_x: f32, track: Rectangle, duration_secs: f64) -> f64 {
    if track.width <= 0.0 || !duration_secs.is_finite() || duration_secs <= 0.0 {
        return 0.0;
    }
    let fraction = f64::from((client_x - track.x) / track.width);
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0) * duration_secs
}

/// Index of the first chapter whose `[start, end]` contains `time`.
#[must_use]
pub fn chapter_index_at(time_secs: f64, chapters: &[Chapter]) -> Option<usize> {
    chapters.iter().position(|chapter| chapter.contains(time_secs))
}

/// The first chapter whose `[start, end]` contains `time`.
#[must_use]
pub fn chapter_at(time_secs: f64, chapters: &[Chapter]) -> Option<&Chapter> {
    chapter_index_at(time_secs, chapters).map(|index| &chapters[index])
}

/// Transient preview shown while the pointer hovers the timeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverPreview {
    pub time_secs: f64,
    pub chapter: Option<Chapter>,
    pub is_active: bool,
}

/// One chapter drawn as a fraction of the track.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterSegment {
    pub title: String,
    /// Left edge as a fraction of the track width.
    pub start_ratio: f64,
    pub width_ratio: f64,
    /// True while the hover preview points into this chapter.
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hover {
    time_secs: f64,
    chapter: Option<usize>,
}

/// Hover state and chapter overlay for one timeline track.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    chapters: Vec<Chapter>,
    hover: Option<Hover>,
}

impl Timeline {
    #[must_use]
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            hover: None,
        }
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Updates the hover preview for a pointer (or touch) at `client_x`.
    pub fn pointer_moved(&mut self, client_x: f32, track: Rectangle, duration_secs: f64) {
        let time_secs = time_from_position(client_x, track, duration_secs);
        self.hover = Some(Hover {
            time_secs,
            chapter: chapter_index_at(time_secs, &self.chapters),
        });
    }

    /// Touch drags behave like pointer moves.
    pub fn touch_moved(&mut self, client_x: f32, track: Rectangle, duration_secs: f64) {
        self.pointer_moved(client_x, track, duration_secs);
    }

    pub fn pointer_left(&mut self) {
        self.hover = None;
    }

    /// Resolves a click to a seek target and clears the hover preview.
    #[must_use]
    pub fn clicked(&mut self, client_x: f32, track: Rectangle, duration_secs: f64) -> f64 {
        self.hover = None;
        time_from_position(client_x, track, duration_secs)
    }

    /// Resolves a lifted touch to a seek target and clears the hover preview.
    #[must_use]
    pub fn touch_ended(&mut self, client_x: f32, track: Rectangle, duration_secs: f64) -> f64 {
        self.clicked(client_x, track, duration_secs)
    }

    #[must_use]
    pub fn hover_preview(&self) -> HoverPreview {
        match self.hover {
            Some(hover) => HoverPreview {
                time_secs: hover.time_secs,
                chapter: hover.chapter.map(|index| self.chapters[index].clone()),
                is_active: true,
            },
            None => HoverPreview::default(),
        }
    }

    /// Chapter spans as fractions of `duration_secs`. Empty while the
    /// duration is unknown.
    #[must_use]
    pub fn segments(&self, duration_secs: f64) -> Vec<ChapterSegment> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Vec::new();
        }
        let hovered = self.hover.and_then(|hover| hover.chapter);
        self.chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| ChapterSegment {
                title: chapter.title.clone(),
                start_ratio: chapter.start / duration_secs,
                width_ratio: chapter.duration() / duration_secs,
                highlighted: hovered == Some(index),
            })
            .collect()
    }

    /// Played fraction of the track, in `[0, 1]`.
    #[must_use]
    pub fn progress_ratio(current_secs: f64, duration_secs: f64) -> f64 {
        progress_ratio(current_secs, duration_secs)
    }
}
