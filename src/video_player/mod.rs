// SPDX-License-Identifier: MPL-2.0
//! Playback core for an adaptively-streamed video.
//!
//! This module holds the pieces that keep the player consistent with the
//! media output and the streaming engine:
//!
//! - [`session`]: lifecycle of the single live streaming session
//! - [`state`]: confirmed playback state and output commands
//! - [`timeline`]: pointer position to media time, hover and chapters
//! - [`quality`]: rendition list and selection
//! - [`notifications`]: queue carrying adapter notifications to the core
//! - [`time_format`]: clock-style time labels

pub mod notifications;
pub mod quality;
pub mod session;
mod source;
pub mod state;
pub mod time_format;
pub mod timeline;

pub use crate::application::port::SessionConfig;
pub use notifications::{Notification, NotificationQueue, OutputNotifier, SessionNotifier};
pub use quality::QualitySelector;
pub use session::{SessionUpdate, StreamingSessionManager};
pub use source::VideoSource;
pub use state::PlaybackSynchronizer;
pub use time_format::{format_position, format_time};
pub use timeline::{
    chapter_at, chapter_index_at, time_from_position, ChapterSegment, HoverPreview, Timeline,
};
