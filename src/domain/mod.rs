// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `serde` derives on [`Chapter`](video::Chapter) it depends on
//! nothing but `std`.
//!
//! # Modules
//!
//! - [`error`]: Surfaced player errors ([`PlayerError`](error::PlayerError))
//! - [`ui`]: UI value objects ([`ControlsHideDelay`](ui::ControlsHideDelay))
//! - [`video`]: Playback types ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`PlaybackRate`](video::PlaybackRate),
//!   [`Chapter`](video::Chapter), [`QualityLevel`](video::QualityLevel))

pub mod error;
pub mod ui;
pub mod video;
