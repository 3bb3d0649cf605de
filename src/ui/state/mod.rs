// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that only concerns presentation, kept apart from the playback core.

pub mod controls_visibility;

pub use controls_visibility::ControlsVisibility;
