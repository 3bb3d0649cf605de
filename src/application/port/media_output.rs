// SPDX-License-Identifier: MPL-2.0
//! Media output port definition.
//!
//! This module defines the [`MediaOutput`] trait: the element that actually
//! renders video and owns the playback clock. Infrastructure adapters (a
//! browser `<video>` element binding, a native pipeline) implement it.
//!
//! # Design Notes
//!
//! - Every method is a fire-and-forget command. Results arrive later as
//!   [`OutputEvent`]s through the [`OutputNotifier`] handed to
//!   [`MediaOutput::subscribe`].
//! - Methods are not `async` and never block the caller.

use crate::video_player::notifications::OutputNotifier;

/// Notifications emitted by a media output, delivered in receipt order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputEvent {
    /// The playback clock advanced (or jumped after a seek).
    TimeUpdate(f64),

    /// Metadata is available. `None` (or a non-finite/zero value) means the
    /// output could not report a duration.
    LoadedMetadata(Option<f64>),

    /// Playback actually started.
    Played,

    /// Playback actually paused.
    Paused,
}

/// Port for the media output that renders the stream.
///
/// # Lifecycle
///
/// 1. `subscribe()` once when the player mounts
/// 2. Issue commands; observe [`OutputEvent`]s
/// 3. `unsubscribe()` when the player unmounts, before anything is destroyed
pub trait MediaOutput {
    /// Requests playback. May be rejected (e.g. autoplay policy); only a
    /// later [`OutputEvent::Played`] confirms it.
    fn play(&mut self);

    /// Requests a pause; confirmed by [`OutputEvent::Paused`].
    fn pause(&mut self);

    /// Jumps to `time_secs`. The output may adjust the position (keyframe
    /// snapping); the effective time arrives as [`OutputEvent::TimeUpdate`].
    fn seek_to(&mut self, time_secs: f64);

    /// Sets the output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Sets the mute flag.
    fn set_muted(&mut self, muted: bool);

    /// Sets the playback rate.
    fn set_playback_rate(&mut self, rate: f64);

    /// Starts delivering notifications to `notifier`, replacing any previous one.
    fn subscribe(&mut self, notifier: OutputNotifier);

    /// Stops delivering notifications.
    fn unsubscribe(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaOutput) {}

    #[test]
    fn loaded_metadata_carries_optional_duration() {
        assert_ne!(
            OutputEvent::LoadedMetadata(Some(10.0)),
            OutputEvent::LoadedMetadata(None)
        );
    }
}
