// SPDX-License-Identifier: MPL-2.0
//! Playback state synchronizer.
//!
//! Keeps the player's [`PlaybackState`] aligned with what the media output
//! actually does. Two kinds of changes exist:
//!
//! - **Confirmed by notification**: play/pause and position. Commands are
//!   sent to the output, but `is_playing` and `current_time_secs` only change
//!   when the output reports [`OutputEvent::Played`], [`OutputEvent::Paused`]
//!   or [`OutputEvent::TimeUpdate`]. A rejected `play()` therefore never
//!   leaves the UI showing "playing".
//! - **Synchronous**: volume, mute and rate. The output applies them
//!   immediately, so local state is updated alongside the command.

use crate::application::port::{MediaOutput, OutputEvent};
use crate::domain::video::{PlaybackRate, PlaybackState, Volume};

/// Applies playback commands and output notifications to [`PlaybackState`].
#[derive(Debug, Clone, Default)]
pub struct PlaybackSynchronizer {
    state: PlaybackState,
    /// Last play/pause request not yet confirmed by the output.
    requested_playing: Option<bool>,
    /// Last seek target not yet confirmed by a time update.
    pending_seek: Option<f64>,
}

impl PlaybackSynchronizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given volume/mute/rate preferences.
    #[must_use]
    pub fn with_preferences(volume: Volume, muted: bool, rate: PlaybackRate) -> Self {
        Self {
            state: PlaybackState {
                volume,
                is_muted: muted,
                playback_rate: rate,
                ..PlaybackState::default()
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The play/pause request still waiting for confirmation, if any.
    #[must_use]
    pub fn requested_playing(&self) -> Option<bool> {
        self.requested_playing
    }

    /// The seek target still waiting for a time update, if any.
    #[must_use]
    pub fn pending_seek(&self) -> Option<f64> {
        self.pending_seek
    }

    /// Pushes the current volume, mute and rate to `output`.
    ///
    /// Used once when the output is first bound.
    pub fn apply_preferences<O: MediaOutput + ?Sized>(&self, output: &mut O) {
        output.set_volume(self.state.volume.value());
        output.set_muted(self.state.is_muted);
        output.set_playback_rate(self.state.playback_rate.value());
    }

    /// Commands pause if confirmed playing, play otherwise.
    ///
    /// `is_playing` is left untouched until the output confirms.
    pub fn toggle_play<O: MediaOutput + ?Sized>(&mut self, output: &mut O) {
        if self.state.is_playing {
            output.pause();
            self.requested_playing = Some(false);
        } else {
            output.play();
            self.requested_playing = Some(true);
        }
    }

    /// Seeks to `target_secs` clamped to `[0, duration]`.
    ///
    /// Does nothing while the duration is unknown. Returns the clamped target
    /// when a command was issued.
    pub fn seek<O: MediaOutput + ?Sized>(&mut self, output: &mut O, target_secs: f64) -> Option<f64> {
        if !self.state.has_duration() || target_secs.is_nan() {
            tracing::debug!(target_secs, "seek ignored, duration unknown");
            return None;
        }
        let clamped = target_secs.clamp(0.0, self.state.duration_secs);
        output.seek_to(clamped);
        self.pending_seek = Some(clamped);
        Some(clamped)
    }

    /// Seeks relative to the confirmed position.
    pub fn seek_by<O: MediaOutput + ?Sized>(&mut self, output: &mut O, delta_secs: f64) -> Option<f64> {
        let target = self.state.current_time_secs + delta_secs;
        self.seek(output, target)
    }

    /// Sets the volume (clamped to `[0, 1]`).
    ///
    /// A positive volume while muted also unmutes, on the output and locally.
    pub fn set_volume<O: MediaOutput + ?Sized>(&mut self, output: &mut O, volume: f32) -> Volume {
        let volume = Volume::new(volume);
        output.set_volume(volume.value());
        self.state.volume = volume;

        if !volume.is_silent() && self.state.is_muted {
            output.set_muted(false);
            self.state.is_muted = false;
        }
        volume
    }

    /// Flips mute. The volume level is left as is.
    pub fn toggle_mute<O: MediaOutput + ?Sized>(&mut self, output: &mut O) -> bool {
        let muted = !self.state.is_muted;
        output.set_muted(muted);
        self.state.is_muted = muted;
        muted
    }

    /// Sets the playback rate (clamped).
    pub fn set_playback_rate<O: MediaOutput + ?Sized>(
        &mut self,
        output: &mut O,
        rate: f64,
    ) -> PlaybackRate {
        let rate = PlaybackRate::new(rate);
        output.set_playback_rate(rate.value());
        self.state.playback_rate = rate;
        rate
    }

    /// Applies an output notification. Returns true if the state changed.
    ///
    /// `nominal_length_secs` replaces a missing or invalid reported duration.
    pub fn handle_output_event(&mut self, event: OutputEvent, nominal_length_secs: f64) -> bool {
        let before = self.state;
        match event {
            OutputEvent::TimeUpdate(time) => {
                if time.is_finite() {
                    self.state.current_time_secs = self.clamp_to_duration(time);
                }
                self.pending_seek = None;
            }
            OutputEvent::LoadedMetadata(duration) => {
                self.state.duration_secs = match duration {
                    Some(d) if d.is_finite() && d > 0.0 => d,
                    _ if nominal_length_secs.is_finite() => nominal_length_secs.max(0.0),
                    _ => 0.0,
                };
                self.state.current_time_secs = self.clamp_to_duration(self.state.current_time_secs);
            }
            OutputEvent::Played => {
                self.state.is_playing = true;
                self.requested_playing = None;
            }
            OutputEvent::Paused => {
                self.state.is_playing = false;
                self.requested_playing = None;
            }
        }
        self.state != before
    }

    /// Forgets position, duration and pending requests for a new source.
    ///
    /// Volume, mute and rate carry over.
    pub fn reset_media(&mut self) {
        self.state.current_time_secs = 0.0;
        self.state.duration_secs = 0.0;
        self.state.is_playing = false;
        self.requested_playing = None;
        self.pending_seek = None;
    }

    fn clamp_to_duration(&self, time: f64) -> f64 {
        if self.state.has_duration() {
            time.clamp(0.0, self.state.duration_secs)
        } else {
            time.max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, OutputCall, RecordingOutput};

    fn with_duration(duration: f64) -> PlaybackSynchronizer {
        let mut sync = PlaybackSynchronizer::new();
        sync.handle_output_event(OutputEvent::LoadedMetadata(Some(duration)), 0.0);
        sync
    }

    #[test]
    fn toggle_play_waits_for_confirmation() {
        let mut sync = with_duration(100.0);
        let mut output = RecordingOutput::default();

        sync.toggle_play(&mut output);
        assert_eq!(output.take_calls(), vec![OutputCall::Play]);
        assert!(!sync.state().is_playing);
        assert_eq!(sync.requested_playing(), Some(true));

        assert!(sync.handle_output_event(OutputEvent::Played, 0.0));
        assert!(sync.state().is_playing);
        assert_eq!(sync.requested_playing(), None);

        sync.toggle_play(&mut output);
        assert_eq!(output.take_calls(), vec![OutputCall::Pause]);
        assert!(sync.state().is_playing);
    }

    #[test]
    fn rejected_play_leaves_state_paused() {
        let mut sync = with_duration(100.0);
        let mut output = RecordingOutput::default();

        sync.toggle_play(&mut output);
        // No Played notification arrives.
        assert!(!sync.state().is_playing);

        // A second toggle retries play rather than pausing.
        sync.toggle_play(&mut output);
        assert_eq!(output.take_calls(), vec![OutputCall::Play, OutputCall::Play]);
    }

    #[test]
    fn seek_clamps_to_media_bounds() {
        let mut sync = with_duration(100.0);
        let mut output = RecordingOutput::default();

        assert_eq!(sync.seek(&mut output, -5.0), Some(0.0));
        assert_eq!(sync.seek(&mut output, 500.0), Some(100.0));
        assert_eq!(
            output.take_calls(),
            vec![OutputCall::SeekTo(0.0), OutputCall::SeekTo(100.0)]
        );
    }

    #[test]
    fn seek_does_not_move_position_until_time_update() {
        let mut sync = with_duration(100.0);
        let mut output = RecordingOutput::default();

        sync.seek(&mut output, 42.0);
        assert_abs_diff_eq!(sync.state().current_time_secs, 0.0);
        assert_eq!(sync.pending_seek(), Some(42.0));

        sync.handle_output_event(OutputEvent::TimeUpdate(41.5), 0.0);
        assert_abs_diff_eq!(sync.state().current_time_secs, 41.5);
        assert_eq!(sync.pending_seek(), None);
    }

    #[test]
    fn seek_without_duration_is_a_no_op() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();

        assert_eq!(sync.seek(&mut output, 10.0), None);
        assert!(output.calls.is_empty());
    }

    #[test]
    fn seek_by_uses_confirmed_position() {
        let mut sync = with_duration(100.0);
        let mut output = RecordingOutput::default();
        sync.handle_output_event(OutputEvent::TimeUpdate(95.0), 0.0);

        assert_eq!(sync.seek_by(&mut output, 10.0), Some(100.0));
        assert_eq!(sync.seek_by(&mut output, -10.0), Some(85.0));
    }

    #[test]
    fn set_volume_is_idempotent() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();

        sync.set_volume(&mut output, 0.5);
        let first = *sync.state();
        sync.set_volume(&mut output, 0.5);

        assert_eq!(*sync.state(), first);
        assert_abs_diff_eq!(sync.state().volume.value(), 0.5);
    }

    #[test]
    fn positive_volume_unmutes() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();
        sync.toggle_mute(&mut output);
        output.take_calls();

        sync.set_volume(&mut output, 0.3);
        assert!(!sync.state().is_muted);
        assert_eq!(
            output.take_calls(),
            vec![OutputCall::SetVolume(0.3), OutputCall::SetMuted(false)]
        );
    }

    #[test]
    fn zero_volume_keeps_mute() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();
        sync.toggle_mute(&mut output);

        sync.set_volume(&mut output, 0.0);
        assert!(sync.state().is_muted);
    }

    #[test]
    fn volume_out_of_range_is_clamped() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();

        assert_abs_diff_eq!(sync.set_volume(&mut output, 1.7).value(), 1.0);
        assert_abs_diff_eq!(sync.set_volume(&mut output, -0.2).value(), 0.0);
    }

    #[test]
    fn toggle_mute_keeps_volume_level() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();
        sync.set_volume(&mut output, 0.6);

        assert!(sync.toggle_mute(&mut output));
        assert_abs_diff_eq!(sync.state().volume.value(), 0.6);
        assert!(!sync.toggle_mute(&mut output));
    }

    #[test]
    fn playback_rate_updates_synchronously() {
        let mut sync = PlaybackSynchronizer::new();
        let mut output = RecordingOutput::default();

        sync.set_playback_rate(&mut output, 1.5);
        assert_abs_diff_eq!(sync.state().playback_rate.value(), 1.5);
        assert_eq!(output.calls, vec![OutputCall::SetPlaybackRate(1.5)]);
    }

    #[test]
    fn missing_duration_falls_back_to_nominal_length() {
        let mut sync = PlaybackSynchronizer::new();
        sync.handle_output_event(OutputEvent::LoadedMetadata(None), 120.0);
        assert_abs_diff_eq!(sync.state().duration_secs, 120.0);

        sync.handle_output_event(OutputEvent::LoadedMetadata(Some(f64::INFINITY)), 90.0);
        assert_abs_diff_eq!(sync.state().duration_secs, 90.0);
    }

    #[test]
    fn time_update_is_clamped_to_duration() {
        let mut sync = with_duration(60.0);
        sync.handle_output_event(OutputEvent::TimeUpdate(61.2), 0.0);
        assert_abs_diff_eq!(sync.state().current_time_secs, 60.0);
    }

    #[test]
    fn reset_media_keeps_preferences() {
        let mut sync =
            PlaybackSynchronizer::with_preferences(Volume::new(0.4), true, PlaybackRate::new(1.25));
        sync.handle_output_event(OutputEvent::LoadedMetadata(Some(30.0)), 0.0);
        sync.handle_output_event(OutputEvent::Played, 0.0);

        sync.reset_media();
        let state = sync.state();
        assert!(!state.is_playing);
        assert!(!state.has_duration());
        assert!(state.is_muted);
        assert_abs_diff_eq!(state.volume.value(), 0.4);
        assert_abs_diff_eq!(state.playback_rate.value(), 1.25);
    }
}
