// SPDX-License-Identifier: MPL-2.0
//! Player component: routes user input to the playback core and exposes a
//! snapshot for rendering.
//!
//! The component follows the "state down, messages up" pattern: the host
//! feeds [`Message`]s into [`Player::handle`], drains adapter notifications
//! with [`Player::process_pending`], keeps the listeners from
//! [`Player::subscriptions`] registered, and renders [`Player::snapshot`]
//! after each update. Side effects the host owns (persisting preferences,
//! fullscreen, reload) come back as an [`Effect`].

mod keyboard;
mod listeners;
mod snapshot;

pub use keyboard::{map_key, FocusTarget, KeyCommand};
pub use listeners::GlobalListener;
pub use snapshot::{HoverTooltip, PlayerSnapshot};

use std::time::Instant;

use iced_core::keyboard::{Key, Modifiers};
use iced_core::Rectangle;

use crate::application::port::{MediaOutput, OutputEvent, SessionEvent, SessionId, StreamingEngine};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, PlayerStateEvent, UserAction};
use crate::domain::error::PlayerError;
use crate::domain::video::{KeyboardSeekStep, VolumeStep, AUTO_LABEL, AUTO_LEVEL_INDEX};
use crate::ui::state::ControlsVisibility;
use crate::video_player::{
    format_position, Notification, NotificationQueue, PlaybackSynchronizer, QualitySelector,
    SessionUpdate, StreamingSessionManager, Timeline, VideoSource,
};

/// Messages accepted by [`Player::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK
    // ═══════════════════════════════════════════════════════════════════════
    TogglePlayback,
    /// Seek to an absolute time in seconds.
    SeekTo(f64),
    /// Seek relative to the confirmed position.
    SeekBy(f64),
    SetVolume(f32),
    ToggleMute,
    SetPlaybackRate(f64),

    // ═══════════════════════════════════════════════════════════════════════
    // QUALITY
    // ═══════════════════════════════════════════════════════════════════════
    SelectQuality(i32),
    ToggleQualityMenu,
    PointerDownOutsideMenu,

    // ═══════════════════════════════════════════════════════════════════════
    // TIMELINE
    // ═══════════════════════════════════════════════════════════════════════
    TimelineHovered { x: f32, track: Rectangle },
    TimelineLeft,
    TimelineClicked { x: f32, track: Rectangle },
    TimelineTouchMoved { x: f32, track: Rectangle },
    TimelineTouchEnded { x: f32, track: Rectangle },

    // ═══════════════════════════════════════════════════════════════════════
    // SURFACE / POINTER
    // ═══════════════════════════════════════════════════════════════════════
    /// Click on the video surface itself.
    SurfaceClicked,
    PointerMoved,
    PointerLeft,

    // ═══════════════════════════════════════════════════════════════════════
    // HOST
    // ═══════════════════════════════════════════════════════════════════════
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
        focus: FocusTarget,
    },
    ControlsTimerFired,
    ToggleFullscreen,
    Reload,
}

/// Side effects for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Volume, mute, rate or quality changed; see [`Player::export_preferences`].
    PersistPreferences,
    ToggleFullscreen,
    /// The user asked to reload after an error.
    Reload,
}

/// The player component.
pub struct Player<O, E>
where
    O: MediaOutput,
    E: StreamingEngine<O>,
{
    source: VideoSource,
    output: O,
    queue: NotificationQueue,
    sessions: StreamingSessionManager<E, O>,
    playback: PlaybackSynchronizer,
    timeline: Timeline,
    quality: QualitySelector,
    controls: ControlsVisibility,
    keyboard_seek_step: KeyboardSeekStep,
    volume_step: VolumeStep,
    mounted: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<O, E> Player<O, E>
where
    O: MediaOutput,
    E: StreamingEngine<O>,
{
    /// Creates an unmounted player. Nothing is commanded until [`Self::mount`].
    #[must_use]
    pub fn new(source: VideoSource, output: O, engine: E, config: &Config) -> Self {
        Self {
            timeline: Timeline::new(source.chapters.clone()),
            source,
            output,
            queue: NotificationQueue::new(),
            sessions: StreamingSessionManager::new(engine, config.session_config()),
            playback: PlaybackSynchronizer::with_preferences(
                config.volume(),
                config.muted(),
                config.playback_rate(),
            ),
            quality: QualitySelector::new(config.preferred_quality.clone()),
            controls: ControlsVisibility::new(config.controls_hide_delay()),
            keyboard_seek_step: config.keyboard_seek_step(),
            volume_step: config.volume_step(),
            mounted: false,
            diagnostics: None,
        }
    }

    /// Attaches a diagnostics handle for activity logging.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Subscribes to the output, applies stored preferences and binds the
    /// source.
    ///
    /// # Errors
    ///
    /// Returns the surfaced error when the streaming engine is unavailable.
    /// The player stays mounted and shows the error.
    pub fn mount(&mut self, now: Instant) -> Result<(), PlayerError> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.output.subscribe(self.queue.output_notifier());
        self.playback.apply_preferences(&mut self.output);
        self.controls.rearm(now);
        self.log_state(PlayerStateEvent::Mounted);

        for chapter in self.source.invalid_chapters() {
            tracing::warn!(
                title = %chapter.title,
                start = chapter.start,
                end = chapter.end,
                "chapter outside video length"
            );
        }
        self.bind_source()
    }

    /// Releases every listener and the streaming session.
    ///
    /// The output is unsubscribed before the session is destroyed, and
    /// notifications still queued are discarded.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.output.unsubscribe();
        self.teardown_session();
        self.controls.cancel();
        self.quality.close_menu();
        self.timeline.pointer_left();
        let discarded = self.queue.drain().len();
        if discarded > 0 {
            tracing::debug!(discarded, "discarded notifications on unmount");
        }
        self.log_state(PlayerStateEvent::Unmounted);
    }

    /// Replaces the source. A different URL tears down the current session
    /// before a new one is created.
    ///
    /// While mounted, the output is unsubscribed before the old session is
    /// destroyed and every notification queued for the old media is
    /// discarded, so nothing reported for the previous source reaches the
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns the surfaced error when the streaming engine is unavailable.
    pub fn set_source(&mut self, source: VideoSource) -> Result<(), PlayerError> {
        let url_changed = source.source_url != self.source.source_url;
        self.timeline = Timeline::new(source.chapters.clone());
        self.source = source;
        if !url_changed {
            return Ok(());
        }

        self.log_action(UserAction::LoadSource {
            url: self.source.source_url.clone(),
        });
        self.quality.clear();
        self.playback.reset_media();
        if !self.mounted {
            return Ok(());
        }

        self.output.unsubscribe();
        self.teardown_session();
        let discarded = self.queue.drain().len();
        if discarded > 0 {
            tracing::debug!(discarded, "discarded notifications for replaced source");
        }
        self.output.subscribe(self.queue.output_notifier());
        self.bind_source()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn bind_source(&mut self) -> Result<(), PlayerError> {
        let previous = self.sessions.session_id();
        let result = self.sessions.bind(
            self.source.source_url.as_deref(),
            &mut self.output,
            &self.queue,
        );
        let current = self.sessions.session_id();

        if previous != current {
            if let Some(id) = previous {
                self.quality.clear();
                self.log_state(PlayerStateEvent::SessionDestroyed { session: id.value() });
            }
            if let Some(id) = current {
                self.log_state(PlayerStateEvent::SessionCreated { session: id.value() });
            }
        }
        if let Err(error) = &result {
            self.log_error(error);
        }
        result
    }

    fn teardown_session(&mut self) {
        if let Some(id) = self.sessions.session_id() {
            self.sessions.teardown();
            self.quality.clear();
            self.log_state(PlayerStateEvent::SessionDestroyed { session: id.value() });
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // NOTIFICATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Applies every queued adapter notification in receipt order.
    ///
    /// Returns true if anything visible changed.
    pub fn process_pending(&mut self, now: Instant) -> bool {
        let notifications = self.queue.drain();
        if !self.mounted {
            return false;
        }

        let mut changed = false;
        for notification in notifications {
            changed |= match notification {
                Notification::Output(event) => self.apply_output_event(event, now),
                Notification::Session(id, event) => self.apply_session_event(id, event),
            };
        }
        changed
    }

    fn apply_output_event(&mut self, event: OutputEvent, now: Instant) -> bool {
        let was_playing = self.playback.state().is_playing;
        let changed = self
            .playback
            .handle_output_event(event, self.source.video_length);
        let state = *self.playback.state();

        if state.is_playing != was_playing {
            self.controls.rearm(now);
            let position_secs = state.current_time_secs;
            self.log_state(if state.is_playing {
                PlayerStateEvent::PlaybackStarted { position_secs }
            } else {
                PlayerStateEvent::PlaybackPaused { position_secs }
            });
        }
        if let OutputEvent::LoadedMetadata(_) = event {
            self.log_state(PlayerStateEvent::MetadataLoaded {
                duration_secs: state.duration_secs,
            });
        }
        changed
    }

    fn apply_session_event(&mut self, id: SessionId, event: SessionEvent) -> bool {
        let had_error = self.sessions.error().is_some();
        let update = self.sessions.handle_event(id, event);
        if had_error && self.sessions.error().is_none() {
            self.log_state(PlayerStateEvent::ErrorCleared);
        }

        match update {
            SessionUpdate::Stale | SessionUpdate::None => false,
            SessionUpdate::Levels {
                levels,
                current_level,
            } => {
                let preferred = self.quality.rebuild(&levels, current_level);
                self.log_state(PlayerStateEvent::LevelsUpdated {
                    count: levels.len(),
                });
                if let Some(index) = preferred {
                    tracing::debug!(index, "applying preferred quality");
                    self.select_quality(index);
                }
                true
            }
            SessionUpdate::LevelSwitched(index) => {
                self.quality.level_switched(index);
                self.log_state(PlayerStateEvent::LevelSwitched { level: index });
                true
            }
            SessionUpdate::Recovering(error) => {
                self.log_error(&error);
                true
            }
            SessionUpdate::Destroyed(error) => {
                self.quality.clear();
                self.log_error(&error);
                self.log_state(PlayerStateEvent::SessionDestroyed { session: id.value() });
                true
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MESSAGES
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles one message at `now`.
    #[allow(clippy::too_many_lines)]
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        if !self.mounted {
            tracing::debug!(?message, "ignoring message while unmounted");
            return Effect::None;
        }

        match message {
            // ═══════════════════════════════════════════════════════════════
            // PLAYBACK
            // ═══════════════════════════════════════════════════════════════
            Message::TogglePlayback | Message::SurfaceClicked => {
                self.log_action(UserAction::TogglePlayback);
                self.playback.toggle_play(&mut self.output);
                Effect::None
            }
            Message::SeekTo(target_secs) => {
                self.seek_to(target_secs);
                Effect::None
            }
            Message::SeekBy(delta_secs) => {
                if let Some(position_secs) = self.playback.seek_by(&mut self.output, delta_secs) {
                    self.log_action(UserAction::Seek { position_secs });
                }
                Effect::None
            }
            Message::SetVolume(volume) => {
                let applied = self.playback.set_volume(&mut self.output, volume);
                self.log_action(UserAction::SetVolume {
                    volume: applied.value(),
                });
                Effect::PersistPreferences
            }
            Message::ToggleMute => {
                self.log_action(UserAction::ToggleMute);
                self.playback.toggle_mute(&mut self.output);
                Effect::PersistPreferences
            }
            Message::SetPlaybackRate(rate) => {
                let applied = self.playback.set_playback_rate(&mut self.output, rate);
                self.log_action(UserAction::SetPlaybackRate {
                    rate: applied.value(),
                });
                Effect::PersistPreferences
            }

            // ═══════════════════════════════════════════════════════════════
            // QUALITY
            // ═══════════════════════════════════════════════════════════════
            Message::SelectQuality(index) => {
                self.log_action(UserAction::SelectQuality { level: index });
                if self.select_quality(index) {
                    Effect::PersistPreferences
                } else {
                    self.quality.close_menu();
                    Effect::None
                }
            }
            Message::ToggleQualityMenu => {
                self.log_action(UserAction::ToggleQualityMenu);
                self.quality.toggle_menu();
                Effect::None
            }
            Message::PointerDownOutsideMenu => {
                self.quality.close_menu();
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════════
            // TIMELINE
            // ═══════════════════════════════════════════════════════════════
            Message::TimelineHovered { x, track } => {
                let duration = self.display_duration();
                self.timeline.pointer_moved(x, track, duration);
                Effect::None
            }
            Message::TimelineTouchMoved { x, track } => {
                let duration = self.display_duration();
                self.timeline.touch_moved(x, track, duration);
                Effect::None
            }
            Message::TimelineLeft => {
                self.timeline.pointer_left();
                Effect::None
            }
            Message::TimelineClicked { x, track } => {
                let duration = self.display_duration();
                let target = self.timeline.clicked(x, track, duration);
                self.seek_to(target);
                Effect::None
            }
            Message::TimelineTouchEnded { x, track } => {
                let duration = self.display_duration();
                let target = self.timeline.touch_ended(x, track, duration);
                self.seek_to(target);
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════════
            // SURFACE / POINTER
            // ═══════════════════════════════════════════════════════════════
            Message::PointerMoved => {
                self.controls.rearm(now);
                Effect::None
            }
            Message::PointerLeft => {
                if self.controls.pointer_left(self.playback.state().is_playing) {
                    self.log_state(PlayerStateEvent::ControlsHidden);
                }
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════════
            // HOST
            // ═══════════════════════════════════════════════════════════════
            Message::KeyPressed {
                key,
                modifiers,
                focus,
            } => match map_key(&key, modifiers, focus) {
                Some(command) => {
                    let message = self.message_for(command);
                    self.handle(message, now)
                }
                None => Effect::None,
            },
            Message::ControlsTimerFired => {
                if self.controls.tick(now, self.playback.state().is_playing) {
                    self.log_state(PlayerStateEvent::ControlsHidden);
                }
                Effect::None
            }
            Message::ToggleFullscreen => {
                self.log_action(UserAction::ToggleFullscreen);
                Effect::ToggleFullscreen
            }
            Message::Reload => {
                self.log_action(UserAction::Reload);
                Effect::Reload
            }
        }
    }

    fn message_for(&self, command: KeyCommand) -> Message {
        let volume = self.playback.state().volume;
        match command {
            KeyCommand::TogglePlayback => Message::TogglePlayback,
            KeyCommand::SeekBackward => Message::SeekBy(-self.keyboard_seek_step.value()),
            KeyCommand::SeekForward => Message::SeekBy(self.keyboard_seek_step.value()),
            KeyCommand::VolumeUp => Message::SetVolume(volume.increase(self.volume_step).value()),
            KeyCommand::VolumeDown => {
                Message::SetVolume(volume.decrease(self.volume_step).value())
            }
            KeyCommand::ToggleMute => Message::ToggleMute,
            KeyCommand::ToggleFullscreen => Message::ToggleFullscreen,
        }
    }

    fn seek_to(&mut self, target_secs: f64) {
        if let Some(position_secs) = self.playback.seek(&mut self.output, target_secs) {
            self.log_action(UserAction::Seek { position_secs });
        }
    }

    /// Commands the live session. Returns false without a session.
    fn select_quality(&mut self, index: i32) -> bool {
        match self.sessions.session_mut() {
            Some(session) => {
                self.quality.select::<O, _>(session, index);
                true
            }
            None => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    /// Listeners the host must hold right now. Empty once unmounted.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<GlobalListener> {
        if !self.mounted {
            return Vec::new();
        }
        let mut listeners = vec![GlobalListener::Keyboard];
        if self.quality.is_menu_open() {
            listeners.push(GlobalListener::PointerDownOutside);
        }
        if let Some(deadline) = self.controls.deadline() {
            listeners.push(GlobalListener::ControlsTimer(deadline));
        }
        listeners
    }

    /// Reported duration once known, the nominal length before.
    #[must_use]
    pub fn display_duration(&self) -> f64 {
        let state = self.playback.state();
        if state.has_duration() {
            state.duration_secs
        } else if self.source.video_length.is_finite() {
            self.source.video_length.max(0.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        let state = self.playback.state();
        let duration_secs = self.display_duration();
        let hover = self.timeline.hover_preview();
        let error = self.sessions.error().cloned();
        let blocked_by_error = error.as_ref().is_some_and(|e| !e.recoverable());

        PlayerSnapshot {
            current_time_secs: state.current_time_secs,
            duration_secs,
            is_playing: state.is_playing,
            volume: state.volume.value(),
            is_muted: state.is_muted,
            playback_rate: state.playback_rate.value(),
            progress_ratio: Timeline::progress_ratio(state.current_time_secs, duration_secs),
            formatted_position: format_position(state.current_time_secs, duration_secs),
            hover_tooltip: HoverTooltip::from_preview(&hover, duration_secs),
            chapter_segments: self.timeline.segments(duration_secs),
            hover,
            quality_levels: self.quality.levels().to_vec(),
            current_level: self.quality.selected(),
            quality_menu_open: self.quality.is_menu_open(),
            error,
            controls_visible: self.controls.is_visible() && !blocked_by_error,
            mute_icon_dimmed: state.is_effectively_silent(),
        }
    }

    /// Writes volume, mute, rate and selected quality into `config`.
    pub fn export_preferences(&self, config: &mut Config) {
        let state = self.playback.state();
        config.volume = Some(state.volume.value());
        config.muted = Some(state.is_muted);
        config.playback_rate = Some(state.playback_rate.value());
        if self.quality.is_available() {
            config.preferred_quality = if self.quality.selected() == AUTO_LEVEL_INDEX {
                Some(AUTO_LABEL.to_ascii_lowercase())
            } else {
                self.quality.selected_label().map(str::to_string)
            };
        }
    }

    #[must_use]
    pub fn source(&self) -> &VideoSource {
        &self.source
    }

    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    #[must_use]
    pub fn session(&self) -> Option<&E::Session> {
        self.sessions.session()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.sessions.session_id()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DIAGNOSTICS
    // ═══════════════════════════════════════════════════════════════════════

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_state(&self, state: PlayerStateEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_state(state);
        }
    }

    fn log_error(&self, error: &PlayerError) {
        if let Some(handle) = &self.diagnostics {
            handle.log_error(ErrorEvent::from(error));
        }
    }
}

impl<O, E> Drop for Player<O, E>
where
    O: MediaOutput,
    E: StreamingEngine<O>,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
