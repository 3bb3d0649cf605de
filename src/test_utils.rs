// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and recording port doubles.
//!
//! This module re-exports the `approx` crate's assertion macros for float
//! comparison, plus in-memory [`MediaOutput`] and [`StreamingEngine`]
//! implementations that record every command they receive.

use std::cell::RefCell;
use std::rc::Rc;

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{
    EngineLevel, MediaOutput, SessionConfig, SessionEvent, SessionId, StreamingEngine,
    StreamingSession,
};
use crate::video_player::notifications::{OutputNotifier, SessionNotifier};

/// A command received by [`RecordingOutput`].
#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    Play,
    Pause,
    SeekTo(f64),
    SetVolume(f32),
    SetMuted(bool),
    SetPlaybackRate(f64),
    Subscribe,
    Unsubscribe,
}

/// Media output that only records commands.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub calls: Vec<OutputCall>,
    pub notifier: Option<OutputNotifier>,
}

impl RecordingOutput {
    /// Returns and clears the recorded calls.
    pub fn take_calls(&mut self) -> Vec<OutputCall> {
        std::mem::take(&mut self.calls)
    }
}

impl MediaOutput for RecordingOutput {
    fn play(&mut self) {
        self.calls.push(OutputCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(OutputCall::Pause);
    }

    fn seek_to(&mut self, time_secs: f64) {
        self.calls.push(OutputCall::SeekTo(time_secs));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(OutputCall::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(OutputCall::SetMuted(muted));
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.calls.push(OutputCall::SetPlaybackRate(rate));
    }

    fn subscribe(&mut self, notifier: OutputNotifier) {
        self.calls.push(OutputCall::Subscribe);
        self.notifier = Some(notifier);
    }

    fn unsubscribe(&mut self) {
        self.calls.push(OutputCall::Unsubscribe);
        self.notifier = None;
    }
}

/// A command received by a [`FakeSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCall {
    Create,
    LoadSource(String),
    AttachMedia,
    DetachMedia,
    Destroy,
    SetCurrentLevel(i32),
    StartLoad,
    RecoverMediaError,
}

/// Shared record of everything the fake engine and its sessions saw.
#[derive(Debug, Default)]
pub struct EngineLog {
    pub calls: Vec<(SessionId, SessionCall)>,
    pub notifiers: Vec<SessionNotifier>,
    pub configs: Vec<SessionConfig>,
}

impl EngineLog {
    /// Calls recorded for one session, in order.
    pub fn calls_for(&self, session: SessionId) -> Vec<SessionCall> {
        self.calls
            .iter()
            .filter(|(id, _)| *id == session)
            .map(|(_, call)| call.clone())
            .collect()
    }

    /// Every call ignoring the session id, in order.
    pub fn all_calls(&self) -> Vec<SessionCall> {
        self.calls.iter().map(|(_, call)| call.clone()).collect()
    }

    /// Emits `event` as the `nth` created session.
    pub fn emit(&self, nth: usize, event: SessionEvent) {
        self.notifiers[nth].notify(event);
    }
}

pub struct FakeSession {
    id: SessionId,
    log: Rc<RefCell<EngineLog>>,
    levels: Vec<EngineLevel>,
    current_level: i32,
}

impl FakeSession {
    fn record(&self, call: SessionCall) {
        self.log.borrow_mut().calls.push((self.id, call));
    }
}

impl StreamingSession<RecordingOutput> for FakeSession {
    fn load_source(&mut self, url: &str) {
        self.record(SessionCall::LoadSource(url.to_string()));
    }

    fn attach_media(&mut self, _output: &mut RecordingOutput) {
        self.record(SessionCall::AttachMedia);
    }

    fn detach_media(&mut self) {
        self.record(SessionCall::DetachMedia);
    }

    fn destroy(&mut self) {
        self.record(SessionCall::Destroy);
    }

    fn levels(&self) -> Vec<EngineLevel> {
        self.levels.clone()
    }

    fn current_level(&self) -> i32 {
        self.current_level
    }

    fn set_current_level(&mut self, index: i32) {
        self.current_level = index;
        self.record(SessionCall::SetCurrentLevel(index));
    }

    fn start_load(&mut self) {
        self.record(SessionCall::StartLoad);
    }

    fn recover_media_error(&mut self) {
        self.record(SessionCall::RecoverMediaError);
    }
}

/// Engine whose sessions report a fixed level set.
pub struct FakeEngine {
    pub supported: bool,
    pub levels: Vec<EngineLevel>,
    pub log: Rc<RefCell<EngineLog>>,
}

impl FakeEngine {
    pub fn new(levels: Vec<EngineLevel>) -> Self {
        Self {
            supported: true,
            levels,
            log: Rc::default(),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new(Vec::new())
        }
    }
}

impl StreamingEngine<RecordingOutput> for FakeEngine {
    type Session = FakeSession;

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create_session(&mut self, config: &SessionConfig, events: SessionNotifier) -> FakeSession {
        let id = events.session();
        {
            let mut log = self.log.borrow_mut();
            log.calls.push((id, SessionCall::Create));
            log.configs.push(*config);
            log.notifiers.push(events);
        }
        FakeSession {
            id,
            log: Rc::clone(&self.log),
            levels: self.levels.clone(),
            current_level: crate::domain::video::AUTO_LEVEL_INDEX,
        }
    }
}

/// Three renditions: 360p, 720p, 1080p.
pub fn sample_levels() -> Vec<EngineLevel> {
    [(360, 640, 800_000), (720, 1280, 2_500_000), (1080, 1920, 5_000_000)]
        .into_iter()
        .map(|(height, width, bitrate_bps)| EngineLevel {
            height,
            width,
            bitrate_bps,
        })
        .collect()
}
