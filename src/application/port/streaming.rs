// SPDX-License-Identifier: MPL-2.0
//! Adaptive-streaming engine port definition.
//!
//! Manifest parsing, segment fetching, and bitrate estimation are delegated
//! to an external engine. This module defines the small capability set the
//! player relies on.
//!
//! # Design Notes
//!
//! - A session is bound to exactly one media output of type `O`.
//! - Sessions report back through the [`SessionNotifier`] they receive at
//!   creation; every notification is tagged with the session's [`SessionId`]
//!   so late events from a destroyed session can be recognised and dropped.
//! - A destroyed session must never receive another command. The session
//!   manager enforces this by dropping its handle right after `destroy()`.

use crate::video_player::notifications::SessionNotifier;
use std::fmt;

/// Identity of one streaming session, unique per player instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Options handed to the engine when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Allow the engine to demux in a background worker.
    pub enable_worker: bool,
    /// Favor latency over stability.
    pub low_latency_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enable_worker: crate::config::DEFAULT_ENABLE_WORKER,
            low_latency_mode: crate::config::DEFAULT_LOW_LATENCY_MODE,
        }
    }
}

/// A rendition as reported by the engine. Zero means "not reported".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineLevel {
    pub height: u32,
    pub width: u32,
    pub bitrate_bps: u64,
}

/// Error category reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineErrorKind {
    Network,
    Media,
    /// Any other category (mux, key system, internal, ...).
    Other(String),
}

/// An error notification from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub fatal: bool,
    pub details: String,
}

impl EngineError {
    #[must_use]
    pub fn fatal(kind: EngineErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: true,
            details: details.into(),
        }
    }

    #[must_use]
    pub fn non_fatal(kind: EngineErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            fatal: false,
            details: details.into(),
        }
    }
}

/// Notifications emitted by a streaming session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The manifest was parsed; levels are now available.
    ManifestParsed,
    /// The engine replaced its level set.
    LevelsUpdated(Vec<EngineLevel>),
    /// The engine switched to the given level index.
    LevelSwitched(i32),
    /// Fatal or non-fatal engine error.
    Error(EngineError),
}

/// Port for one live streaming session bound to an output of type `O`.
pub trait StreamingSession<O: ?Sized> {
    /// Starts loading the manifest at `url`.
    fn load_source(&mut self, url: &str);

    /// Binds the session to the media output.
    fn attach_media(&mut self, output: &mut O);

    /// Unbinds the session from its media output.
    fn detach_media(&mut self);

    /// Releases every engine resource. No further calls follow.
    fn destroy(&mut self);

    /// Currently known renditions, in engine index order.
    fn levels(&self) -> Vec<EngineLevel>;

    /// Index of the active level, or `-1` while adaptive.
    fn current_level(&self) -> i32;

    /// Switches to `index`; `-1` hands selection back to the engine.
    fn set_current_level(&mut self, index: i32);

    /// Resumes segment loading after a network failure.
    fn start_load(&mut self);

    /// Attempts recovery after a media/decode failure.
    fn recover_media_error(&mut self);
}

/// Port for the engine factory.
pub trait StreamingEngine<O: ?Sized> {
    type Session: StreamingSession<O>;

    /// Returns false if the engine cannot run in the current environment.
    fn is_supported(&self) -> bool;

    /// Creates a session that reports through `events`.
    fn create_session(&mut self, config: &SessionConfig, events: SessionNotifier)
        -> Self::Session;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_increase() {
        let first = SessionId::new(1);
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 2);
    }

    #[test]
    fn session_id_display() {
        assert_eq!(SessionId::new(7).to_string(), "session#7");
    }

    #[test]
    fn engine_error_constructors_set_fatal_flag() {
        assert!(EngineError::fatal(EngineErrorKind::Network, "x").fatal);
        assert!(!EngineError::non_fatal(EngineErrorKind::Media, "y").fatal);
    }
}
