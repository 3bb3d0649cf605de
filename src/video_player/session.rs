// SPDX-License-Identifier: MPL-2.0
//! Streaming session lifecycle.
//!
//! At most one session is live per player. Binding a new source always
//! destroys the previous session before the next one is created, and every
//! session gets a fresh [`SessionId`] so notifications it emits after
//! destruction are recognised as stale and dropped.

use std::marker::PhantomData;

use crate::application::port::{
    EngineError, EngineErrorKind, EngineLevel, MediaOutput, SessionConfig, SessionEvent,
    SessionId, StreamingEngine, StreamingSession,
};
use crate::domain::error::{PlayerError, PlayerErrorKind};

use super::notifications::NotificationQueue;

/// What the caller should propagate after [`StreamingSessionManager::handle_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// The event came from a session that is no longer live.
    Stale,
    /// Nothing for the caller to do.
    None,
    /// A new level list is available, with the engine's current level.
    Levels {
        levels: Vec<EngineLevel>,
        current_level: i32,
    },
    /// The engine switched renditions.
    LevelSwitched(i32),
    /// A recoverable error was surfaced and a recovery command issued.
    Recovering(PlayerError),
    /// An unrecoverable error destroyed the session.
    Destroyed(PlayerError),
}

struct ActiveSession<S> {
    id: SessionId,
    handle: S,
}

/// Owns the live streaming session for one player.
pub struct StreamingSessionManager<E, O>
where
    E: StreamingEngine<O>,
    O: MediaOutput + ?Sized,
{
    engine: E,
    config: SessionConfig,
    source_url: Option<String>,
    active: Option<ActiveSession<E::Session>>,
    last_id: SessionId,
    error: Option<PlayerError>,
    _output: PhantomData<fn(&mut O)>,
}

impl<E, O> StreamingSessionManager<E, O>
where
    E: StreamingEngine<O>,
    O: MediaOutput + ?Sized,
{
    #[must_use]
    pub fn new(engine: E, config: SessionConfig) -> Self {
        Self {
            engine,
            config,
            source_url: None,
            active: None,
            last_id: SessionId::new(0),
            error: None,
            _output: PhantomData,
        }
    }

    /// Binds `source_url` to `output`.
    ///
    /// The previous session (if any) is detached and destroyed first. An empty
    /// or missing URL leaves the player without a session. Binding the URL
    /// that is already live is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerErrorKind::UnsupportedEnvironment`] if the engine cannot
    /// run here. The error is also kept for [`Self::error`].
    pub fn bind(
        &mut self,
        source_url: Option<&str>,
        output: &mut O,
        queue: &NotificationQueue,
    ) -> Result<(), PlayerError> {
        let source_url = source_url.filter(|url| !url.is_empty());
        if self.active.is_some() && self.source_url.as_deref() == source_url {
            return Ok(());
        }

        self.teardown();
        self.source_url = source_url.map(str::to_string);

        let Some(url) = source_url else {
            tracing::debug!("no source bound");
            return Ok(());
        };

        if !self.engine.is_supported() {
            let error = PlayerError::new(PlayerErrorKind::UnsupportedEnvironment);
            tracing::warn!(%error, "streaming engine unavailable");
            self.error = Some(error.clone());
            return Err(error);
        }

        let id = self.last_id.next();
        self.last_id = id;
        let mut handle = self
            .engine
            .create_session(&self.config, queue.session_notifier(id));
        self.error = None;
        handle.load_source(url);
        handle.attach_media(output);
        tracing::info!(session = %id, url, "streaming session created");

        self.active = Some(ActiveSession { id, handle });
        Ok(())
    }

    /// Detaches and destroys the live session, if any.
    pub fn teardown(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.handle.detach_media();
            active.handle.destroy();
            tracing::info!(session = %active.id, "streaming session destroyed");
        }
    }

    /// Applies a session notification tagged with `id`.
    pub fn handle_event(&mut self, id: SessionId, event: SessionEvent) -> SessionUpdate {
        let Some(active) = self.active.as_mut().filter(|active| active.id == id) else {
            tracing::debug!(session = %id, ?event, "dropping notification from stale session");
            return SessionUpdate::Stale;
        };

        match event {
            SessionEvent::ManifestParsed => {
                self.error = None;
                SessionUpdate::Levels {
                    levels: active.handle.levels(),
                    current_level: active.handle.current_level(),
                }
            }
            SessionEvent::LevelsUpdated(levels) => SessionUpdate::Levels {
                levels,
                current_level: active.handle.current_level(),
            },
            SessionEvent::LevelSwitched(index) => SessionUpdate::LevelSwitched(index),
            SessionEvent::Error(error) => self.handle_error(error),
        }
    }

    fn handle_error(&mut self, error: EngineError) -> SessionUpdate {
        if !error.fatal {
            tracing::debug!(kind = ?error.kind, details = %error.details, "non-fatal engine error");
            return SessionUpdate::None;
        }

        match error.kind {
            EngineErrorKind::Network => {
                let surfaced = PlayerError::new(PlayerErrorKind::Network);
                tracing::warn!(details = %error.details, "fatal network error, restarting load");
                if let Some(active) = self.active.as_mut() {
                    active.handle.start_load();
                }
                self.error = Some(surfaced.clone());
                SessionUpdate::Recovering(surfaced)
            }
            EngineErrorKind::Media => {
                let surfaced = PlayerError::new(PlayerErrorKind::Media);
                tracing::warn!(details = %error.details, "fatal media error, attempting recovery");
                if let Some(active) = self.active.as_mut() {
                    active.handle.recover_media_error();
                }
                self.error = Some(surfaced.clone());
                SessionUpdate::Recovering(surfaced)
            }
            EngineErrorKind::Other(category) => {
                let surfaced = PlayerError::new(PlayerErrorKind::Fatal);
                tracing::error!(%category, details = %error.details, "fatal engine error");
                if let Some(mut active) = self.active.take() {
                    active.handle.destroy();
                    tracing::info!(session = %active.id, "streaming session destroyed");
                }
                self.error = Some(surfaced.clone());
                SessionUpdate::Destroyed(surfaced)
            }
        }
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&E::Session> {
        self.active.as_ref().map(|active| &active.handle)
    }

    pub fn session_mut(&mut self) -> Option<&mut E::Session> {
        self.active.as_mut().map(|active| &mut active.handle)
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Returns true if `id` names the live session.
    #[must_use]
    pub fn is_current(&self, id: SessionId) -> bool {
        self.session_id() == Some(id)
    }

    /// The last surfaced error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&PlayerError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }
}

impl<E, O> Drop for StreamingSessionManager<E, O>
where
    E: StreamingEngine<O>,
    O: MediaOutput + ?Sized,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        sample_levels, FakeEngine, RecordingOutput, SessionCall,
    };
    use crate::video_player::notifications::Notification;

    type Manager = StreamingSessionManager<FakeEngine, RecordingOutput>;

    fn manager() -> (Manager, std::rc::Rc<std::cell::RefCell<crate::test_utils::EngineLog>>) {
        let engine = FakeEngine::new(sample_levels());
        let log = std::rc::Rc::clone(&engine.log);
        (Manager::new(engine, SessionConfig::default()), log)
    }

    #[test]
    fn bind_creates_loads_and_attaches() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        manager
            .bind(Some("https://cdn/a.m3u8"), &mut output, &queue)
            .expect("bind should succeed");

        let id = manager.session_id().expect("session should be live");
        assert_eq!(
            log.borrow().calls_for(id),
            vec![
                SessionCall::Create,
                SessionCall::LoadSource("https://cdn/a.m3u8".into()),
                SessionCall::AttachMedia,
            ]
        );
        assert_eq!(log.borrow().configs, vec![SessionConfig::default()]);
    }

    #[test]
    fn rebinding_destroys_previous_session_first() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind a");
        let first = manager.session_id().expect("first session");
        manager.bind(Some("b.m3u8"), &mut output, &queue).expect("bind b");
        let second = manager.session_id().expect("second session");

        assert_ne!(first, second);
        let calls = log.borrow().all_calls();
        let destroy_at = calls
            .iter()
            .position(|call| *call == SessionCall::Destroy)
            .expect("first session destroyed");
        let second_create_at = calls
            .iter()
            .rposition(|call| *call == SessionCall::Create)
            .expect("second session created");
        assert!(destroy_at < second_create_at);
        assert_eq!(
            log.borrow().calls_for(first)[3..],
            [SessionCall::DetachMedia, SessionCall::Destroy]
        );
    }

    #[test]
    fn rebinding_same_url_keeps_session() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("rebind");

        assert_eq!(log.borrow().notifiers.len(), 1);
    }

    #[test]
    fn empty_url_tears_down_without_new_session() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        manager.bind(Some(""), &mut output, &queue).expect("clear");

        assert!(manager.session().is_none());
        assert_eq!(log.borrow().notifiers.len(), 1);
        assert_eq!(log.borrow().all_calls().last(), Some(&SessionCall::Destroy));
    }

    #[test]
    fn unsupported_engine_surfaces_error_without_session() {
        let mut manager: Manager = StreamingSessionManager::new(
            FakeEngine::unsupported(),
            SessionConfig::default(),
        );
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        let err = manager
            .bind(Some("a.m3u8"), &mut output, &queue)
            .expect_err("bind should fail");

        assert_eq!(err.kind(), PlayerErrorKind::UnsupportedEnvironment);
        assert!(manager.session().is_none());
        assert_eq!(manager.error(), Some(&err));
    }

    #[test]
    fn stale_notifications_are_dropped() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();

        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind a");
        manager.bind(Some("b.m3u8"), &mut output, &queue).expect("bind b");

        log.borrow().emit(
            0,
            SessionEvent::Error(EngineError::fatal(EngineErrorKind::Network, "late")),
        );
        for notification in queue.drain() {
            let Notification::Session(id, event) = notification else {
                panic!("unexpected output notification");
            };
            assert_eq!(manager.handle_event(id, event), SessionUpdate::Stale);
        }
        assert!(manager.error().is_none());
        assert!(!log.borrow().all_calls().contains(&SessionCall::StartLoad));
    }

    #[test]
    fn fatal_network_error_restarts_load_once() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        let id = manager.session_id().expect("live");

        let update = manager.handle_event(
            id,
            SessionEvent::Error(EngineError::fatal(EngineErrorKind::Network, "timeout")),
        );

        assert!(matches!(update, SessionUpdate::Recovering(_)));
        assert_eq!(
            manager.error().map(PlayerError::kind),
            Some(PlayerErrorKind::Network)
        );
        let starts = log
            .borrow()
            .calls_for(id)
            .into_iter()
            .filter(|call| *call == SessionCall::StartLoad)
            .count();
        assert_eq!(starts, 1);
        assert!(manager.session().is_some());
    }

    #[test]
    fn fatal_media_error_attempts_recovery() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        let id = manager.session_id().expect("live");

        manager.handle_event(
            id,
            SessionEvent::Error(EngineError::fatal(EngineErrorKind::Media, "decode")),
        );

        assert_eq!(
            manager.error().map(PlayerError::kind),
            Some(PlayerErrorKind::Media)
        );
        assert_eq!(
            log.borrow().calls_for(id).last(),
            Some(&SessionCall::RecoverMediaError)
        );
    }

    #[test]
    fn unknown_fatal_error_destroys_session() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        let id = manager.session_id().expect("live");

        let update = manager.handle_event(
            id,
            SessionEvent::Error(EngineError::fatal(
                EngineErrorKind::Other("muxError".into()),
                "bad segment",
            )),
        );

        assert!(matches!(update, SessionUpdate::Destroyed(_)));
        assert!(manager.session().is_none());
        assert_eq!(
            manager.error().map(PlayerError::kind),
            Some(PlayerErrorKind::Fatal)
        );
        assert_eq!(log.borrow().calls_for(id).last(), Some(&SessionCall::Destroy));

        // Later notifications from the destroyed session are ignored.
        assert_eq!(
            manager.handle_event(id, SessionEvent::LevelSwitched(1)),
            SessionUpdate::Stale
        );
    }

    #[test]
    fn non_fatal_errors_are_ignored() {
        let (mut manager, _log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        let id = manager.session_id().expect("live");

        let update = manager.handle_event(
            id,
            SessionEvent::Error(EngineError::non_fatal(EngineErrorKind::Network, "retrying")),
        );
        assert_eq!(update, SessionUpdate::None);
        assert!(manager.error().is_none());
    }

    #[test]
    fn manifest_parsed_reports_levels_and_clears_error() {
        let (mut manager, _log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");
        let id = manager.session_id().expect("live");
        manager.handle_event(
            id,
            SessionEvent::Error(EngineError::fatal(EngineErrorKind::Media, "x")),
        );

        let update = manager.handle_event(id, SessionEvent::ManifestParsed);
        assert_eq!(
            update,
            SessionUpdate::Levels {
                levels: sample_levels(),
                current_level: -1,
            }
        );
        assert!(manager.error().is_none());
    }

    #[test]
    fn drop_destroys_live_session() {
        let (mut manager, log) = manager();
        let mut output = RecordingOutput::default();
        let queue = NotificationQueue::new();
        manager.bind(Some("a.m3u8"), &mut output, &queue).expect("bind");

        drop(manager);
        assert_eq!(log.borrow().all_calls().last(), Some(&SessionCall::Destroy));
    }
}
