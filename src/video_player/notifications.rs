// SPDX-License-Identifier: MPL-2.0
//! Notification queue connecting adapters to the playback core.
//!
//! Adapters push [`Notification`]s from their callbacks through cheap,
//! cloneable notifiers; the owner of the [`NotificationQueue`] drains them on
//! its own thread, in receipt order, with [`NotificationQueue::drain`].

use crate::application::port::{OutputEvent, SessionEvent, SessionId};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// A notification waiting to be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Output(OutputEvent),
    Session(SessionId, SessionEvent),
}

/// Handle the media output uses to report [`OutputEvent`]s.
#[derive(Clone, Debug)]
pub struct OutputNotifier {
    tx: Sender<Notification>,
}

impl OutputNotifier {
    /// Queues an event. Silently dropped once the queue is gone.
    pub fn notify(&self, event: OutputEvent) {
        let _ = self.tx.send(Notification::Output(event));
    }
}

/// Handle a streaming session uses to report [`SessionEvent`]s.
///
/// Every event is tagged with the id of the session it was created for.
#[derive(Clone, Debug)]
pub struct SessionNotifier {
    session: SessionId,
    tx: Sender<Notification>,
}

impl SessionNotifier {
    /// Queues an event. Silently dropped once the queue is gone.
    pub fn notify(&self, event: SessionEvent) {
        let _ = self.tx.send(Notification::Session(self.session, event));
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }
}

/// Unbounded FIFO of pending notifications.
#[derive(Debug)]
pub struct NotificationQueue {
    tx: Sender<Notification>,
    rx: Receiver<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    #[must_use]
    pub fn output_notifier(&self) -> OutputNotifier {
        OutputNotifier {
            tx: self.tx.clone(),
        }
    }

    #[must_use]
    pub fn session_notifier(&self, session: SessionId) -> SessionNotifier {
        SessionNotifier {
            session,
            tx: self.tx.clone(),
        }
    }

    /// Takes every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.rx.try_iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
