// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent,
    PlayerStateEvent, UserAction,
};

/// Channel slots between handles and the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_state(&self, state: PlayerStateEvent) {
        self.send(DiagnosticEventKind::PlayerState { state });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Event with a timestamp relative to the start of collection.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

#[derive(Debug, Clone, Serialize)]
struct DiagnosticReport {
    collection_duration_ms: u64,
    event_count: usize,
    events: Vec<SerializableEvent>,
}

/// Central collector for diagnostic events.
///
/// Receives events through a bounded channel and stores them in a
/// [`CircularBuffer`]; old events are evicted once capacity is reached.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer.
    ///
    /// Call this from the host's update loop.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Millisecond offsets fit in u64
    fn build_report(&self) -> DiagnosticReport {
        let started = self.collection_started_at;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp_ms: event.timestamp.saturating_duration_since(started).as_millis()
                    as u64,
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            collection_duration_ms: started.elapsed().as_millis() as u64,
            event_count: events.len(),
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_land_in_buffer_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::TogglePlayback);
        handle.log_state(PlayerStateEvent::Mounted);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(CHANNEL_CAPACITY + 25) {
            handle.log_action(UserAction::ToggleMute);
        }
        collector.process_pending();
        assert_eq!(collector.len(), CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_lists_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_action(UserAction::SelectQuality { level: 1 });
        handle.log_state(PlayerStateEvent::LevelSwitched { level: 1 });
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["event_count"], 2);
        assert_eq!(value["events"][0]["type"], "user_action");
        assert_eq!(value["events"][0]["action"]["action"], "select_quality");
        assert_eq!(value["events"][1]["state"]["state"], "level_switched");
    }

    #[test]
    fn clear_discards_buffered_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_action(UserAction::Reload);
        collector.process_pending();
        collector.clear();
        assert!(collector.is_empty());
    }
}
