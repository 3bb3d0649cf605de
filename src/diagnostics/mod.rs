// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for player activity.
//!
//! Components log user actions, state transitions and surfaced errors
//! through a cloneable [`DiagnosticsHandle`]. The [`DiagnosticsCollector`]
//! keeps the most recent events in a memory-bounded [`CircularBuffer`] and
//! can export them as a JSON report.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, PlayerStateEvent, UserAction};
