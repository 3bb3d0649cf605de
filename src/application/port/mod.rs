// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The playback core only talks to these traits, never to a concrete media
//! element or streaming library.
//!
//! # Available Ports
//!
//! - [`media_output`]: The media element that renders and owns the clock
//! - [`streaming`]: The adaptive-streaming engine and its sessions
//!
//! # Design Notes
//!
//! - All commands are fire-and-forget; confirmations arrive as notifications
//! - No `async fn`; notifications are queued and drained on the caller's thread

pub mod media_output;
pub mod streaming;

// Re-export main types for convenience
pub use media_output::{MediaOutput, OutputEvent};
pub use streaming::{
    EngineError, EngineErrorKind, EngineLevel, SessionConfig, SessionEvent, SessionId,
    StreamingEngine, StreamingSession,
};
