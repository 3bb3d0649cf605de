// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for player activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::error::PlayerError;

/// User-initiated actions worth correlating with later failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Source
    // ==========================================================================
    /// A new source was bound (or the current one cleared).
    LoadSource {
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Reload,

    // ==========================================================================
    // Playback
    // ==========================================================================
    TogglePlayback,
    Seek {
        position_secs: f64,
    },
    SetVolume {
        volume: f32,
    },
    ToggleMute,
    SetPlaybackRate {
        rate: f64,
    },

    // ==========================================================================
    // Quality / presentation
    // ==========================================================================
    SelectQuality {
        level: i32,
    },
    ToggleQualityMenu,
    ToggleFullscreen,
}

/// Player state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlayerStateEvent {
    Mounted,
    Unmounted,
    SessionCreated { session: u64 },
    SessionDestroyed { session: u64 },
    PlaybackStarted { position_secs: f64 },
    PlaybackPaused { position_secs: f64 },
    MetadataLoaded { duration_secs: f64 },
    LevelsUpdated { count: usize },
    LevelSwitched { level: i32 },
    /// A successful manifest parse superseded the surfaced error.
    ErrorCleared,
    ControlsHidden,
}

/// A surfaced player error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    /// Stable identifier of the error category (its i18n key).
    pub key: String,
    pub message: String,
    pub recoverable: bool,
}

impl From<&PlayerError> for ErrorEvent {
    fn from(error: &PlayerError) -> Self {
        Self {
            key: error.kind().i18n_key().to_string(),
            message: error.message().to_string(),
            recoverable: error.recoverable(),
        }
    }
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time, converted to an offset on export.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    PlayerState {
        state: PlayerStateEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PlayerErrorKind;

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::Seek {
                position_secs: 12.5,
            },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"seek\""));
        assert!(json.contains("\"position_secs\":12.5"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn player_state_deserializes_from_json() {
        let json = r#"{"type":"player_state","state":{"state":"level_switched","level":2}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::PlayerState {
                state: PlayerStateEvent::LevelSwitched { level: 2 }
            }
        );
    }

    #[test]
    fn error_event_carries_key_and_recoverability() {
        let error = PlayerError::new(PlayerErrorKind::Network);
        let event = ErrorEvent::from(&error);
        assert_eq!(event.key, "error-player-network");
        assert_eq!(event.message, "Network error while loading HLS stream");
        assert!(event.recoverable);
    }
}
