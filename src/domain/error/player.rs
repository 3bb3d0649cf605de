// SPDX-License-Identifier: MPL-2.0
//! Errors surfaced to the presentation layer by the player.

use std::fmt;

/// Category of a surfaced player error.
///
/// Only one error is live at a time; a newer error replaces the older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerErrorKind {
    /// The streaming engine cannot run in this environment. No session exists.
    UnsupportedEnvironment,

    /// Fatal network failure; loading is resumed by the engine.
    Network,

    /// Fatal media/decode failure; one recovery attempt per occurrence.
    Media,

    /// Any other fatal failure. The session has been destroyed.
    Fatal,
}

impl PlayerErrorKind {
    /// Returns true if playback is expected to continue without a reload.
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::Network | Self::Media)
    }

    /// Returns the i18n message key for this error kind.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::UnsupportedEnvironment => "error-player-unsupported-environment",
            Self::Network => "error-player-network",
            Self::Media => "error-player-media",
            Self::Fatal => "error-player-fatal",
        }
    }

    /// Default English message shown in the error overlay.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::UnsupportedEnvironment => "HLS is not supported in this environment",
            Self::Network => "Network error while loading HLS stream",
            Self::Media => "Media error while playing HLS stream",
            Self::Fatal => "Fatal error in HLS player",
        }
    }
}

/// An error surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerError {
    kind: PlayerErrorKind,
    message: String,
}

impl PlayerError {
    /// Creates an error carrying the default message for `kind`.
    #[must_use]
    pub fn new(kind: PlayerErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// Creates an error with a custom message.
    #[must_use]
    pub fn with_message(kind: PlayerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlayerErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the error does not require a reload.
    #[must_use]
    pub fn recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PlayerError {}
