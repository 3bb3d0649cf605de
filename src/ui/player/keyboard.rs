// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the player.
//!
//! | Key            | Command                    |
//! |----------------|----------------------------|
//! | Space          | toggle play/pause          |
//! | Left / Right   | seek back / forward        |
//! | Up / Down      | volume up / down           |
//! | `m`            | toggle mute                |
//! | `f`            | toggle fullscreen          |

use iced_core::keyboard::{key::Named, Key, Modifiers};

/// Where keyboard focus currently sits in the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Focus is on the player or on nothing that consumes keys.
    #[default]
    Player,
    /// A text input owns the keyboard.
    TextInput,
    /// A select/dropdown owns the keyboard.
    Select,
}

impl FocusTarget {
    /// Returns true if key presses should reach the player.
    #[must_use]
    pub fn allows_shortcuts(self) -> bool {
        matches!(self, Self::Player)
    }
}

/// A player command triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
}

/// Maps a key press to a player command.
///
/// Nothing is mapped while a form control has focus. Character shortcuts are
/// ignored when the command (Ctrl/Cmd) or Alt modifier is held so they do
/// not shadow host shortcuts.
#[must_use]
pub fn map_key(key: &Key, modifiers: Modifiers, focus: FocusTarget) -> Option<KeyCommand> {
    if !focus.allows_shortcuts() {
        return None;
    }

    match key {
        Key::Named(Named::Space) => Some(KeyCommand::TogglePlayback),
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::SeekBackward),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::SeekForward),
        Key::Named(Named::ArrowUp) => Some(KeyCommand::VolumeUp),
        Key::Named(Named::ArrowDown) => Some(KeyCommand::VolumeDown),
        Key::Character(c) if !modifiers.command() && !modifiers.alt() => {
            match c.as_str() {
                "m" | "M" => Some(KeyCommand::ToggleMute),
                "f" | "F" => Some(KeyCommand::ToggleFullscreen),
                _ => None,
            }
        }
        _ => None,
    }
}
