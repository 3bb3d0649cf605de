// SPDX-License-Identifier: MPL-2.0
//! Global listeners the host must keep registered for the player.

use std::time::Instant;

/// A listener outside the player's own widget tree.
///
/// The set returned by [`Player::subscriptions`](super::Player::subscriptions)
/// is declarative: the host registers exactly these and releases any it holds
/// that are no longer listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalListener {
    /// Window-level key presses, routed as `Message::KeyPressed`.
    Keyboard,
    /// Pointer presses anywhere outside the quality menu, routed as
    /// `Message::PointerDownOutsideMenu`.
    PointerDownOutside,
    /// A one-shot timer firing `Message::ControlsTimerFired` at the instant.
    ControlsTimer(Instant),
}
