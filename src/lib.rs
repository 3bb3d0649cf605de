// SPDX-License-Identifier: MPL-2.0
//! `adaptive_player` is the playback core of an adaptively-streamed (HLS)
//! video player.
//!
//! It binds a stream to a media output through a pluggable streaming
//! engine, mirrors the output's playback state, maps pointer and keyboard
//! input to playback commands, and exposes a render snapshot for whatever
//! presentation layer hosts it.
//!
//! The media output and the streaming engine are ports (see
//! [`application::port`]); the host supplies the implementations.

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;
pub mod video_player;

#[cfg(test)]
mod test_utils;
