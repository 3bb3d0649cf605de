// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`player`] - The player component, its messages and render snapshot
//! - [`state`] - Reusable UI state (controls auto-hide)

pub mod player;
pub mod state;
