// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the playback core depends on.

pub mod port;
