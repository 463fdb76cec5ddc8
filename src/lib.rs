// SPDX-License-Identifier: MPL-2.0
//! `iced_mediabar` is a media playback transport bar for the Iced GUI toolkit.
//!
//! It wraps an external media decoder behind the [`player::Player`] capability
//! and provides transport controls (play/pause/replay, seeking, mute/volume)
//! with a synchronized time display. The crate owns the playback state machine
//! and the slider synchronization logic; decoding and frame rendering stay
//! with the host application.

#![doc(html_root_url = "https://docs.rs/iced_mediabar/0.1.0")]

pub mod config;
pub mod controls;
pub mod diagnostics;
pub mod error;
pub mod player;
pub mod ui;

#[cfg(test)]
mod test_utils;
