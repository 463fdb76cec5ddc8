// SPDX-License-Identifier: MPL-2.0
//! Player capability port.
//!
//! This module defines the [`Player`] trait for the media engine the
//! transport bar controls. Infrastructure adapters (a decoder backend, a
//! platform media framework) implement this trait.
//!
//! # Design Notes
//!
//! - The player is the **single source of truth** for position, volume, and
//!   mute; everything the widget shows is derived from it.
//! - Notifications ([`PlayerEvent`]) are payload-free: handlers query the
//!   player instead of trusting event payloads, so stale callbacks cannot
//!   smuggle in outdated positions.
//! - Commands are fire-and-forget. A player in [`PlayerStatus::Halted`] or
//!   [`PlayerStatus::Unknown`] is terminal: callers suppress commands rather
//!   than expecting errors back.

pub mod subscription;

#[cfg(test)]
pub(crate) mod mock;

pub use subscription::{playback_events, PlaybackSessionId, PlayerEventSender, SubscriptionEvent};

use std::time::Duration;

// =============================================================================
// Status and notifications
// =============================================================================

/// Transport condition reported by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Status not yet determined (media still loading).
    #[default]
    Unknown,
    /// Unrecoverable player error; the player will never leave this status.
    Halted,
    /// Media loaded, duration known, playback not yet started.
    Ready,
    Playing,
    Paused,
    Stopped,
}

impl PlayerStatus {
    /// Returns true unless the status is terminal (`Halted` or `Unknown`).
    ///
    /// Transport commands against a non-operable player are suppressed and
    /// never retried.
    #[must_use]
    pub fn is_operable(self) -> bool {
        !matches!(self, Self::Unknown | Self::Halted)
    }

    /// Returns true if a play command would start or resume playback.
    #[must_use]
    pub fn is_resumable(self) -> bool {
        matches!(self, Self::Paused | Self::Ready | Self::Stopped)
    }
}

/// Requested number of playback cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleCount {
    Finite(u32),
    /// Loop forever; the player restarts internally and never reports
    /// end of media.
    Indefinite,
}

/// Notifications the widget subscribes to once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Media loaded; total duration is now queryable.
    Ready,
    /// Playback started or resumed.
    Playing,
    /// Playback paused.
    Paused,
    /// Playback reached the end of the media item.
    EndOfMedia,
    /// Playback position advanced one tick.
    TimeAdvanced,
}

// =============================================================================
// Player trait
// =============================================================================

/// Port for the media engine driven by the transport controls.
///
/// # Thread Safety
///
/// Implementations must be `Send` for use across threads. The player is
/// **not** required to be `Sync`; all commands are issued from the UI update
/// loop (see [`subscription`] for how backend callbacks get there).
pub trait Player: Send {
    /// Current transport condition.
    fn status(&self) -> PlayerStatus;

    /// Current playback position.
    fn current_time(&self) -> Duration;

    /// Total media duration, or `None` while it is still unknown.
    fn total_duration(&self) -> Option<Duration>;

    /// Whether audio output is muted.
    fn is_muted(&self) -> bool;

    /// Starts or resumes playback. Idempotent when already playing.
    fn play(&mut self);

    /// Pauses playback at the current position. Idempotent when paused.
    fn pause(&mut self);

    /// Jumps to the given position; the next progress tick reflects it.
    fn seek(&mut self, target: Duration);

    /// Sets audio volume (0.0 to 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Sets the mute flag without touching the volume setting.
    fn set_muted(&mut self, muted: bool);

    /// Sets how many times the media plays through.
    fn set_cycle_count(&mut self, cycles: CycleCount);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn status(&self) -> PlayerStatus {
        (**self).status()
    }

    fn current_time(&self) -> Duration {
        (**self).current_time()
    }

    fn total_duration(&self) -> Option<Duration> {
        (**self).total_duration()
    }

    fn is_muted(&self) -> bool {
        (**self).is_muted()
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn seek(&mut self, target: Duration) {
        (**self).seek(target);
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn set_cycle_count(&mut self, cycles: CycleCount) {
        (**self).set_cycle_count(cycles);
    }
}
