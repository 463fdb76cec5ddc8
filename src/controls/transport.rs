// SPDX-License-Identifier: MPL-2.0
//! Transport button state machine.
//!
//! Manages play/pause/replay with clear state transitions:
//! - player notifications move the machine between Playing/Paused/Ready
//! - end of media arms a one-shot replay that restarts from zero
//! - a press on a Halted or Unknown player is a permanent no-op
//!
//! The button label is exposed as [`TransportLabel`], decoupled from any
//! concrete widget; the view shell maps it to text.

use crate::player::{Player, PlayerStatus};
use std::time::Duration;

/// Label the transport button should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportLabel {
    #[default]
    Play,
    Pause,
    Replay,
}

impl TransportLabel {
    /// Button text for this label.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Pause => "PAUSE",
            Self::Replay => "REPLAY",
        }
    }
}

/// The controller's view of the player's transport condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Unknown,
    Halted,
    Ready,
    Playing,
    Paused,
    Stopped,
    /// Media ended; the next play action restarts from zero.
    EndedAwaitingReplay,
}

impl PlaybackState {
    fn from_status(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Unknown => Self::Unknown,
            PlayerStatus::Halted => Self::Halted,
            PlayerStatus::Ready => Self::Ready,
            PlayerStatus::Playing => Self::Playing,
            PlayerStatus::Paused => Self::Paused,
            PlayerStatus::Stopped => Self::Stopped,
        }
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[must_use]
    pub fn awaits_replay(self) -> bool {
        matches!(self, Self::EndedAwaitingReplay)
    }
}

/// Play/pause/replay state machine for one loaded media item.
///
/// Owns [`PlaybackState`], the replay arming flag, and the button label.
/// Transitions happen only through the notification handlers and
/// [`press`](Self::press); everything shown in the UI is derived from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportController {
    state: PlaybackState,
    replay_armed: bool,
    label: TransportLabel,
}

impl TransportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn label(&self) -> TransportLabel {
        self.label
    }

    #[must_use]
    pub fn is_replay_armed(&self) -> bool {
        self.replay_armed
    }

    /// Player became ready. The session captures the total duration and
    /// refreshes the indicator; here only readiness is recorded.
    pub fn on_ready(&mut self) {
        self.state = PlaybackState::Ready;
    }

    /// Player entered Playing.
    pub fn on_playing<P: Player + ?Sized>(&mut self, player: &mut P) {
        self.enter_playing(player);
    }

    /// Player entered Paused.
    ///
    /// Ignored while replay is armed: the controller's own end-of-media
    /// pause notifies back through here, and honoring it would stomp the
    /// REPLAY label before the user ever sees it.
    pub fn on_paused<P: Player + ?Sized>(&mut self, player: &mut P) {
        if self.replay_armed {
            return;
        }
        self.enter_paused(player);
    }

    /// Playback reached the end of the media item.
    ///
    /// Arms the one-shot replay and pauses. A duplicate end-of-media signal
    /// finds the flag already set and is ignored.
    pub fn on_end_of_media<P: Player + ?Sized>(&mut self, player: &mut P) {
        if self.replay_armed {
            return;
        }
        self.replay_armed = true;
        player.pause();
        self.label = TransportLabel::Replay;
        self.state = PlaybackState::EndedAwaitingReplay;
    }

    /// Applies one press of the transport button.
    ///
    /// Returns true when the player was commanded, so the caller knows to
    /// refresh the position indicator. A press against a Halted or Unknown
    /// player does nothing and leaves the state untouched.
    pub fn press<P: Player + ?Sized>(&mut self, player: &mut P) -> bool {
        let status = player.status();
        if !status.is_operable() {
            return false;
        }

        if self.replay_armed {
            self.replay_armed = false;
            player.seek(Duration::ZERO);
            // Re-entrant into the Playing handler: label flips immediately
            // rather than waiting for the notification round-trip.
            self.enter_playing(player);
            return true;
        }

        self.state = PlaybackState::from_status(status);
        if status.is_resumable() {
            player.play();
        } else {
            player.pause();
        }
        true
    }

    /// Disarms the replay after a committed user seek.
    ///
    /// Dragging away from the end of media invalidates the "next play
    /// restarts from zero" premise, so the button returns to plain PLAY.
    pub fn disarm_replay(&mut self) {
        if self.replay_armed {
            self.replay_armed = false;
            self.label = TransportLabel::Play;
            self.state = PlaybackState::Paused;
        }
    }

    /// Clears all per-media state for a newly loaded item.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn enter_playing<P: Player + ?Sized>(&mut self, player: &mut P) {
        // play() is idempotent on an already-playing player.
        player.play();
        self.label = TransportLabel::Pause;
        self.state = PlaybackState::Playing;
    }

    fn enter_paused<P: Player + ?Sized>(&mut self, player: &mut P) {
        player.pause();
        self.label = TransportLabel::Play;
        self.state = PlaybackState::Paused;
    }
}
