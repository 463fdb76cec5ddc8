// SPDX-License-Identifier: MPL-2.0
//! Playback control cluster.
//!
//! Groups the transport state machine, seek synchronization, and volume
//! binding behind one update entry point: [`Message`] in,
//! [`Effect`] out. The host application routes its UI and subscription
//! messages here and renders the bar from the session's state.

pub mod seek;
pub mod time_display;
pub mod transport;
pub mod volume;

pub use seek::SeekSync;
pub use time_display::format_clock;
pub use transport::{PlaybackState, TransportController, TransportLabel};
pub use volume::{VolumeLevel, VolumeSync};

use crate::config::{Config, DEFAULT_VOLUME_LEVEL};
use crate::diagnostics::{ActivityLog, UserAction};
use crate::player::{CycleCount, Player, PlayerEvent};
use std::time::Duration;

/// Messages for the playback control cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// Transport button pressed.
    TransportPressed,
    /// Seek slider dragged to a new 0–100 value.
    SeekDragged(f64),
    /// Seek slider released.
    SeekReleased,
    /// Volume control moved to a new 0–100 value.
    VolumeChanged(f32),
    /// Mute button pressed.
    MuteToggled,
    /// Loop mode toggled.
    LoopToggled,
    /// A player notification, marshalled onto the update loop.
    Player(PlayerEvent),
}

/// Effects produced by cluster updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Audio preferences changed and should be persisted.
    PersistPreferences,
}

/// Playback control session for one loaded media item.
///
/// Owns the player handle and every piece of derived UI state. All
/// mutations go through [`handle`](Self::handle) on the update loop;
/// notifications arrive already marshalled (see
/// [`crate::player::subscription`]), so handlers run inline.
pub struct PlaybackSession<P: Player> {
    player: P,
    transport: TransportController,
    seek: SeekSync,
    volume: VolumeSync,
    /// Total duration, captured once when the player becomes ready and
    /// immutable for this media item.
    media_duration: Option<Duration>,
    loop_enabled: bool,
    activity: ActivityLog,
}

impl<P: Player> PlaybackSession<P> {
    /// Creates a session, applying the configured audio preferences and the
    /// cycle count to the player once.
    pub fn new(player: P, config: &Config) -> Self {
        let volume = VolumeSync::new(
            VolumeLevel::new(config.volume.unwrap_or(DEFAULT_VOLUME_LEVEL)),
            config.muted.unwrap_or(false),
        );
        let loop_enabled = config.loop_playback.unwrap_or(false);

        let mut session = Self {
            player,
            transport: TransportController::new(),
            seek: SeekSync::new(),
            volume,
            media_duration: None,
            loop_enabled,
            activity: ActivityLog::new(),
        };
        session.volume.apply_to_player(&mut session.player);
        session.player.set_cycle_count(cycle_count(loop_enabled));
        session
    }

    /// Handles one cluster message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::TransportPressed => {
                self.activity.record(UserAction::TogglePlayback);
                if self.transport.press(&mut self.player) {
                    self.refresh();
                }
                Effect::None
            }
            Message::SeekDragged(value) => {
                let sought = self.seek.drag(value, self.media_duration, &mut self.player);
                if sought {
                    // A committed seek leaves the end of media behind; an
                    // armed replay no longer applies.
                    self.transport.disarm_replay();
                    self.activity.record(UserAction::SeekMedia {
                        position_secs: self.player.current_time().as_secs_f64(),
                    });
                }
                Effect::None
            }
            Message::SeekReleased => {
                self.seek.release();
                Effect::None
            }
            Message::VolumeChanged(value) => {
                let level = VolumeLevel::new(value);
                self.volume.set_level(level, &mut self.player);
                self.activity.record(UserAction::SetVolume {
                    level: level.value(),
                });
                Effect::PersistPreferences
            }
            Message::MuteToggled => {
                self.volume.toggle_mute(&mut self.player);
                self.activity.record(UserAction::ToggleMute);
                Effect::PersistPreferences
            }
            Message::LoopToggled => {
                self.loop_enabled = !self.loop_enabled;
                self.player.set_cycle_count(cycle_count(self.loop_enabled));
                self.activity.record(UserAction::ToggleLoop);
                Effect::PersistPreferences
            }
            Message::Player(event) => {
                self.apply_player_event(event);
                Effect::None
            }
        }
    }

    /// Synchronizes the indicator and time label from player progress.
    pub fn refresh(&mut self) {
        self.seek
            .refresh(self.player.current_time(), self.media_duration);
    }

    /// Clears per-media state for a newly loaded item.
    ///
    /// Audio preferences (volume, mute, loop) are kept and re-applied to the
    /// player; the armed replay, captured duration, and indicator state are
    /// dropped with the old media.
    pub fn reset_for_new_media(&mut self) {
        self.transport.reset();
        self.seek.reset();
        self.media_duration = None;
        self.volume.apply_to_player(&mut self.player);
        self.player.set_cycle_count(cycle_count(self.loop_enabled));
    }

    /// Current preference snapshot for persistence.
    #[must_use]
    pub fn preferences(&self) -> Config {
        Config {
            volume: Some(self.volume.level().value()),
            muted: Some(self.volume.is_muted()),
            loop_playback: Some(self.loop_enabled),
        }
    }

    #[must_use]
    pub fn transport(&self) -> &TransportController {
        &self.transport
    }

    #[must_use]
    pub fn seek(&self) -> &SeekSync {
        &self.seek
    }

    #[must_use]
    pub fn volume(&self) -> &VolumeSync {
        &self.volume
    }

    #[must_use]
    pub fn media_duration(&self) -> Option<Duration> {
        self.media_duration
    }

    #[must_use]
    pub fn is_loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    #[must_use]
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Direct player access for host-side wiring (loading media, feeding
    /// decoder state). Mutating transport state through here bypasses the
    /// cluster; prefer [`handle`](Self::handle).
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn apply_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Ready => {
                self.media_duration = self.player.total_duration();
                self.transport.on_ready();
                self.refresh();
            }
            PlayerEvent::Playing => self.transport.on_playing(&mut self.player),
            PlayerEvent::Paused => self.transport.on_paused(&mut self.player),
            PlayerEvent::EndOfMedia => {
                // With loop enabled the player cycles internally; end of
                // media never arms the replay.
                if !self.loop_enabled {
                    self.transport.on_end_of_media(&mut self.player);
                }
            }
            PlayerEvent::TimeAdvanced => self.refresh(),
        }
    }
}

fn cycle_count(loop_enabled: bool) -> CycleCount {
    if loop_enabled {
        CycleCount::Indefinite
    } else {
        CycleCount::Finite(1)
    }
}
