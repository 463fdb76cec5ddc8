// SPDX-License-Identifier: MPL-2.0
//! Volume control synchronization.
//!
//! One-way live binding: the player volume is recomputed from the control
//! value on every change, `control / 100`. Muting is a separate player-level
//! flag; the control value is never zeroed, so unmuting restores the exact
//! prior level without remembering it anywhere.

use crate::player::Player;

/// Volume control bounds (0–100 scale).
pub mod level_bounds {
    /// Minimum control value.
    pub const MIN: f32 = 0.0;
    /// Maximum control value.
    pub const MAX: f32 = 100.0;
    /// Default control value (80%).
    pub const DEFAULT: f32 = 80.0;
}

/// Control-side volume level, guaranteed to be within 0–100.
///
/// This newtype enforces validity at the type level, making it impossible
/// to push an out-of-range value at the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLevel(f32);

impl VolumeLevel {
    /// Creates a new level, clamping to the valid range.
    #[must_use]
    pub fn new(level: f32) -> Self {
        Self(level.clamp(level_bounds::MIN, level_bounds::MAX))
    }

    /// Returns the control value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Player-side volume: the control value mapped linearly onto 0.0–1.0.
    #[must_use]
    pub fn as_player_volume(self) -> f32 {
        self.0 / level_bounds::MAX
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(level_bounds::DEFAULT)
    }
}

/// One-way binding from the volume control to the player, plus mute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSync {
    level: VolumeLevel,
    muted: bool,
}

impl VolumeSync {
    #[must_use]
    pub fn new(level: VolumeLevel, muted: bool) -> Self {
        Self { level, muted }
    }

    #[must_use]
    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mute button text for the current state.
    #[must_use]
    pub fn mute_label(&self) -> &'static str {
        if self.muted {
            "UNMUTE"
        } else {
            "MUTE"
        }
    }

    /// Applies a control change; the player volume follows immediately.
    pub fn set_level<P: Player + ?Sized>(&mut self, level: VolumeLevel, player: &mut P) {
        self.level = level;
        player.set_volume(level.as_player_volume());
    }

    /// Flips the player-level mute flag.
    ///
    /// The player's own mute state is read back first, keeping it the source
    /// of truth; the local copy only feeds the view.
    pub fn toggle_mute<P: Player + ?Sized>(&mut self, player: &mut P) {
        let muted = !player.is_muted();
        player.set_muted(muted);
        self.muted = muted;
    }

    /// Pushes the current level and mute flag onto the player, used at
    /// construction and when a new media item is loaded.
    pub fn apply_to_player<P: Player + ?Sized>(&self, player: &mut P) {
        player.set_volume(self.level.as_player_volume());
        player.set_muted(self.muted);
    }
}

impl Default for VolumeSync {
    fn default() -> Self {
        Self::new(VolumeLevel::default(), false)
    }
}
