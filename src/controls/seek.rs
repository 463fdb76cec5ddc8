// SPDX-License-Identifier: MPL-2.0
//! Seek-slider synchronization.
//!
//! Two directions of flow, each with a guard against the other:
//!
//! - refreshes driven by progress ticks write the indicator only while the
//!   user is not dragging it;
//! - drag handling seeks the player only for user-initiated value changes.
//!   In Iced, slider input messages never originate from programmatic
//!   writes, so a drag message both raises the drag-in-progress flag and
//!   carries the new value.
//!
//! Together the guards break the write-back loop between progress ticks and
//! a live drag gesture.

use super::time_display;
use crate::player::Player;
use std::time::Duration;

/// Full scale of the position indicator.
const INDICATOR_SCALE: f64 = 100.0;

/// Position indicator and time label, derived from player progress.
///
/// The player stays authoritative for the actual position; everything here
/// is a projection of it onto a 0–100 slider and a clock string.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekSync {
    value: f64,
    enabled: bool,
    dragging: bool,
    display: String,
}

impl SeekSync {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            enabled: false,
            dragging: false,
            display: time_display::format_clock(Duration::ZERO, Duration::ZERO),
        }
    }

    /// Indicator position on the 0–100 scale.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// False while the total duration is unknown.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while the user is dragging the indicator.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Current `H:MM:SS / H:MM:SS` display string.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Recomputes the label and indicator from player progress.
    ///
    /// The label is always recomputed; an unknown total renders as a zero
    /// total while the indicator is disabled. The indicator itself is only
    /// written when the total is known and positive, the indicator is
    /// enabled, and no drag is in progress.
    pub fn refresh(&mut self, elapsed: Duration, total: Option<Duration>) {
        self.display = time_display::format_clock(elapsed, total.unwrap_or(Duration::ZERO));
        self.enabled = total.is_some();

        let Some(total) = total else { return };
        if total.is_zero() || !self.enabled || self.dragging {
            return;
        }
        self.value = (elapsed.as_secs_f64() / total.as_secs_f64() * INDICATOR_SCALE)
            .clamp(0.0, INDICATOR_SCALE);
    }

    /// Handles a user drag of the indicator.
    ///
    /// Raises the drag-in-progress flag, stores the dragged value, and seeks
    /// the player to the corresponding position. Returns true when a seek
    /// was issued; no seek ever happens for an unknown or zero total, or
    /// against a non-operable player.
    pub fn drag<P: Player + ?Sized>(
        &mut self,
        value: f64,
        total: Option<Duration>,
        player: &mut P,
    ) -> bool {
        self.dragging = true;
        self.value = value.clamp(0.0, INDICATOR_SCALE);

        let Some(total) = total else { return false };
        if total.is_zero() || !self.enabled || !player.status().is_operable() {
            return false;
        }
        let target = total.as_secs_f64() * (self.value / INDICATOR_SCALE);
        player.seek(Duration::from_secs_f64(target));
        true
    }

    /// Ends the drag gesture (slider release).
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Clears all state for a newly loaded media item.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SeekSync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::mock::{Command, MockPlayer};
    use crate::player::PlayerStatus;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_indicator_is_disabled_at_zero() {
        let seek = SeekSync::new();
        assert!(!seek.is_enabled());
        assert!(!seek.is_dragging());
        assert_eq!(seek.value(), 0.0);
        assert_eq!(seek.display(), "0:00:00 / 0:00:00");
    }

    #[test]
    fn refresh_with_known_total_updates_value_and_label() {
        let mut seek = SeekSync::new();

        seek.refresh(Duration::from_secs(30), Some(Duration::from_secs(120)));

        assert!(seek.is_enabled());
        assert_abs_diff_eq!(seek.value(), 25.0, epsilon = 1e-9);
        assert_eq!(seek.display(), "0:00:30 / 0:02:00");
    }

    #[test]
    fn refresh_with_unknown_total_disables_indicator() {
        let mut seek = SeekSync::new();
        seek.refresh(Duration::from_secs(30), Some(Duration::from_secs(120)));

        seek.refresh(Duration::from_secs(45), None);

        assert!(!seek.is_enabled());
        // Indicator untouched at its last value; total renders as zero.
        assert_abs_diff_eq!(seek.value(), 25.0, epsilon = 1e-9);
        assert_eq!(seek.display(), "0:00:45 / 0:00:00");
    }

    #[test]
    fn refresh_with_zero_total_leaves_value_untouched() {
        let mut seek = SeekSync::new();
        seek.refresh(Duration::from_secs(30), Some(Duration::from_secs(120)));

        seek.refresh(Duration::from_secs(45), Some(Duration::ZERO));

        assert!(seek.is_enabled());
        assert_abs_diff_eq!(seek.value(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn refresh_is_idempotent_for_unchanged_inputs() {
        let mut seek = SeekSync::new();

        seek.refresh(Duration::from_secs(30), Some(Duration::from_secs(120)));
        let first = seek.clone();
        seek.refresh(Duration::from_secs(30), Some(Duration::from_secs(120)));

        assert_eq!(seek, first);
    }

    #[test]
    fn refresh_never_writes_while_dragging() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(100));
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::from_secs(100)));
        seek.drag(40.0, Some(Duration::from_secs(100)), &mut player);

        for tick in 1..=50 {
            seek.refresh(Duration::from_secs(tick), Some(Duration::from_secs(100)));
            assert_abs_diff_eq!(seek.value(), 40.0, epsilon = 1e-9);
        }

        // The label keeps following progress even mid-drag.
        assert_eq!(seek.display(), "0:00:50 / 0:01:40");
    }

    #[test]
    fn release_lets_refresh_write_again() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(100));
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::from_secs(100)));
        seek.drag(40.0, Some(Duration::from_secs(100)), &mut player);

        seek.release();
        seek.refresh(Duration::from_secs(75), Some(Duration::from_secs(100)));

        assert!(!seek.is_dragging());
        assert_abs_diff_eq!(seek.value(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn drag_seeks_proportionally() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(200));
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::from_secs(200)));

        let sought = seek.drag(25.0, Some(Duration::from_secs(200)), &mut player);

        assert!(sought);
        assert!(seek.is_dragging());
        assert_eq!(player.commands(), &[Command::Seek(Duration::from_secs(50))]);
    }

    #[test]
    fn drag_clamps_out_of_range_values() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(100));
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::from_secs(100)));

        seek.drag(150.0, Some(Duration::from_secs(100)), &mut player);

        assert_abs_diff_eq!(seek.value(), 100.0, epsilon = 1e-9);
        assert_eq!(
            player.commands(),
            &[Command::Seek(Duration::from_secs(100))]
        );
    }

    #[test]
    fn drag_with_unknown_total_never_seeks() {
        let mut player = MockPlayer::new();
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, None);

        let sought = seek.drag(50.0, None, &mut player);

        assert!(!sought);
        assert!(player.commands().is_empty());
    }

    #[test]
    fn drag_with_zero_total_never_seeks() {
        let mut player = MockPlayer::ready_with(Duration::ZERO);
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::ZERO));

        let sought = seek.drag(50.0, Some(Duration::ZERO), &mut player);

        assert!(!sought);
        assert!(player.commands().is_empty());
    }

    #[test]
    fn drag_against_halted_player_is_suppressed() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(100));
        player.status = PlayerStatus::Halted;
        let mut seek = SeekSync::new();
        seek.refresh(Duration::ZERO, Some(Duration::from_secs(100)));

        let sought = seek.drag(50.0, Some(Duration::from_secs(100)), &mut player);

        assert!(!sought);
        assert!(player.commands().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut player = MockPlayer::ready_with(Duration::from_secs(100));
        let mut seek = SeekSync::new();
        seek.refresh(Duration::from_secs(50), Some(Duration::from_secs(100)));
        seek.drag(80.0, Some(Duration::from_secs(100)), &mut player);

        seek.reset();

        assert_eq!(seek, SeekSync::new());
    }
}
