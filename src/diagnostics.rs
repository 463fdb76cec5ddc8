// SPDX-License-Identifier: MPL-2.0
//! Diagnostic capture of transport interactions.
//!
//! Records the user actions that drive playback into a bounded in-memory
//! log, so a host application can attach recent activity to problem reports.
//! Events are plain serde-serializable values; no output channel is imposed.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// User-initiated transport actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Transport button pressed (play, pause, or replay).
    TogglePlayback,

    /// Seek committed from a slider drag.
    SeekMedia {
        /// Target position in seconds.
        position_secs: f64,
    },

    /// Volume control moved.
    SetVolume {
        /// Control-side level (0–100).
        level: f32,
    },

    /// Mute toggled.
    ToggleMute,

    /// Loop mode toggled.
    ToggleLoop,
}

/// Default number of retained events.
const DEFAULT_CAPACITY: usize = 128;

/// Bounded log of recent user actions, oldest evicted first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    events: VecDeque<UserAction>,
    capacity: usize,
}

impl ActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a log retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records one action, evicting the oldest entry when full.
    pub fn record(&mut self, action: UserAction) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(action);
    }

    /// Iterates over retained actions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UserAction> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
