// SPDX-License-Identifier: MPL-2.0
//! Command-logging mock player shared by unit tests.
//!
//! Status transitions stay under test control: `play`/`pause` only record
//! the command, so tests decide when the matching notifications "arrive".
//! `seek` does move the position, since the controls read it back through
//! the query side immediately after seeking.

use super::{CycleCount, Player, PlayerStatus};
use std::time::Duration;

/// One recorded player command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
    SetMuted(bool),
    SetCycleCount(CycleCount),
}

pub struct MockPlayer {
    pub status: PlayerStatus,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub muted: bool,
    pub volume: f32,
    commands: Vec<Command>,
}

impl MockPlayer {
    pub fn new() -> Self {
        Self {
            status: PlayerStatus::Unknown,
            position: Duration::ZERO,
            duration: None,
            muted: false,
            volume: 1.0,
            commands: Vec::new(),
        }
    }

    /// A ready player with a known duration, positioned at the start.
    pub fn ready_with(duration: Duration) -> Self {
        Self {
            status: PlayerStatus::Ready,
            duration: Some(duration),
            ..Self::new()
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drains the recorded commands for incremental assertions.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl Player for MockPlayer {
    fn status(&self) -> PlayerStatus {
        self.status
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn total_duration(&self) -> Option<Duration> {
        self.duration
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn play(&mut self) {
        self.commands.push(Command::Play);
    }

    fn pause(&mut self) {
        self.commands.push(Command::Pause);
    }

    fn seek(&mut self, target: Duration) {
        let clamped = match self.duration {
            Some(duration) => target.min(duration),
            None => target,
        };
        self.position = clamped;
        self.commands.push(Command::Seek(clamped));
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.commands.push(Command::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.commands.push(Command::SetMuted(muted));
    }

    fn set_cycle_count(&mut self, cycles: CycleCount) {
        self.commands.push(Command::SetCycleCount(cycles));
    }
}
