// SPDX-License-Identifier: MPL-2.0
//! Clock-style time display formatting.
//!
//! Produces the `H:MM:SS / H:MM:SS` elapsed/total string shown next to the
//! seek slider. Hours are unpadded, minutes and seconds zero-padded, and
//! fractional seconds truncate rather than round. No locale variation.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Formats elapsed and total playback time as `H:MM:SS / H:MM:SS`.
#[must_use]
pub fn format_clock(elapsed: Duration, total: Duration) -> String {
    format!("{} / {}", format_field(elapsed), format_field(total))
}

fn format_field(time: Duration) -> String {
    // Duration::as_secs truncates fractional seconds.
    let mut seconds = time.as_secs();

    let hours = seconds / SECONDS_PER_HOUR;
    seconds %= SECONDS_PER_HOUR;
    let minutes = seconds / SECONDS_PER_MINUTE;
    seconds %= SECONDS_PER_MINUTE;

    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
