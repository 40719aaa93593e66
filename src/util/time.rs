// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time helpers.
//!
//! Conversions between egui's frame clock and the `Duration` the state
//! machines run on, plus the human-readable stamp attached to messages.

use chrono::{DateTime, Datelike, Local, TimeZone};
use std::fmt::Display;
use std::time::Duration;

/// Convert egui's `InputState::time` (seconds since start) to a `Duration`.
pub fn frame_time(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}

/// Format a send time like `October 19, 2026 at 02:30 PM UTC`.
pub fn format_stamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%B %-d, %Y at %I:%M %p %Z").to_string()
}

/// The current local time, formatted for a message.
pub fn now_stamp() -> String {
    format_stamp(&Local::now())
}

pub fn current_year() -> i32 {
    Local::now().year()
}
