use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::value_objects::DayRange;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

// =============================================================================
// Time of Day
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    /// Maps an hour (0-23) to its period.
    pub fn from_hour(hour: u32) -> TimeOfDay {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// Live Clock
// =============================================================================

/// The ticking fictional time of day shown to players.
///
/// Today's real 24 hours are split evenly between the fictional days the
/// weekly allocation assigns to today, and each slice is stretched into a full
/// fictional 24-hour day. This is a display clock: it can disagree with the
/// calendar date, which advances on a fixed number of real hours per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiveClock {
    /// Fictional day of month currently being played out
    pub day: u32,
    /// Fictional hour (0-23)
    pub hour: u32,
    /// Fictional minute (0-59)
    pub minute: u32,
    /// The fictional days covered by today
    pub range: DayRange,
}

impl LiveClock {
    /// Real hours that realize one fictional day today (e.g., 4.8 for five days).
    pub fn slice_hours(&self) -> f64 {
        24.0 / f64::from(self.range.len().max(1))
    }

    pub fn period(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour)
    }

    /// Display the time as the clock widget does (e.g., "09:05 AM", "01:30 PM").
    pub fn display_time(&self) -> String {
        let display_hour = if self.hour > 12 {
            self.hour - 12
        } else {
            self.hour
        };
        let period = if self.hour < 12 { "AM" } else { "PM" };
        format!("{:02}:{:02} {}", display_hour, self.minute, period)
    }

    /// Display the day and time (e.g., "Day 12, 06:00 AM").
    pub fn display_day_time(&self) -> String {
        format!("Day {}, {}", self.day, self.display_time())
    }
}

/// Computes the live clock for `now` given today's allocated range.
///
/// With `n` fictional days today, real second `s` of the day falls in slice
/// `s * n / 86400` and maps to fictional second `(s * n) mod 86400`. The day
/// never passes `today.end`.
pub fn live_clock(now: NaiveDateTime, today: DayRange) -> LiveClock {
    let span = i64::from(today.len().max(1));
    let scaled = i64::from(now.num_seconds_from_midnight()) * span;

    let slice_index = (scaled / SECONDS_PER_DAY) as u32;
    let fictional_seconds = scaled % SECONDS_PER_DAY;

    LiveClock {
        day: today.start.saturating_add(slice_index).min(today.end),
        hour: (fictional_seconds / SECONDS_PER_HOUR) as u32,
        minute: ((fictional_seconds / SECONDS_PER_MINUTE) % 60) as u32,
        range: today,
    }
}
