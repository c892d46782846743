//! Weekly allocation of a fictional month onto the real week
//!
//! Every real Monday-to-Sunday week carries the days of one fictional month,
//! split into contiguous ranges so each real weekday shows a block of
//! fictional days. The allocation always starts at day 1 on Monday.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Number of real weekdays a month is spread across
pub const DAYS_PER_WEEK: usize = 7;

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Returns the Monday of the real week containing `now`.
pub fn week_anchor(now: NaiveDateTime) -> NaiveDate {
    let date = now.date();
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the real weekday of `now` as an index (0 = Monday, 6 = Sunday).
pub fn weekday_index(now: NaiveDateTime) -> usize {
    now.weekday().num_days_from_monday() as usize
}

// ============================================================================
// DayRange
// ============================================================================

/// Inclusive range of fictional days of the month assigned to one real weekday.
///
/// A weekday that receives no days has `end == start - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    pub start: u32,
    pub end: u32,
}

impl DayRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of fictional days in this range.
    pub fn len(&self) -> u32 {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, day: u32) -> bool {
        self.start <= day && day <= self.end
    }

    /// Label as shown under a weekday cell (e.g., "Days 1-5", "Day 3").
    pub fn label(&self) -> String {
        match self.len() {
            0 => "No days".to_string(),
            1 => format!("Day {}", self.start),
            _ => format!("Days {}-{}", self.start, self.end),
        }
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ============================================================================
// WeeklyAllocation
// ============================================================================

/// The seven real dates of one week and the fictional day range each carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAllocation {
    week_dates: [NaiveDate; DAYS_PER_WEEK],
    ranges: [DayRange; DAYS_PER_WEEK],
}

impl WeeklyAllocation {
    /// Real dates Monday..Sunday.
    pub fn week_dates(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.week_dates
    }

    /// Fictional day ranges Monday..Sunday.
    pub fn ranges(&self) -> &[DayRange; DAYS_PER_WEEK] {
        &self.ranges
    }

    pub fn monday(&self) -> NaiveDate {
        self.week_dates[0]
    }

    /// Range for a weekday index; indices past Sunday clamp to Sunday.
    pub fn range_for(&self, weekday: usize) -> DayRange {
        self.ranges[weekday.min(DAYS_PER_WEEK - 1)]
    }

    /// Range for the real weekday of `now`.
    pub fn range_on(&self, now: NaiveDateTime) -> DayRange {
        self.range_for(weekday_index(now))
    }

    /// Total fictional days covered by the week.
    pub fn total_days(&self) -> u32 {
        self.ranges.iter().map(DayRange::len).sum()
    }
}

/// Spreads a month of `month_day_count` days over the week starting at `monday`.
///
/// Each weekday gets `month_day_count / 7` days and the first
/// `month_day_count % 7` weekdays get one more, so the ranges run contiguously
/// from day 1 to the last day of the month.
pub fn allocate_week(month_day_count: u32, monday: NaiveDate) -> WeeklyAllocation {
    let week_dates: [NaiveDate; DAYS_PER_WEEK] =
        std::array::from_fn(|i| monday + Duration::days(i as i64));

    let base = month_day_count / DAYS_PER_WEEK as u32;
    let rest = month_day_count % DAYS_PER_WEEK as u32;

    let mut ranges = [DayRange::new(1, 0); DAYS_PER_WEEK];
    let mut next_day = 1;
    for (i, range) in ranges.iter_mut().enumerate() {
        let days = base + u32::from((i as u32) < rest);
        let start = next_day;
        let end = (start + days - 1).min(month_day_count);
        *range = DayRange::new(start, end);
        next_day = end + 1;
    }

    WeeklyAllocation { week_dates, ranges }
}

// ============================================================================
// WeekCountdown
// ============================================================================

/// Real time left until Sunday 23:59:59.999 of the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekCountdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl WeekCountdown {
    fn from_millis(millis: i64) -> Self {
        let millis = millis.max(0);
        Self {
            days: (millis / MILLIS_PER_DAY) as u32,
            hours: ((millis / MILLIS_PER_HOUR) % 24) as u32,
            minutes: ((millis / MILLIS_PER_MINUTE) % 60) as u32,
            seconds: ((millis / MILLIS_PER_SECOND) % 60) as u32,
        }
    }
}

impl fmt::Display for WeekCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Computes the countdown from `now` to the end of its real week.
pub fn week_countdown(now: NaiveDateTime) -> WeekCountdown {
    let next_monday = week_anchor(now) + Duration::days(DAYS_PER_WEEK as i64);
    // Sunday 23:59:59.999
    let week_end = next_monday.and_time(NaiveTime::default()) - Duration::milliseconds(1);
    WeekCountdown::from_millis((week_end - now).num_milliseconds())
}
