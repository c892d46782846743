//! Fictional calendar value objects
//!
//! This module converts real host-local wall time into the in-fiction ("RPG")
//! calendar. A fixed epoch instant is Year 1, Month 1, Day 1, 00:00, and every
//! `hours_per_fictional_day` real hours advance the calendar by one day.
//!
//! Key types:
//! - `LeapRule` - Which fictional years get the extra leap day
//! - `MonthTable` - Days per month in a common year, plus the leap month
//! - `CalendarConfig` - Epoch, day length, month table and leap rule
//! - `CalendarMoment` - Resolved year/month/day for an instant
//! - `WeekCycle` - The "one real week per fictional month" reading

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::game_month::GameMonthKey;
use crate::value_objects::week::week_anchor;

/// Number of months in a fictional year
pub const MONTHS_PER_YEAR: usize = 12;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

const DEFAULT_HOURS_PER_FICTIONAL_DAY: u32 = 12;
const DEFAULT_MONTH_LENGTHS: [u32; MONTHS_PER_YEAR] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const DEFAULT_LEAP_MONTH: usize = 1;
/// Upper bound on a single month so year totals always fit in `u32`
pub const MAX_MONTH_LENGTH: u32 = 10_000;

const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the display name for a 1-indexed month ("Unknown" when out of range).
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("Unknown")
}

// ============================================================================
// LeapRule
// ============================================================================

/// Which fictional years carry the extra leap day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapRule {
    /// Every year divisible by four (year 4, 8, 12, ...)
    #[default]
    EveryFourthYear,
    /// Every year is a common year
    Never,
}

impl LeapRule {
    pub fn is_leap_year(&self, year: u32) -> bool {
        match self {
            LeapRule::EveryFourthYear => year % 4 == 0,
            LeapRule::Never => false,
        }
    }
}

// ============================================================================
// MonthTable
// ============================================================================

/// Days per month in a common year.
///
/// In a leap year the month at `leap_month` (0-indexed) gets one extra day.
///
/// Validation rules:
/// - Every month has between 1 and `MAX_MONTH_LENGTH` days
/// - `leap_month` indexes into the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonthTableRepr", into = "MonthTableRepr")]
pub struct MonthTable {
    lengths: [u32; MONTHS_PER_YEAR],
    leap_month: usize,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MonthTableRepr {
    lengths: [u32; MONTHS_PER_YEAR],
    leap_month: usize,
}

impl MonthTable {
    /// Create a new validated month table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a month has zero days or more
    /// than `MAX_MONTH_LENGTH`, or if `leap_month` is not a valid 0-based
    /// month index.
    pub fn new(lengths: [u32; MONTHS_PER_YEAR], leap_month: usize) -> Result<Self, DomainError> {
        if let Some(idx) = lengths.iter().position(|&days| days == 0) {
            return Err(DomainError::validation(format!(
                "Month {} must have at least one day",
                idx + 1
            )));
        }
        if let Some(idx) = lengths.iter().position(|&days| days > MAX_MONTH_LENGTH) {
            return Err(DomainError::validation(format!(
                "Month {} cannot exceed {} days",
                idx + 1,
                MAX_MONTH_LENGTH
            )));
        }
        if leap_month >= MONTHS_PER_YEAR {
            return Err(DomainError::validation(format!(
                "Leap month index must be below {}",
                MONTHS_PER_YEAR
            )));
        }

        Ok(Self {
            lengths,
            leap_month,
        })
    }

    /// Returns the common-year month lengths.
    pub fn lengths(&self) -> &[u32; MONTHS_PER_YEAR] {
        &self.lengths
    }

    /// Returns the 0-based index of the month that grows in leap years.
    pub fn leap_month(&self) -> usize {
        self.leap_month
    }

    /// Length of the 0-based `month_index`; indices past the table have no days.
    pub fn month_length(&self, month_index: usize, leap: bool) -> u32 {
        let base = self.lengths.get(month_index).copied().unwrap_or(0);
        if leap && month_index == self.leap_month {
            base + 1
        } else {
            base
        }
    }

    /// Total days in a common (or leap) year.
    pub fn year_length(&self, leap: bool) -> u32 {
        let common: u32 = self.lengths.iter().sum();
        if leap {
            common + 1
        } else {
            common
        }
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_MONTH_LENGTHS,
            leap_month: DEFAULT_LEAP_MONTH,
        }
    }
}

impl TryFrom<MonthTableRepr> for MonthTable {
    type Error = DomainError;

    fn try_from(repr: MonthTableRepr) -> Result<Self, Self::Error> {
        Self::new(repr.lengths, repr.leap_month)
    }
}

impl From<MonthTable> for MonthTableRepr {
    fn from(table: MonthTable) -> Self {
        Self {
            lengths: table.lengths,
            leap_month: table.leap_month,
        }
    }
}

// ============================================================================
// CalendarConfig
// ============================================================================

/// Complete configuration of the fictional calendar.
///
/// Passed explicitly to every resolver; there is no process-wide calendar.
/// Missing fields in a serialized config fall back to the site defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarConfigRepr", into = "CalendarConfigRepr")]
pub struct CalendarConfig {
    /// Real instant (host-local wall time) of Year 1, Month 1, Day 1, 00:00
    epoch: NaiveDateTime,
    /// Real hours that make up one fictional calendar day
    hours_per_fictional_day: u32,
    month_table: MonthTable,
    leap_rule: LeapRule,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CalendarConfigRepr {
    epoch: NaiveDateTime,
    hours_per_fictional_day: u32,
    month_table: MonthTable,
    leap_rule: LeapRule,
}

impl Default for CalendarConfigRepr {
    fn default() -> Self {
        CalendarConfig::default().into()
    }
}

impl CalendarConfig {
    /// Create a new calendar configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `hours_per_fictional_day` is zero.
    pub fn new(
        epoch: NaiveDateTime,
        hours_per_fictional_day: u32,
        month_table: MonthTable,
        leap_rule: LeapRule,
    ) -> Result<Self, DomainError> {
        if hours_per_fictional_day == 0 {
            return Err(DomainError::validation(
                "Hours per fictional day must be positive",
            ));
        }

        Ok(Self {
            epoch,
            hours_per_fictional_day,
            month_table,
            leap_rule,
        })
    }

    /// Returns a copy of this configuration anchored at a different epoch.
    pub fn with_epoch(mut self, epoch: NaiveDateTime) -> Self {
        self.epoch = epoch;
        self
    }

    /// Returns a copy of this configuration with a different day length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `hours` is zero.
    pub fn with_hours_per_fictional_day(self, hours: u32) -> Result<Self, DomainError> {
        Self::new(self.epoch, hours, self.month_table, self.leap_rule)
    }

    // Accessors

    pub fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }

    pub fn hours_per_fictional_day(&self) -> u32 {
        self.hours_per_fictional_day
    }

    pub fn month_table(&self) -> &MonthTable {
        &self.month_table
    }

    pub fn leap_rule(&self) -> LeapRule {
        self.leap_rule
    }

    // Computed properties

    pub fn is_leap_year(&self, year: u32) -> bool {
        self.leap_rule.is_leap_year(year)
    }

    /// Days in the 0-based `month_index` of `year`.
    pub fn month_length(&self, month_index: usize, year: u32) -> u32 {
        self.month_table
            .month_length(month_index, self.is_leap_year(year))
    }

    /// Days in `year`.
    pub fn year_length(&self, year: u32) -> u32 {
        self.month_table.year_length(self.is_leap_year(year))
    }

    /// Real milliseconds in one fictional calendar day.
    pub fn millis_per_fictional_day(&self) -> i64 {
        i64::from(self.hours_per_fictional_day) * MILLIS_PER_HOUR
    }
}

impl Default for CalendarConfig {
    /// The site calendar: epoch Monday 2025-09-08 00:00, 12 real hours per day.
    fn default() -> Self {
        let epoch = NaiveDate::from_ymd_opt(2025, 9, 8)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("2025-09-08 00:00:00 is a valid local timestamp");
        Self {
            epoch,
            hours_per_fictional_day: DEFAULT_HOURS_PER_FICTIONAL_DAY,
            month_table: MonthTable::default(),
            leap_rule: LeapRule::default(),
        }
    }
}

impl TryFrom<CalendarConfigRepr> for CalendarConfig {
    type Error = DomainError;

    fn try_from(repr: CalendarConfigRepr) -> Result<Self, Self::Error> {
        Self::new(
            repr.epoch,
            repr.hours_per_fictional_day,
            repr.month_table,
            repr.leap_rule,
        )
    }
}

impl From<CalendarConfig> for CalendarConfigRepr {
    fn from(config: CalendarConfig) -> Self {
        Self {
            epoch: config.epoch,
            hours_per_fictional_day: config.hours_per_fictional_day,
            month_table: config.month_table,
            leap_rule: config.leap_rule,
        }
    }
}

// ============================================================================
// CalendarMoment
// ============================================================================

/// Resolved fictional date for one instant. Derived on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMoment {
    /// Fictional year (1-indexed)
    pub year: u32,
    /// Fictional month (1-indexed)
    pub month: u32,
    /// Day of month (1-indexed)
    pub day_of_month: u32,
    /// Continuous count of fictional days since the epoch (epoch day is 1)
    pub day_number: i64,
}

impl CalendarMoment {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Display the month and year (e.g., "March, Year 2").
    pub fn display_short(&self) -> String {
        format!("{}, Year {}", self.month_name(), self.year)
    }

    pub fn game_month_key(&self) -> GameMonthKey {
        GameMonthKey::from_moment(self)
    }
}

impl fmt::Display for CalendarMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {} of {}, Year {}",
            self.day_of_month,
            self.month_name(),
            self.year
        )
    }
}

// ============================================================================
// WeekCycle
// ============================================================================

/// Calendar reading where each real Monday-to-Sunday week is one fictional
/// month and twelve weeks make a year.
///
/// Under this reading the weekly allocation covers the whole month exactly
/// once. It is informational; `CalendarMoment` remains the calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCycle {
    /// Whole real weeks between the epoch's week and the current week
    pub weeks_since_epoch: i64,
    pub year: i64,
    pub month: u32,
}

// ============================================================================
// Resolvers
// ============================================================================

/// Maps a real instant to the 1-indexed fictional day number.
///
/// `now == epoch` is day 1. Instants before the epoch are outside the
/// calendar and yield day numbers below 1.
pub fn resolve_day_number(config: &CalendarConfig, now: NaiveDateTime) -> i64 {
    let elapsed_ms = (now - config.epoch).num_milliseconds();
    elapsed_ms.div_euclid(config.millis_per_fictional_day()) + 1
}

/// Resolves a fictional day number into year, month and day of month.
///
/// Day numbers below 1 resolve as the epoch day.
pub fn resolve_calendar_moment(config: &CalendarConfig, day_number: i64) -> CalendarMoment {
    let mut remaining = day_number.max(1);

    let mut year: u32 = 1;
    loop {
        let year_length = i64::from(config.year_length(year));
        if remaining > year_length {
            remaining -= year_length;
            year += 1;
        } else {
            break;
        }
    }

    // The last month absorbs whatever is left so the year never overflows
    let mut month_index = 0;
    while month_index < MONTHS_PER_YEAR - 1 {
        let days_in_month = i64::from(config.month_length(month_index, year));
        if remaining > days_in_month {
            remaining -= days_in_month;
            month_index += 1;
        } else {
            break;
        }
    }

    CalendarMoment {
        year,
        month: (month_index + 1) as u32,
        day_of_month: remaining as u32,
        day_number,
    }
}

/// Resolves the week-cycle reading for a real instant.
pub fn resolve_week_cycle(config: &CalendarConfig, now: NaiveDateTime) -> WeekCycle {
    let days = (week_anchor(now) - week_anchor(config.epoch)).num_days();
    let weeks_since_epoch = days.div_euclid(7);
    let months = MONTHS_PER_YEAR as i64;

    WeekCycle {
        weeks_since_epoch,
        year: weeks_since_epoch.div_euclid(months) + 1,
        month: weeks_since_epoch.rem_euclid(months) as u32 + 1,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn epoch() -> NaiveDateTime {
        CalendarConfig::default().epoch()
    }

    /// Day number of the last day of `year` under `config`.
    fn last_day_of_year(config: &CalendarConfig, year: u32) -> i64 {
        (1..=year).map(|y| i64::from(config.year_length(y))).sum()
    }

    mod leap_rule {
        use super::*;

        #[test]
        fn every_fourth_year() {
            let rule = LeapRule::EveryFourthYear;
            assert!(rule.is_leap_year(4));
            assert!(rule.is_leap_year(8));
            assert!(rule.is_leap_year(100));
            assert!(!rule.is_leap_year(1));
            assert!(!rule.is_leap_year(5));
        }

        #[test]
        fn never() {
            assert!(!LeapRule::Never.is_leap_year(4));
        }

        #[test]
        fn serde_names() {
            let json = serde_json::to_string(&LeapRule::EveryFourthYear).unwrap();
            assert_eq!(json, "\"every_fourth_year\"");
        }
    }

    mod month_table {
        use super::*;

        #[test]
        fn february_in_leap_and_common_years() {
            let config = CalendarConfig::default();
            assert_eq!(config.month_length(1, 4), 29);
            assert_eq!(config.month_length(1, 8), 29);
            assert_eq!(config.month_length(1, 1), 28);
            assert_eq!(config.month_length(1, 5), 28);
        }

        #[test]
        fn other_months_ignore_leap_years() {
            let config = CalendarConfig::default();
            for idx in [0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] {
                assert_eq!(config.month_length(idx, 4), config.month_length(idx, 5));
            }
            assert_eq!(config.month_length(0, 1), 31);
            assert_eq!(config.month_length(3, 1), 30);
            assert_eq!(config.month_length(11, 1), 31);
        }

        #[test]
        fn year_lengths_sum_to_365_or_366() {
            let config = CalendarConfig::default();
            for year in 1..=400 {
                let sum: u32 = (0..MONTHS_PER_YEAR)
                    .map(|m| config.month_length(m, year))
                    .sum();
                let expected = if year % 4 == 0 { 366 } else { 365 };
                assert_eq!(sum, expected, "year {}", year);
                assert_eq!(config.year_length(year), expected);
            }
        }

        #[test]
        fn index_past_table_has_no_days() {
            assert_eq!(MonthTable::default().month_length(12, false), 0);
        }

        #[test]
        fn zero_length_month_rejected() {
            let mut lengths = DEFAULT_MONTH_LENGTHS;
            lengths[4] = 0;
            let err = MonthTable::new(lengths, 1).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("Month 5"));
        }

        #[test]
        fn leap_month_out_of_range_rejected() {
            let result = MonthTable::new(DEFAULT_MONTH_LENGTHS, 12);
            assert!(result.is_err());
        }

        #[test]
        fn deserialize_validates() {
            let json = r#"{"lengths":[30,30,30,30,30,30,30,30,30,30,30,0],"leapMonth":0}"#;
            assert!(serde_json::from_str::<MonthTable>(json).is_err());
        }

        #[test]
        fn oversized_months_rejected() {
            let result = MonthTable::new([u32::MAX; MONTHS_PER_YEAR], 0);
            assert!(matches!(result, Err(DomainError::Validation(_))));

            let json = format!(
                r#"{{"monthTable":{{"lengths":{},"leapMonth":0}}}}"#,
                serde_json::to_string(&[u32::MAX; MONTHS_PER_YEAR]).unwrap()
            );
            assert!(serde_json::from_str::<CalendarConfig>(&json).is_err());
        }

        #[test]
        fn largest_table_resolves() {
            let table = MonthTable::new([MAX_MONTH_LENGTH; MONTHS_PER_YEAR], 11).unwrap();
            assert_eq!(table.year_length(true), 12 * MAX_MONTH_LENGTH + 1);
            assert_eq!(table.month_length(11, true), MAX_MONTH_LENGTH + 1);

            let config = CalendarConfig::new(epoch(), 12, table, LeapRule::EveryFourthYear).unwrap();
            let moment = resolve_calendar_moment(&config, 5);
            assert_eq!((moment.year, moment.month, moment.day_of_month), (1, 1, 5));
        }
    }

    mod calendar_config {
        use super::*;

        #[test]
        fn default_is_site_calendar() {
            let config = CalendarConfig::default();
            assert_eq!(config.epoch().to_string(), "2025-09-08 00:00:00");
            assert_eq!(config.hours_per_fictional_day(), 12);
            assert_eq!(config.leap_rule(), LeapRule::EveryFourthYear);
            assert_eq!(config.month_table().leap_month(), 1);
            assert_eq!(config.millis_per_fictional_day(), 12 * 3_600_000);
        }

        #[test]
        fn zero_hours_rejected() {
            let result = CalendarConfig::default().with_hours_per_fictional_day(0);
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }

        #[test]
        fn serde_round_trip() {
            let config = CalendarConfig::default()
                .with_hours_per_fictional_day(6)
                .unwrap();
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"hoursPerFictionalDay\":6"));
            assert!(json.contains("\"epoch\":\"2025-09-08T00:00:00\""));
            let back: CalendarConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);
        }

        #[test]
        fn partial_json_falls_back_to_defaults() {
            let config: CalendarConfig =
                serde_json::from_str(r#"{"hoursPerFictionalDay":24}"#).unwrap();
            assert_eq!(config.hours_per_fictional_day(), 24);
            assert_eq!(config.epoch(), CalendarConfig::default().epoch());
            assert_eq!(config.month_table(), &MonthTable::default());
        }

        #[test]
        fn zero_hours_json_rejected() {
            let result = serde_json::from_str::<CalendarConfig>(r#"{"hoursPerFictionalDay":0}"#);
            assert!(result.is_err());
        }
    }

    mod day_number {
        use super::*;

        #[test]
        fn epoch_is_day_one() {
            let config = CalendarConfig::default();
            assert_eq!(resolve_day_number(&config, epoch()), 1);
        }

        #[test]
        fn window_boundaries() {
            let config = CalendarConfig::default();
            let just_before = epoch() + Duration::hours(12) - Duration::milliseconds(1);
            assert_eq!(resolve_day_number(&config, just_before), 1);
            assert_eq!(resolve_day_number(&config, epoch() + Duration::hours(12)), 2);
            assert_eq!(resolve_day_number(&config, epoch() + Duration::days(1)), 3);
        }

        #[test]
        fn monotonic_over_a_sweep() {
            let config = CalendarConfig::default();
            let mut previous = resolve_day_number(&config, epoch());
            for step in 1..2_000 {
                let now = epoch() + Duration::minutes(step * 37);
                let current = resolve_day_number(&config, now);
                assert!(current >= previous);
                assert!(current - previous <= 1);
                previous = current;
            }
        }

        #[test]
        fn custom_day_length() {
            let config = CalendarConfig::default()
                .with_hours_per_fictional_day(24)
                .unwrap();
            assert_eq!(resolve_day_number(&config, epoch() + Duration::hours(23)), 1);
            assert_eq!(resolve_day_number(&config, epoch() + Duration::hours(24)), 2);
        }

        #[test]
        fn before_epoch_is_below_one() {
            let config = CalendarConfig::default();
            assert_eq!(
                resolve_day_number(&config, epoch() - Duration::milliseconds(1)),
                0
            );
        }
    }

    mod calendar_moment {
        use super::*;

        #[test]
        fn epoch_resolves_to_first_day() {
            let config = CalendarConfig::default();
            let moment = resolve_calendar_moment(&config, resolve_day_number(&config, epoch()));
            assert_eq!(
                moment,
                CalendarMoment {
                    year: 1,
                    month: 1,
                    day_of_month: 1,
                    day_number: 1,
                }
            );
        }

        #[test]
        fn february_first() {
            let config = CalendarConfig::default();
            let moment = resolve_calendar_moment(&config, 32);
            assert_eq!((moment.year, moment.month, moment.day_of_month), (1, 2, 1));
            assert_eq!(moment.month_name(), "February");
        }

        #[test]
        fn leap_day_exists_in_year_four() {
            let config = CalendarConfig::default();
            let start_of_year_four = last_day_of_year(&config, 3);
            let leap_day = resolve_calendar_moment(&config, start_of_year_four + 31 + 29);
            assert_eq!((leap_day.year, leap_day.month, leap_day.day_of_month), (4, 2, 29));

            let march_first = resolve_calendar_moment(&config, start_of_year_four + 31 + 30);
            assert_eq!((march_first.month, march_first.day_of_month), (3, 1));
        }

        #[test]
        fn last_day_of_year_stays_in_december() {
            let config = CalendarConfig::default();
            for year in 1..=12 {
                let last = last_day_of_year(&config, year);
                let moment = resolve_calendar_moment(&config, last);
                assert_eq!(
                    (moment.year, moment.month, moment.day_of_month),
                    (year, 12, 31),
                    "last day of year {}",
                    year
                );

                let next = resolve_calendar_moment(&config, last + 1);
                assert_eq!(
                    (next.year, next.month, next.day_of_month),
                    (year + 1, 1, 1),
                    "first day after year {}",
                    year
                );
            }
        }

        #[test]
        fn day_of_month_within_bounds() {
            let config = CalendarConfig::default();
            for day_number in 1..=(366 * 5) {
                let moment = resolve_calendar_moment(&config, day_number);
                let len = config.month_length(moment.month as usize - 1, moment.year);
                assert!(moment.day_of_month >= 1 && moment.day_of_month <= len);
            }
        }

        #[test]
        fn non_positive_day_numbers_resolve_to_epoch_day() {
            let config = CalendarConfig::default();
            let moment = resolve_calendar_moment(&config, -5);
            assert_eq!((moment.year, moment.month, moment.day_of_month), (1, 1, 1));
            assert_eq!(moment.day_number, -5);
        }

        #[test]
        fn display() {
            let moment = CalendarMoment {
                year: 2,
                month: 3,
                day_of_month: 14,
                day_number: 440,
            };
            assert_eq!(moment.display_short(), "March, Year 2");
            assert_eq!(moment.to_string(), "Day 14 of March, Year 2");
        }

        #[test]
        fn month_names_out_of_range() {
            assert_eq!(month_name(0), "Unknown");
            assert_eq!(month_name(13), "Unknown");
            assert_eq!(month_name(12), "December");
        }
    }

    mod week_cycle {
        use super::*;

        #[test]
        fn epoch_week_is_first_month() {
            let config = CalendarConfig::default();
            let cycle = resolve_week_cycle(&config, epoch());
            assert_eq!(cycle.weeks_since_epoch, 0);
            assert_eq!((cycle.year, cycle.month), (1, 1));

            // Sunday night of the epoch week is still week 0
            let sunday = epoch() + Duration::days(6) + Duration::hours(23);
            assert_eq!(resolve_week_cycle(&config, sunday).weeks_since_epoch, 0);
        }

        #[test]
        fn each_week_advances_one_month() {
            let config = CalendarConfig::default();
            let cycle = resolve_week_cycle(&config, epoch() + Duration::days(7));
            assert_eq!((cycle.year, cycle.month), (1, 2));

            let cycle = resolve_week_cycle(&config, epoch() + Duration::days(7 * 12));
            assert_eq!((cycle.year, cycle.month), (2, 1));
        }

        #[test]
        fn midweek_epoch_counts_from_its_monday() {
            // Thursday epoch: the following Monday already starts month 2
            let thursday = NaiveDate::from_ymd_opt(2025, 9, 11)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let config = CalendarConfig::default().with_epoch(thursday);
            let monday = thursday + Duration::days(4);
            assert_eq!(resolve_week_cycle(&config, monday).month, 2);
        }
    }
}
