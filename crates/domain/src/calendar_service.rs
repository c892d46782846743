//! The calendar service consumed by display, roster and gating callers.
//!
//! `CalendarService` is the single seam every consumer goes through; the one
//! implementation, `RpgCalendar`, wraps a `CalendarConfig`. Every method takes
//! "now" explicitly (host-local wall time) and recomputes from scratch.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::game_time::{live_clock, LiveClock};
use crate::value_objects::{
    allocate_week, resolve_calendar_moment, resolve_day_number, resolve_week_cycle,
    week_anchor, week_countdown, weekday_index, Birthday, CalendarConfig, CalendarMoment,
    DayRange, GameMonthKey, WeekCountdown, WeekCycle, WeeklyAllocation,
};

/// Everything a display needs for one instant.
///
/// `moment` is the calendar date; `today_range` and `live` come from the
/// weekly allocation, which restarts at day 1 every real Monday. The two can
/// name different days and both are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSnapshot {
    pub moment: CalendarMoment,
    pub week: WeeklyAllocation,
    /// Real weekday of "now" (0 = Monday)
    pub weekday: usize,
    pub today_range: DayRange,
    pub live: LiveClock,
    pub week_cycle: WeekCycle,
    pub countdown: WeekCountdown,
    pub game_month: GameMonthKey,
}

/// Fictional calendar operations.
pub trait CalendarService: Send + Sync {
    fn config(&self) -> &CalendarConfig;

    /// Continuous fictional day number (epoch day is 1).
    fn day_number(&self, now: NaiveDateTime) -> i64 {
        resolve_day_number(self.config(), now)
    }

    /// Calendar date for `now`.
    fn moment(&self, now: NaiveDateTime) -> CalendarMoment {
        resolve_calendar_moment(self.config(), self.day_number(now))
    }

    /// Days of the current fictional month spread over the current real week.
    fn week_allocation(&self, now: NaiveDateTime) -> WeeklyAllocation {
        let moment = self.moment(now);
        let days_in_month = self
            .config()
            .month_length(moment.month as usize - 1, moment.year);
        allocate_week(days_in_month, week_anchor(now))
    }

    /// Fictional days assigned to the real weekday of `now`.
    fn today_range(&self, now: NaiveDateTime) -> DayRange {
        self.week_allocation(now).range_for(weekday_index(now))
    }

    fn live_clock(&self, now: NaiveDateTime) -> LiveClock {
        live_clock(now, self.today_range(now))
    }

    fn is_birthday_today(&self, birth_month: u32, birth_day: u32, now: NaiveDateTime) -> bool {
        Birthday::new(birth_month, birth_day).falls_on(&self.moment(now), self.today_range(now))
    }

    fn game_month_key(&self, now: NaiveDateTime) -> GameMonthKey {
        self.moment(now).game_month_key()
    }

    fn week_countdown(&self, now: NaiveDateTime) -> WeekCountdown {
        week_countdown(now)
    }

    fn week_cycle(&self, now: NaiveDateTime) -> WeekCycle {
        resolve_week_cycle(self.config(), now)
    }

    /// Resolves everything once for `now`.
    fn snapshot(&self, now: NaiveDateTime) -> CalendarSnapshot {
        let moment = self.moment(now);
        let days_in_month = self
            .config()
            .month_length(moment.month as usize - 1, moment.year);
        let week = allocate_week(days_in_month, week_anchor(now));
        let weekday = weekday_index(now);
        let today_range = week.range_for(weekday);

        CalendarSnapshot {
            moment,
            weekday,
            today_range,
            live: live_clock(now, today_range),
            week_cycle: self.week_cycle(now),
            countdown: self.week_countdown(now),
            game_month: moment.game_month_key(),
            week,
        }
    }
}

/// The site's calendar.
#[derive(Debug, Clone, Default)]
pub struct RpgCalendar {
    config: CalendarConfig,
}

impl RpgCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }
}

impl CalendarService for RpgCalendar {
    fn config(&self) -> &CalendarConfig {
        &self.config
    }
}
