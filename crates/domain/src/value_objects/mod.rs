//! Value objects - Immutable objects defined by their attributes

mod birthday;
mod calendar;
mod game_month;
mod week;

pub use birthday::{next_month, Birthday};

pub use calendar::{
    month_name, resolve_calendar_moment, resolve_day_number, resolve_week_cycle, CalendarConfig,
    CalendarMoment, LeapRule, MonthTable, WeekCycle, MAX_MONTH_LENGTH, MONTHS_PER_YEAR,
};

// Once-per-month gating key
pub use game_month::GameMonthKey;

pub use week::{
    allocate_week, week_anchor, week_countdown, weekday_index, DayRange, WeekCountdown,
    WeeklyAllocation, DAYS_PER_WEEK,
};
