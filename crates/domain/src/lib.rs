extern crate self as rpgcal_domain;

pub mod calendar_service;
pub mod common;
pub mod error;
pub mod game_time;
pub mod value_objects;

pub use error::DomainError;

// Re-export the calendar service
pub use calendar_service::{CalendarService, CalendarSnapshot, RpgCalendar};

// Re-export game time types
pub use game_time::{live_clock, LiveClock, TimeOfDay};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    allocate_week, month_name, next_month, resolve_calendar_moment, resolve_day_number,
    resolve_week_cycle, week_anchor, week_countdown, weekday_index, Birthday, CalendarConfig,
    CalendarMoment, DayRange, GameMonthKey, LeapRule, MonthTable, WeekCountdown, WeekCycle,
    WeeklyAllocation, DAYS_PER_WEEK, MAX_MONTH_LENGTH, MONTHS_PER_YEAR,
};
