//! Application state and composition.

use std::sync::Arc;

use rpgcal_domain::{CalendarConfig, CalendarService, RpgCalendar};

use crate::infrastructure::{clock::SystemClock, ports::ClockPort};
use crate::use_cases::{BirthdayRoster, MonthlyGate};

/// Main application state.
///
/// Holds the calendar, the clock and the use cases built on them.
pub struct App {
    pub calendar: Arc<dyn CalendarService>,
    pub clock: Arc<dyn ClockPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub roster: BirthdayRoster,
    pub gate: MonthlyGate,
}

impl App {
    /// Compose the application around the host's system clock.
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(config: CalendarConfig, clock: Arc<dyn ClockPort>) -> Self {
        let calendar: Arc<dyn CalendarService> = Arc::new(RpgCalendar::new(config));

        let use_cases = UseCases {
            roster: BirthdayRoster::new(calendar.clone(), clock.clone()),
            gate: MonthlyGate::new(calendar.clone(), clock.clone()),
        };

        Self {
            calendar,
            clock,
            use_cases,
        }
    }
}
