//! Fictional birthdays
//!
//! A birthday is a stored (month, day) in the fictional calendar. It is
//! "today" when its month is the current fictional month and its day falls in
//! the range the weekly allocation gives to the current real weekday.

use serde::{Deserialize, Serialize};

use crate::value_objects::calendar::{CalendarMoment, MONTHS_PER_YEAR};
use crate::value_objects::week::DayRange;

/// A stored fictional birthday (1-indexed month and day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Birthday {
    pub month: u32,
    pub day: u32,
}

impl Birthday {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Whether the month is a real fictional month (1..=12).
    pub fn has_valid_month(&self) -> bool {
        (1..=MONTHS_PER_YEAR as u32).contains(&self.month)
    }

    /// True when this birthday falls on the fictional days shown today.
    pub fn falls_on(&self, moment: &CalendarMoment, today: DayRange) -> bool {
        self.month == moment.month && today.contains(self.day)
    }

    /// True when this birthday is in the fictional month after `moment`'s.
    pub fn falls_in_next_month(&self, moment: &CalendarMoment) -> bool {
        self.month == next_month(moment).1
    }
}

/// The (year, month) following `moment`'s month; the year only changes when
/// wrapping from month 12 to month 1.
pub fn next_month(moment: &CalendarMoment) -> (u32, u32) {
    let month = (moment.month % MONTHS_PER_YEAR as u32) + 1;
    let year = if month == 1 {
        moment.year + 1
    } else {
        moment.year
    };
    (year, month)
}
