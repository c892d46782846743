//! Birthday roster use cases.
//!
//! Splits stored member birthdays into the ones celebrated on today's
//! fictional days and the ones coming up next fictional month.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rpgcal_domain::{Birthday, CalendarService, GameMonthKey};

use crate::infrastructure::ports::ClockPort;

/// A member's stored fictional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayRecord {
    pub user_id: String,
    pub birth_month: u32,
    pub birth_day: u32,
}

impl BirthdayRecord {
    pub fn new(user_id: impl Into<String>, birth_month: u32, birth_day: u32) -> Self {
        Self {
            user_id: user_id.into(),
            birth_month,
            birth_day,
        }
    }

    pub fn birthday(&self) -> Birthday {
        Birthday::new(self.birth_month, self.birth_day)
    }
}

/// Result of partitioning a roster at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayPartition {
    /// Birthdays on the fictional days shown today
    pub today: Vec<BirthdayRecord>,
    /// Birthdays in the next fictional month, ascending by day
    pub upcoming: Vec<BirthdayRecord>,
    /// The month `upcoming` refers to
    pub upcoming_month: GameMonthKey,
}

pub struct BirthdayRoster {
    calendar: Arc<dyn CalendarService>,
    clock: Arc<dyn ClockPort>,
}

impl BirthdayRoster {
    pub fn new(calendar: Arc<dyn CalendarService>, clock: Arc<dyn ClockPort>) -> Self {
        Self { calendar, clock }
    }

    /// Partition `records` as of the clock's current time.
    pub fn execute(&self, records: &[BirthdayRecord]) -> BirthdayPartition {
        self.partition(records, self.clock.now())
    }

    /// Partition `records` as of `now`.
    pub fn partition(&self, records: &[BirthdayRecord], now: NaiveDateTime) -> BirthdayPartition {
        let moment = self.calendar.moment(now);
        let today_range = self.calendar.today_range(now);
        let upcoming_month = moment.game_month_key().next();

        let mut today = Vec::new();
        let mut upcoming = Vec::new();
        for record in records {
            let birthday = record.birthday();
            if !birthday.has_valid_month() {
                tracing::debug!(
                    user_id = %record.user_id,
                    birth_month = record.birth_month,
                    "Skipping birthday with out-of-range month"
                );
                continue;
            }
            if birthday.falls_on(&moment, today_range) {
                today.push(record.clone());
            }
            if birthday.falls_in_next_month(&moment) {
                upcoming.push(record.clone());
            }
        }
        upcoming.sort_by_key(|record| record.birth_day);

        BirthdayPartition {
            today,
            upcoming,
            upcoming_month,
        }
    }
}
