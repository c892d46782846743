//! Once-per-fictional-month gating.
//!
//! An activity may be attempted once per scope (a member, a team) in each
//! fictional month. Attempts are stored with the month key they were made in;
//! the gate compares that key with the current one.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use rpgcal_domain::{CalendarService, DomainError, GameMonthKey};

use crate::infrastructure::ports::ClockPort;

/// Errors raised while evaluating stored attempts.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Stored attempt for {activity_id} has an unreadable month: {source}")]
    InvalidStoredMonth {
        activity_id: String,
        #[source]
        source: DomainError,
    },
}

/// A stored attempt at a gated activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub activity_id: String,
    pub scope_id: String,
    /// Game-month key at the time of the attempt (e.g., "1-03")
    pub month: String,
}

/// Outcome of a gate check for the current fictional month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GateDecision {
    Allowed { month: GameMonthKey },
    AlreadyAttempted { month: GameMonthKey },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed { .. })
    }

    pub fn month(&self) -> GameMonthKey {
        match self {
            GateDecision::Allowed { month } | GateDecision::AlreadyAttempted { month } => *month,
        }
    }
}

/// Identifier of one attempt document: `"{user}_{activity}_{month}"`.
pub fn attempt_id(user_id: &str, activity_id: &str, month: &GameMonthKey) -> String {
    format!("{}_{}_{}", user_id, activity_id, month)
}

pub struct MonthlyGate {
    calendar: Arc<dyn CalendarService>,
    clock: Arc<dyn ClockPort>,
}

impl MonthlyGate {
    pub fn new(calendar: Arc<dyn CalendarService>, clock: Arc<dyn ClockPort>) -> Self {
        Self { calendar, clock }
    }

    pub fn current_key(&self) -> GameMonthKey {
        self.calendar.game_month_key(self.clock.now())
    }

    /// Check `activity_id` for `scope_id` against prior attempts, as of now.
    pub fn check(
        &self,
        activity_id: &str,
        scope_id: &str,
        attempts: &[AttemptRecord],
    ) -> Result<GateDecision, GateError> {
        self.check_at(activity_id, scope_id, attempts, self.clock.now())
    }

    /// Check `activity_id` for `scope_id` against prior attempts, as of `now`.
    ///
    /// Only attempts for the same activity and scope are read; their stored
    /// month must parse as a game-month key.
    pub fn check_at(
        &self,
        activity_id: &str,
        scope_id: &str,
        attempts: &[AttemptRecord],
        now: NaiveDateTime,
    ) -> Result<GateDecision, GateError> {
        let month = self.calendar.game_month_key(now);

        for attempt in attempts
            .iter()
            .filter(|a| a.activity_id == activity_id && a.scope_id == scope_id)
        {
            let stored: GameMonthKey =
                attempt
                    .month
                    .parse()
                    .map_err(|source| GateError::InvalidStoredMonth {
                        activity_id: attempt.activity_id.clone(),
                        source,
                    })?;
            if stored == month {
                tracing::debug!(activity_id, scope_id, %month, "Activity already attempted this month");
                return Ok(GateDecision::AlreadyAttempted { month });
            }
        }

        tracing::debug!(activity_id, scope_id, %month, "Activity allowed");
        Ok(GateDecision::Allowed { month })
    }

    /// Build the attempt record to store for an attempt made now.
    pub fn record(&self, activity_id: &str, scope_id: &str) -> AttemptRecord {
        AttemptRecord {
            activity_id: activity_id.to_string(),
            scope_id: scope_id.to_string(),
            month: self.current_key().to_string(),
        }
    }
}
