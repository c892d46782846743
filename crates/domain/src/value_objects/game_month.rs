//! Game-month key for once-per-fictional-month gating
//!
//! The key is an opaque `"{year}-{month:02}"` string. Gating logic stores it
//! alongside an attempt and later compares it for equality; nothing here
//! interprets it further.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::calendar::{CalendarMoment, MONTHS_PER_YEAR};

/// Identifies one fictional month (e.g., "1-03").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameMonthKey {
    year: u32,
    month: u32,
}

impl GameMonthKey {
    /// Create a key for a 1-indexed month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the year is zero or the month is
    /// outside `1..=12`.
    pub fn new(year: u32, month: u32) -> Result<Self, DomainError> {
        if year == 0 {
            return Err(DomainError::validation("Game month year starts at 1"));
        }
        if month == 0 || month as usize > MONTHS_PER_YEAR {
            return Err(DomainError::validation(format!(
                "Game month must be between 1 and {}",
                MONTHS_PER_YEAR
            )));
        }
        Ok(Self { year, month })
    }

    pub fn from_moment(moment: &CalendarMoment) -> Self {
        Self {
            year: moment.year,
            month: moment.month,
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The key of the following fictional month, rolling into the next year
    /// after month 12.
    pub fn next(&self) -> Self {
        if self.month as usize >= MONTHS_PER_YEAR {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for GameMonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for GameMonthKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| DomainError::parse(format!("Game month key '{}' is not YEAR-MM", s)))?;
        let all_digits =
            |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(year) || !all_digits(month) {
            return Err(DomainError::parse(format!(
                "Game month key '{}' must contain only digits",
                s
            )));
        }
        if month.len() != 2 {
            return Err(DomainError::parse(format!(
                "Game month key '{}' needs a two-digit month",
                s
            )));
        }
        let year: u32 = year
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid year in game month key '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid month in game month key '{}'", s)))?;

        Self::new(year, month).map_err(|e| DomainError::parse(e.to_string()))
    }
}

impl TryFrom<String> for GameMonthKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GameMonthKey> for String {
    fn from(key: GameMonthKey) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(year: u32, month: u32) -> CalendarMoment {
        CalendarMoment {
            year,
            month,
            day_of_month: 1,
            day_number: 1,
        }
    }

    #[test]
    fn formats_with_two_digit_month() {
        assert_eq!(GameMonthKey::from_moment(&moment(1, 3)).to_string(), "1-03");
        assert_eq!(GameMonthKey::from_moment(&moment(12, 11)).to_string(), "12-11");
    }

    #[test]
    fn same_month_is_equal() {
        assert_eq!(
            GameMonthKey::from_moment(&moment(2, 5)),
            GameMonthKey::new(2, 5).unwrap()
        );
        assert_ne!(
            GameMonthKey::from_moment(&moment(2, 5)),
            GameMonthKey::from_moment(&moment(3, 5))
        );
    }

    #[test]
    fn parses_stored_keys() {
        let key: GameMonthKey = "1-03".parse().unwrap();
        assert_eq!((key.year(), key.month()), (1, 3));
        let key: GameMonthKey = " 14-12 ".parse().unwrap();
        assert_eq!((key.year(), key.month()), (14, 12));
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in [
            "", "1", "1-3", "1-003", "x-03", "1-xx", "0-03", "1-00", "1-13", "1-+3", "+1-03",
            "-1-03", "1- 3",
        ] {
            let result = bad.parse::<GameMonthKey>();
            assert!(
                matches!(result, Err(DomainError::Parse(_))),
                "expected parse error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn new_validates() {
        assert!(GameMonthKey::new(0, 1).is_err());
        assert!(GameMonthKey::new(1, 0).is_err());
        assert!(GameMonthKey::new(1, 13).is_err());
    }

    #[test]
    fn next_rolls_over_year() {
        assert_eq!(GameMonthKey::new(1, 11).unwrap().next().to_string(), "1-12");
        assert_eq!(GameMonthKey::new(1, 12).unwrap().next().to_string(), "2-01");
    }

    #[test]
    fn serde_as_string() {
        let key = GameMonthKey::new(3, 7).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"3-07\"");
        let back: GameMonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<GameMonthKey>("\"3-7\"").is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a = GameMonthKey::new(1, 12).unwrap();
        let b = GameMonthKey::new(2, 1).unwrap();
        assert!(a < b);
    }
}
