//! Application configuration

use std::env;
use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use rpgcal_domain::common::parse_local_datetime;
use rpgcal_domain::CalendarConfig;

/// Default ticker period in milliseconds
const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Calendar rules (epoch, hours per fictional day, month table)
    pub calendar: CalendarConfig,
    /// How often the clock ticker publishes a snapshot
    pub tick_period: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `RPG_CALENDAR_FILE` provides the base calendar; `RPG_EPOCH` and
    /// `RPG_HOURS_PER_DAY` override its fields.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut calendar = match lookup("RPG_CALENDAR_FILE") {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read calendar file {}", path))?;
                serde_json::from_str::<CalendarConfig>(&raw)
                    .with_context(|| format!("invalid calendar file {}", path))?
            }
            None => CalendarConfig::default(),
        };

        if let Some(raw) = lookup("RPG_EPOCH") {
            let epoch = parse_local_datetime(&raw)
                .with_context(|| format!("RPG_EPOCH must be a local timestamp, got {:?}", raw))?;
            calendar = calendar.with_epoch(epoch);
        }

        if let Some(raw) = lookup("RPG_HOURS_PER_DAY") {
            let hours: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("RPG_HOURS_PER_DAY must be an integer, got {:?}", raw))?;
            calendar = calendar
                .with_hours_per_fictional_day(hours)
                .context("RPG_HOURS_PER_DAY rejected")?;
        }

        let tick_millis = match lookup("CLOCK_TICK_MILLIS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("CLOCK_TICK_MILLIS must be an integer, got {:?}", raw))?,
            None => DEFAULT_TICK_MILLIS,
        };
        if tick_millis == 0 {
            anyhow::bail!("CLOCK_TICK_MILLIS must be greater than zero");
        }

        Ok(Self {
            calendar,
            tick_period: Duration::from_millis(tick_millis),
        })
    }
}
