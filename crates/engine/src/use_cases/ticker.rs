//! Periodic clock ticker.
//!
//! Re-evaluates the calendar snapshot on a fixed period and hands it to a
//! sink. Every tick recomputes from scratch; nothing is carried between ticks.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use rpgcal_domain::{CalendarService, CalendarSnapshot};

use crate::infrastructure::ports::ClockPort;

/// Run the clock ticker until `cancel_token` is cancelled.
///
/// The first snapshot is delivered immediately, then once per `period`.
pub async fn run_clock_ticker<F>(
    calendar: Arc<dyn CalendarService>,
    clock: Arc<dyn ClockPort>,
    period: Duration,
    cancel_token: CancellationToken,
    mut sink: F,
) where
    F: FnMut(CalendarSnapshot) + Send,
{
    tracing::info!(period_ms = period.as_millis() as u64, "Starting clock ticker");

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                tracing::info!("Clock ticker shutting down");
                break;
            }
            _ = interval.tick() => {
                let snapshot = calendar.snapshot(clock.now());
                tracing::debug!(day_number = snapshot.moment.day_number, "Clock tick");
                sink(snapshot);
            }
        }
    }
}
