//! Use cases - calendar consumers.
//!
//! Each module orchestrates the calendar service and the clock port for one
//! caller: the roster, the monthly gate and the ticking display.

pub mod monthly_gate;
pub mod roster;
pub mod ticker;

pub use monthly_gate::{attempt_id, AttemptRecord, GateDecision, GateError, MonthlyGate};
pub use roster::{BirthdayPartition, BirthdayRecord, BirthdayRoster};
pub use ticker::run_clock_ticker;
