//! RPG Calendar engine library.
//!
//! Runtime side of the fictional calendar: configuration, the clock port and
//! the use cases that consume `rpgcal_domain::CalendarService`.
//!
//! ## Structure
//!
//! - `infrastructure/` - Clock port, system clock and configuration
//! - `use_cases/` - Birthday roster, monthly gate and clock ticker
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
