//! Compute reporting date ranges and compare calendar dates relative to a clock.
//!
//! ### Basic usage
//!
//! A [`CalendarRangeEngine`] owns a [`Clock`]. Production code uses the [`SystemClock`],
//! tests and replays use a [`FixedClock`]. All instants are UTC and days start at UTC
//! midnight.
//!
//! ```rust
//! # use calfmt::calendars::{CalendarRangeEngine, FixedClock, DateRange, udt, udt_hms};
//! // Tuesday 5th March 2024, mid afternoon
//! let engine = CalendarRangeEngine::new(FixedClock::new(udt_hms(2024, 3, 5, 15, 0, 0)));
//! let window = engine.inner_week_window();
//! // Friday 1st March to Monday 4th March
//! assert_eq!(window, DateRange::new(udt(2024, 3, 1), udt(2024, 3, 4)));
//! // Monday 4th March is the previous work day
//! assert_eq!(engine.previous_work_day(), udt(2024, 3, 4));
//! ```
//!
//! ### Comparisons
//!
//! Text operands are read under a date pattern, by default `YYYY-MM-DD`. Both operands are
//! compared at the precision of that pattern, so a date-only pattern compares whole days
//! even when the limit is the current instant.
//!
//! ```rust
//! # use calfmt::calendars::{CalendarRangeEngine, FixedClock, DateArg, DateStrRange, udt_hms};
//! # let engine = CalendarRangeEngine::new(FixedClock::new(udt_hms(2024, 3, 5, 15, 0, 0)));
//! assert!(engine.is_after_or_equal("2024-03-05", DateArg::Absent, None));
//! assert!(!engine.is_after("2024-03-05", DateArg::Absent, None));
//!
//! let march = engine.month_range();
//! assert_eq!(march, DateStrRange::new("2024-03-01", "2024-03-31"));
//! assert!(engine.in_range("2024-03-31", &march, None));
//! ```
//!
//! Absent or unparseable operands never raise; the comparison answers `false`.

mod clock;
mod config;
mod engine;
mod instant;
mod pattern;
mod range;

mod serde;

pub use crate::calendars::{
    clock::{Clock, FixedClock, SystemClock},
    config::CalendarConfig,
    engine::CalendarRangeEngine,
    instant::{udt, udt_hms, CalendarInstant, Direction, Granularity},
    pattern::{DatePattern, DISPLAY_DATE, DISPLAY_DATETIME, INVALID_DATE, ISO_DATE},
    range::{DateArg, DateRange, DateStrRange},
};
