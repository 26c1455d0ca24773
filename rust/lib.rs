//! This is the documentation for calfmt
//!
//! Two independent components:
//!
//! - [`calendars::CalendarRangeEngine`] computes reporting date ranges (yesterday, previous
//!   month, the Tuesday/Friday inner week window, the previous work day) and compares
//!   calendar dates against a clock.
//! - [`formatting::LocaleTextFormatter`] renders amounts, dates, phone numbers, document
//!   numbers and Russian counted nouns as display strings.
//!
//! Neither component keeps mutable state. The clock and locale are injected at construction.

#[cfg(test)]
mod tests;

pub mod error;
pub use crate::error::{CalendarError, CalendarResult};

pub mod json;

pub mod calendars;
pub use crate::calendars::{CalendarInstant, CalendarRangeEngine, Clock, DateRange};

pub mod formatting;
pub use crate::formatting::LocaleTextFormatter;
