use serde::{Deserialize, Serialize};

use crate::calendars::instant::CalendarInstant;
use crate::calendars::pattern::DatePattern;

/// A pair of instants. Ranges built by the engine always satisfy `begin <= end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub begin: CalendarInstant,
    pub end: CalendarInstant,
}

impl DateRange {
    pub fn new(begin: CalendarInstant, end: CalendarInstant) -> Self {
        DateRange { begin, end }
    }

    /// A single-point range, `begin == end`.
    pub fn point(instant: CalendarInstant) -> Self {
        DateRange::new(instant, instant)
    }

    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// Inclusive containment of both ends.
    pub fn contains(&self, instant: &CalendarInstant) -> bool {
        self.begin <= *instant && *instant <= self.end
    }

    /// Half-open containment, `begin <= instant < end`.
    pub fn contains_half_open(&self, instant: &CalendarInstant) -> bool {
        self.begin <= *instant && *instant < self.end
    }

    /// Both ends as RFC 3339 UTC text.
    pub fn to_iso_pair(&self) -> (String, String) {
        (self.begin.to_iso_string(), self.end.to_iso_string())
    }

    pub fn format_with(&self, pattern: &DatePattern) -> DateStrRange {
        DateStrRange::new(pattern.format(&self.begin), pattern.format(&self.end))
    }
}

/// A range of calendar-date text, e.g. `2024-03-01` to `2024-03-31`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStrRange {
    pub begin: String,
    pub end: String,
}

impl DateStrRange {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        DateStrRange {
            begin: begin.into(),
            end: end.into(),
        }
    }
}

/// A date operand that may be absent, text to be parsed, or an instant.
///
/// Comparison operations treat an absent or empty `date` as "no answer" (`false`). An absent
/// `limit` stands for the current instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DateArg<'a> {
    #[default]
    Absent,
    Text(&'a str),
    Instant(CalendarInstant),
}

impl<'a> From<&'a str> for DateArg<'a> {
    fn from(item: &'a str) -> Self {
        DateArg::Text(item)
    }
}

impl<'a> From<&'a String> for DateArg<'a> {
    fn from(item: &'a String) -> Self {
        DateArg::Text(item.as_str())
    }
}

impl From<CalendarInstant> for DateArg<'_> {
    fn from(item: CalendarInstant) -> Self {
        DateArg::Instant(item)
    }
}

impl From<&CalendarInstant> for DateArg<'_> {
    fn from(item: &CalendarInstant) -> Self {
        DateArg::Instant(*item)
    }
}

impl<'a, T: Into<DateArg<'a>>> From<Option<T>> for DateArg<'a> {
    fn from(item: Option<T>) -> Self {
        item.map_or(DateArg::Absent, Into::into)
    }
}
