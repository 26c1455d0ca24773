use serde::{Deserialize, Serialize};

use crate::calendars::pattern::DatePattern;

/// Default patterns used by a [`CalendarRangeEngine`](crate::calendars::CalendarRangeEngine).
///
/// Missing fields take their defaults when read from JSON:
///
/// ```rust
/// # use calfmt::calendars::CalendarConfig;
/// # use calfmt::json::JSON;
/// let config = CalendarConfig::from_json(r#"{"display_pattern": "DD/MM/YYYY"}"#).unwrap();
/// assert_eq!(config.comparison_pattern.as_str(), "YYYY-MM-DD");
/// assert_eq!(config.display_pattern.as_str(), "DD/MM/YYYY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Pattern for text operands of comparisons when none is given.
    pub comparison_pattern: DatePattern,
    /// Pattern for rendering the current date.
    pub display_pattern: DatePattern,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            comparison_pattern: DatePattern::iso_date(),
            display_pattern: DatePattern::display_date(),
        }
    }
}
