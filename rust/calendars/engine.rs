use chrono::Weekday;
use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::{debug, trace};

use crate::calendars::clock::{Clock, SystemClock};
use crate::calendars::config::CalendarConfig;
use crate::calendars::instant::{CalendarInstant, Direction, Granularity};
use crate::calendars::pattern::DatePattern;
use crate::calendars::range::{DateArg, DateRange, DateStrRange};
use crate::error::CalendarResult;

/// Computes and compares date ranges relative to the instant reported by a [`Clock`].
///
/// Every operation reads the clock once. Comparisons never fail: an absent, empty or
/// unparseable operand makes them return `false`.
#[derive(Debug, Clone)]
pub struct CalendarRangeEngine<C: Clock = SystemClock> {
    clock: C,
    config: CalendarConfig,
}

impl Default for CalendarRangeEngine<SystemClock> {
    fn default() -> Self {
        CalendarRangeEngine::new(SystemClock)
    }
}

impl<C: Clock> CalendarRangeEngine<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, CalendarConfig::default())
    }

    pub fn with_config(clock: C, config: CalendarConfig) -> Self {
        CalendarRangeEngine { clock, config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn current_instant(&self) -> CalendarInstant {
        self.clock.now()
    }

    /// The current date rendered under the configured display pattern.
    pub fn current_date(&self) -> String {
        self.config.display_pattern.format(&self.clock.now())
    }

    pub fn current_date_text(&self, pattern: &DatePattern) -> String {
        pattern.format(&self.clock.now())
    }

    /// Parse ISO-8601 text, or return the current instant if `text` is absent or empty.
    pub fn instant_or_now(&self, text: Option<&str>) -> CalendarResult<CalendarInstant> {
        match text {
            Some(t) if !t.trim().is_empty() => CalendarInstant::parse_iso(t),
            _ => Ok(self.clock.now()),
        }
    }

    /// Yesterday as a half-open range: start of yesterday to start of today.
    pub fn yesterday_range(&self) -> DateRange {
        let today = self.clock.now().start_of(Granularity::Day);
        DateRange::new(today.saturating_add(-1, Granularity::Day), today)
    }

    /// Whether `instant` shifted by `amount` units is not yet in the past.
    pub fn is_date_within_future_window(
        &self,
        instant: &CalendarInstant,
        amount: i64,
        unit: Granularity,
    ) -> bool {
        instant.saturating_add(amount, unit) >= self.clock.now()
    }

    /// As [`is_date_within_future_window`](Self::is_date_within_future_window) for ISO text.
    /// Unparseable text is never within the window.
    pub fn is_date_text_within_future_window(
        &self,
        text: &str,
        amount: i64,
        unit: Granularity,
    ) -> bool {
        match CalendarInstant::parse_iso(text) {
            Ok(instant) => self.is_date_within_future_window(&instant, amount, unit),
            Err(e) => {
                debug!(%e, "future window check on unparseable date");
                false
            }
        }
    }

    /// The reporting window for the Tuesday/Friday cadence.
    ///
    /// - Tuesday: the preceding Friday to the preceding Monday.
    /// - Friday: Tuesday to Thursday of the current week.
    /// - Other days: the single point `now`.
    ///
    /// The Tuesday and Friday windows start at UTC midnight of their days.
    pub fn inner_week_window(&self) -> DateRange {
        let now = self.clock.now();
        match now.weekday() {
            Weekday::Tue => {
                trace!(%now, "inner week window from tuesday");
                DateRange::new(
                    now.saturating_add(-4, Granularity::Day).start_of(Granularity::Day),
                    now.saturating_add(-1, Granularity::Day).start_of(Granularity::Day),
                )
            }
            Weekday::Fri => {
                trace!(%now, "inner week window from friday");
                DateRange::new(
                    now.with_day_of_week(2).start_of(Granularity::Day),
                    now.with_day_of_week(4).start_of(Granularity::Day),
                )
            }
            _ => DateRange::point(now),
        }
    }

    /// First instant to last millisecond of the previous calendar month.
    pub fn previous_month_range(&self) -> DateRange {
        let month = self.clock.now().saturating_add(-1, Granularity::Month);
        DateRange::new(
            month.start_of(Granularity::Month),
            month.end_of(Granularity::Month),
        )
    }

    /// First and last calendar date of the current month as `YYYY-MM-DD`.
    pub fn month_range(&self) -> DateStrRange {
        self.month_range_of(&self.clock.now())
    }

    /// First and last calendar date of the month of `date` as `YYYY-MM-DD`.
    ///
    /// Text is read as ISO-8601. An absent `date` is the current month.
    pub fn month_range_for<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
    ) -> CalendarResult<DateStrRange> {
        let instant = match date.into() {
            DateArg::Absent => self.clock.now(),
            DateArg::Instant(instant) => instant,
            DateArg::Text(text) => CalendarInstant::parse_iso(text)?,
        };
        Ok(self.month_range_of(&instant))
    }

    fn month_range_of(&self, instant: &CalendarInstant) -> DateStrRange {
        DateStrRange::new(self.start_of_month(instant), self.end_of_month(instant))
    }

    pub fn start_of_month(&self, instant: &CalendarInstant) -> String {
        DatePattern::iso_date().format(&instant.start_of(Granularity::Month))
    }

    pub fn end_of_month(&self, instant: &CalendarInstant) -> String {
        DatePattern::iso_date().format(&instant.end_of(Granularity::Month))
    }

    /// Whether `date` lies within `range`, both ends inclusive, after reading all three under
    /// `pattern` (the configured comparison pattern if `None`). A pattern with unsupported
    /// tokens answers `false`.
    pub fn in_range(&self, date: &str, range: &DateStrRange, pattern: Option<&str>) -> bool {
        let Some(pattern) = self.pattern(pattern) else {
            return false;
        };
        let parse = |text: &str| {
            pattern
                .parse(text)
                .map_err(|e| debug!(%e, "range operand ignored"))
                .ok()
        };
        match (parse(date), parse(&range.begin), parse(&range.end)) {
            (Some(d), Some(begin), Some(end)) => begin <= d && d <= end,
            _ => false,
        }
    }

    /// `date < limit` at the precision of `pattern`. An absent `limit` is the current instant.
    ///
    /// The current instant is truncated to the pattern precision as well, so with the default
    /// `YYYY-MM-DD` pattern today's date is not before now even late in the day. Comparing
    /// against the untruncated instant would make `is_before` and `is_after_or_equal` disagree
    /// on the same operands.
    pub fn is_before<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        limit: impl Into<DateArg<'a>>,
        pattern: Option<&str>,
    ) -> bool {
        self.compare(date.into(), limit.into(), pattern) == Some(Ordering::Less)
    }

    /// `date > limit` at the precision of `pattern`. An absent `limit` is the current instant.
    pub fn is_after<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        limit: impl Into<DateArg<'a>>,
        pattern: Option<&str>,
    ) -> bool {
        self.compare(date.into(), limit.into(), pattern) == Some(Ordering::Greater)
    }

    /// `date >= limit` at the precision of `pattern`.
    ///
    /// For a date-only pattern this agrees with moving `limit` back one day and testing
    /// [`is_after`](Self::is_after).
    pub fn is_after_or_equal<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        limit: impl Into<DateArg<'a>>,
        pattern: Option<&str>,
    ) -> bool {
        matches!(
            self.compare(date.into(), limit.into(), pattern),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// `date <= limit` at the precision of `pattern`.
    pub fn is_before_or_equal<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        limit: impl Into<DateArg<'a>>,
        pattern: Option<&str>,
    ) -> bool {
        matches!(
            self.compare(date.into(), limit.into(), pattern),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// The previous work day before today, at UTC midnight.
    pub fn previous_work_day(&self) -> CalendarInstant {
        self.previous_work_day_from(&self.clock.now())
    }

    /// The previous work day before `from`, at UTC midnight. Sunday and Monday step back to
    /// the preceding Friday, any other day steps back one day.
    pub fn previous_work_day_from(&self, from: &CalendarInstant) -> CalendarInstant {
        let day = from.day_of_week();
        let diff = if day == 0 || day == 1 { day + 2 } else { 1 };
        from.saturating_add(-i64::from(diff), Granularity::Day)
            .start_of(Granularity::Day)
    }

    /// Signed fractional number of days from `start` to `end`.
    pub fn days_between(&self, start: &CalendarInstant, end: &CalendarInstant) -> f64 {
        start.days_until(end)
    }

    /// As [`days_between`](Self::days_between) for ISO text operands.
    pub fn days_between_text(&self, start: &str, end: &str) -> CalendarResult<f64> {
        let start = CalendarInstant::parse_iso(start)?;
        let end = CalendarInstant::parse_iso(end)?;
        Ok(start.days_until(&end))
    }

    /// The current instant moved `amount` months in `direction`.
    pub fn shift_month(&self, amount: i64, direction: Direction) -> CalendarInstant {
        self.clock
            .now()
            .shift(amount, direction, Granularity::Month)
    }

    fn pattern(&self, pattern: Option<&str>) -> Option<Cow<'_, DatePattern>> {
        match pattern {
            Some(p) => DatePattern::new(p)
                .map(Cow::Owned)
                .map_err(|e| debug!(%e, "comparison pattern ignored"))
                .ok(),
            None => Some(Cow::Borrowed(&self.config.comparison_pattern)),
        }
    }

    fn compare(
        &self,
        date: DateArg<'_>,
        limit: DateArg<'_>,
        pattern: Option<&str>,
    ) -> Option<Ordering> {
        let pattern = self.pattern(pattern)?;
        let now = self.clock.now();
        let date = match date {
            DateArg::Absent => return None,
            DateArg::Text(text) if text.is_empty() => return None,
            other => resolve(other, &pattern, now)?,
        };
        let limit = resolve(limit, &pattern, now)?;
        Some(date.cmp(&limit))
    }
}

/// Bring an operand to the precision of `pattern`. Absent operands are `now`.
fn resolve(
    arg: DateArg<'_>,
    pattern: &DatePattern,
    now: CalendarInstant,
) -> Option<CalendarInstant> {
    match arg {
        DateArg::Absent => Some(pattern.truncate(now)),
        DateArg::Instant(instant) => Some(pattern.truncate(instant)),
        DateArg::Text(text) => pattern
            .parse(text)
            .map_err(|e| debug!(%e, "comparison operand ignored"))
            .ok(),
    }
}
