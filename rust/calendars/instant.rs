use chrono::prelude::*;
use chrono::{Days, Months, SecondsFormat, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalendarError, CalendarResult};

/// Create a [`CalendarInstant`] at UTC midnight of the given date.
///
/// Panics if date values are invalid.
pub fn udt(year: i32, month: u32, day: u32) -> CalendarInstant {
    udt_hms(year, month, day, 0, 0, 0)
}

/// Create a [`CalendarInstant`] at the given UTC date and wall time.
///
/// Panics if date or time values are invalid.
pub fn udt_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> CalendarInstant {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` `day` are invalid.")
        .and_hms_opt(hour, min, sec)
        .expect("`hour`, `min`, `sec` are invalid.");
    CalendarInstant::from_naive(naive)
}

/// A unit of calendar arithmetic and comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Granularity {
    /// Fixed-length span for `amount` units. `None` for calendar units (months and years) or
    /// on overflow.
    fn delta(&self, amount: i64) -> Option<TimeDelta> {
        match self {
            Granularity::Year | Granularity::Month => None,
            Granularity::Week => TimeDelta::try_weeks(amount),
            Granularity::Day => TimeDelta::try_days(amount),
            Granularity::Hour => TimeDelta::try_hours(amount),
            Granularity::Minute => TimeDelta::try_minutes(amount),
            Granularity::Second => TimeDelta::try_seconds(amount),
            Granularity::Millisecond => TimeDelta::try_milliseconds(amount),
        }
    }
}

impl FromStr for Granularity {
    type Err = CalendarError;

    /// Accepts the long names in singular or plural and the short aliases
    /// `y`, `M`, `w`, `d`, `h`, `m`, `s`, `ms`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `M` (month) and `m` (minute) only differ by case.
        match s {
            "M" => return Ok(Granularity::Month),
            "m" => return Ok(Granularity::Minute),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "y" | "year" | "years" => Ok(Granularity::Year),
            "month" | "months" => Ok(Granularity::Month),
            "w" | "week" | "weeks" => Ok(Granularity::Week),
            "d" | "day" | "days" => Ok(Granularity::Day),
            "h" | "hour" | "hours" => Ok(Granularity::Hour),
            "minute" | "minutes" => Ok(Granularity::Minute),
            "s" | "second" | "seconds" => Ok(Granularity::Second),
            "ms" | "millisecond" | "milliseconds" => Ok(Granularity::Millisecond),
            _ => Err(CalendarError::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Year => "year",
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
            Granularity::Hour => "hour",
            Granularity::Minute => "minute",
            Granularity::Second => "second",
            Granularity::Millisecond => "millisecond",
        };
        f.write_str(name)
    }
}

/// Whether a shift moves forward or backward in time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Add,
    Subtract,
}

impl Direction {
    fn signed(&self, amount: i64) -> i64 {
        match self {
            Direction::Add => amount,
            Direction::Subtract => amount.saturating_neg(),
        }
    }
}

/// An immutable point in time, normalized to UTC.
///
/// Day boundaries are UTC midnight. Weeks start on Sunday, matching the day index convention
/// of [`CalendarInstant::day_of_week`] (Sunday = 0 ... Saturday = 6).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarInstant(DateTime<Utc>);

impl CalendarInstant {
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        CalendarInstant(datetime)
    }

    /// Interpret a naive date-time as UTC wall time.
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        CalendarInstant(Utc.from_utc_datetime(&naive))
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0.naive_utc()
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day index with Sunday = 0 ... Saturday = 6.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Parse ISO-8601 text: RFC 3339 with offset, or a naive date or date-time read as UTC.
    pub fn parse_iso(text: &str) -> CalendarResult<Self> {
        const NAIVE_DATETIMES: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];
        const NAIVE_DATES: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

        let text = text.trim();
        if text.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Ok(CalendarInstant(datetime.with_timezone(&Utc)));
        }
        for fmt in NAIVE_DATETIMES {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                return Ok(Self::from_naive(naive));
            }
        }
        for fmt in NAIVE_DATES {
            if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
                return Ok(Self::from_naive(date.and_time(NaiveTime::MIN)));
            }
        }
        Err(CalendarError::Unparseable {
            value: text.to_string(),
            pattern: "ISO-8601".to_string(),
        })
    }

    /// Shift by `amount` units. Month and year shifts clamp the day to the length of the
    /// target month, e.g. 31st January plus one month is 29th February in a leap year.
    pub fn add(self, amount: i64, unit: Granularity) -> CalendarResult<Self> {
        let shifted = match unit {
            Granularity::Year | Granularity::Month => {
                let months = match unit {
                    Granularity::Year => amount.checked_mul(12),
                    _ => Some(amount),
                }
                .ok_or(CalendarError::OutOfRange)?;
                let step = Months::new(
                    u32::try_from(months.unsigned_abs()).map_err(|_| CalendarError::OutOfRange)?,
                );
                if months < 0 {
                    self.0.checked_sub_months(step)
                } else {
                    self.0.checked_add_months(step)
                }
            }
            _ => unit
                .delta(amount)
                .and_then(|delta| self.0.checked_add_signed(delta)),
        };
        shifted.map(CalendarInstant).ok_or(CalendarError::OutOfRange)
    }

    pub fn subtract(self, amount: i64, unit: Granularity) -> CalendarResult<Self> {
        let negated = amount.checked_neg().ok_or(CalendarError::OutOfRange)?;
        self.add(negated, unit)
    }

    /// As [`CalendarInstant::add`] but clamped to the representable range.
    pub fn saturating_add(self, amount: i64, unit: Granularity) -> Self {
        self.add(amount, unit).unwrap_or(if amount < 0 {
            CalendarInstant(DateTime::<Utc>::MIN_UTC)
        } else {
            CalendarInstant(DateTime::<Utc>::MAX_UTC)
        })
    }

    pub fn shift(self, amount: i64, direction: Direction, unit: Granularity) -> Self {
        self.saturating_add(direction.signed(amount), unit)
    }

    /// Truncate to the first instant of the enclosing `unit`.
    pub fn start_of(self, unit: Granularity) -> Self {
        let date = self.date();
        let time = self.0.time();
        let naive = match unit {
            Granularity::Year => date.with_ordinal(1).unwrap_or(date).and_time(NaiveTime::MIN),
            Granularity::Month => date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN),
            Granularity::Week => date
                .checked_sub_days(Days::new(u64::from(self.day_of_week())))
                .unwrap_or(date)
                .and_time(NaiveTime::MIN),
            Granularity::Day => date.and_time(NaiveTime::MIN),
            Granularity::Hour => date.and_time(
                NaiveTime::from_hms_opt(time.hour(), 0, 0).unwrap_or(NaiveTime::MIN),
            ),
            Granularity::Minute => date.and_time(
                NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN),
            ),
            Granularity::Second => date.and_time(time.with_nanosecond(0).unwrap_or(time)),
            Granularity::Millisecond => {
                let millis = self.0.timestamp_subsec_millis();
                date.and_time(time.with_nanosecond(millis * 1_000_000).unwrap_or(time))
            }
        };
        Self::from_naive(naive)
    }

    /// The last millisecond of the enclosing `unit`, e.g. `23:59:59.999` for a day.
    pub fn end_of(self, unit: Granularity) -> Self {
        self.start_of(unit)
            .add(1, unit)
            .and_then(|next| next.add(-1, Granularity::Millisecond))
            .unwrap_or(CalendarInstant(DateTime::<Utc>::MAX_UTC))
    }

    /// Move to the given day of the current Sunday-based week, keeping the time of day.
    ///
    /// `day_index` uses Sunday = 0 ... Saturday = 6; larger values spill into the next week.
    pub fn with_day_of_week(self, day_index: u32) -> Self {
        let offset = i64::from(day_index) - i64::from(self.day_of_week());
        self.saturating_add(offset, Granularity::Day)
    }

    /// Signed fractional number of days from `self` to `other`.
    pub fn days_until(&self, other: &CalendarInstant) -> f64 {
        const MILLIS_PER_DAY: f64 = 86_400_000.0;
        (other.0 - self.0).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// RFC 3339 text in UTC with second precision, e.g. `2024-03-07T00:00:00Z`.
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<DateTime<Utc>> for CalendarInstant {
    fn from(item: DateTime<Utc>) -> Self {
        CalendarInstant(item)
    }
}

impl From<NaiveDateTime> for CalendarInstant {
    fn from(item: NaiveDateTime) -> Self {
        CalendarInstant::from_naive(item)
    }
}

impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}
