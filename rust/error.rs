use thiserror::Error;

/// Errors raised by the date parsing and arithmetic primitives.
///
/// Public formatting and comparison operations do not surface these; they translate them
/// into sentinel return values (`""`, `false` or [`INVALID_DATE`](crate::calendars::INVALID_DATE)).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("date input is empty")]
    EmptyInput,

    #[error("pattern '{pattern}' has unsupported tokens or no date or time tokens")]
    InvalidPattern { pattern: String },

    #[error("'{value}' does not match pattern '{pattern}'")]
    Unparseable { value: String, pattern: String },

    #[error("unknown calendar unit '{unit}', expected one of year, month, week, day, hour, minute, second, millisecond")]
    UnknownUnit { unit: String },

    #[error("date arithmetic left the representable range")]
    OutOfRange,
}

pub type CalendarResult<T> = Result<T, CalendarError>;
