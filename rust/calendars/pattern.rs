use chrono::format::{parse_and_remainder, Parsed, StrftimeItems};
use chrono::{Locale, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::instant::{CalendarInstant, Granularity};
use crate::error::{CalendarError, CalendarResult};

/// Calendar-date text such as `2024-03-07`.
pub const ISO_DATE: &str = "YYYY-MM-DD";
/// Display date such as `07.03.2024`.
pub const DISPLAY_DATE: &str = "DD.MM.YYYY";
/// Display date-time such as `07.03.2024 10:20:30`.
pub const DISPLAY_DATETIME: &str = "DD.MM.YYYY HH:mm:ss";

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Month and weekday names are rendered in Russian.
const NAMES_LOCALE: Locale = Locale::ru_RU;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthLong,
    MonthShort,
    Month2,
    Month1,
    Day2,
    Day1,
    WeekdayLong,
    WeekdayShort,
    Hour2,
    Hour1,
    Minute2,
    Minute1,
    Second2,
    Second1,
    Millis,
    Offset,
    OffsetCompact,
    Literal(String),
}

// Longest tokens first so that `MMMM` wins over `MM` and `MM` over `M`.
const TOKENS: [(&str, Token); 19] = [
    ("YYYY", Token::Year4),
    ("MMMM", Token::MonthLong),
    ("dddd", Token::WeekdayLong),
    ("MMM", Token::MonthShort),
    ("ddd", Token::WeekdayShort),
    ("SSS", Token::Millis),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("DD", Token::Day2),
    ("HH", Token::Hour2),
    ("mm", Token::Minute2),
    ("ss", Token::Second2),
    ("ZZ", Token::OffsetCompact),
    ("M", Token::Month1),
    ("D", Token::Day1),
    ("H", Token::Hour1),
    ("m", Token::Minute1),
    ("s", Token::Second1),
    ("Z", Token::Offset),
];

// Letters that start a token in moment-style patterns. Any of these left over after
// matching `TOKENS` is a token this crate cannot render.
const TOKEN_LETTERS: &str = "YMDdHhmsSAaZXxQWwEeGgkLlNo";

impl Token {
    fn strftime(&self) -> String {
        match self {
            Token::Year4 => "%Y".to_string(),
            Token::Year2 => "%y".to_string(),
            Token::MonthLong => "%B".to_string(),
            Token::MonthShort => "%b".to_string(),
            Token::Month2 => "%m".to_string(),
            Token::Month1 => "%-m".to_string(),
            Token::Day2 => "%d".to_string(),
            Token::Day1 => "%-d".to_string(),
            Token::WeekdayLong => "%A".to_string(),
            Token::WeekdayShort => "%a".to_string(),
            Token::Hour2 => "%H".to_string(),
            Token::Hour1 => "%-H".to_string(),
            Token::Minute2 => "%M".to_string(),
            Token::Minute1 => "%-M".to_string(),
            Token::Second2 => "%S".to_string(),
            Token::Second1 => "%-S".to_string(),
            Token::Millis => "%3f".to_string(),
            Token::Offset => "%:z".to_string(),
            Token::OffsetCompact => "%z".to_string(),
            Token::Literal(text) => text.replace('%', "%%"),
        }
    }

    fn unit(&self) -> Option<Granularity> {
        match self {
            Token::Year4 | Token::Year2 => Some(Granularity::Year),
            Token::MonthLong | Token::MonthShort | Token::Month2 | Token::Month1 => {
                Some(Granularity::Month)
            }
            Token::Day2 | Token::Day1 => Some(Granularity::Day),
            Token::Hour2 | Token::Hour1 => Some(Granularity::Hour),
            Token::Minute2 | Token::Minute1 => Some(Granularity::Minute),
            Token::Second2 | Token::Second1 => Some(Granularity::Second),
            Token::Millis => Some(Granularity::Millisecond),
            Token::WeekdayLong
            | Token::WeekdayShort
            | Token::Offset
            | Token::OffsetCompact
            | Token::Literal(_) => None,
        }
    }

    fn is_offset(&self) -> bool {
        matches!(self, Token::Offset | Token::OffsetCompact)
    }
}

fn lit(text: &str) -> Token {
    Token::Literal(text.to_string())
}

fn tokenize(pattern: &str) -> CalendarResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        // `[...]` escapes literal text
        if let Some(stripped) = rest.strip_prefix('[') {
            if let Some(close) = stripped.find(']') {
                literal.push_str(&stripped[..close]);
                rest = &stripped[close + 1..];
                continue;
            }
        }
        for (name, token) in TOKENS.iter() {
            if let Some(stripped) = rest.strip_prefix(name) {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token.clone());
                rest = stripped;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if TOKEN_LETTERS.contains(c) {
                return Err(CalendarError::InvalidPattern {
                    pattern: pattern.to_string(),
                });
            }
            literal.push(c);
        }
        rest = chars.as_str();
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

/// A date pattern written with `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss` style tokens.
///
/// Supported tokens are `YYYY YY MMMM MMM MM M DD D dddd ddd HH H mm m ss s SSS ZZ Z`.
/// Month and weekday names render in Russian. Other moment token letters (`Do`, `hh`, `A`,
/// ...) are rejected with [`CalendarError::InvalidPattern`]. Any other character is a
/// literal, and text inside `[...]` is always literal.
///
/// ```rust
/// # use calfmt::calendars::{DatePattern, udt_hms};
/// let pattern = DatePattern::new("DD.MM.YYYY HH:mm").unwrap();
/// assert_eq!(pattern.format(&udt_hms(2024, 3, 7, 9, 5, 0)), "07.03.2024 09:05");
/// assert_eq!(pattern.parse("07.03.2024 09:05").unwrap(), udt_hms(2024, 3, 7, 9, 5, 0));
///
/// let long = DatePattern::new("D MMMM YYYY").unwrap();
/// assert_eq!(long.format(&udt_hms(2024, 3, 7, 0, 0, 0)), "7 марта 2024");
///
/// assert!(DatePattern::new("Do MMMM").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatePattern {
    source: String,
    tokens: Vec<Token>,
    strftime: String,
}

impl DatePattern {
    pub fn new(pattern: &str) -> CalendarResult<Self> {
        Ok(Self::from_tokens(pattern, tokenize(pattern)?))
    }

    fn from_tokens(source: &str, tokens: Vec<Token>) -> Self {
        let strftime = tokens.iter().map(Token::strftime).collect::<String>();
        DatePattern {
            source: source.to_string(),
            tokens,
            strftime,
        }
    }

    /// [`ISO_DATE`], `YYYY-MM-DD`.
    pub fn iso_date() -> Self {
        let tokens = vec![Token::Year4, lit("-"), Token::Month2, lit("-"), Token::Day2];
        Self::from_tokens(ISO_DATE, tokens)
    }

    /// [`DISPLAY_DATE`], `DD.MM.YYYY`.
    pub fn display_date() -> Self {
        let tokens = vec![Token::Day2, lit("."), Token::Month2, lit("."), Token::Year4];
        Self::from_tokens(DISPLAY_DATE, tokens)
    }

    /// [`DISPLAY_DATETIME`], `DD.MM.YYYY HH:mm:ss`.
    pub fn display_datetime() -> Self {
        let tokens = vec![
            Token::Day2,
            lit("."),
            Token::Month2,
            lit("."),
            Token::Year4,
            lit(" "),
            Token::Hour2,
            lit(":"),
            Token::Minute2,
            lit(":"),
            Token::Second2,
        ];
        Self::from_tokens(DISPLAY_DATETIME, tokens)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The finest unit the pattern carries, e.g. [`Granularity::Day`] for `YYYY-MM-DD`.
    ///
    /// `None` if the pattern holds only literal text.
    pub fn precision(&self) -> Option<Granularity> {
        self.tokens.iter().filter_map(Token::unit).max()
    }

    fn carries(&self, unit: Granularity) -> bool {
        self.tokens.iter().any(|t| t.unit() == Some(unit))
    }

    /// Truncate an instant to the precision of this pattern, as if it were rendered and read
    /// back.
    pub fn truncate(&self, instant: CalendarInstant) -> CalendarInstant {
        match self.precision() {
            Some(unit) => instant.start_of(unit),
            None => instant,
        }
    }

    pub fn format(&self, instant: &CalendarInstant) -> String {
        instant
            .into_inner()
            .format_localized(&self.strftime, NAMES_LOCALE)
            .to_string()
    }

    /// Read `text` under the pattern as UTC wall time.
    ///
    /// Fields the pattern does not carry default to the start of their range (day 1,
    /// January, midnight). A pattern with an offset token reads the offset and converts to
    /// UTC. Trailing text after the last token is ignored. Month and weekday names are only
    /// read in English.
    pub fn parse(&self, text: &str) -> CalendarResult<CalendarInstant> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        if self.precision().is_none() {
            return Err(CalendarError::InvalidPattern {
                pattern: self.source.clone(),
            });
        }
        let mut parsed = Parsed::new();
        parse_and_remainder(&mut parsed, text, StrftimeItems::new(&self.strftime))
            .map_err(|_| self.unparseable(text))?;
        self.fill_missing(&mut parsed)
            .map_err(|_| self.unparseable(text))?;

        if self.tokens.iter().any(Token::is_offset) {
            let datetime = parsed.to_datetime().map_err(|_| self.unparseable(text))?;
            return Ok(CalendarInstant::from_utc(datetime.with_timezone(&Utc)));
        }
        let date = parsed.to_naive_date().map_err(|_| self.unparseable(text))?;
        let time = parsed.to_naive_time().map_err(|_| self.unparseable(text))?;
        Ok(CalendarInstant::from_naive(date.and_time(time)))
    }

    fn fill_missing(&self, parsed: &mut Parsed) -> chrono::format::ParseResult<()> {
        if !self.carries(Granularity::Month) {
            parsed.set_month(1)?;
        }
        if !self.carries(Granularity::Day) {
            parsed.set_day(1)?;
        }
        if !self.carries(Granularity::Hour) {
            parsed.set_hour(0)?;
        }
        if !self.carries(Granularity::Minute) {
            parsed.set_minute(0)?;
        }
        if !self.carries(Granularity::Second) {
            parsed.set_second(0)?;
        }
        Ok(())
    }

    fn unparseable(&self, text: &str) -> CalendarError {
        CalendarError::Unparseable {
            value: text.to_string(),
            pattern: self.source.clone(),
        }
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        DatePattern::iso_date()
    }
}

impl TryFrom<&str> for DatePattern {
    type Error = CalendarError;
    fn try_from(item: &str) -> Result<Self, Self::Error> {
        DatePattern::new(item)
    }
}

impl TryFrom<String> for DatePattern {
    type Error = CalendarError;
    fn try_from(item: String) -> Result<Self, Self::Error> {
        DatePattern::new(&item)
    }
}

impl From<DatePattern> for String {
    fn from(item: DatePattern) -> Self {
        item.source
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{udt, udt_hms};

    fn fixture_pattern(pattern: &str) -> DatePattern {
        DatePattern::new(pattern).unwrap()
    }

    #[test]
    fn test_tokenize_translates_to_strftime() {
        let options: Vec<(&str, &str)> = vec![
            ("YYYY-MM-DD", "%Y-%m-%d"),
            ("DD.MM.YYYY HH:mm:ss", "%d.%m.%Y %H:%M:%S"),
            ("D/M/YY", "%-d/%-m/%y"),
            ("YYYY [at] HH%", "%Y at %H%%"),
            ("D MMMM YYYY", "%-d %B %Y"),
            ("ddd, D MMM", "%a, %-d %b"),
            ("dddd", "%A"),
            ("YYYY-MM-DDTHH:mm:ssZ", "%Y-%m-%dT%H:%M:%S%:z"),
            ("HHmmZZ", "%H%M%z"),
        ];
        for option in options.iter() {
            assert_eq!(fixture_pattern(option.0).strftime, option.1, "{}", option.0);
        }
    }

    #[test]
    fn test_unsupported_tokens_are_rejected() {
        for pattern in ["Do MMMM", "hh:mm A", "YYYYY", "x", "DD.MM.YYYY SS", "Q"] {
            assert_eq!(
                DatePattern::new(pattern),
                Err(CalendarError::InvalidPattern {
                    pattern: pattern.to_string()
                }),
                "{}",
                pattern
            );
        }
        // escaped letters are literal
        assert!(DatePattern::new("[Quarter] YYYY").is_ok());
    }

    #[test]
    fn test_built_in_patterns_match_their_text() {
        assert_eq!(DatePattern::iso_date(), fixture_pattern(ISO_DATE));
        assert_eq!(DatePattern::display_date(), fixture_pattern(DISPLAY_DATE));
        assert_eq!(DatePattern::display_datetime(), fixture_pattern(DISPLAY_DATETIME));
        assert_eq!(DatePattern::default(), DatePattern::iso_date());
    }

    #[test]
    fn test_precision() {
        assert_eq!(DatePattern::iso_date().precision(), Some(Granularity::Day));
        assert_eq!(fixture_pattern("YYYY-MM").precision(), Some(Granularity::Month));
        assert_eq!(fixture_pattern("MMMM YYYY").precision(), Some(Granularity::Month));
        assert_eq!(
            DatePattern::display_datetime().precision(),
            Some(Granularity::Second)
        );
        assert_eq!(fixture_pattern("[literal]").precision(), None);
    }

    #[test]
    fn test_format() {
        let instant = udt_hms(2024, 3, 7, 10, 20, 30);
        assert_eq!(DatePattern::display_date().format(&instant), "07.03.2024");
        assert_eq!(DatePattern::iso_date().format(&instant), "2024-03-07");
        assert_eq!(
            DatePattern::display_datetime().format(&instant),
            "07.03.2024 10:20:30"
        );
        assert_eq!(
            fixture_pattern("YYYY-MM-DDTHH:mm:ssZ").format(&instant),
            "2024-03-07T10:20:30+00:00"
        );
        assert_eq!(fixture_pattern("ZZ").format(&instant), "+0000");
    }

    #[test]
    fn test_format_russian_names() {
        let instant = udt(2024, 3, 7); // Thursday
        assert_eq!(fixture_pattern("D MMMM YYYY").format(&instant), "7 марта 2024");
        let weekday = fixture_pattern("dddd, DD.MM.YYYY").format(&instant);
        assert!(weekday.to_lowercase().starts_with("четверг"), "{}", weekday);
        assert!(weekday.ends_with(", 07.03.2024"));
        let short = fixture_pattern("MMM").format(&instant);
        assert!(!short.is_empty());
        assert!(!short.chars().any(|c| c.is_ascii_alphanumeric()), "{}", short);
    }

    #[test]
    fn test_parse() {
        let options: Vec<(&str, &str, CalendarInstant)> = vec![
            (ISO_DATE, "2024-03-07", udt(2024, 3, 7)),
            (ISO_DATE, "2024-3-7", udt(2024, 3, 7)),
            (ISO_DATE, "2024-03-07T10:20:30", udt(2024, 3, 7)),
            (DISPLAY_DATE, "07.03.2024", udt(2024, 3, 7)),
            ("YYYY-MM", "2024-03", udt(2024, 3, 1)),
            (DISPLAY_DATETIME, "07.03.2024 10:20:30", udt_hms(2024, 3, 7, 10, 20, 30)),
            (
                "YYYY-MM-DDTHH:mm:ssZ",
                "2024-03-07T13:20:30+03:00",
                udt_hms(2024, 3, 7, 10, 20, 30),
            ),
        ];
        for option in options.iter() {
            assert_eq!(fixture_pattern(option.0).parse(option.1).unwrap(), option.2);
        }
    }

    #[test]
    fn test_parse_errors() {
        let pattern = DatePattern::iso_date();
        assert_eq!(pattern.parse(""), Err(CalendarError::EmptyInput));
        assert!(matches!(
            pattern.parse("not a date"),
            Err(CalendarError::Unparseable { .. })
        ));
        assert!(matches!(
            pattern.parse("2024-02-30"),
            Err(CalendarError::Unparseable { .. })
        ));
        assert!(matches!(
            fixture_pattern("[x]").parse("x"),
            Err(CalendarError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_truncate() {
        let instant = udt_hms(2024, 3, 7, 10, 20, 30);
        assert_eq!(DatePattern::iso_date().truncate(instant), udt(2024, 3, 7));
        assert_eq!(fixture_pattern("[x]").truncate(instant), instant);
    }
}
