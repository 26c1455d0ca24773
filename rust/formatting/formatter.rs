use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::calendars::{CalendarInstant, DateArg, DatePattern, INVALID_DATE};
use crate::formatting::document::{split_series_and_number, SeriesAndNumber};
use crate::formatting::number::{Amount, NumberLocale, NumberOptions};
use crate::formatting::phone::format_phone;
use crate::formatting::plural::{format_plural_amount, pluralize, PluralForm, WordFormsTable};

// Unanchored and with wildcard separators: anything that already contains a display date
// is passed through.
static DISPLAY_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}.[0-9]{2}.[0-9]{4}").expect("static regex is valid"));

/// Locale and default patterns of a [`LocaleTextFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub locale: NumberLocale,
    pub date_pattern: DatePattern,
    pub datetime_pattern: DatePattern,
    pub word_forms: WordFormsTable,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            locale: NumberLocale::ru(),
            date_pattern: DatePattern::display_date(),
            datetime_pattern: DatePattern::display_datetime(),
            word_forms: WordFormsTable::currency(),
        }
    }
}

/// Renders amounts, dates, phone numbers and counted nouns for display.
///
/// ```rust
/// # use calfmt::formatting::LocaleTextFormatter;
/// let fmt = LocaleTextFormatter::new();
/// assert_eq!(fmt.format_amount_fixed(1234.5), "1\u{a0}234,50");
/// assert_eq!(fmt.format_amount("abc", &Default::default()), "");
/// assert_eq!(fmt.iso_date_to_display("2024-03-07"), "07.03.2024");
/// assert_eq!(fmt.format_plural_amount(21, 3), "21 рубль 3 копейки");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleTextFormatter {
    config: FormatterConfig,
}

impl LocaleTextFormatter {
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::default())
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        LocaleTextFormatter { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render an amount under the configured locale. A value that is not a number renders as
    /// an empty string rather than the locale's "not a number" label.
    pub fn format_amount(&self, amount: impl Into<Amount>, options: &NumberOptions) -> String {
        let result = self.config.locale.format(amount.into().value(), options);
        if result == self.config.locale.nan {
            debug!("amount is not a number, rendered empty");
            return String::new();
        }
        result
    }

    /// Render an amount with exactly two fraction digits.
    pub fn format_amount_fixed(&self, amount: impl Into<Amount>) -> String {
        self.format_amount(amount, &NumberOptions::fixed(2))
    }

    /// Render a date under the configured date pattern, `DD.MM.YYYY` by default.
    pub fn format_date<'a>(&self, date: impl Into<DateArg<'a>>) -> String {
        render(date.into(), &self.config.date_pattern)
    }

    /// Render a date under `pattern`, e.g. `D MMMM YYYY` for `7 марта 2024`.
    pub fn format_date_with<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        pattern: &DatePattern,
    ) -> String {
        render(date.into(), pattern)
    }

    /// Render a date-time under the configured pattern, `DD.MM.YYYY HH:mm:ss` by default.
    pub fn format_datetime<'a>(&self, date: impl Into<DateArg<'a>>) -> String {
        render(date.into(), &self.config.datetime_pattern)
    }

    pub fn format_datetime_with<'a>(
        &self,
        date: impl Into<DateArg<'a>>,
        pattern: &DatePattern,
    ) -> String {
        render(date.into(), pattern)
    }

    /// Convert `YYYY-MM-DD` text to `DD.MM.YYYY`.
    pub fn iso_date_to_display(&self, date: &str) -> String {
        if date.is_empty() {
            return String::new();
        }
        match DatePattern::iso_date().parse(date) {
            Ok(instant) => DatePattern::display_date().format(&instant),
            Err(e) => {
                debug!(%e, "iso date not converted");
                INVALID_DATE.to_string()
            }
        }
    }

    pub fn format_phone(&self, raw: &str) -> String {
        format_phone(raw)
    }

    pub fn pluralize<'f>(&self, number: i64, forms: &'f PluralForm) -> &'f str {
        pluralize(number, forms)
    }

    /// The form of a unit from the configured word forms table, if the unit is known.
    pub fn pluralize_unit(&self, number: i64, unit: &str) -> Option<&str> {
        self.config.word_forms.pluralize(unit, number)
    }

    pub fn format_plural_amount(&self, rubles: i64, kopeks: i64) -> String {
        format_plural_amount(rubles, kopeks)
    }

    pub fn split_series_and_number(&self, text: &str) -> SeriesAndNumber {
        split_series_and_number(text)
    }
}

fn render(date: DateArg<'_>, pattern: &DatePattern) -> String {
    match date {
        DateArg::Absent => String::new(),
        DateArg::Text(text) if DISPLAY_DATE_SHAPE.is_match(text) => text.to_string(),
        DateArg::Text("") => String::new(),
        DateArg::Text(text) => match CalendarInstant::parse_iso(text) {
            Ok(instant) => pattern.format(&instant),
            Err(e) => {
                debug!(%e, "date not rendered");
                INVALID_DATE.to_string()
            }
        },
        DateArg::Instant(instant) => pattern.format(&instant),
    }
}
