//! Render amounts, dates, phone numbers and counted nouns as display strings.
//!
//! ### Basic usage
//!
//! The [`LocaleTextFormatter`] is configured with a [`NumberLocale`] and default date
//! patterns through a [`FormatterConfig`]. The default configuration is Russian.
//!
//! ```rust
//! # use calfmt::formatting::{LocaleTextFormatter, NumberOptions};
//! let fmt = LocaleTextFormatter::new();
//! assert_eq!(fmt.format_amount(1234567.5, &NumberOptions::default()), "1\u{a0}234\u{a0}567,5");
//! assert_eq!(fmt.format_phone("89991234567"), "+8 (999) 123-45-67");
//! assert_eq!(fmt.format_date("2024-03-07T10:00:00Z"), "07.03.2024");
//! ```
//!
//! ### Pluralization
//!
//! Russian nouns take one of three forms after a number. [`pluralize`] picks the form from
//! the last one or two digits of the count.
//!
//! ```rust
//! # use calfmt::formatting::{pluralize, PluralForm};
//! let apples = PluralForm::new("яблоко", "яблока", "яблок");
//! assert_eq!(pluralize(1, &apples), "яблоко");
//! assert_eq!(pluralize(2, &apples), "яблока");
//! assert_eq!(pluralize(12, &apples), "яблок");
//! assert_eq!(pluralize(22, &apples), "яблока");
//! ```
//!
//! Values that cannot be rendered are reported by value, never by error: an amount that is
//! not a number renders as `""`, a phone number of the wrong length is returned as given, a
//! date that cannot be read renders as [`INVALID_DATE`](crate::calendars::INVALID_DATE).

mod document;
mod formatter;
mod number;
mod phone;
mod plural;

mod serde;

pub use crate::formatting::{
    document::{split_series_and_number, SeriesAndNumber},
    formatter::{FormatterConfig, LocaleTextFormatter},
    number::{Amount, NumberLocale, NumberOptions},
    phone::format_phone,
    plural::{
        format_plural_amount, pluralize, PluralCategory, PluralForm, WordFormsTable, KOPEK_FORMS,
        RUBLE_FORMS,
    },
};
