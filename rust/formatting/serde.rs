use crate::formatting::{
    FormatterConfig, NumberLocale, NumberOptions, PluralForm, SeriesAndNumber, WordFormsTable,
};
use crate::json::JSON;

impl JSON for FormatterConfig {}
impl JSON for NumberLocale {}
impl JSON for NumberOptions {}
impl JSON for PluralForm {}
impl JSON for WordFormsTable {}
impl JSON for SeriesAndNumber {}
