use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Russian grammatical number categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Counts ending in 1, except 11: *один рубль*.
    One,
    /// Counts ending in 2-4, except 12-14: *два рубля*.
    Few,
    /// Zero, counts ending in 5-9 or 0, and 11-19: *пять рублей*.
    Many,
}

impl PluralCategory {
    /// Category of a count. Negative counts are categorised by their absolute value.
    pub fn of(number: i64) -> Self {
        let n = number.unsigned_abs();
        if (5..20).contains(&(n % 100)) {
            return PluralCategory::Many;
        }
        match n % 10 {
            1 => PluralCategory::One,
            2..=4 => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }
}

/// The three word forms of a noun, ordered `one`, `few`, `many`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForm {
    pub one: Cow<'static, str>,
    pub few: Cow<'static, str>,
    pub many: Cow<'static, str>,
}

/// Word forms for rubles.
pub static RUBLE_FORMS: PluralForm = PluralForm::from_static("рубль", "рубля", "рублей");
/// Word forms for kopeks.
pub static KOPEK_FORMS: PluralForm = PluralForm::from_static("копейка", "копейки", "копеек");

impl PluralForm {
    pub fn new(
        one: impl Into<Cow<'static, str>>,
        few: impl Into<Cow<'static, str>>,
        many: impl Into<Cow<'static, str>>,
    ) -> Self {
        PluralForm {
            one: one.into(),
            few: few.into(),
            many: many.into(),
        }
    }

    pub const fn from_static(one: &'static str, few: &'static str, many: &'static str) -> Self {
        PluralForm {
            one: Cow::Borrowed(one),
            few: Cow::Borrowed(few),
            many: Cow::Borrowed(many),
        }
    }

    pub fn select(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
        }
    }
}

impl From<[&'static str; 3]> for PluralForm {
    fn from(item: [&'static str; 3]) -> Self {
        PluralForm::from_static(item[0], item[1], item[2])
    }
}

/// Select the form of `forms` that agrees with `number`.
///
/// ```rust
/// # use calfmt::formatting::{pluralize, RUBLE_FORMS};
/// assert_eq!(pluralize(1, &RUBLE_FORMS), "рубль");
/// assert_eq!(pluralize(3, &RUBLE_FORMS), "рубля");
/// assert_eq!(pluralize(11, &RUBLE_FORMS), "рублей");
/// assert_eq!(pluralize(21, &RUBLE_FORMS), "рубль");
/// ```
pub fn pluralize(number: i64, forms: &PluralForm) -> &str {
    forms.select(PluralCategory::of(number))
}

/// Word forms keyed by unit name, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFormsTable(IndexMap<String, PluralForm>);

impl WordFormsTable {
    pub fn new() -> Self {
        WordFormsTable(IndexMap::new())
    }

    /// The currency table with `ruble` and `kopek`.
    pub fn currency() -> Self {
        let mut table = WordFormsTable::new();
        table.insert("ruble", RUBLE_FORMS.clone());
        table.insert("kopek", KOPEK_FORMS.clone());
        table
    }

    /// Insert forms for `unit`, returning the forms it replaced.
    pub fn insert(&mut self, unit: impl Into<String>, forms: PluralForm) -> Option<PluralForm> {
        self.0.insert(unit.into(), forms)
    }

    pub fn get(&self, unit: &str) -> Option<&PluralForm> {
        self.0.get(unit)
    }

    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The form of `unit` for `number`, if the unit is known.
    pub fn pluralize(&self, unit: &str, number: i64) -> Option<&str> {
        self.get(unit).map(|forms| pluralize(number, forms))
    }
}

impl Default for WordFormsTable {
    fn default() -> Self {
        WordFormsTable::currency()
    }
}

impl FromIterator<(String, PluralForm)> for WordFormsTable {
    fn from_iter<I: IntoIterator<Item = (String, PluralForm)>>(iter: I) -> Self {
        WordFormsTable(IndexMap::from_iter(iter))
    }
}

/// `"{rubles} {ruble form} {kopeks} {kopek form}"`.
pub fn format_plural_amount(rubles: i64, kopeks: i64) -> String {
    format!(
        "{} {} {} {}",
        rubles,
        pluralize(rubles, &RUBLE_FORMS),
        kopeks,
        pluralize(kopeks, &KOPEK_FORMS)
    )
}
