use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Separators and labels used to render numbers in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub decimal_separator: String,
    pub group_separator: String,
    pub minus_sign: String,
    pub infinity: String,
    /// Label rendered for a value that is not a number.
    pub nan: String,
    /// Integer digits required beyond the first group before grouping applies.
    pub minimum_grouping_digits: usize,
}

impl NumberLocale {
    /// The `ru-RU` convention: `1 234,5` with a no-break space between groups.
    pub fn ru() -> Self {
        NumberLocale {
            decimal_separator: ",".to_string(),
            group_separator: "\u{a0}".to_string(),
            minus_sign: "-".to_string(),
            infinity: "∞".to_string(),
            nan: "не число".to_string(),
            minimum_grouping_digits: 1,
        }
    }

    /// Render `value` under `options`.
    ///
    /// Rounding is half away from zero on the shortest decimal representation of `value`,
    /// so `1.005` with two fraction digits renders as `1,01`.
    pub fn format(&self, value: f64, options: &NumberOptions) -> String {
        if value.is_nan() {
            return self.nan.clone();
        }
        let sign = if value < 0.0 { self.minus_sign.as_str() } else { "" };
        if value.is_infinite() {
            return format!("{}{}", sign, self.infinity);
        }

        let min = options.minimum_fraction_digits.min(MAX_FRACTION_DIGITS);
        let max = options
            .maximum_fraction_digits
            .clamp(min, MAX_FRACTION_DIGITS);
        let (int_digits, frac_digits) = round_decimal(&format!("{}", value.abs()), max);
        let frac_digits = trim_fraction(frac_digits, min);

        let mut out = String::from(sign);
        if options.use_grouping
            && int_digits.len() >= 3 + self.minimum_grouping_digits.max(1)
        {
            out.push_str(&group(&int_digits, &self.group_separator));
        } else {
            out.push_str(&int_digits);
        }
        if !frac_digits.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(&frac_digits);
        }
        out
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        NumberLocale::ru()
    }
}

const MAX_FRACTION_DIGITS: usize = 20;

/// Fraction digit limits and grouping for number rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberOptions {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl NumberOptions {
    /// Exactly `digits` fraction digits.
    pub fn fixed(digits: usize) -> Self {
        NumberOptions {
            minimum_fraction_digits: digits,
            maximum_fraction_digits: digits,
            use_grouping: true,
        }
    }
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

/// A value to be rendered as an amount. Text that does not read as a number becomes NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert any primitive number, NaN if it has no `f64` representation.
    pub fn from_number<T: ToPrimitive>(value: &T) -> Self {
        Amount(value.to_f64().unwrap_or(f64::NAN))
    }

    /// Read text the way a loosely typed number conversion would: surrounding whitespace is
    /// ignored, empty text is zero, `Infinity` is accepted and anything else that is not a
    /// plain decimal number is NaN.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Amount(0.0);
        }
        let value = match text {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ if text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) =>
            {
                text.parse::<f64>().unwrap_or(f64::NAN)
            }
            _ => f64::NAN,
        };
        Amount(value)
    }
}

macro_rules! amount_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                fn from(item: $t) -> Self {
                    Amount::from_number(&item)
                }
            }
        )*
    };
}

amount_from_number!(f64, f32, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

impl From<&str> for Amount {
    fn from(item: &str) -> Self {
        Amount::parse(item)
    }
}

impl From<&String> for Amount {
    fn from(item: &String) -> Self {
        Amount::parse(item)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(item: Option<T>) -> Self {
        item.map_or(Amount(f64::NAN), Into::into)
    }
}

/// Split a plain decimal string into integer and fraction digits, rounded half away from
/// zero to at most `max` fraction digits.
fn round_decimal(text: &str, max: usize) -> (String, String) {
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));
    if frac_part.len() <= max {
        return (int_part.to_string(), frac_part.to_string());
    }
    let round_up = frac_part.as_bytes()[max] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(max))
        .map(|b| b - b'0')
        .collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }
    let split = digits.len() - max;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

/// Drop trailing zeros beyond `min` digits, then pad with zeros up to `min` digits.
fn trim_fraction(mut frac: String, min: usize) -> String {
    while frac.len() > min && frac.ends_with('0') {
        frac.pop();
    }
    while frac.len() < min {
        frac.push('0');
    }
    frac
}

fn group(int_digits: &str, separator: &str) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + separator.len() * (len / 3));
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
