use serde::{Deserialize, Serialize};

/// The series and number of an identity document, e.g. a passport `12 34 568920`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesAndNumber {
    pub series: String,
    pub number: String,
}

/// Remove spaces and split into a four character series and the remaining number.
///
/// Nothing is validated: short input yields a short series and an empty number.
pub fn split_series_and_number(text: &str) -> SeriesAndNumber {
    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    let split = compact
        .char_indices()
        .nth(4)
        .map_or(compact.len(), |(i, _)| i);
    let (series, number) = compact.split_at(split);
    SeriesAndNumber {
        series: series.to_string(),
        number: number.to_string(),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_series_and_number() {
        let result = split_series_and_number("12 34 568920");
        assert_eq!(result.series, "1234");
        assert_eq!(result.number, "568920");
    }

    #[test]
    fn test_split_short_input() {
        assert_eq!(
            split_series_and_number("12 3"),
            SeriesAndNumber {
                series: "123".to_string(),
                number: String::new()
            }
        );
        assert_eq!(split_series_and_number(""), SeriesAndNumber::default());
    }

    #[test]
    fn test_split_counts_characters() {
        let result = split_series_and_number("АБ ВГ 123");
        assert_eq!(result.series, "АБВГ");
        assert_eq!(result.number, "123");
    }
}
