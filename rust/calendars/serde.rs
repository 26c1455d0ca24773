use crate::calendars::{CalendarConfig, CalendarInstant, DatePattern, DateRange, DateStrRange};
use crate::json::JSON;

impl JSON for CalendarInstant {}
impl JSON for DatePattern {}
impl JSON for DateRange {}
impl JSON for DateStrRange {}
impl JSON for CalendarConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{udt, udt_hms, Granularity};

    #[test]
    fn test_instant_json() {
        let instant = udt_hms(2024, 3, 7, 10, 20, 30);
        let js = instant.to_json().unwrap();
        assert_eq!(js, r#""2024-03-07T10:20:30Z""#);
        let instant2 = CalendarInstant::from_json(&js).unwrap();
        assert_eq!(instant, instant2);
    }

    #[test]
    fn test_date_range_json() {
        let range = DateRange::new(udt(2024, 3, 1), udt(2024, 3, 31));
        let js = range.to_json().unwrap();
        assert_eq!(
            js,
            r#"{"begin":"2024-03-01T00:00:00Z","end":"2024-03-31T00:00:00Z"}"#
        );
        assert_eq!(DateRange::from_json(&js).unwrap(), range);
    }

    #[test]
    fn test_date_str_range_json() {
        let js = r#"{"begin":"2024-03-01","end":"2024-03-31"}"#;
        let range = DateStrRange::from_json(js).unwrap();
        assert_eq!(range, DateStrRange::new("2024-03-01", "2024-03-31"));
    }

    #[test]
    fn test_pattern_json_is_plain_text() {
        let pattern = DatePattern::new("DD.MM.YYYY HH:mm").unwrap();
        let js = pattern.to_json().unwrap();
        assert_eq!(js, r#""DD.MM.YYYY HH:mm""#);
        let pattern2 = DatePattern::from_json(&js).unwrap();
        assert_eq!(pattern2.precision(), Some(Granularity::Minute));
    }

    #[test]
    fn test_pattern_json_rejects_unsupported_tokens() {
        assert!(DatePattern::from_json(r#""Do MMMM""#).is_err());
        assert!(CalendarConfig::from_json(r#"{"display_pattern": "hh:mm A"}"#).is_err());
    }

    #[test]
    fn test_calendar_config_json() {
        let config = CalendarConfig::default();
        let js = config.to_json().unwrap();
        assert_eq!(CalendarConfig::from_json(&js).unwrap(), config);
        assert_eq!(CalendarConfig::from_json("{}").unwrap(), config);
    }
}
