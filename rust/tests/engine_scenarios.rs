use crate::calendars::{
    udt, udt_hms, CalendarConfig, CalendarInstant, CalendarRangeEngine, Clock, DateArg,
    DatePattern, DateRange, Direction, FixedClock, Granularity,
};
use std::cell::Cell;

/// A clock that advances one day every time it is read.
struct DriftingClock {
    next: Cell<CalendarInstant>,
}

impl Clock for DriftingClock {
    fn now(&self) -> CalendarInstant {
        let current = self.next.get();
        self.next.set(current.saturating_add(1, Granularity::Day));
        current
    }
}

fn engine_at(now: CalendarInstant) -> CalendarRangeEngine<FixedClock> {
    CalendarRangeEngine::new(FixedClock::new(now))
}

#[test]
fn inner_week_window_reads_the_clock_once() {
    // Tuesday 5th March 2024; a second read would see Wednesday
    let clock = DriftingClock {
        next: Cell::new(udt(2024, 3, 5)),
    };
    let engine = CalendarRangeEngine::new(&clock);
    let window = engine.inner_week_window();
    assert_eq!(window, DateRange::new(udt(2024, 3, 1), udt(2024, 3, 4)));
}

#[test]
fn inner_week_window_over_a_whole_week() {
    let expected: Vec<(u32, Option<(u32, u32)>)> = vec![
        (3, None),          // Sunday
        (4, None),          // Monday
        (5, Some((1, 4))),  // Tuesday: Friday to Monday
        (6, None),          // Wednesday
        (7, None),          // Thursday
        (8, Some((5, 7))),  // Friday: Tuesday to Thursday
        (9, None),          // Saturday
    ];
    for (day, window) in expected {
        let now = udt_hms(2024, 3, day, 13, 0, 0);
        let range = engine_at(now).inner_week_window();
        match window {
            Some((begin, end)) => {
                assert_eq!(range, DateRange::new(udt(2024, 3, begin), udt(2024, 3, end)));
            }
            None => assert_eq!(range, DateRange::point(now)),
        }
        assert!(range.begin <= range.end);
    }
}

#[test]
fn inner_week_window_across_month_boundary() {
    // Tuesday 2nd April 2024
    let range = engine_at(udt(2024, 4, 2)).inner_week_window();
    assert_eq!(range, DateRange::new(udt(2024, 3, 29), udt(2024, 4, 1)));
}

#[test]
fn previous_work_day_across_year_boundary() {
    // Monday 1st January 2024
    let engine = engine_at(udt_hms(2024, 1, 1, 8, 0, 0));
    assert_eq!(engine.previous_work_day(), udt(2023, 12, 29));
}

#[test]
fn month_range_feeds_in_range() {
    let engine = engine_at(udt(2024, 2, 14));
    let range = engine.month_range();
    assert!(engine.in_range("2024-02-01", &range, None));
    assert!(engine.in_range("2024-02-29", &range, None));
    assert!(!engine.in_range("2024-03-01", &range, None));
}

#[test]
fn previous_month_range_contains_every_day_of_the_month() {
    let engine = engine_at(udt(2024, 3, 15));
    let range = engine.previous_month_range();
    let mut day = udt(2024, 2, 1);
    while day < udt(2024, 3, 1) {
        assert!(range.contains(&day.end_of(Granularity::Day)));
        day = day.saturating_add(1, Granularity::Day);
    }
    assert!(!range.contains(&udt(2024, 3, 1)));
}

#[test]
fn yesterday_range_matches_previous_day() {
    let engine = engine_at(udt_hms(2024, 3, 1, 0, 0, 1));
    let range = engine.yesterday_range();
    assert_eq!(range, DateRange::new(udt(2024, 2, 29), udt(2024, 3, 1)));
    assert!(range.contains_half_open(&udt_hms(2024, 2, 29, 23, 59, 59)));
    assert!(!range.contains_half_open(&udt(2024, 3, 1)));
}

#[test]
fn configured_comparison_pattern_is_used_by_default() {
    let config = CalendarConfig {
        comparison_pattern: DatePattern::display_date(),
        ..CalendarConfig::default()
    };
    let engine = CalendarRangeEngine::with_config(FixedClock::new(udt(2024, 3, 7)), config);
    assert!(engine.is_before("06.03.2024", DateArg::Absent, None));
    assert!(engine.is_before_or_equal("07.03.2024", DateArg::Absent, None));
    assert!(!engine.is_before("2024-03-06", DateArg::Absent, None));
}

#[test]
fn shift_month_and_days_between_agree() {
    let engine = engine_at(udt(2024, 1, 31));
    let later = engine.shift_month(1, Direction::Add);
    assert_eq!(later, udt(2024, 2, 29));
    assert_eq!(engine.days_between(&engine.current_instant(), &later), 29.0);
}
