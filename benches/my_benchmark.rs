use criterion::{black_box, criterion_group, criterion_main, Criterion};

use calfmt::calendars::{udt_hms, CalendarRangeEngine, DateArg, DateStrRange, FixedClock};
use calfmt::formatting::{pluralize, LocaleTextFormatter, NumberOptions, RUBLE_FORMS};

fn criterion_benchmark(c: &mut Criterion) {
    let fmt = LocaleTextFormatter::new();
    let engine = CalendarRangeEngine::new(FixedClock::new(udt_hms(2024, 3, 5, 12, 0, 0)));
    let options = NumberOptions::default();
    let march = DateStrRange::new("2024-03-01", "2024-03-31");

    c.bench_function("pluralize", |z| {
        z.iter(|| pluralize(black_box(1_234_567), &RUBLE_FORMS))
    });
    c.bench_function("format amount fixed", |z| {
        z.iter(|| fmt.format_amount_fixed(black_box(1_234_567.891)))
    });
    c.bench_function("format amount default", |z| {
        z.iter(|| fmt.format_amount(black_box(-0.125), &options))
    });
    c.bench_function("format phone", |z| {
        z.iter(|| fmt.format_phone(black_box("+7 (999) 123-45-67")))
    });
    c.bench_function("format date passthrough", |z| {
        z.iter(|| fmt.format_date(black_box("07.03.2024")))
    });
    c.bench_function("format date iso", |z| {
        z.iter(|| fmt.format_date(black_box("2024-03-07T10:20:30Z")))
    });
    c.bench_function("inner week window", |z| z.iter(|| engine.inner_week_window()));
    c.bench_function("in range", |z| {
        z.iter(|| engine.in_range(black_box("2024-03-15"), &march, None))
    });
    c.bench_function("is after or equal now", |z| {
        z.iter(|| engine.is_after_or_equal(black_box("2024-03-05"), DateArg::Absent, None))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
