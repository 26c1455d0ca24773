use chrono::Utc;
use std::sync::Arc;

use crate::calendars::instant::CalendarInstant;

/// Source of the current instant.
///
/// Engines read the clock once per operation, so every offset inside one result is measured
/// from the same `now`.
pub trait Clock {
    fn now(&self) -> CalendarInstant;
}

/// Reads the system clock in UTC.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> CalendarInstant {
        CalendarInstant::from_utc(Utc::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedClock {
    instant: CalendarInstant,
}

impl FixedClock {
    pub fn new(instant: CalendarInstant) -> Self {
        FixedClock { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> CalendarInstant {
        self.instant
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> CalendarInstant {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> CalendarInstant {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> CalendarInstant {
        (**self).now()
    }
}
