//! Business day calendars.
//!
//! Dividend capture needs the last trading session before an ex-dividend
//! date. Calendars answer which days are business days and step across
//! the ones that are not.

use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Returns the most recent business day strictly before `date`.
    ///
    /// Steps back one calendar day, then keeps stepping while the day is
    /// not a business day.
    fn business_day_before(&self, date: Date) -> Date {
        self.previous_business_day(date.add_days(-1))
    }
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}
