//! Date type for dividend calendar calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date with no time component.
///
/// Newtype around `chrono::NaiveDate`. Serializes as `YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use drip_core::types::Date;
///
/// let ex_date = Date::parse("2025-03-14").unwrap();
/// let today = Date::from_ymd(2025, 3, 10).unwrap();
/// assert_eq!(ex_date - today, 4);
/// assert_eq!(ex_date.month_index(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month (1-12), and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's local date.
    ///
    /// Callers that derive several offsets from "today" should read this once
    /// and pass the value along.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the zero-based month index (0 = January).
    #[must_use]
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days (negative values move backward).
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Number of calendar days from `self` to `other`.
    ///
    /// Positive when `other` is later, zero on the same day.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is Monday through Friday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Days from `other` to `self`.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.month_index(), 5);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::parse("2025-13-01").is_err());
        assert!(Date::parse("yesterday").is_err());
    }

    #[test]
    fn test_parse_and_from_str() {
        let date = Date::parse(" 2025-06-15 ").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        let parsed: Date = "2025-06-15".parse().unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_days_between_signs() {
        let today = Date::from_ymd(2025, 1, 10).unwrap();
        let later = Date::from_ymd(2025, 1, 31).unwrap();
        let earlier = Date::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(today.days_between(&later), 21);
        assert_eq!(today.days_between(&earlier), -10);
        assert_eq!(today.days_between(&today), 0);
    }

    #[test]
    fn test_days_between_across_leap_day() {
        let d1 = Date::from_ymd(2024, 2, 28).unwrap();
        let d2 = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 2);
    }

    #[test]
    fn test_weekday_detection() {
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert!(monday.is_weekday());
        assert_eq!(monday.weekday(), Weekday::Mon);

        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert!(saturday.is_weekend());

        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        assert!(sunday.is_weekend());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);
        assert_eq!((d2 - 5).day(), 6);
        assert_eq!(d2 - d1, 10);
        assert_eq!(d1 - d2, -10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2025, 6, 5).unwrap();
        assert_eq!(date.to_string(), "2025-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
