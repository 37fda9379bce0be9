//! Date type for curve calibration.
//!
//! This module provides `Date`, a type-safe wrapper around
//! `chrono::NaiveDate` with ISO 8601 parsing and the checked calendar
//! arithmetic that schedule generation needs. Dates are whole-calendar-day
//! values with a standard total ordering; there is no time-of-day
//! component.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let spot = start.plus_days(2).unwrap();
//! assert_eq!(spot, Date::from_ymd(2024, 1, 17).unwrap());
//!
//! let maturity = spot.plus_months(60).unwrap();
//! assert_eq!(maturity, Date::from_ymd(2029, 1, 17).unwrap());
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing and formatting, day-count subtraction, and
/// checked day/month arithmetic. The wrapper keeps date handling
/// consistent across the workspace.
///
/// # Examples
///
/// ```
/// use curve_core::types::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidDate` if the components do not form a
    /// valid calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 29).unwrap(); // leap year
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `DateError::ParseError` if the string is not a valid
    /// ISO 8601 date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date advanced by the given number of days.
    ///
    /// # Errors
    ///
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the
    /// representable date range.
    pub fn plus_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::ArithmeticOverflow(format!("adding {} days", days)))
    }

    /// Returns the date moved back by the given number of days.
    ///
    /// # Errors
    ///
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the
    /// representable date range.
    pub fn minus_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_sub_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::ArithmeticOverflow(format!("subtracting {} days", days)))
    }

    /// Returns the date advanced by the given number of months.
    ///
    /// When the target month is shorter, the day clamps to the last day
    /// of that month (chrono semantics).
    ///
    /// # Errors
    ///
    /// Returns `DateError::ArithmeticOverflow` if the result leaves the
    /// representable date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::Date;
    ///
    /// let date = Date::from_ymd(2024, 1, 31).unwrap();
    /// let advanced = date.plus_months(1).unwrap();
    /// assert_eq!(advanced, Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn plus_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::ArithmeticOverflow(format!("adding {} months", months)))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
