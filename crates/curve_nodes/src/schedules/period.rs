//! Period definition for scheduled swap legs.

use curve_core::types::Date;
use std::fmt;

/// A single coupon period in a schedule.
///
/// Carries the accrual start and end dates and the payment date. Year
/// fractions and day counts are pricing concerns outside this crate;
/// curve node construction only compares dates.
///
/// # Examples
///
/// ```
/// use curve_core::types::Date;
/// use curve_nodes::schedules::Period;
///
/// let period = Period::new(
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2024, 7, 15).unwrap(),
///     Date::from_ymd(2024, 7, 15).unwrap(),
/// );
/// assert_eq!(period.days(), 182);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Start date of the accrual period.
    start: Date,
    /// End date of the accrual period.
    end: Date,
    /// Payment date (equals the end date in this calendar-free model).
    payment: Date,
}

impl Period {
    /// Creates a new period with the specified dates.
    #[inline]
    pub fn new(start: Date, end: Date, payment: Date) -> Self {
        Self {
            start,
            end,
            payment,
        }
    }

    /// Returns the start date of the accrual period.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date of the accrual period.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment(&self) -> Date {
        self.payment
    }

    /// Returns the number of days in this period.
    #[inline]
    pub fn days(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period({} to {}, pay {})",
            self.start, self.end, self.payment
        )
    }
}
