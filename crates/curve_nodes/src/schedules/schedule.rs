//! Schedule and ScheduleBuilder implementation.

use curve_core::types::Date;

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::period::Period;

/// An ordered collection of coupon periods.
///
/// Produced by [`ScheduleBuilder`]; a successfully built schedule always
/// contains at least one period, so the first/last accessors never fail.
///
/// # Examples
///
/// ```
/// use curve_core::types::Date;
/// use curve_nodes::schedules::{Frequency, ScheduleBuilder};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 15).unwrap())
///     .end(Date::from_ymd(2026, 1, 15).unwrap())
///     .frequency(Frequency::SemiAnnual)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// assert_eq!(schedule.end_date(), Date::from_ymd(2026, 1, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// All periods in the schedule, in date order.
    periods: Vec<Period>,
}

impl Schedule {
    /// Creates a new schedule from a list of periods.
    ///
    /// # Panics
    ///
    /// Panics if `periods` is empty.
    pub fn new(periods: Vec<Period>) -> Self {
        assert!(
            !periods.is_empty(),
            "Schedule must have at least one period"
        );
        Self { periods }
    }

    /// Returns the periods in the schedule.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule is empty. Always false for a built
    /// schedule.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the start date of the schedule.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.periods[0].start()
    }

    /// Returns the end date of the schedule.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.periods
            .last()
            .expect("schedule has at least one period")
            .end()
    }

    /// Returns the last payment date.
    #[inline]
    pub fn last_payment_date(&self) -> Date {
        self.periods
            .last()
            .expect("schedule has at least one period")
            .payment()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }
}

/// Builder for constructing regular schedules.
///
/// Periods advance in whole calendar months from the start date; when
/// the span is not a whole number of coupon periods, the final period is
/// capped at the end date. Payment falls on the period end date
/// (business day adjustment is out of scope).
///
/// # Examples
///
/// ```
/// use curve_core::types::Date;
/// use curve_nodes::schedules::{Frequency, ScheduleBuilder};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 3, 1).unwrap())
///     .end(Date::from_ymd(2027, 3, 1).unwrap())
///     .frequency(Frequency::Quarterly)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    frequency: Option<Frequency>,
}

impl ScheduleBuilder {
    /// Creates a new schedule builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date of the schedule.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date of the schedule.
    pub fn end(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the coupon frequency.
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the start date
    /// is not before the end date, or date arithmetic overflows.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let start = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let end = self
            .end_date
            .ok_or(ScheduleError::MissingField { field: "end" })?;
        let frequency = self
            .frequency
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;

        if start >= end {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }

        let periods = Self::generate_periods(start, end, frequency)?;
        Ok(Schedule::new(periods))
    }

    /// Generates periods between start and end dates based on frequency.
    ///
    /// Dates advance from the original start in cumulative month steps so
    /// month-end clamping does not drift across periods.
    fn generate_periods(
        start: Date,
        end: Date,
        frequency: Frequency,
    ) -> Result<Vec<Period>, ScheduleError> {
        let step = frequency.months_per_period();
        let mut periods = Vec::new();
        let mut period_start = start;
        let mut elapsed_months = 0u32;

        while period_start < end {
            elapsed_months += step;
            let unclipped_end =
                start
                    .plus_months(elapsed_months)
                    .map_err(|e| ScheduleError::DateOverflow {
                        reason: e.to_string(),
                    })?;

            // Cap the final stub at the end date
            let period_end = if unclipped_end > end { end } else { unclipped_end };

            periods.push(Period::new(period_start, period_end, period_end));
            period_start = period_end;
        }

        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    // ========================================
    // Schedule Tests
    // ========================================

    #[test]
    fn test_schedule_new() {
        let periods = vec![
            Period::new(date(2024, 1, 1), date(2024, 7, 1), date(2024, 7, 1)),
            Period::new(date(2024, 7, 1), date(2025, 1, 1), date(2025, 1, 1)),
        ];
        let schedule = Schedule::new(periods);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.start_date(), date(2024, 1, 1));
        assert_eq!(schedule.end_date(), date(2025, 1, 1));
        assert_eq!(schedule.last_payment_date(), date(2025, 1, 1));
    }

    #[test]
    #[should_panic(expected = "at least one period")]
    fn test_schedule_new_empty_panics() {
        Schedule::new(Vec::new());
    }

    // ========================================
    // Builder Tests
    // ========================================

    #[test]
    fn test_build_semi_annual() {
        let schedule = ScheduleBuilder::new()
            .start(date(2024, 1, 15))
            .end(date(2026, 1, 15))
            .frequency(Frequency::SemiAnnual)
            .build()
            .unwrap();

        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.periods()[0].start(), date(2024, 1, 15));
        assert_eq!(schedule.periods()[0].end(), date(2024, 7, 15));
        assert_eq!(schedule.periods()[3].end(), date(2026, 1, 15));
    }

    #[test]
    fn test_build_quarterly_five_years() {
        let schedule = ScheduleBuilder::new()
            .start(date(2024, 6, 19))
            .end(date(2029, 6, 19))
            .frequency(Frequency::Quarterly)
            .build()
            .unwrap();

        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule.end_date(), date(2029, 6, 19));
    }

    #[test]
    fn test_build_final_stub_capped() {
        // 14 months at semi-annual frequency: 6M + 6M + 2M stub
        let schedule = ScheduleBuilder::new()
            .start(date(2024, 1, 15))
            .end(date(2025, 3, 15))
            .frequency(Frequency::SemiAnnual)
            .build()
            .unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.periods()[2].start(), date(2025, 1, 15));
        assert_eq!(schedule.periods()[2].end(), date(2025, 3, 15));
    }

    #[test]
    fn test_build_periods_contiguous() {
        let schedule = ScheduleBuilder::new()
            .start(date(2024, 1, 31))
            .end(date(2025, 1, 31))
            .frequency(Frequency::Quarterly)
            .build()
            .unwrap();

        for pair in schedule.periods().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn test_build_month_end_does_not_drift() {
        // Starting on Jan 31, monthly steps clamp to month ends but must
        // recover to the 31st where the month allows it.
        let schedule = ScheduleBuilder::new()
            .start(date(2024, 1, 31))
            .end(date(2024, 7, 31))
            .frequency(Frequency::Monthly)
            .build()
            .unwrap();

        assert_eq!(schedule.periods()[0].end(), date(2024, 2, 29));
        assert_eq!(schedule.periods()[1].end(), date(2024, 3, 31));
        assert_eq!(schedule.end_date(), date(2024, 7, 31));
    }

    #[test]
    fn test_build_missing_start() {
        let result = ScheduleBuilder::new()
            .end(date(2025, 1, 1))
            .frequency(Frequency::Annual)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::MissingField { field: "start" }
        );
    }

    #[test]
    fn test_build_missing_end() {
        let result = ScheduleBuilder::new()
            .start(date(2024, 1, 1))
            .frequency(Frequency::Annual)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::MissingField { field: "end" }
        );
    }

    #[test]
    fn test_build_missing_frequency() {
        let result = ScheduleBuilder::new()
            .start(date(2024, 1, 1))
            .end(date(2025, 1, 1))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::MissingField { field: "frequency" }
        );
    }

    #[test]
    fn test_build_invalid_range() {
        let result = ScheduleBuilder::new()
            .start(date(2025, 1, 1))
            .end(date(2024, 1, 1))
            .frequency(Frequency::Annual)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ScheduleError::InvalidDateRange { .. }
        ));
    }

    #[test]
    fn test_build_same_dates_invalid() {
        let result = ScheduleBuilder::new()
            .start(date(2024, 1, 1))
            .end(date(2024, 1, 1))
            .frequency(Frequency::Annual)
            .build();
        assert!(matches!(
            result.unwrap_err(),
            ScheduleError::InvalidDateRange { .. }
        ));
    }

    // ========================================
    // Property Tests
    // ========================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2060i32, 1u32..13u32, 1u32..29u32)
                .prop_map(|(y, m, d)| Date::from_ymd(y, m, d).unwrap())
        }

        fn frequency_strategy() -> impl Strategy<Value = Frequency> {
            prop_oneof![
                Just(Frequency::Annual),
                Just(Frequency::SemiAnnual),
                Just(Frequency::Quarterly),
                Just(Frequency::Monthly),
            ]
        }

        proptest! {
            #[test]
            fn test_schedule_covers_range_contiguously(
                start in date_strategy(),
                months in 1u32..121u32,
                frequency in frequency_strategy(),
            ) {
                let end = start.plus_months(months).unwrap();
                let schedule = ScheduleBuilder::new()
                    .start(start)
                    .end(end)
                    .frequency(frequency)
                    .build()
                    .unwrap();

                // Covers [start, end]
                prop_assert_eq!(schedule.start_date(), start);
                prop_assert_eq!(schedule.end_date(), end);

                // Contiguous, strictly increasing periods
                for pair in schedule.periods().windows(2) {
                    prop_assert_eq!(pair[0].end(), pair[1].start());
                }
                for period in schedule.periods() {
                    prop_assert!(period.start() < period.end());
                }
            }

            #[test]
            fn test_at_most_one_stub(
                start in date_strategy(),
                months in 1u32..121u32,
                frequency in frequency_strategy(),
            ) {
                let end = start.plus_months(months).unwrap();
                let schedule = ScheduleBuilder::new()
                    .start(start)
                    .end(end)
                    .frequency(frequency)
                    .build()
                    .unwrap();

                // All periods except possibly the last span a full coupon
                // period worth of months.
                let step = frequency.months_per_period();
                for (i, period) in schedule.periods().iter().enumerate() {
                    if i + 1 < schedule.len() {
                        let expected = start.plus_months(step * (i as u32 + 1)).unwrap();
                        prop_assert_eq!(period.end(), expected);
                    }
                }
            }
        }
    }
}
