//! Schedule generation error types.

use curve_core::types::Date;
use thiserror::Error;

/// Errors that can occur while building a schedule.
///
/// # Variants
///
/// - `MissingField`: A required builder field was not set
/// - `InvalidDateRange`: Start date is not before end date
/// - `DateOverflow`: Date arithmetic left the representable range
///
/// # Examples
///
/// ```
/// use curve_nodes::schedules::ScheduleError;
///
/// let err = ScheduleError::MissingField { field: "start" };
/// assert!(format!("{}", err).contains("start"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A required builder field was not set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Start date is not strictly before end date.
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange {
        /// The start date supplied
        start: Date,
        /// The end date supplied
        end: Date,
    },

    /// Date arithmetic produced a date outside the representable range.
    #[error("Date overflow: {reason}")]
    DateOverflow {
        /// Description of the failed operation
        reason: String,
    },
}
