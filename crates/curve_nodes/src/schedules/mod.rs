//! Regular coupon schedules for swap leg expansion.
//!
//! This module generates the ordered payment periods of a swap leg from
//! a start date, an end date, and a coupon frequency. Dates advance in
//! whole calendar months; the final period is capped at the end date
//! when the span is not a whole number of coupon periods. Business-day
//! rolling and holiday calendars are out of scope.
//!
//! A successfully built [`Schedule`] always contains at least one period.

mod error;
mod frequency;
mod period;
mod schedule;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use period::Period;
pub use schedule::{Schedule, ScheduleBuilder};
