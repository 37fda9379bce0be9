//! Curve node error types.

use curve_core::market_data::MarketDataError;
use curve_core::types::CurrencyError;
use thiserror::Error;

use super::date_type::NodeDateType;
use crate::schedules::ScheduleError;

/// Errors raised by curve node construction and operations.
///
/// Construction failures are terminal: no partial node is ever produced.
/// Runtime failures surface the first error encountered unchanged; the
/// node never retries or substitutes defaults.
///
/// # Variants
///
/// - `MissingField`: A required builder field was not set
/// - `EmptyLabel`: The node label is empty after defaulting
/// - `MissingNodeDate`: FixedDate policy without an explicit date
/// - `UnexpectedNodeDate`: Explicit date with a non-FixedDate policy
/// - `UnsupportedStructure`: The built swap lacks the two Ibor legs the
///   flat-leg traversal requires
/// - `MarketData`: Wrapped missing-market-data error
/// - `Currency`: Wrapped FX convention error
/// - `Schedule`: Wrapped schedule generation error
///
/// # Examples
///
/// ```
/// use curve_nodes::node::CurveNodeError;
///
/// let err = CurveNodeError::UnsupportedStructure { ibor_legs: 1 };
/// assert!(format!("{}", err).contains("two Ibor legs"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveNodeError {
    /// A required builder field was not set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// The node label is empty.
    #[error("Node label must not be empty")]
    EmptyLabel,

    /// FixedDate policy requires an explicit node date.
    #[error("Node date must be present when node date type is FixedDate")]
    MissingNodeDate,

    /// An explicit node date is only valid with the FixedDate policy.
    #[error("Node date must be absent when node date type is {0}")]
    UnexpectedNodeDate(NodeDateType),

    /// The resolved swap does not have the two Ibor legs required by
    /// the last-fixing-date traversal.
    #[error("Cross-currency basis swap must have two Ibor legs, found {ibor_legs}")]
    UnsupportedStructure {
        /// Number of Ibor legs found
        ibor_legs: usize,
    },

    /// Wrapped market data lookup error.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Wrapped currency or FX convention error.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Wrapped schedule generation error.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

impl CurveNodeError {
    /// Check if this is a construction-time validation error.
    pub fn is_invalid_construction(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::EmptyLabel
                | Self::MissingNodeDate
                | Self::UnexpectedNodeDate(_)
        )
    }

    /// Check if this is a missing-market-data error.
    pub fn is_missing_market_data(&self) -> bool {
        matches!(self, Self::MarketData(_))
    }

    /// Check if this is an unsupported-structure error.
    pub fn is_unsupported_structure(&self) -> bool {
        matches!(self, Self::UnsupportedStructure { .. })
    }
}
