//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing, and arithmetic
//! - `CurrencyError`: Errors from currency and FX rate operations

use std::fmt;

/// Date-related errors.
///
/// Provides structured error handling for date construction, parsing,
/// and calendar arithmetic with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `ArithmeticOverflow`: Calendar arithmetic left the representable range
///
/// # Examples
/// ```
/// use curve_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),

    /// Calendar arithmetic produced a date outside the representable range.
    ArithmeticOverflow(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
            DateError::ArithmeticOverflow(msg) => {
                write!(f, "Date arithmetic overflow: {}", msg)
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Currency and FX rate errors.
///
/// Provides structured error handling for currency parsing, currency pair
/// construction, and FX rate projection.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `SameCurrency`: Base and quote currencies are the same
/// - `InvalidSpotRate`: Spot rate is not positive
/// - `PairMismatch`: FX rate does not cover the requested pair
///
/// # Examples
/// ```
/// use curve_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    UnknownCurrency(String),

    /// Base and quote currencies are the same.
    SameCurrency(String),

    /// Spot rate is not positive.
    InvalidSpotRate,

    /// FX rate quoted for a different currency pair than requested.
    PairMismatch {
        /// The pair the caller asked for
        requested: String,
        /// The pair the rate is quoted for
        quoted: String,
    },
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
            CurrencyError::SameCurrency(code) => {
                write!(f, "Base and quote currencies are the same: {}", code)
            }
            CurrencyError::InvalidSpotRate => write!(f, "Invalid spot rate: must be positive"),
            CurrencyError::PairMismatch { requested, quoted } => {
                write!(f, "FX rate for {} does not cover {}", quoted, requested)
            }
        }
    }
}

impl std::error::Error for CurrencyError {}
