//! Market data error types.

use crate::types::CurrencyPair;
use thiserror::Error;

/// Market data lookup errors.
///
/// A snapshot lookup fails when the requested reference is absent;
/// the snapshot never substitutes defaults.
///
/// # Variants
///
/// - `QuoteNotFound`: No value stored for the requested quote reference
/// - `FxRateNotFound`: No FX rate stored for the requested pair in
///   either orientation
///
/// # Examples
///
/// ```
/// use curve_core::market_data::{MarketDataError, QuoteId};
///
/// let err = MarketDataError::QuoteNotFound {
///     id: QuoteId::new("EUR-USD-XCS-5Y"),
/// };
/// assert!(format!("{}", err).contains("EUR-USD-XCS-5Y"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// No value stored for the requested quote reference.
    #[error("Quote not found: {id}")]
    QuoteNotFound {
        /// The reference that was looked up
        id: super::QuoteId,
    },

    /// No FX rate stored for the requested currency pair.
    #[error("FX rate not found for pair: {pair}")]
    FxRateNotFound {
        /// The pair that was looked up
        pair: CurrencyPair,
    },
}
