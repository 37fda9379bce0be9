//! Typed references to market data values.
//!
//! A curve node does not hold market values; it holds *references* that
//! are resolved against a snapshot when a trade is built. Two kinds of
//! reference exist: observable quotes (identified by ticker-style
//! strings) and FX rates (identified by currency pair).

use std::fmt;

use crate::types::CurrencyPair;

/// Identifier of an observable market quote.
///
/// Wraps a ticker-style string such as `"EUR-USD-XCS-5Y"`. The identifier
/// is opaque to the curve node; it only has to match the key the quote is
/// stored under in the snapshot.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::QuoteId;
///
/// let id = QuoteId::new("EUR-USD-XCS-5Y");
/// assert_eq!(id.to_string(), "EUR-USD-XCS-5Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteId(String);

impl QuoteId {
    /// Creates a quote identifier from a ticker string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ticker string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an FX rate by currency pair.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::FxRateId;
/// use curve_core::types::{Currency, CurrencyPair};
///
/// let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// let id = FxRateId::new(pair);
/// assert_eq!(id.pair(), pair);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxRateId(CurrencyPair);

impl FxRateId {
    /// Creates an FX rate identifier for a currency pair.
    pub fn new(pair: CurrencyPair) -> Self {
        Self(pair)
    }

    /// Returns the currency pair.
    #[inline]
    pub fn pair(&self) -> CurrencyPair {
        self.0
    }
}

impl fmt::Display for FxRateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FX:{}", self.0)
    }
}

/// A reference to one market data value of either kind.
///
/// This is the element type of a curve node's market data requirements:
/// the set of references the node must be able to resolve before it can
/// build its calibration trade.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::{MarketDataId, QuoteId};
///
/// let id = MarketDataId::Quote(QuoteId::new("EUR-USD-XCS-5Y"));
/// assert!(matches!(id, MarketDataId::Quote(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketDataId {
    /// An observable quote reference.
    Quote(QuoteId),
    /// An FX rate reference.
    FxRate(FxRateId),
}

impl fmt::Display for MarketDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataId::Quote(id) => write!(f, "{}", id),
            MarketDataId::FxRate(id) => write!(f, "{}", id),
        }
    }
}
