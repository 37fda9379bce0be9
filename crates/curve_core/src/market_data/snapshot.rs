//! Immutable market data snapshots.

use std::collections::HashMap;

use super::error::MarketDataError;
use super::ids::QuoteId;
use crate::types::{CurrencyPair, FxRate};

/// An immutable snapshot of observed market values.
///
/// Holds quote values keyed by [`QuoteId`] and FX rates keyed by
/// currency pair. The snapshot is populated once through the consuming
/// `with_*` builders and then only read; lookups for absent references
/// fail with [`MarketDataError`] rather than returning defaults.
///
/// An FX rate stored for a pair satisfies lookups for both orientations
/// of that pair; projecting the rate onto the requested convention is
/// the caller's job via [`FxRate::rate_for`].
///
/// # Examples
///
/// ```
/// use curve_core::market_data::{MarketSnapshot, QuoteId};
/// use curve_core::types::{Currency, CurrencyPair, FxRate};
///
/// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// let snapshot = MarketSnapshot::new()
///     .with_quote(QuoteId::new("EUR-USD-XCS-5Y"), 0.0015)
///     .with_fx_rate(FxRate::new(eurusd, 1.08).unwrap());
///
/// assert_eq!(snapshot.quote(&QuoteId::new("EUR-USD-XCS-5Y")).unwrap(), 0.0015);
/// assert!(snapshot.fx_rate(&eurusd.invert()).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    /// Observed quote values by reference
    quotes: HashMap<QuoteId, f64>,
    /// Observed FX rates by quoted pair
    fx_rates: HashMap<CurrencyPair, FxRate>,
}

impl MarketSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observed quote value, consuming the snapshot.
    pub fn with_quote(mut self, id: QuoteId, value: f64) -> Self {
        self.quotes.insert(id, value);
        self
    }

    /// Adds an observed FX rate, consuming the snapshot.
    pub fn with_fx_rate(mut self, fx_rate: FxRate) -> Self {
        self.fx_rates.insert(fx_rate.pair(), fx_rate);
        self
    }

    /// Returns the observed value for a quote reference.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::QuoteNotFound` if no value is stored
    /// under the reference.
    pub fn quote(&self, id: &QuoteId) -> Result<f64, MarketDataError> {
        self.quotes
            .get(id)
            .copied()
            .ok_or_else(|| MarketDataError::QuoteNotFound { id: id.clone() })
    }

    /// Returns the observed FX rate for a currency pair.
    ///
    /// A rate stored under either orientation of the pair satisfies the
    /// lookup; the returned [`FxRate`] keeps its quoted orientation.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::FxRateNotFound` if no rate is stored
    /// for the pair in either orientation.
    pub fn fx_rate(&self, pair: &CurrencyPair) -> Result<FxRate, MarketDataError> {
        self.fx_rates
            .get(pair)
            .or_else(|| self.fx_rates.get(&pair.invert()))
            .copied()
            .ok_or(MarketDataError::FxRateNotFound { pair: *pair })
    }

    /// Returns the number of quote values in the snapshot.
    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    /// Returns the number of FX rates in the snapshot.
    pub fn fx_rate_count(&self) -> usize {
        self.fx_rates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;
    use approx::assert_relative_eq;

    fn eurusd() -> CurrencyPair {
        CurrencyPair::new(Currency::EUR, Currency::USD).unwrap()
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MarketSnapshot::new();
        assert_eq!(snapshot.quote_count(), 0);
        assert_eq!(snapshot.fx_rate_count(), 0);
    }

    #[test]
    fn test_quote_lookup() {
        let snapshot = MarketSnapshot::new().with_quote(QuoteId::new("EUR-USD-XCS-5Y"), 0.0015);
        let value = snapshot.quote(&QuoteId::new("EUR-USD-XCS-5Y")).unwrap();
        assert_relative_eq!(value, 0.0015);
    }

    #[test]
    fn test_quote_not_found() {
        let snapshot = MarketSnapshot::new();
        let id = QuoteId::new("MISSING");
        match snapshot.quote(&id) {
            Err(MarketDataError::QuoteNotFound { id: missing }) => assert_eq!(missing, id),
            other => panic!("Expected QuoteNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_fx_rate_lookup() {
        let fx = FxRate::new(eurusd(), 1.08).unwrap();
        let snapshot = MarketSnapshot::new().with_fx_rate(fx);
        assert_eq!(snapshot.fx_rate(&eurusd()).unwrap(), fx);
    }

    #[test]
    fn test_fx_rate_lookup_inverted_orientation() {
        let fx = FxRate::new(eurusd(), 1.08).unwrap();
        let snapshot = MarketSnapshot::new().with_fx_rate(fx);

        // Stored EUR/USD, requested USD/EUR: same quote satisfies both
        let found = snapshot.fx_rate(&eurusd().invert()).unwrap();
        assert_eq!(found.pair(), eurusd());
        assert_relative_eq!(found.rate_for(&eurusd().invert()).unwrap(), 1.0 / 1.08);
    }

    #[test]
    fn test_fx_rate_not_found() {
        let snapshot = MarketSnapshot::new();
        let pair = CurrencyPair::new(Currency::GBP, Currency::JPY).unwrap();
        match snapshot.fx_rate(&pair) {
            Err(MarketDataError::FxRateNotFound { pair: missing }) => assert_eq!(missing, pair),
            other => panic!("Expected FxRateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_lookups_are_repeatable() {
        let snapshot = MarketSnapshot::new().with_quote(QuoteId::new("Q"), 0.002);
        let first = snapshot.quote(&QuoteId::new("Q")).unwrap();
        let second = snapshot.quote(&QuoteId::new("Q")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_quote_overwrites() {
        let snapshot = MarketSnapshot::new()
            .with_quote(QuoteId::new("Q"), 0.001)
            .with_quote(QuoteId::new("Q"), 0.002);
        assert_eq!(snapshot.quote_count(), 1);
        assert_relative_eq!(snapshot.quote(&QuoteId::new("Q")).unwrap(), 0.002);
    }
}
