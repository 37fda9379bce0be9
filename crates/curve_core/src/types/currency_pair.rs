//! Currency pair types for FX market data.
//!
//! This module provides the ordered currency pair used to identify FX
//! rates in a market snapshot. The pair carries no rate itself; see
//! [`crate::types::fx_rate::FxRate`] for a quoted rate.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! assert_eq!(pair.base(), Currency::EUR);
//! assert_eq!(pair.quote(), Currency::USD);
//! assert_eq!(pair.code(), "EUR/USD");
//!
//! let inverted = pair.invert();
//! assert_eq!(inverted.code(), "USD/EUR");
//! ```

use std::fmt;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered pair of distinct currencies.
///
/// The convention is BASE/QUOTE: a rate quoted for this pair expresses
/// how many units of QUOTE one unit of BASE buys. Equality and hashing
/// are structural over both currencies, so the pair can be used as a
/// market data key.
///
/// # Examples
///
/// ```
/// use curve_core::types::{Currency, CurrencyPair};
///
/// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// assert!(eurusd.contains(Currency::USD));
/// assert!(!eurusd.contains(Currency::JPY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    /// Base currency (the numerator in the exchange rate)
    base: Currency,
    /// Quote currency (the denominator in the exchange rate)
    quote: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and quote are the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::new(Currency::GBP, Currency::USD).unwrap();
    /// assert_eq!(pair.code(), "GBP/USD");
    ///
    /// assert!(CurrencyPair::new(Currency::USD, Currency::USD).is_err());
    /// ```
    pub fn new(base: Currency, quote: Currency) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns the pair code in standard format (BASE/QUOTE).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::new(Currency::USD, Currency::JPY).unwrap();
    /// assert_eq!(pair.code(), "USD/JPY");
    /// ```
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.quote.code())
    }

    /// Creates the inverted pair (swaps base and quote).
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::{Currency, CurrencyPair};
    ///
    /// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    /// let usdeur = eurusd.invert();
    /// assert_eq!(usdeur.base(), Currency::USD);
    /// assert_eq!(usdeur.quote(), Currency::EUR);
    /// ```
    #[inline]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// Checks if this pair contains the given currency.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.quote == currency
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
