//! FX rate quotes with convention projection.
//!
//! An [`FxRate`] couples a currency pair with an observed spot rate and
//! can project that rate onto either orientation of the pair. Curve
//! nodes use the projection to derive the numeric FX level for their
//! template's quote convention.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::{Currency, CurrencyPair, FxRate};
//!
//! let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! let fx = FxRate::new(eurusd, 1.08).unwrap();
//!
//! // Same pair: the quoted rate
//! assert_eq!(fx.rate_for(&eurusd).unwrap(), 1.08);
//!
//! // Inverted pair: the reciprocal
//! let usdeur = eurusd.invert();
//! assert!((fx.rate_for(&usdeur).unwrap() - 1.0 / 1.08).abs() < 1e-12);
//! ```

use std::fmt;

use super::currency_pair::CurrencyPair;
use super::error::CurrencyError;

/// An observed FX rate for a currency pair.
///
/// The rate follows the BASE/QUOTE convention of the pair: 1 unit of
/// base = rate units of quote. The rate must be strictly positive.
///
/// # Examples
///
/// ```
/// use curve_core::types::{Currency, CurrencyPair, FxRate};
///
/// let pair = CurrencyPair::new(Currency::USD, Currency::JPY).unwrap();
/// let fx = FxRate::new(pair, 150.0).unwrap();
/// assert_eq!(fx.rate(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxRate {
    /// The currency pair the rate is quoted for
    pair: CurrencyPair,
    /// Spot rate: 1 unit of base = rate units of quote
    rate: f64,
}

impl FxRate {
    /// Creates a new FX rate.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidSpotRate` if the rate is not
    /// strictly positive.
    pub fn new(pair: CurrencyPair, rate: f64) -> Result<Self, CurrencyError> {
        if !(rate > 0.0) {
            return Err(CurrencyError::InvalidSpotRate);
        }
        Ok(Self { pair, rate })
    }

    /// Returns the currency pair the rate is quoted for.
    #[inline]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the quoted rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Projects the rate onto the requested pair's quote convention.
    ///
    /// Returns the quoted rate for the same pair, the reciprocal for the
    /// inverted pair.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::PairMismatch` if the requested pair is
    /// neither the quoted pair nor its inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::types::{Currency, CurrencyPair, FxRate};
    ///
    /// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    /// let fx = FxRate::new(eurusd, 1.08).unwrap();
    ///
    /// assert_eq!(fx.rate_for(&eurusd).unwrap(), 1.08);
    ///
    /// let gbpjpy = CurrencyPair::new(Currency::GBP, Currency::JPY).unwrap();
    /// assert!(fx.rate_for(&gbpjpy).is_err());
    /// ```
    pub fn rate_for(&self, pair: &CurrencyPair) -> Result<f64, CurrencyError> {
        if *pair == self.pair {
            Ok(self.rate)
        } else if *pair == self.pair.invert() {
            Ok(1.0 / self.rate)
        } else {
            Err(CurrencyError::PairMismatch {
                requested: pair.code(),
                quoted: self.pair.code(),
            })
        }
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.pair, self.rate)
    }
}
