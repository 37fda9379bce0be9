//! Tenor labels for curve node ordering.
//!
//! A [`Tenor`] is a whole-month time-to-maturity label such as "5Y" or
//! "3M". Curve nodes use tenors as default display labels and as the
//! ordering key along a curve's maturity axis.
//!
//! # Examples
//!
//! ```
//! use curve_core::types::Tenor;
//!
//! let five_years = Tenor::of_years(5);
//! assert_eq!(five_years.to_string(), "5Y");
//! assert_eq!(five_years.months(), 60);
//!
//! let parsed: Tenor = "18M".parse().unwrap();
//! assert_eq!(parsed, Tenor::of_months(18));
//!
//! assert!(Tenor::of_months(3) < Tenor::of_years(1));
//! ```

use std::fmt;
use std::str::FromStr;

/// A whole-month time-to-maturity label.
///
/// Tenors order totally by length, so a sorted sequence of nodes labelled
/// by tenor runs from the short end to the long end of the curve.
/// Year-multiples display as "NY", everything else as "NM".
///
/// # Examples
///
/// ```
/// use curve_core::types::Tenor;
///
/// assert_eq!(Tenor::of_months(12), Tenor::of_years(1));
/// assert_eq!(Tenor::of_months(18).to_string(), "18M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tenor {
    /// Total length in months
    months: u32,
}

impl Tenor {
    /// Creates a tenor of the given number of months.
    ///
    /// # Panics
    ///
    /// Panics if `months` is zero. A zero-length tenor labels nothing.
    pub fn of_months(months: u32) -> Self {
        assert!(months > 0, "Tenor must have a positive length");
        Self { months }
    }

    /// Creates a tenor of the given number of years.
    ///
    /// # Panics
    ///
    /// Panics if `years` is zero or the length in months overflows.
    pub fn of_years(years: u32) -> Self {
        let months = years
            .checked_mul(12)
            .expect("Tenor length in months overflows");
        Self::of_months(months)
    }

    /// Returns the total length in months.
    #[inline]
    pub fn months(&self) -> u32 {
        self.months
    }
}

impl fmt::Display for Tenor {
    /// Formats as "NY" for whole years, "NM" otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.months % 12 == 0 {
            write!(f, "{}Y", self.months / 12)
        } else {
            write!(f, "{}M", self.months)
        }
    }
}

impl FromStr for Tenor {
    type Err = String;

    /// Parses a tenor string such as "5Y", "3M", or "18m" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let unit = chars
            .next_back()
            .ok_or_else(|| format!("Unknown tenor: {}", s))?;
        let count: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| format!("Unknown tenor: {}", s))?;
        if count == 0 {
            return Err(format!("Tenor must have a positive length: {}", s));
        }
        let months = match unit.to_ascii_uppercase() {
            'Y' => count.checked_mul(12),
            'M' => Some(count),
            _ => None,
        }
        .ok_or_else(|| format!("Unknown tenor: {}", s))?;
        Ok(Tenor::of_months(months))
    }
}
