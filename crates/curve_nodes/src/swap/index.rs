//! Term Ibor benchmark indices.

use std::fmt;
use std::str::FromStr;

use curve_core::types::Currency;

use crate::schedules::Frequency;

/// Term Ibor benchmark index.
///
/// Each index carries the conventions the template needs to expand a
/// floating leg: the currency, the index term (which sets the coupon
/// frequency), and the fixing offset between the fixing date and the
/// start of the accrual period it resets.
///
/// Fixing offsets are calendar-day approximations of the market's
/// business-day conventions, consistent with the calendar-free schedule
/// model.
///
/// # Examples
///
/// ```
/// use curve_core::types::Currency;
/// use curve_nodes::swap::IborIndex;
///
/// let index = IborIndex::Euribor3M;
/// assert_eq!(index.name(), "EURIBOR3M");
/// assert_eq!(index.currency(), Currency::EUR);
/// assert_eq!(index.tenor_months(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IborIndex {
    /// US Dollar LIBOR - 3 Month.
    UsdLibor3M,
    /// Euro Interbank Offered Rate - 3 Month.
    Euribor3M,
    /// Euro Interbank Offered Rate - 6 Month.
    Euribor6M,
    /// British Pound LIBOR - 3 Month.
    GbpLibor3M,
    /// Japanese Yen LIBOR - 3 Month.
    JpyLibor3M,
    /// Swiss Franc LIBOR - 3 Month.
    ChfLibor3M,
}

impl IborIndex {
    /// Returns the standard name for this index.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            IborIndex::UsdLibor3M => "USD-LIBOR-3M",
            IborIndex::Euribor3M => "EURIBOR3M",
            IborIndex::Euribor6M => "EURIBOR6M",
            IborIndex::GbpLibor3M => "GBP-LIBOR-3M",
            IborIndex::JpyLibor3M => "JPY-LIBOR-3M",
            IborIndex::ChfLibor3M => "CHF-LIBOR-3M",
        }
    }

    /// Returns the currency the index fixes in.
    #[inline]
    pub fn currency(&self) -> Currency {
        match self {
            IborIndex::UsdLibor3M => Currency::USD,
            IborIndex::Euribor3M | IborIndex::Euribor6M => Currency::EUR,
            IborIndex::GbpLibor3M => Currency::GBP,
            IborIndex::JpyLibor3M => Currency::JPY,
            IborIndex::ChfLibor3M => Currency::CHF,
        }
    }

    /// Returns the index term in months.
    #[inline]
    pub fn tenor_months(&self) -> u32 {
        match self {
            IborIndex::Euribor6M => 6,
            _ => 3,
        }
    }

    /// Returns the coupon frequency implied by the index term.
    #[inline]
    pub fn coupon_frequency(&self) -> Frequency {
        Frequency::of_months(self.tenor_months())
            .expect("Ibor index terms map to a coupon frequency")
    }

    /// Returns the offset in days between the fixing date and the start
    /// of the accrual period it resets.
    ///
    /// GBP LIBOR fixes on the accrual start date; the others fix two
    /// days before.
    #[inline]
    pub fn fixing_offset_days(&self) -> u64 {
        match self {
            IborIndex::GbpLibor3M => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IborIndex {
    type Err = String;

    /// Parses an index from its standard name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['-', '_', ' '], "").as_str() {
            "USDLIBOR3M" => Ok(IborIndex::UsdLibor3M),
            "EURIBOR3M" => Ok(IborIndex::Euribor3M),
            "EURIBOR6M" => Ok(IborIndex::Euribor6M),
            "GBPLIBOR3M" => Ok(IborIndex::GbpLibor3M),
            "JPYLIBOR3M" => Ok(IborIndex::JpyLibor3M),
            "CHFLIBOR3M" => Ok(IborIndex::ChfLibor3M),
            _ => Err(format!("Unknown Ibor index: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(IborIndex::UsdLibor3M.name(), "USD-LIBOR-3M");
        assert_eq!(IborIndex::Euribor3M.name(), "EURIBOR3M");
        assert_eq!(IborIndex::Euribor6M.name(), "EURIBOR6M");
    }

    #[test]
    fn test_currency() {
        assert_eq!(IborIndex::UsdLibor3M.currency(), Currency::USD);
        assert_eq!(IborIndex::Euribor3M.currency(), Currency::EUR);
        assert_eq!(IborIndex::Euribor6M.currency(), Currency::EUR);
        assert_eq!(IborIndex::GbpLibor3M.currency(), Currency::GBP);
        assert_eq!(IborIndex::JpyLibor3M.currency(), Currency::JPY);
        assert_eq!(IborIndex::ChfLibor3M.currency(), Currency::CHF);
    }

    #[test]
    fn test_tenor_months() {
        assert_eq!(IborIndex::UsdLibor3M.tenor_months(), 3);
        assert_eq!(IborIndex::Euribor6M.tenor_months(), 6);
    }

    #[test]
    fn test_coupon_frequency() {
        assert_eq!(IborIndex::UsdLibor3M.coupon_frequency(), Frequency::Quarterly);
        assert_eq!(IborIndex::Euribor6M.coupon_frequency(), Frequency::SemiAnnual);
    }

    #[test]
    fn test_fixing_offset_days() {
        assert_eq!(IborIndex::UsdLibor3M.fixing_offset_days(), 2);
        assert_eq!(IborIndex::GbpLibor3M.fixing_offset_days(), 0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "USD-LIBOR-3M".parse::<IborIndex>().unwrap(),
            IborIndex::UsdLibor3M
        );
        assert_eq!(
            "euribor3m".parse::<IborIndex>().unwrap(),
            IborIndex::Euribor3M
        );
        assert!("SONIA".parse::<IborIndex>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", IborIndex::GbpLibor3M), "GBP-LIBOR-3M");
    }
}
