//! Cross-currency Ibor-Ibor swap conventions and templates.

use curve_core::types::{CurrencyError, CurrencyPair, Date, Tenor};

use super::index::IborIndex;
use super::product::{
    BuySell, IborRateObservation, LegKind, RateAccrualPeriod, RateObservation, RatePaymentPeriod,
    ResolvedSwap, ResolvedSwapLeg, SwapTrade,
};
use crate::schedules::{Schedule, ScheduleBuilder, ScheduleError};

/// Market convention for a cross-currency Ibor-Ibor basis swap.
///
/// Pairs the two floating indices and the spot lag. The spread leg
/// carries the quoted basis spread; the flat leg pays its index flat.
/// The two indices must fix in different currencies.
///
/// # Examples
///
/// ```
/// use curve_nodes::swap::{IborIndex, XccyIborIborSwapConvention};
///
/// let convention =
///     XccyIborIborSwapConvention::new(IborIndex::Euribor3M, IborIndex::UsdLibor3M, 2).unwrap();
/// assert_eq!(convention.currency_pair().code(), "EUR/USD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XccyIborIborSwapConvention {
    /// Index of the leg carrying the quoted spread
    spread_leg: IborIndex,
    /// Index of the flat leg
    flat_leg: IborIndex,
    /// Days between valuation date and the swap's effective date
    spot_offset_days: u64,
}

impl XccyIborIborSwapConvention {
    /// Creates a new convention.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if both indices fix in the
    /// same currency.
    pub fn new(
        spread_leg: IborIndex,
        flat_leg: IborIndex,
        spot_offset_days: u64,
    ) -> Result<Self, CurrencyError> {
        if spread_leg.currency() == flat_leg.currency() {
            return Err(CurrencyError::SameCurrency(
                spread_leg.currency().code().to_string(),
            ));
        }
        Ok(Self {
            spread_leg,
            flat_leg,
            spot_offset_days,
        })
    }

    /// Returns the spread leg index.
    #[inline]
    pub fn spread_leg(&self) -> IborIndex {
        self.spread_leg
    }

    /// Returns the flat leg index.
    #[inline]
    pub fn flat_leg(&self) -> IborIndex {
        self.flat_leg
    }

    /// Returns the spot offset in days.
    #[inline]
    pub fn spot_offset_days(&self) -> u64 {
        self.spot_offset_days
    }

    /// Returns the currency pair of the convention: spread currency as
    /// base, flat currency as quote.
    pub fn currency_pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.spread_leg.currency(), self.flat_leg.currency())
            .expect("convention indices fix in different currencies")
    }
}

/// A template for building cross-currency Ibor-Ibor swap trades.
///
/// Combines a tenor with a market convention. The template is the
/// recipe a curve node holds; `to_trade` turns it into a fully resolved
/// calibration trade for a given valuation date and market inputs.
///
/// # Examples
///
/// ```
/// use curve_core::types::{Date, Tenor};
/// use curve_nodes::swap::{BuySell, IborIndex, XccyIborIborSwapConvention, XccyIborIborSwapTemplate};
///
/// let convention =
///     XccyIborIborSwapConvention::new(IborIndex::Euribor3M, IborIndex::UsdLibor3M, 2).unwrap();
/// let template = XccyIborIborSwapTemplate::of(Tenor::of_years(5), convention);
///
/// let valuation = Date::from_ymd(2024, 6, 17).unwrap();
/// let trade = template
///     .to_trade(valuation, BuySell::Buy, 1.0, 1.08, 0.0015)
///     .unwrap();
/// assert_eq!(trade.product().legs().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XccyIborIborSwapTemplate {
    /// Time from the effective date to maturity
    tenor: Tenor,
    /// The market convention
    convention: XccyIborIborSwapConvention,
}

impl XccyIborIborSwapTemplate {
    /// Creates a template from a tenor and a convention.
    pub fn of(tenor: Tenor, convention: XccyIborIborSwapConvention) -> Self {
        Self { tenor, convention }
    }

    /// Returns the tenor.
    #[inline]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Returns the convention.
    #[inline]
    pub fn convention(&self) -> XccyIborIborSwapConvention {
        self.convention
    }

    /// Returns the currency pair of the underlying convention.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.convention.currency_pair()
    }

    /// Builds a fully resolved trade from this template.
    ///
    /// The effective date is the valuation date plus the spot offset;
    /// maturity is the effective date plus the tenor. Each leg expands
    /// at its index's coupon frequency, one accrual period per payment
    /// period, with the fixing date set by the index's fixing offset.
    ///
    /// The spread applies to the spread leg only. The spread leg
    /// notional is `sign * notional` in the spread currency; the flat
    /// leg notional is `-sign * notional * fx_rate` in the flat
    /// currency, where `fx_rate` converts spread-currency amounts into
    /// flat-currency amounts.
    ///
    /// # Errors
    ///
    /// Returns a `ScheduleError` if date arithmetic overflows. Other
    /// schedule failures cannot occur: the effective date always
    /// precedes maturity for a positive tenor.
    pub fn to_trade(
        &self,
        valuation_date: Date,
        buy_sell: BuySell,
        notional: f64,
        fx_rate: f64,
        spread: f64,
    ) -> Result<SwapTrade, ScheduleError> {
        let effective = valuation_date
            .plus_days(self.convention.spot_offset_days())
            .map_err(|e| ScheduleError::DateOverflow {
                reason: e.to_string(),
            })?;
        let maturity =
            effective
                .plus_months(self.tenor.months())
                .map_err(|e| ScheduleError::DateOverflow {
                    reason: e.to_string(),
                })?;

        let sign = buy_sell.sign();
        let spread_leg = Self::expand_leg(
            self.convention.spread_leg(),
            effective,
            maturity,
            sign * notional,
            spread,
        )?;
        let flat_leg = Self::expand_leg(
            self.convention.flat_leg(),
            effective,
            maturity,
            -sign * notional * fx_rate,
            0.0,
        )?;

        let product = ResolvedSwap::new(vec![spread_leg, flat_leg]);
        Ok(SwapTrade::new(buy_sell, product))
    }

    /// Expands one floating leg into resolved payment periods.
    fn expand_leg(
        index: IborIndex,
        effective: Date,
        maturity: Date,
        notional: f64,
        spread: f64,
    ) -> Result<ResolvedSwapLeg, ScheduleError> {
        let schedule: Schedule = ScheduleBuilder::new()
            .start(effective)
            .end(maturity)
            .frequency(index.coupon_frequency())
            .build()?;

        let mut payment_periods = Vec::with_capacity(schedule.len());
        for period in schedule.iter() {
            let fixing_date = period
                .start()
                .minus_days(index.fixing_offset_days())
                .map_err(|e| ScheduleError::DateOverflow {
                    reason: e.to_string(),
                })?;
            let accrual = RateAccrualPeriod::new(
                period.start(),
                period.end(),
                RateObservation::Ibor(IborRateObservation::new(index, fixing_date)),
                spread,
            );
            payment_periods.push(RatePaymentPeriod::new(period.payment(), vec![accrual]));
        }

        Ok(ResolvedSwapLeg::new(
            LegKind::Ibor,
            index.currency(),
            notional,
            payment_periods,
        ))
    }
}
