//! The resolved swap product model.
//!
//! A resolved swap has every leg expanded into concrete calendar-dated
//! payment periods, each containing accrual periods with their rate
//! observations. Consumers read dates directly from the structure; no
//! schedule logic runs after resolution.
//!
//! Ordering conventions matter here: legs keep their declaration order
//! (for a cross-currency basis swap, spread leg first, flat leg second),
//! and period/accrual sequences are in date order, so "last" always
//! means latest.

use std::fmt;

use curve_core::types::{Currency, Date};

use super::index::IborIndex;

/// Whether the calibration trade is bought or sold.
///
/// Buy receives the spread leg and pays the flat leg; sell is the
/// reverse. Calibration always builds bought trades; the direction is
/// carried so the trade is self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuySell {
    /// Buy: receive the spread leg, pay the flat leg.
    Buy,
    /// Sell: pay the spread leg, receive the flat leg.
    Sell,
}

impl BuySell {
    /// Returns true for `Buy`.
    #[inline]
    pub fn is_buy(&self) -> bool {
        matches!(self, BuySell::Buy)
    }

    /// Returns the notional sign: +1 for buy, -1 for sell.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            BuySell::Buy => 1.0,
            BuySell::Sell => -1.0,
        }
    }
}

/// The kind of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegKind {
    /// Fixed-rate leg.
    Fixed,
    /// Floating-rate leg resetting off a term Ibor index.
    Ibor,
}

/// A floating-rate reset observation.
///
/// Records which index resets the accrual period and the date the rate
/// fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborRateObservation {
    /// The index being observed
    index: IborIndex,
    /// The date the rate fixes
    fixing_date: Date,
}

impl IborRateObservation {
    /// Creates a new observation.
    pub fn new(index: IborIndex, fixing_date: Date) -> Self {
        Self { index, fixing_date }
    }

    /// Returns the observed index.
    #[inline]
    pub fn index(&self) -> IborIndex {
        self.index
    }

    /// Returns the fixing date.
    #[inline]
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }
}

/// The rate observation attached to an accrual period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateObservation {
    /// A fixed rate, known at trade time.
    Fixed {
        /// The fixed rate (as a decimal)
        rate: f64,
    },
    /// A floating rate, observed on its fixing date.
    Ibor(IborRateObservation),
}

impl RateObservation {
    /// Returns the fixing date for a floating observation, `None` for a
    /// fixed rate.
    pub fn fixing_date(&self) -> Option<Date> {
        match self {
            RateObservation::Fixed { .. } => None,
            RateObservation::Ibor(obs) => Some(obs.fixing_date()),
        }
    }
}

/// A single accrual period within a payment period.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateAccrualPeriod {
    /// Accrual start date
    start_date: Date,
    /// Accrual end date
    end_date: Date,
    /// The rate observation for this period
    rate_observation: RateObservation,
    /// Additive spread over the observed rate (as a decimal)
    spread: f64,
}

impl RateAccrualPeriod {
    /// Creates a new accrual period.
    pub fn new(
        start_date: Date,
        end_date: Date,
        rate_observation: RateObservation,
        spread: f64,
    ) -> Self {
        Self {
            start_date,
            end_date,
            rate_observation,
            spread,
        }
    }

    /// Returns the accrual start date.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the accrual end date.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the rate observation.
    #[inline]
    pub fn rate_observation(&self) -> &RateObservation {
        &self.rate_observation
    }

    /// Returns the additive spread.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

/// A payment period: one payment date covering ordered accrual periods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatePaymentPeriod {
    /// The payment date
    payment_date: Date,
    /// Accrual periods in date order, never empty
    accrual_periods: Vec<RateAccrualPeriod>,
}

impl RatePaymentPeriod {
    /// Creates a new payment period.
    ///
    /// # Panics
    ///
    /// Panics if `accrual_periods` is empty.
    pub fn new(payment_date: Date, accrual_periods: Vec<RateAccrualPeriod>) -> Self {
        assert!(
            !accrual_periods.is_empty(),
            "Payment period must have at least one accrual period"
        );
        Self {
            payment_date,
            accrual_periods,
        }
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the accrual periods in date order.
    #[inline]
    pub fn accrual_periods(&self) -> &[RateAccrualPeriod] {
        &self.accrual_periods
    }

    /// Returns the accrual end date of the period.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.accrual_periods
            .last()
            .expect("payment period has at least one accrual period")
            .end_date()
    }
}

/// A fully resolved swap leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSwapLeg {
    /// The kind of leg
    kind: LegKind,
    /// The payment currency
    currency: Currency,
    /// Signed notional: positive receives, negative pays
    notional: f64,
    /// Payment periods in date order, never empty
    payment_periods: Vec<RatePaymentPeriod>,
}

impl ResolvedSwapLeg {
    /// Creates a new resolved leg.
    ///
    /// # Panics
    ///
    /// Panics if `payment_periods` is empty.
    pub fn new(
        kind: LegKind,
        currency: Currency,
        notional: f64,
        payment_periods: Vec<RatePaymentPeriod>,
    ) -> Self {
        assert!(
            !payment_periods.is_empty(),
            "Resolved leg must have at least one payment period"
        );
        Self {
            kind,
            currency,
            notional,
            payment_periods,
        }
    }

    /// Returns the leg kind.
    #[inline]
    pub fn kind(&self) -> LegKind {
        self.kind
    }

    /// Returns the payment currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the payment periods in date order.
    #[inline]
    pub fn payment_periods(&self) -> &[RatePaymentPeriod] {
        &self.payment_periods
    }

    /// Returns the accrual end date of the leg.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.payment_periods
            .last()
            .expect("resolved leg has at least one payment period")
            .end_date()
    }
}

/// A fully resolved swap product.
///
/// Legs keep their declaration order. For cross-currency basis swaps the
/// convention is spread leg first, flat leg second.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedSwap {
    /// The legs in declaration order, never empty
    legs: Vec<ResolvedSwapLeg>,
}

impl ResolvedSwap {
    /// Creates a new resolved swap.
    ///
    /// # Panics
    ///
    /// Panics if `legs` is empty.
    pub fn new(legs: Vec<ResolvedSwapLeg>) -> Self {
        assert!(!legs.is_empty(), "Swap must have at least one leg");
        Self { legs }
    }

    /// Returns the legs in declaration order.
    #[inline]
    pub fn legs(&self) -> &[ResolvedSwapLeg] {
        &self.legs
    }

    /// Returns the legs of the given kind, preserving declaration order.
    pub fn legs_of_kind(&self, kind: LegKind) -> Vec<&ResolvedSwapLeg> {
        self.legs.iter().filter(|leg| leg.kind() == kind).collect()
    }

    /// Returns the overall end date of the product: the latest accrual
    /// end date across all legs.
    pub fn end_date(&self) -> Date {
        self.legs
            .iter()
            .map(|leg| leg.end_date())
            .max()
            .expect("swap has at least one leg")
    }
}

/// A calibration trade: a resolved swap with its trade direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapTrade {
    /// Trade direction
    buy_sell: BuySell,
    /// The resolved product
    product: ResolvedSwap,
}

impl SwapTrade {
    /// Creates a new trade.
    pub fn new(buy_sell: BuySell, product: ResolvedSwap) -> Self {
        Self { buy_sell, product }
    }

    /// Returns the trade direction.
    #[inline]
    pub fn buy_sell(&self) -> BuySell {
        self.buy_sell
    }

    /// Returns the resolved product.
    #[inline]
    pub fn product(&self) -> &ResolvedSwap {
        &self.product
    }
}

impl fmt::Display for SwapTrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapTrade({:?}, {} legs, matures {})",
            self.buy_sell,
            self.product.legs().len(),
            self.product.end_date()
        )
    }
}
