//! Cross-currency swap products and templates.
//!
//! This module provides:
//! - `index`: Term Ibor benchmark indices with their conventions
//! - `product`: The resolved swap product model (legs, payment periods,
//!   accrual periods, rate observations) and the calibration trade
//! - `template`: The recipe that builds a resolved cross-currency
//!   Ibor-Ibor swap trade from a valuation date and market inputs
//!
//! The product model is fully resolved: every leg has been expanded into
//! concrete calendar-dated payment and accrual periods, so consumers can
//! read dates directly without re-running schedule logic.

pub mod index;
pub mod product;
pub mod template;

pub use index::IborIndex;
pub use product::{
    BuySell, IborRateObservation, LegKind, RateAccrualPeriod, RateObservation, RatePaymentPeriod,
    ResolvedSwap, ResolvedSwapLeg, SwapTrade,
};
pub use template::{XccyIborIborSwapConvention, XccyIborIborSwapTemplate};
