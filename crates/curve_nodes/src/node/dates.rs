//! Schedule date extraction from resolved swap products.
//!
//! The extractor walks a resolved product to find the date a curve node
//! orders by: either the product's overall end date or the fixing date
//! of the last reset on the flat leg.

use curve_core::types::Date;

use super::error::CurveNodeError;
use crate::swap::{LegKind, RateObservation, ResolvedSwap};

/// Returns the last payment date of the product: its overall end date.
pub fn last_payment_date(product: &ResolvedSwap) -> Date {
    product.end_date()
}

/// Returns the fixing date of the last floating-rate reset of the
/// product's second Ibor leg.
///
/// Cross-currency basis swap templates declare the spread leg first and
/// the flat leg second, so the second Ibor leg is the flat leg. This
/// indexing is a domain convention, not an implementation detail: the
/// flat leg's final fixing is the last market observation the node
/// depends on.
///
/// # Errors
///
/// Returns `CurveNodeError::UnsupportedStructure` if the product has
/// fewer than two Ibor legs. That indicates a template/contract
/// mismatch rather than bad market data.
///
/// # Panics
///
/// Panics if the flat leg's last accrual period carries a fixed-rate
/// observation. An Ibor leg with fixed observations is a defect in the
/// upstream schedule builder.
pub fn last_fixing_date(product: &ResolvedSwap) -> Result<Date, CurveNodeError> {
    let ibor_legs = product.legs_of_kind(LegKind::Ibor);
    if ibor_legs.len() < 2 {
        return Err(CurveNodeError::UnsupportedStructure {
            ibor_legs: ibor_legs.len(),
        });
    }
    // The second Ibor leg is the flat leg of the basis swap
    let flat_leg = ibor_legs[1];

    let last_period = flat_leg
        .payment_periods()
        .last()
        .expect("resolved leg has at least one payment period");
    let last_accrual = last_period
        .accrual_periods()
        .last()
        .expect("payment period has at least one accrual period");

    match last_accrual.rate_observation() {
        RateObservation::Ibor(observation) => Ok(observation.fixing_date()),
        RateObservation::Fixed { .. } => {
            panic!("Ibor leg accrual periods carry Ibor observations")
        }
    }
}
