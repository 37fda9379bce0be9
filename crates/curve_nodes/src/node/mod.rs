//! Curve nodes: the calibration points of a basis curve.
//!
//! This module defines the node abstractions for curve bootstrapping:
//! - [`CurveNode`]: The trait the curve-building pipeline consumes
//! - [`XccyIborIborSwapCurveNode`]: The cross-currency Ibor-Ibor node
//! - [`NodeDateType`]: How a node derives its ordering date
//! - [`CurveNodeMetadata`]: The node's position on the maturity axis
//! - [`CurveNodeError`]: Construction and runtime failures
//! - [`ValueType`]: The value kinds a calibration solver asks about
//!
//! Dedicated date extraction lives in [`dates`].

pub mod dates;

mod date_type;
mod error;
mod metadata;
mod xccy;

pub use date_type::NodeDateType;
pub use error::CurveNodeError;
pub use metadata::{CurveNodeMetadata, SimpleCurveNodeMetadata, TenorCurveNodeMetadata};
pub use xccy::{XccyIborIborSwapCurveNode, XccyIborIborSwapCurveNodeBuilder};

use curve_core::market_data::{MarketDataId, MarketSnapshot};
use curve_core::types::Date;

/// The kind of value a calibration solver is solving for.
///
/// Used by [`CurveNode::initial_guess`] to pick a sensible starting
/// point: discount factors start at one, rate-shaped values at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// A continuously compounded zero rate.
    ZeroRate,
    /// A discount factor.
    DiscountFactor,
    /// A par instrument rate.
    ParRate,
}

/// A node in the definition of a curve.
///
/// A curve node links a market quote to a concrete calibration
/// instrument and an ordering date. Implementations are immutable
/// values; every method is a pure function of the node and its
/// arguments, so nodes can be shared across threads without
/// coordination.
pub trait CurveNode {
    /// The calibration trade this node produces.
    type Trade;

    /// Returns the market data references this node requires.
    fn requirements(&self) -> Vec<MarketDataId>;

    /// Returns the display label of the node.
    fn label(&self) -> &str;

    /// Returns metadata describing the node's position on the curve for
    /// the given valuation date.
    ///
    /// # Errors
    ///
    /// Fails if the calibration swap cannot be built or its schedule
    /// does not have the structure the node's date policy requires.
    fn metadata(&self, valuation_date: Date) -> Result<CurveNodeMetadata, CurveNodeError>;

    /// Builds the calibration trade for the given valuation date and
    /// market snapshot.
    ///
    /// # Errors
    ///
    /// Fails if a required market data reference is absent from the
    /// snapshot or the trade cannot be built.
    fn trade(
        &self,
        valuation_date: Date,
        market_data: &MarketSnapshot,
    ) -> Result<Self::Trade, CurveNodeError>;

    /// Returns the initial guess for the calibration solver.
    ///
    /// The valuation date and snapshot are accepted for interface
    /// uniformity with node types whose guess depends on them.
    fn initial_guess(
        &self,
        valuation_date: Date,
        market_data: &MarketSnapshot,
        value_type: ValueType,
    ) -> f64;
}
