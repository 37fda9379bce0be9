//! # curve_nodes: Cross-Currency Basis Swap Curve Nodes
//!
//! ## Curve Construction Layer Role
//!
//! curve_nodes sits on top of `curve_core` and provides the calibration
//! instruments used to bootstrap cross-currency basis curves:
//! - Regular coupon schedules (`schedules`)
//! - The resolved swap product model and templates (`swap`)
//! - The curve node mapping market quotes to calibration trades (`node`)
//!
//! ## The Curve Node Contract
//!
//! A [`node::XccyIborIborSwapCurveNode`] is one calibration point on a
//! basis curve. It answers four questions for the curve-building
//! pipeline:
//! 1. *What market data do I need?* — [`node::CurveNode::requirements`]
//! 2. *Where do I sit on the curve?* — [`node::CurveNode::metadata`]
//! 3. *What trade do I calibrate to?* — [`node::CurveNode::trade`]
//! 4. *Where should the solver start?* — [`node::CurveNode::initial_guess`]
//!
//! Nodes are immutable values; every operation is a pure function of the
//! node and its arguments, so a node can be shared freely across threads.
//!
//! ## Usage Example
//!
//! ```
//! use curve_core::market_data::{MarketSnapshot, QuoteId};
//! use curve_core::types::{Date, FxRate, Tenor};
//! use curve_nodes::node::{CurveNode, XccyIborIborSwapCurveNode};
//! use curve_nodes::swap::{IborIndex, XccyIborIborSwapConvention, XccyIborIborSwapTemplate};
//!
//! let convention =
//!     XccyIborIborSwapConvention::new(IborIndex::Euribor3M, IborIndex::UsdLibor3M, 2).unwrap();
//! let template = XccyIborIborSwapTemplate::of(Tenor::of_years(5), convention);
//! let node = XccyIborIborSwapCurveNode::of(template, QuoteId::new("EUR-USD-XCS-5Y"));
//!
//! let valuation = Date::from_ymd(2024, 6, 17).unwrap();
//! let snapshot = MarketSnapshot::new()
//!     .with_quote(QuoteId::new("EUR-USD-XCS-5Y"), 0.0015)
//!     .with_fx_rate(FxRate::new(template.currency_pair(), 1.08).unwrap());
//!
//! let trade = node.trade(valuation, &snapshot).unwrap();
//! assert_eq!(trade.product().legs().len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod node;
pub mod schedules;
pub mod swap;
