//! Market data references and snapshots.
//!
//! This module provides the market data abstraction consumed by curve
//! nodes:
//! - `ids`: Typed references to observable quotes and FX rates
//! - `snapshot`: An immutable snapshot of observed market values
//! - `error`: The missing-market-data error type
//!
//! A curve node declares the references it needs via
//! [`MarketDataId`] and resolves them against a [`MarketSnapshot`] at
//! trade-construction time. Lookups re-read the snapshot on every call;
//! nothing is cached.

mod error;
mod ids;
mod snapshot;

pub use error::MarketDataError;
pub use ids::{FxRateId, MarketDataId, QuoteId};
pub use snapshot::MarketSnapshot;
