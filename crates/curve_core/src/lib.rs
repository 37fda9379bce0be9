//! # curve_core: Foundation Types for Curve Calibration
//!
//! ## Foundation Layer Role
//!
//! curve_core is the bottom layer of the workspace, providing:
//! - Currency and currency pair types (`types::currency`, `types::currency_pair`)
//! - FX rate quotes with convention projection (`types::fx_rate`)
//! - Tenor labels for ordering curve nodes (`types::tenor`)
//! - Date type with calendar arithmetic (`types::time`)
//! - Market data references and snapshots (`market_data`)
//! - Error types: `DateError`, `CurrencyError`, `MarketDataError`
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other curve_* crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Structured error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::market_data::{MarketSnapshot, QuoteId};
//! use curve_core::types::{Currency, CurrencyPair, Date, FxRate, Tenor};
//!
//! // Date operations
//! let valuation = Date::from_ymd(2024, 6, 17).unwrap();
//! assert_eq!(valuation.to_string(), "2024-06-17");
//!
//! // FX rates project onto the requested pair convention
//! let eur_usd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! let fx = FxRate::new(eur_usd, 1.08).unwrap();
//! assert!((fx.rate_for(&eur_usd.invert()).unwrap() - 1.0 / 1.08).abs() < 1e-12);
//!
//! // Market snapshots are immutable lookup tables
//! let snapshot = MarketSnapshot::new()
//!     .with_quote(QuoteId::new("EUR-USD-XCS-5Y"), 0.0015)
//!     .with_fx_rate(fx);
//! assert!(snapshot.quote(&QuoteId::new("EUR-USD-XCS-5Y")).is_ok());
//!
//! // Tenors label and order curve nodes
//! let five_years = Tenor::of_years(5);
//! assert_eq!(five_years.to_string(), "5Y");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `Currency`, `CurrencyPair`,
//!   `Tenor`, and the market data reference types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
