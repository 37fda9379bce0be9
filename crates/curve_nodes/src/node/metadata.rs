//! Curve node metadata value types.
//!
//! Metadata describes where a node sits along the curve's maturity axis.
//! Nodes with an explicit date produce [`SimpleCurveNodeMetadata`];
//! nodes whose date derives from the built swap produce
//! [`TenorCurveNodeMetadata`], which also carries the template tenor.
//! Both are plain output carriers; nothing inspects them internally.

use curve_core::types::{Date, Tenor};

/// Metadata for a node positioned by an explicit date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleCurveNodeMetadata {
    /// The node's ordering date
    date: Date,
    /// The node's display label
    label: String,
}

impl SimpleCurveNodeMetadata {
    /// Creates metadata from a date and a label.
    pub fn of(date: Date, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// Returns the ordering date.
    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Metadata for a node positioned by a date derived from its tenor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenorCurveNodeMetadata {
    /// The node's ordering date
    date: Date,
    /// The tenor of the node's template
    tenor: Tenor,
    /// The node's display label
    label: String,
}

impl TenorCurveNodeMetadata {
    /// Creates metadata from a date, a tenor, and a label.
    pub fn of(date: Date, tenor: Tenor, label: impl Into<String>) -> Self {
        Self {
            date,
            tenor,
            label: label.into(),
        }
    }

    /// Returns the ordering date.
    #[inline]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the tenor.
    #[inline]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Returns the display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Dated metadata produced by a curve node.
///
/// A closed enum over the two metadata shapes, with uniform access to
/// the ordering date and label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveNodeMetadata {
    /// Metadata wrapping an explicit date.
    Simple(SimpleCurveNodeMetadata),
    /// Metadata wrapping a derived date and the template tenor.
    Tenor(TenorCurveNodeMetadata),
}

impl CurveNodeMetadata {
    /// Returns the ordering date.
    pub fn date(&self) -> Date {
        match self {
            CurveNodeMetadata::Simple(meta) => meta.date(),
            CurveNodeMetadata::Tenor(meta) => meta.date(),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        match self {
            CurveNodeMetadata::Simple(meta) => meta.label(),
            CurveNodeMetadata::Tenor(meta) => meta.label(),
        }
    }

    /// Returns the tenor, if this metadata carries one.
    pub fn tenor(&self) -> Option<Tenor> {
        match self {
            CurveNodeMetadata::Simple(_) => None,
            CurveNodeMetadata::Tenor(meta) => Some(meta.tenor()),
        }
    }
}
