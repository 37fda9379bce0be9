//! Node date selection policies.

use std::fmt;

/// How a curve node derives its ordering date.
///
/// The policy is a closed enum, so every consumer matches it
/// exhaustively; adding a policy is a compile-time-checked change.
///
/// # Variants
///
/// - `FixedDate`: Use an explicit date stored on the node
/// - `LastPaymentDate`: Use the maturity of the built calibration swap
/// - `LastFixingDate`: Use the last fixing date of the swap's flat leg
///
/// # Examples
///
/// ```
/// use curve_nodes::node::NodeDateType;
///
/// assert_eq!(NodeDateType::default(), NodeDateType::LastPaymentDate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeDateType {
    /// The node's date is an explicit date stored on the node; the swap
    /// is never built to answer a metadata query.
    FixedDate,

    /// The node's date is the end date of the built calibration swap.
    #[default]
    LastPaymentDate,

    /// The node's date is the fixing date of the last reset of the
    /// built swap's second floating leg (the flat leg).
    LastFixingDate,
}

impl NodeDateType {
    /// Returns the standard name for this policy.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            NodeDateType::FixedDate => "FixedDate",
            NodeDateType::LastPaymentDate => "LastPaymentDate",
            NodeDateType::LastFixingDate => "LastFixingDate",
        }
    }
}

impl fmt::Display for NodeDateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
