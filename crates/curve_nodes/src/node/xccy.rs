//! Cross-currency Ibor-Ibor swap curve node.

use curve_core::market_data::{FxRateId, MarketDataId, MarketSnapshot, QuoteId};
use curve_core::types::Date;

use super::date_type::NodeDateType;
use super::dates;
use super::error::CurveNodeError;
use super::metadata::{CurveNodeMetadata, SimpleCurveNodeMetadata, TenorCurveNodeMetadata};
use super::{CurveNode, ValueType};
use crate::swap::{BuySell, SwapTrade, XccyIborIborSwapTemplate};

/// A curve node whose instrument is a cross-currency Ibor-Ibor swap.
///
/// Two market quotes are required, one for the basis spread and one for
/// the FX rate of the template's currency pair.
///
/// The node is an immutable value: construct it once via [`Self::of`] /
/// [`Self::of_with_spread`] or the [`Self::builder`], then reuse it
/// across valuation dates and market snapshots. Every operation is a
/// pure function of the node and its arguments.
///
/// # Examples
///
/// ```
/// use curve_core::market_data::QuoteId;
/// use curve_core::types::Tenor;
/// use curve_nodes::node::XccyIborIborSwapCurveNode;
/// use curve_nodes::swap::{IborIndex, XccyIborIborSwapConvention, XccyIborIborSwapTemplate};
///
/// let convention =
///     XccyIborIborSwapConvention::new(IborIndex::Euribor3M, IborIndex::UsdLibor3M, 2).unwrap();
/// let template = XccyIborIborSwapTemplate::of(Tenor::of_years(5), convention);
/// let node = XccyIborIborSwapCurveNode::of(template, QuoteId::new("EUR-USD-XCS-5Y"));
///
/// // Label defaults to the tenor
/// assert_eq!(node.label(), "5Y");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XccyIborIborSwapCurveNode {
    /// The template for the swap associated with this node
    template: XccyIborIborSwapTemplate,
    /// The reference identifying the market quote supplying the spread
    spread_id: QuoteId,
    /// The additional spread added to the market quote
    additional_spread: f64,
    /// The label to use for the node; defaults to the tenor
    label: String,
    /// How the node derives its ordering date
    node_date_type: NodeDateType,
    /// The explicit node date; present iff the policy is FixedDate
    node_date: Option<Date>,
}

impl XccyIborIborSwapCurveNode {
    /// Returns a curve node for the given template and spread quote.
    ///
    /// The label defaults to the template tenor, the additional spread
    /// to zero, and the date policy to last payment date.
    pub fn of(template: XccyIborIborSwapTemplate, spread_id: QuoteId) -> Self {
        Self::of_with_spread(template, spread_id, 0.0)
    }

    /// Returns a curve node for the given template, spread quote, and
    /// additional spread.
    ///
    /// The label defaults to the template tenor and the date policy to
    /// last payment date.
    pub fn of_with_spread(
        template: XccyIborIborSwapTemplate,
        spread_id: QuoteId,
        additional_spread: f64,
    ) -> Self {
        let label = template.tenor().to_string();
        Self {
            template,
            spread_id,
            additional_spread,
            label,
            node_date_type: NodeDateType::LastPaymentDate,
            node_date: None,
        }
    }

    /// Returns a builder for setting every field before one validating
    /// build step.
    pub fn builder() -> XccyIborIborSwapCurveNodeBuilder {
        XccyIborIborSwapCurveNodeBuilder::new()
    }

    /// Returns the template for the swap associated with this node.
    #[inline]
    pub fn template(&self) -> &XccyIborIborSwapTemplate {
        &self.template
    }

    /// Returns the reference identifying the spread quote.
    #[inline]
    pub fn spread_id(&self) -> &QuoteId {
        &self.spread_id
    }

    /// Returns the display label of the node.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the additional spread added to the market quote.
    #[inline]
    pub fn additional_spread(&self) -> f64 {
        self.additional_spread
    }

    /// Returns the node date policy.
    #[inline]
    pub fn node_date_type(&self) -> NodeDateType {
        self.node_date_type
    }

    /// Returns the explicit node date, present iff the policy is
    /// [`NodeDateType::FixedDate`].
    #[inline]
    pub fn node_date(&self) -> Option<Date> {
        self.node_date
    }

    /// Checks if the date policy is [`NodeDateType::FixedDate`].
    #[inline]
    pub fn is_fixed_date(&self) -> bool {
        self.node_date_type == NodeDateType::FixedDate
    }

    /// Returns a builder initialised with this node's fields.
    ///
    /// The returned builder revalidates on [`XccyIborIborSwapCurveNodeBuilder::build`],
    /// so a copy-with-modification can never produce an invalid node.
    pub fn to_builder(&self) -> XccyIborIborSwapCurveNodeBuilder {
        XccyIborIborSwapCurveNodeBuilder {
            template: Some(self.template),
            spread_id: Some(self.spread_id.clone()),
            additional_spread: self.additional_spread,
            label: Some(self.label.clone()),
            node_date_type: self.node_date_type,
            node_date: self.node_date,
        }
    }

    /// Builds the placeholder trade used for metadata queries: unit
    /// notional, unit FX rate, zero spread, bought.
    fn placeholder_trade(&self, valuation_date: Date) -> Result<SwapTrade, CurveNodeError> {
        Ok(self
            .template
            .to_trade(valuation_date, BuySell::Buy, 1.0, 1.0, 0.0)?)
    }
}

impl CurveNode for XccyIborIborSwapCurveNode {
    type Trade = SwapTrade;

    fn requirements(&self) -> Vec<MarketDataId> {
        vec![
            MarketDataId::Quote(self.spread_id.clone()),
            MarketDataId::FxRate(FxRateId::new(self.template.currency_pair())),
        ]
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn metadata(&self, valuation_date: Date) -> Result<CurveNodeMetadata, CurveNodeError> {
        match self.node_date_type {
            NodeDateType::FixedDate => {
                let date = self
                    .node_date
                    .expect("node date present for fixed-date nodes");
                Ok(CurveNodeMetadata::Simple(SimpleCurveNodeMetadata::of(
                    date,
                    self.label.clone(),
                )))
            }
            NodeDateType::LastPaymentDate => {
                let trade = self.placeholder_trade(valuation_date)?;
                Ok(CurveNodeMetadata::Tenor(TenorCurveNodeMetadata::of(
                    dates::last_payment_date(trade.product()),
                    self.template.tenor(),
                    self.label.clone(),
                )))
            }
            NodeDateType::LastFixingDate => {
                let trade = self.placeholder_trade(valuation_date)?;
                Ok(CurveNodeMetadata::Tenor(TenorCurveNodeMetadata::of(
                    dates::last_fixing_date(trade.product())?,
                    self.template.tenor(),
                    self.label.clone(),
                )))
            }
        }
    }

    fn trade(
        &self,
        valuation_date: Date,
        market_data: &MarketSnapshot,
    ) -> Result<SwapTrade, CurveNodeError> {
        let spread = market_data.quote(&self.spread_id)? + self.additional_spread;
        let pair = self.template.currency_pair();
        let fx_rate = market_data.fx_rate(&pair)?.rate_for(&pair)?;
        Ok(self
            .template
            .to_trade(valuation_date, BuySell::Buy, 1.0, fx_rate, spread)?)
    }

    fn initial_guess(
        &self,
        _valuation_date: Date,
        _market_data: &MarketSnapshot,
        value_type: ValueType,
    ) -> f64 {
        match value_type {
            ValueType::DiscountFactor => 1.0,
            ValueType::ZeroRate | ValueType::ParRate => 0.0,
        }
    }
}

/// Builder for [`XccyIborIborSwapCurveNode`].
///
/// Every field can be overridden before the single validating
/// [`Self::build`] step. Label defaulting happens during the build,
/// before validation runs.
#[derive(Debug, Clone, Default)]
pub struct XccyIborIborSwapCurveNodeBuilder {
    template: Option<XccyIborIborSwapTemplate>,
    spread_id: Option<QuoteId>,
    additional_spread: f64,
    label: Option<String>,
    node_date_type: NodeDateType,
    node_date: Option<Date>,
}

impl XccyIborIborSwapCurveNodeBuilder {
    /// Creates a builder with defaults: zero additional spread, last
    /// payment date policy, no explicit date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template for the swap associated with the node.
    pub fn template(mut self, template: XccyIborIborSwapTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Sets the reference identifying the spread quote.
    pub fn spread_id(mut self, spread_id: QuoteId) -> Self {
        self.spread_id = Some(spread_id);
        self
    }

    /// Sets the additional spread added to the market quote.
    pub fn additional_spread(mut self, additional_spread: f64) -> Self {
        self.additional_spread = additional_spread;
        self
    }

    /// Sets the display label for the node.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the node date policy.
    pub fn node_date_type(mut self, node_date_type: NodeDateType) -> Self {
        self.node_date_type = node_date_type;
        self
    }

    /// Sets the explicit node date, required by the FixedDate policy.
    pub fn node_date(mut self, node_date: Date) -> Self {
        self.node_date = Some(node_date);
        self
    }

    /// Builds the node, defaulting the label and validating every
    /// invariant.
    ///
    /// # Errors
    ///
    /// - `MissingField` if the template or spread reference is not set
    /// - `EmptyLabel` if an explicit label is empty
    /// - `MissingNodeDate` if the policy is FixedDate without a date
    /// - `UnexpectedNodeDate` if a date is set with any other policy
    pub fn build(self) -> Result<XccyIborIborSwapCurveNode, CurveNodeError> {
        let template = self
            .template
            .ok_or(CurveNodeError::MissingField { field: "template" })?;
        let spread_id = self
            .spread_id
            .ok_or(CurveNodeError::MissingField { field: "spread_id" })?;

        let label = self
            .label
            .unwrap_or_else(|| template.tenor().to_string());
        if label.is_empty() {
            return Err(CurveNodeError::EmptyLabel);
        }

        match (self.node_date_type, self.node_date) {
            (NodeDateType::FixedDate, None) => return Err(CurveNodeError::MissingNodeDate),
            (NodeDateType::FixedDate, Some(_)) => {}
            (other, Some(_)) => return Err(CurveNodeError::UnexpectedNodeDate(other)),
            (_, None) => {}
        }

        Ok(XccyIborIborSwapCurveNode {
            template,
            spread_id,
            additional_spread: self.additional_spread,
            label,
            node_date_type: self.node_date_type,
            node_date: self.node_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swap::{IborIndex, XccyIborIborSwapConvention};
    use approx::assert_relative_eq;
    use curve_core::types::{CurrencyPair, FxRate, Tenor};

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn template() -> XccyIborIborSwapTemplate {
        let convention =
            XccyIborIborSwapConvention::new(IborIndex::Euribor3M, IborIndex::UsdLibor3M, 2)
                .unwrap();
        XccyIborIborSwapTemplate::of(Tenor::of_years(5), convention)
    }

    fn spread_id() -> QuoteId {
        QuoteId::new("EUR-USD-XCS-5Y")
    }

    fn snapshot(spread: f64, fx: f64) -> MarketSnapshot {
        let pair = template().currency_pair();
        MarketSnapshot::new()
            .with_quote(spread_id(), spread)
            .with_fx_rate(FxRate::new(pair, fx).unwrap())
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_of_defaults() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        assert_eq!(node.label(), "5Y");
        assert_eq!(node.additional_spread(), 0.0);
        assert_eq!(node.node_date_type(), NodeDateType::LastPaymentDate);
        assert_eq!(node.node_date(), None);
        assert!(!node.is_fixed_date());
    }

    #[test]
    fn test_of_with_spread() {
        let node = XccyIborIborSwapCurveNode::of_with_spread(template(), spread_id(), 0.0005);
        assert_relative_eq!(node.additional_spread(), 0.0005);
    }

    #[test]
    fn test_builder_full() {
        let node = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .additional_spread(0.0002)
            .label("EUR basis 5Y")
            .build()
            .unwrap();
        assert_eq!(node.label(), "EUR basis 5Y");
        assert_relative_eq!(node.additional_spread(), 0.0002);
    }

    #[test]
    fn test_builder_label_defaults_to_tenor() {
        let node = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .build()
            .unwrap();
        assert_eq!(node.label(), "5Y");
    }

    #[test]
    fn test_builder_missing_template() {
        let result = XccyIborIborSwapCurveNode::builder()
            .spread_id(spread_id())
            .build();
        assert_eq!(
            result.unwrap_err(),
            CurveNodeError::MissingField { field: "template" }
        );
    }

    #[test]
    fn test_builder_missing_spread_id() {
        let result = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .build();
        assert_eq!(
            result.unwrap_err(),
            CurveNodeError::MissingField { field: "spread_id" }
        );
    }

    #[test]
    fn test_builder_empty_label() {
        let result = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .label("")
            .build();
        assert_eq!(result.unwrap_err(), CurveNodeError::EmptyLabel);
    }

    #[test]
    fn test_builder_fixed_date_requires_date() {
        let result = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .node_date_type(NodeDateType::FixedDate)
            .build();
        assert_eq!(result.unwrap_err(), CurveNodeError::MissingNodeDate);
    }

    #[test]
    fn test_builder_date_without_fixed_policy_fails() {
        for policy in [NodeDateType::LastPaymentDate, NodeDateType::LastFixingDate] {
            let result = XccyIborIborSwapCurveNode::builder()
                .template(template())
                .spread_id(spread_id())
                .node_date_type(policy)
                .node_date(date(2026, 1, 15))
                .build();
            assert_eq!(
                result.unwrap_err(),
                CurveNodeError::UnexpectedNodeDate(policy)
            );
        }
    }

    #[test]
    fn test_builder_fixed_date_valid() {
        let node = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .node_date_type(NodeDateType::FixedDate)
            .node_date(date(2026, 1, 15))
            .build()
            .unwrap();
        assert!(node.is_fixed_date());
        assert_eq!(node.node_date(), Some(date(2026, 1, 15)));
    }

    #[test]
    fn test_to_builder_roundtrip() {
        let node = XccyIborIborSwapCurveNode::of_with_spread(template(), spread_id(), 0.0005);
        let rebuilt = node.to_builder().build().unwrap();
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn test_to_builder_revalidates() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        // Adding a date without switching to FixedDate must fail the rebuild
        let result = node.to_builder().node_date(date(2026, 1, 15)).build();
        assert_eq!(
            result.unwrap_err(),
            CurveNodeError::UnexpectedNodeDate(NodeDateType::LastPaymentDate)
        );
    }

    #[test]
    fn test_construction_invariant_holds() {
        // For every valid node: date present iff policy is FixedDate
        let fixed = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .node_date_type(NodeDateType::FixedDate)
            .node_date(date(2026, 1, 15))
            .build()
            .unwrap();
        assert_eq!(fixed.node_date().is_some(), fixed.is_fixed_date());

        let derived = XccyIborIborSwapCurveNode::of(template(), spread_id());
        assert_eq!(derived.node_date().is_some(), derived.is_fixed_date());
    }

    // ========================================
    // Requirements Tests
    // ========================================

    #[test]
    fn test_requirements() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let requirements = node.requirements();
        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0], MarketDataId::Quote(spread_id()));
        assert_eq!(
            requirements[1],
            MarketDataId::FxRate(FxRateId::new(template().currency_pair()))
        );
    }

    // ========================================
    // Metadata Tests
    // ========================================

    #[test]
    fn test_metadata_fixed_date_ignores_valuation_date() {
        let node = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .node_date_type(NodeDateType::FixedDate)
            .node_date(date(2026, 1, 15))
            .build()
            .unwrap();

        let first = node.metadata(date(2024, 6, 17)).unwrap();
        let second = node.metadata(date(2025, 1, 2)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.date(), date(2026, 1, 15));
        assert_eq!(first.tenor(), None);
    }

    #[test]
    fn test_metadata_last_payment_date() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let valuation = date(2024, 6, 17);
        let meta = node.metadata(valuation).unwrap();

        let placeholder = template()
            .to_trade(valuation, BuySell::Buy, 1.0, 1.0, 0.0)
            .unwrap();
        assert_eq!(meta.date(), placeholder.product().end_date());
        assert_eq!(meta.tenor(), Some(Tenor::of_years(5)));
        assert_eq!(meta.label(), "5Y");
    }

    #[test]
    fn test_metadata_last_fixing_date() {
        let node = XccyIborIborSwapCurveNode::builder()
            .template(template())
            .spread_id(spread_id())
            .node_date_type(NodeDateType::LastFixingDate)
            .build()
            .unwrap();

        // Valuation 2024-06-17, effective 06-19, 5Y quarterly: last flat-leg
        // accrual starts 2029-03-19, USD LIBOR fixes 2 days before.
        let meta = node.metadata(date(2024, 6, 17)).unwrap();
        assert_eq!(meta.date(), date(2029, 3, 17));
    }

    #[test]
    fn test_metadata_deterministic() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let first = node.metadata(date(2024, 6, 17)).unwrap();
        let second = node.metadata(date(2024, 6, 17)).unwrap();
        assert_eq!(first, second);
    }

    // ========================================
    // Trade Tests
    // ========================================

    #[test]
    fn test_trade_spread_is_quote_plus_additional() {
        let node = XccyIborIborSwapCurveNode::of_with_spread(template(), spread_id(), 0.0005);
        let trade = node.trade(date(2024, 6, 17), &snapshot(0.0015, 1.08)).unwrap();

        let spread_leg = &trade.product().legs()[0];
        for period in spread_leg.payment_periods() {
            for accrual in period.accrual_periods() {
                assert_relative_eq!(accrual.spread(), 0.0020);
            }
        }
    }

    #[test]
    fn test_trade_applies_fx_rate_to_flat_leg() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let trade = node.trade(date(2024, 6, 17), &snapshot(0.0015, 1.08)).unwrap();

        let legs = trade.product().legs();
        assert_relative_eq!(legs[0].notional(), 1.0);
        assert_relative_eq!(legs[1].notional(), -1.08);
        assert!(trade.buy_sell().is_buy());
    }

    #[test]
    fn test_trade_projects_inverted_fx_quote() {
        // FX stored as USD/EUR; the node needs EUR/USD
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let usdeur = CurrencyPair::new(
            curve_core::types::Currency::USD,
            curve_core::types::Currency::EUR,
        )
        .unwrap();
        let market = MarketSnapshot::new()
            .with_quote(spread_id(), 0.0015)
            .with_fx_rate(FxRate::new(usdeur, 1.0 / 1.08).unwrap());

        let trade = node.trade(date(2024, 6, 17), &market).unwrap();
        assert_relative_eq!(
            trade.product().legs()[1].notional(),
            -1.08,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_trade_missing_spread_quote() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let pair = template().currency_pair();
        let market = MarketSnapshot::new().with_fx_rate(FxRate::new(pair, 1.08).unwrap());

        let err = node.trade(date(2024, 6, 17), &market).unwrap_err();
        assert!(err.is_missing_market_data());
    }

    #[test]
    fn test_trade_missing_fx_rate() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let market = MarketSnapshot::new().with_quote(spread_id(), 0.0015);

        let err = node.trade(date(2024, 6, 17), &market).unwrap_err();
        assert!(err.is_missing_market_data());
    }

    #[test]
    fn test_trade_deterministic() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let market = snapshot(0.0015, 1.08);
        let first = node.trade(date(2024, 6, 17), &market).unwrap();
        let second = node.trade(date(2024, 6, 17), &market).unwrap();
        assert_eq!(first, second);
    }

    // ========================================
    // Initial Guess Tests
    // ========================================

    #[test]
    fn test_initial_guess_discount_factor() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let guess = node.initial_guess(
            date(2024, 6, 17),
            &MarketSnapshot::new(),
            ValueType::DiscountFactor,
        );
        assert_relative_eq!(guess, 1.0);
    }

    #[test]
    fn test_initial_guess_other_kinds() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        for value_type in [ValueType::ZeroRate, ValueType::ParRate] {
            let guess = node.initial_guess(date(2024, 6, 17), &MarketSnapshot::new(), value_type);
            assert_relative_eq!(guess, 0.0);
        }
    }

    #[test]
    fn test_initial_guess_ignores_snapshot_and_date() {
        let node = XccyIborIborSwapCurveNode::of(template(), spread_id());
        let empty = MarketSnapshot::new();
        let populated = snapshot(0.0015, 1.08);

        assert_eq!(
            node.initial_guess(date(2024, 6, 17), &empty, ValueType::DiscountFactor),
            node.initial_guess(date(2030, 1, 1), &populated, ValueType::DiscountFactor),
        );
    }
}
