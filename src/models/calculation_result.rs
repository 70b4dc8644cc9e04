//! Calculation result models for the refund estimator.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs of an estimate: totals, the fixed
//! five-line breakdown, assumptions, warnings, confidence and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies a line of the result breakdown.
///
/// The breakdown always contains every key exactly once, in declaration order.
///
/// # Example
///
/// ```
/// use refund_estimator::models::BreakdownKey;
///
/// let key = BreakdownKey::CreditPoints;
/// assert_eq!(serde_json::to_string(&key).unwrap(), "\"credit_points\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownKey {
    /// Bracket tax plus surtax.
    GrossTax,
    /// Value of the credit points (a reduction).
    CreditPoints,
    /// Section 46 donation credit (a reduction).
    Donation,
    /// Net annual liability.
    Liability,
    /// Tax already withheld (an offset).
    Withheld,
}

impl BreakdownKey {
    /// All keys in breakdown order.
    pub const ALL: [BreakdownKey; 5] = [
        BreakdownKey::GrossTax,
        BreakdownKey::CreditPoints,
        BreakdownKey::Donation,
        BreakdownKey::Liability,
        BreakdownKey::Withheld,
    ];
}

/// A single named line in the result breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Which line this is.
    pub key: BreakdownKey,
    /// Display title.
    pub title: String,
    /// Signed amount; reductions and offsets are negative.
    pub amount: Decimal,
    /// Explanation of how the amount was derived.
    pub explanation: String,
}

/// Aggregated totals for an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    /// Taxable income summed across all forms.
    pub taxable_income_total: Decimal,
    /// Tax withheld summed across all forms.
    pub withheld_total: Decimal,
    /// Bracket tax plus surtax.
    pub gross_tax: Decimal,
    /// Credit points multiplied by the annual point value.
    pub credit_points_value: Decimal,
    /// Net liability after credits, never negative.
    pub liability: Decimal,
}

/// Coarse reliability label for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// No known source of inaccuracy.
    High,
    /// Missing refinement or an unresolved warning.
    Medium,
    /// Declared complexity the engine cannot model.
    Low,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of an estimate.
///
/// Fully derived from the input and the parameter table: identical input
/// always yields an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Headline sentence for display.
    pub result_summary: String,
    /// Estimated refund, zero when tax is due.
    pub refund_estimate: Decimal,
    /// Estimated tax due, zero when a refund is expected.
    pub underpayment_estimate: Decimal,
    /// Aggregated totals.
    pub totals: TaxTotals,
    /// The five breakdown lines in fixed order.
    pub breakdown_items: Vec<BreakdownItem>,
    /// Narrative of what the estimate assumed.
    pub assumptions: Vec<String>,
    /// Cautions about the input or the outcome.
    pub warnings: Vec<String>,
    /// Reliability label.
    pub confidence: Confidence,
    /// Rule-by-rule record of the calculation.
    pub audit_trace: Vec<AuditStep>,
}

impl CalculationResult {
    /// Looks up a breakdown line by key.
    pub fn breakdown_item(&self, key: BreakdownKey) -> Option<&BreakdownItem> {
        self.breakdown_items.iter().find(|item| item.key == key)
    }
}
