//! Confidence classification.
//!
//! Rules are evaluated top to bottom and the first match decides the label.
//! Structural complexity outranks missing refinement, which outranks
//! unresolved warnings.

use crate::models::{AuditStep, CalculatorInput, Confidence, ResidencyAnswer};

/// Facts the confidence rules look at.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceContext<'a> {
    /// The estimate's input.
    pub input: &'a CalculatorInput,
    /// Whether any warning fired.
    pub has_warnings: bool,
}

/// One entry of the ordered rule list.
pub struct ConfidenceRule {
    /// Stable identifier recorded in the audit trace.
    pub id: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Label assigned when the rule matches.
    pub level: Confidence,
    /// Predicate deciding whether the rule matches.
    pub applies: fn(&ConfidenceContext<'_>) -> bool,
}

fn has_complexity_flags(ctx: &ConfidenceContext<'_>) -> bool {
    ctx.input.forms.iter().any(|f| f.has_complexity_flags)
}

fn declares_additional_income(ctx: &ConfidenceContext<'_>) -> bool {
    ctx.input
        .questionnaire
        .as_ref()
        .is_some_and(|q| q.declares_additional_income())
}

fn residency_unsure(ctx: &ConfidenceContext<'_>) -> bool {
    ctx.input
        .questionnaire
        .as_ref()
        .is_some_and(|q| q.residency == Some(ResidencyAnswer::Unsure))
}

fn multiple_forms_without_questionnaire(ctx: &ConfidenceContext<'_>) -> bool {
    ctx.input.forms.len() > 1 && ctx.input.questionnaire.is_none()
}

fn warnings_fired(ctx: &ConfidenceContext<'_>) -> bool {
    ctx.has_warnings
}

/// The ordered rule list; order is significant.
pub const CONFIDENCE_RULES: [ConfidenceRule; 5] = [
    ConfidenceRule {
        id: "complexity_flags",
        description: "A form is marked with complexity flags",
        level: Confidence::Low,
        applies: has_complexity_flags,
    },
    ConfidenceRule {
        id: "additional_income",
        description: "Income outside the reported forms was declared",
        level: Confidence::Low,
        applies: declares_additional_income,
    },
    ConfidenceRule {
        id: "residency_unsure",
        description: "Residency status is unsure",
        level: Confidence::Medium,
        applies: residency_unsure,
    },
    ConfidenceRule {
        id: "multiple_forms_unrefined",
        description: "Several forms and no questionnaire",
        level: Confidence::Medium,
        applies: multiple_forms_without_questionnaire,
    },
    ConfidenceRule {
        id: "warnings",
        description: "At least one warning fired",
        level: Confidence::Medium,
        applies: warnings_fired,
    },
];

/// The result of confidence classification.
#[derive(Debug, Clone)]
pub struct ConfidenceResult {
    /// The assigned label.
    pub confidence: Confidence,
    /// The rule that matched, `None` when falling through to high.
    pub matched_rule: Option<&'static str>,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Returns the first matching rule's label, or high when none match.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::classify_confidence;
/// use refund_estimator::models::{CalculatorInput, Confidence, Form106Entry};
/// use rust_decimal::Decimal;
///
/// let form = Form106Entry::new(Decimal::from(100_000), Decimal::from(10_000))
///     .with_complexity_flags();
/// let input = CalculatorInput::new(2024, vec![form]);
/// assert_eq!(classify_confidence(&input, false), Confidence::Low);
/// ```
pub fn classify_confidence(input: &CalculatorInput, has_warnings: bool) -> Confidence {
    calculate_confidence(input, has_warnings, 0).confidence
}

/// Classifies confidence and records the matched rule in the audit trail.
pub fn calculate_confidence(
    input: &CalculatorInput,
    has_warnings: bool,
    step_number: u32,
) -> ConfidenceResult {
    let ctx = ConfidenceContext {
        input,
        has_warnings,
    };
    let matched = CONFIDENCE_RULES.iter().find(|rule| (rule.applies)(&ctx));

    let (confidence, matched_rule, reasoning) = match matched {
        Some(rule) => (
            rule.level,
            Some(rule.id),
            format!("{} - confidence {:?}", rule.description, rule.level),
        ),
        None => (
            Confidence::High,
            None,
            "No complexity, missing refinement or warnings - confidence High".to_string(),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "confidence".to_string(),
        rule_name: "Confidence Classification".to_string(),
        input: serde_json::json!({
            "form_count": input.forms.len(),
            "questionnaire": input.questionnaire.is_some(),
            "has_warnings": has_warnings
        }),
        output: serde_json::json!({
            "confidence": confidence,
            "matched_rule": matched_rule
        }),
        reasoning,
    };

    ConfidenceResult {
        confidence,
        matched_rule,
        audit_step,
    }
}
