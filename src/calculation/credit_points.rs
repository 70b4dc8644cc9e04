//! Credit point aggregation.
//!
//! Without a questionnaire the engine trusts the points employers applied.
//! With one, the total is recomputed from the declared facts: a residency
//! base (or the employers' points when residency is not confirmed) plus the
//! gender, degree and children extras.

use rust_decimal::Decimal;

use crate::models::{AuditStep, DegreeType, Form106Entry, QuestionnaireAnswers};

/// Base points for a full-year resident (2.25).
pub const BASE_RESIDENCY_POINTS: Decimal = Decimal::from_parts(225, 0, 0, false, 2);

/// Points for the gender credit (0.5).
pub const GENDER_CREDIT_POINTS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Points for a recently completed degree (1.0).
pub const DEGREE_CREDIT_POINTS: Decimal = Decimal::ONE;

/// How many years after graduation the degree credit still applies.
pub const DEGREE_CREDIT_YEARS: i32 = 3;

/// Points per qualifying child (0.5).
pub const CHILD_CREDIT_POINTS: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Oldest age, inclusive, at which a child still qualifies.
pub const CHILD_MAX_AGE: i32 = 18;

/// Cap on the combined children credit (3.0).
pub const CHILDREN_CREDIT_CAP: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// The result of aggregating credit points, including each component.
#[derive(Debug, Clone)]
pub struct CreditPointsResult {
    /// Points the employers granted, summed across forms.
    pub forms_points: Decimal,
    /// Base portion used in the total.
    pub base_points: Decimal,
    /// Gender credit extra.
    pub gender_points: Decimal,
    /// Degree credit extra.
    pub degree_points: Decimal,
    /// Children credit extra, already capped.
    pub children_points: Decimal,
    /// Final point total.
    pub total_points: Decimal,
    /// True when the questionnaire drove the recomputation.
    pub recomputed: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Degree credit: one point for a declared degree completed within
/// [`DEGREE_CREDIT_YEARS`] years before the tax year, inclusive.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::degree_points;
/// use refund_estimator::models::DegreeType;
/// use rust_decimal::Decimal;
///
/// assert_eq!(degree_points(Some(DegreeType::First), Some(2021), 2024), Decimal::ONE);
/// assert_eq!(degree_points(Some(DegreeType::First), Some(2020), 2024), Decimal::ZERO);
/// assert_eq!(degree_points(Some(DegreeType::None), Some(2023), 2024), Decimal::ZERO);
/// ```
pub fn degree_points(
    degree_type: Option<DegreeType>,
    graduation_year: Option<i32>,
    tax_year: i32,
) -> Decimal {
    let (Some(degree), Some(graduated)) = (degree_type, graduation_year) else {
        return Decimal::ZERO;
    };
    if degree == DegreeType::None {
        return Decimal::ZERO;
    }
    let years_since = tax_year.checked_sub(graduated);
    if years_since.is_some_and(|years| (0..=DEGREE_CREDIT_YEARS).contains(&years)) {
        DEGREE_CREDIT_POINTS
    } else {
        Decimal::ZERO
    }
}

/// Children credit: half a point per child aged 0 to 18 in the tax year,
/// capped at [`CHILDREN_CREDIT_CAP`].
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::children_points;
/// use rust_decimal::Decimal;
///
/// assert_eq!(children_points(&[2010, 2020], 2024), Decimal::ONE);
/// assert_eq!(children_points(&[2000], 2024), Decimal::ZERO);
/// ```
pub fn children_points(birth_years: &[i32], tax_year: i32) -> Decimal {
    let qualifying = birth_years
        .iter()
        .filter(|&&born| {
            tax_year
                .checked_sub(born)
                .is_some_and(|age| (0..=CHILD_MAX_AGE).contains(&age))
        })
        .count();
    (CHILD_CREDIT_POINTS * Decimal::from(qualifying)).min(CHILDREN_CREDIT_CAP)
}

/// Returns the total credit points for an estimate.
///
/// See [`calculate_credit_points`] for the rules.
pub fn total_credit_points(
    forms: &[Form106Entry],
    questionnaire: Option<&QuestionnaireAnswers>,
    tax_year: i32,
) -> Decimal {
    calculate_credit_points(forms, questionnaire, tax_year, 0).total_points
}

/// Aggregates credit points from the forms and the questionnaire.
///
/// - No questionnaire: the sum of the forms' granted points.
/// - Questionnaire present: the residency base (2.25 when residency is
///   confirmed, otherwise the forms' sum) plus gender, degree and children
///   extras. The base replaces the forms' sum rather than adding to it.
///
/// # Examples
///
/// ```
/// use refund_estimator::calculation::calculate_credit_points;
/// use refund_estimator::models::{Form106Entry, QuestionnaireAnswers, ResidencyAnswer, YesNo};
/// use rust_decimal::Decimal;
///
/// let forms = vec![Form106Entry::new(Decimal::from(180_000), Decimal::from(20_000))
///     .with_credit_points(Decimal::new(225, 2))];
/// let answers = QuestionnaireAnswers {
///     residency: Some(ResidencyAnswer::Yes),
///     gender_credit: Some(YesNo::Yes),
///     ..Default::default()
/// };
///
/// let result = calculate_credit_points(&forms, Some(&answers), 2024, 1);
/// assert_eq!(result.total_points, Decimal::new(275, 2));
/// ```
pub fn calculate_credit_points(
    forms: &[Form106Entry],
    questionnaire: Option<&QuestionnaireAnswers>,
    tax_year: i32,
    step_number: u32,
) -> CreditPointsResult {
    let forms_points: Decimal = forms.iter().map(|f| f.credit_points_granted).sum();

    let Some(answers) = questionnaire else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "credit_points".to_string(),
            rule_name: "Credit Points".to_string(),
            input: serde_json::json!({
                "forms_points": forms_points.normalize().to_string(),
                "questionnaire": false
            }),
            output: serde_json::json!({
                "total_points": forms_points.normalize().to_string(),
                "recomputed": false
            }),
            reasoning: format!(
                "No questionnaire - using {} points granted across {} form(s)",
                forms_points.normalize(),
                forms.len()
            ),
        };

        return CreditPointsResult {
            forms_points,
            base_points: forms_points,
            gender_points: Decimal::ZERO,
            degree_points: Decimal::ZERO,
            children_points: Decimal::ZERO,
            total_points: forms_points,
            recomputed: false,
            audit_step,
        };
    };

    let base_points = if answers.is_full_year_resident() {
        BASE_RESIDENCY_POINTS
    } else {
        forms_points
    };
    let gender = if answers.claims_gender_credit() {
        GENDER_CREDIT_POINTS
    } else {
        Decimal::ZERO
    };
    let degree = degree_points(answers.degree_type, answers.graduation_year, tax_year);
    let children = answers
        .children_birth_years
        .as_deref()
        .map(|years| children_points(years, tax_year))
        .unwrap_or(Decimal::ZERO);
    let total_points = base_points + gender + degree + children;

    let base_source = if answers.is_full_year_resident() {
        "full-year resident base"
    } else {
        "residency not confirmed, employer-granted points as base"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "credit_points".to_string(),
        rule_name: "Credit Points".to_string(),
        input: serde_json::json!({
            "forms_points": forms_points.normalize().to_string(),
            "questionnaire": true,
            "residency": answers.residency,
            "gender_credit": answers.gender_credit,
            "degree_type": answers.degree_type,
            "graduation_year": answers.graduation_year,
            "children_birth_years": answers.children_birth_years,
            "tax_year": tax_year
        }),
        output: serde_json::json!({
            "base_points": base_points.normalize().to_string(),
            "gender_points": gender.normalize().to_string(),
            "degree_points": degree.normalize().to_string(),
            "children_points": children.normalize().to_string(),
            "total_points": total_points.normalize().to_string(),
            "recomputed": true
        }),
        reasoning: format!(
            "{} ({}) + gender {} + degree {} + children {} = {} points",
            base_points.normalize(),
            base_source,
            gender.normalize(),
            degree.normalize(),
            children.normalize(),
            total_points.normalize()
        ),
    };

    CreditPointsResult {
        forms_points,
        base_points,
        gender_points: gender,
        degree_points: degree,
        children_points: children,
        total_points,
        recomputed: true,
        audit_step,
    }
}
