//! Request types for the refund estimator API.
//!
//! This module defines the JSON request structures for the `/estimate`
//! endpoint and the boundary validation applied before the engine runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatorInput, Form106Entry, QuestionnaireAnswers};

/// Largest number of Form 106 entries accepted in one request.
pub const MAX_FORMS: usize = 20;

/// Largest credit point count an employer can plausibly grant.
pub const MAX_CREDIT_POINTS: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Largest accepted amount for any single monetary field (10^12).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Earliest accepted graduation or birth year.
pub const MIN_CALENDAR_YEAR: i32 = 1900;

fn check_amount(field: String, value: Decimal, label: &str) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field,
            message: format!("{} cannot be negative", label),
        });
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::InvalidInput {
            field,
            message: format!("{} cannot exceed {}", label, MAX_AMOUNT),
        });
    }
    Ok(())
}

fn check_calendar_year(field: String, value: i32, tax_year: i32) -> EngineResult<()> {
    if (MIN_CALENDAR_YEAR..=tax_year).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidInput {
            field,
            message: format!("year must be between {} and {}", MIN_CALENDAR_YEAR, tax_year),
        })
    }
}

/// Request body for the `/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The tax year to estimate.
    pub year: i32,
    /// One entry per employer.
    pub forms: Vec<FormRequest>,
    /// Optional questionnaire answers.
    #[serde(default)]
    pub questionnaire: Option<QuestionnaireAnswers>,
}

/// One Form 106 in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormRequest {
    /// Taxable income from this employer.
    pub taxable_income: Decimal,
    /// Income tax withheld (field 042).
    pub income_tax_withheld: Decimal,
    /// Credit points the employer granted, if known.
    #[serde(default)]
    pub credit_points_granted: Option<Decimal>,
    /// Severance, annuity or special-exemption marker.
    #[serde(default)]
    pub has_complexity_flags: bool,
}

impl FormRequest {
    fn validate(&self, index: usize) -> EngineResult<()> {
        let field = |name: &str| format!("forms[{}].{}", index, name);

        check_amount(field("taxable_income"), self.taxable_income, "taxable income")?;
        check_amount(field("income_tax_withheld"), self.income_tax_withheld, "tax withheld")?;
        if self.taxable_income > Decimal::ZERO && self.income_tax_withheld > self.taxable_income {
            return Err(EngineError::InvalidInput {
                field: field("income_tax_withheld"),
                message: "tax withheld exceeds taxable income; check that field 042 (income tax withheld) was entered rather than national insurance".to_string(),
            });
        }
        let points = self.credit_points_granted.unwrap_or(Decimal::ZERO);
        if points < Decimal::ZERO || points > MAX_CREDIT_POINTS {
            return Err(EngineError::InvalidInput {
                field: field("credit_points_granted"),
                message: "credit points must be between 0 and 10".to_string(),
            });
        }
        Ok(())
    }
}

impl From<FormRequest> for Form106Entry {
    fn from(req: FormRequest) -> Self {
        Form106Entry {
            taxable_income: req.taxable_income,
            income_tax_withheld: req.income_tax_withheld,
            credit_points_granted: req.credit_points_granted.unwrap_or(Decimal::ZERO),
            has_complexity_flags: req.has_complexity_flags,
        }
    }
}

impl EstimateRequest {
    /// Validates the request and converts it into engine input.
    ///
    /// A questionnaire with no answered field is dropped, so the engine
    /// treats it as absent.
    ///
    /// # Example
    ///
    /// ```
    /// use refund_estimator::api::EstimateRequest;
    ///
    /// let request: EstimateRequest = serde_json::from_str(r#"{
    ///     "year": 2024,
    ///     "forms": [{"taxable_income": 60000, "income_tax_withheld": 5500}],
    ///     "questionnaire": {}
    /// }"#).unwrap();
    ///
    /// let input = request.into_input().unwrap();
    /// assert!(input.questionnaire.is_none());
    /// ```
    pub fn into_input(self) -> EngineResult<CalculatorInput> {
        if self.forms.is_empty() || self.forms.len() > MAX_FORMS {
            return Err(EngineError::InvalidInput {
                field: "forms".to_string(),
                message: format!("between 1 and {} Form 106 entries are required", MAX_FORMS),
            });
        }
        for (index, form) in self.forms.iter().enumerate() {
            form.validate(index)?;
        }
        if let Some(questionnaire) = &self.questionnaire {
            validate_questionnaire(questionnaire, self.year)?;
        }

        Ok(CalculatorInput {
            year: self.year,
            forms: self.forms.into_iter().map(Into::into).collect(),
            questionnaire: self.questionnaire.filter(|q| !q.is_empty()),
        })
    }
}

fn validate_questionnaire(answers: &QuestionnaireAnswers, tax_year: i32) -> EngineResult<()> {
    if let Some(donations) = answers.donations_total {
        check_amount("questionnaire.donations_total".to_string(), donations, "donations total")?;
    }
    if let Some(graduated) = answers.graduation_year {
        check_calendar_year("questionnaire.graduation_year".to_string(), graduated, tax_year)?;
    }
    for (index, born) in answers.children_birth_years.iter().flatten().enumerate() {
        check_calendar_year(
            format!("questionnaire.children_birth_years[{}]", index),
            *born,
            tax_year,
        )?;
    }
    Ok(())
}
