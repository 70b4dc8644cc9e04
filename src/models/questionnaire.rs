//! Questionnaire models.
//!
//! The questionnaire is a short, partial set of answers that refines the
//! credit-point and donation computations. Every field is optional and an
//! absent field is distinct from any explicit answer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Answer to "were you a resident for the full tax year?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidencyAnswer {
    /// Resident for the whole year.
    Yes,
    /// Not resident for the whole year.
    No,
    /// The respondent does not know.
    Unsure,
}

/// A plain yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    /// Yes.
    Yes,
    /// No.
    No,
}

/// Declared academic or professional degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeType {
    /// First (bachelor's) degree.
    First,
    /// Second (master's) degree.
    Second,
    /// Professional studies.
    Professional,
    /// No degree.
    None,
}

/// Optional answers that refine the estimate.
///
/// # Example
///
/// ```
/// use refund_estimator::models::{QuestionnaireAnswers, ResidencyAnswer};
///
/// let answers = QuestionnaireAnswers {
///     residency: Some(ResidencyAnswer::Yes),
///     ..Default::default()
/// };
/// assert!(!answers.is_empty());
/// assert!(QuestionnaireAnswers::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    /// Full-year residency status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency: Option<ResidencyAnswer>,
    /// Opt-in to the gender credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_credit: Option<YesNo>,
    /// Declared degree type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_type: Option<DegreeType>,
    /// Year the degree was completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    /// Birth years of the respondent's children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_birth_years: Option<Vec<i32>>,
    /// Total donations to approved institutions (section 46).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donations_total: Option<Decimal>,
    /// Income outside the reported Form 106 entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_additional_income: Option<bool>,
}

impl QuestionnaireAnswers {
    /// Returns true when no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.residency.is_none()
            && self.gender_credit.is_none()
            && self.degree_type.is_none()
            && self.graduation_year.is_none()
            && self.children_birth_years.is_none()
            && self.donations_total.is_none()
            && self.has_additional_income.is_none()
    }

    /// Returns true if full-year residency was confirmed.
    pub fn is_full_year_resident(&self) -> bool {
        self.residency == Some(ResidencyAnswer::Yes)
    }

    /// Returns true if the respondent opted in to the gender credit.
    pub fn claims_gender_credit(&self) -> bool {
        self.gender_credit == Some(YesNo::Yes)
    }

    /// Returns true if income outside the forms was declared.
    pub fn declares_additional_income(&self) -> bool {
        self.has_additional_income == Some(true)
    }
}
