//! Calculator input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Form106Entry, QuestionnaireAnswers};

/// Everything the engine needs for one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// The tax year being estimated.
    pub year: i32,
    /// One entry per employer; must not be empty.
    pub forms: Vec<Form106Entry>,
    /// Optional refinement answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<QuestionnaireAnswers>,
}

impl CalculatorInput {
    /// Creates an input without a questionnaire.
    pub fn new(year: i32, forms: Vec<Form106Entry>) -> Self {
        Self {
            year,
            forms,
            questionnaire: None,
        }
    }

    /// Attaches questionnaire answers.
    pub fn with_questionnaire(mut self, questionnaire: QuestionnaireAnswers) -> Self {
        self.questionnaire = Some(questionnaire);
        self
    }

    /// Sum of taxable income across all forms.
    pub fn taxable_income_total(&self) -> Decimal {
        self.forms.iter().map(|f| f.taxable_income).sum()
    }

    /// Sum of tax withheld across all forms.
    pub fn withheld_total(&self) -> Decimal {
        self.forms.iter().map(|f| f.income_tax_withheld).sum()
    }
}
