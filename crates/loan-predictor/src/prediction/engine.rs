use super::domain::{
    ApplicationInput, CreditHistory, Education, FeatureImportance, FeatureName, LoanDecision,
    Married, PredictionResult, Probability, PropertyArea, SelfEmployed,
};

const CREDIT_WEIGHT: f64 = 0.4;
const INCOME_WEIGHT: f64 = 0.3;
const AFFORDABILITY_WEIGHT: f64 = 0.2;
const GRADUATE_BONUS: f64 = 0.1;

/// Combined monthly income at which the income term saturates.
const INCOME_SATURATION: f64 = 10_000.0;
/// Loan-to-annual-income ratio at which the affordability term reaches zero.
const MAX_LOAN_TO_INCOME_RATIO: f64 = 5.0;

/// Decision threshold and display clamp for the heuristic score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    /// Raw scores strictly above this value are approved.
    pub approval_threshold: f64,
    pub probability_floor: f64,
    pub probability_ceiling: f64,
}

impl ScoringPolicy {
    pub const fn standard() -> Self {
        Self {
            approval_threshold: 0.6,
            probability_floor: 0.1,
            probability_ceiling: 0.95,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stateless evaluator that applies the scoring policy to an application.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    policy: ScoringPolicy,
}

impl ScoreEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn evaluate(&self, input: &ApplicationInput) -> PredictionResult {
        let score = raw_score(input);

        let decision = if score > self.policy.approval_threshold {
            LoanDecision::Approved
        } else {
            LoanDecision::Rejected
        };

        let approved = score
            .max(self.policy.probability_floor)
            .min(self.policy.probability_ceiling);

        PredictionResult::new(
            decision,
            Probability::from_approved(approved),
            feature_importance(input),
        )
    }
}

/// Unclamped weighted sum that drives the approval decision.
pub fn raw_score(input: &ApplicationInput) -> f64 {
    let mut score = 0.0;

    score += f64::from(input.credit_history.flag()) * CREDIT_WEIGHT;

    let total_income = input.total_income() as f64;
    score += (total_income / INCOME_SATURATION).min(1.0) * INCOME_WEIGHT;

    score += affordability(input.loan_amount, total_income) * AFFORDABILITY_WEIGHT;

    if input.education == Education::Graduate {
        score += GRADUATE_BONUS;
    }

    score
}

// Zero income is an unbounded ratio, so the term contributes nothing.
fn affordability(loan_amount: u32, total_income: f64) -> f64 {
    if total_income <= 0.0 {
        return 0.0;
    }

    let loan_to_income = (f64::from(loan_amount) * 1000.0) / (total_income * 12.0);
    (1.0 - loan_to_income / MAX_LOAN_TO_INCOME_RATIO).max(0.0)
}

/// Fixed illustrative contributions; deliberately separate from `raw_score`.
fn feature_importance(input: &ApplicationInput) -> FeatureImportance {
    let credit = match input.credit_history {
        CreditHistory::Good => 0.35,
        CreditHistory::Poor => -0.4,
    };
    let education = match input.education {
        Education::Graduate => 0.08,
        Education::NotGraduate => -0.05,
    };
    let property = match input.property_area {
        PropertyArea::Urban => 0.05,
        PropertyArea::Semiurban => 0.02,
        PropertyArea::Rural => -0.03,
    };
    let married = match input.married {
        Married::Yes => 0.04,
        Married::No => -0.02,
    };
    let self_employed = match input.self_employed {
        SelfEmployed::Yes => -0.03,
        SelfEmployed::No => 0.02,
    };

    FeatureImportance::from_entries(vec![
        (FeatureName::CreditHistory, credit),
        (
            FeatureName::ApplicantIncome,
            (f64::from(input.applicant_income) - 5000.0) / 20_000.0,
        ),
        (
            FeatureName::LoanAmount,
            (150.0 - f64::from(input.loan_amount)) / 1000.0,
        ),
        (FeatureName::EducationGraduate, education),
        (FeatureName::PropertyAreaUrban, property),
        (FeatureName::MarriedYes, married),
        (
            FeatureName::CoapplicantIncome,
            f64::from(input.coapplicant_income) / 10_000.0,
        ),
        (FeatureName::SelfEmployedYes, self_employed),
    ])
}

const RANKED_FEATURE_LIMIT: usize = 8;

/// Order contributions by descending magnitude for presentation. Ties keep insertion order.
pub fn rank_features(importance: &FeatureImportance) -> Vec<(FeatureName, f64)> {
    let mut ranked = importance.entries().to_vec();
    ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));
    ranked.truncate(RANKED_FEATURE_LIMIT);
    ranked
}
