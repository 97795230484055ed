use super::common::*;

use crate::prediction::breakdown::{Direction, PredictionBreakdown, PredictionFailed};
use crate::prediction::domain::{CreditHistory, FeatureName};
use crate::prediction::engine::ScoreEngine;

#[test]
fn approved_breakdown_reports_banner_and_split() {
    let result = ScoreEngine::default().evaluate(&application());
    let breakdown = PredictionBreakdown::from_result(&result);

    assert!(breakdown.approved);
    assert_eq!(breakdown.status, "Loan Approved");
    assert_close(breakdown.confidence_pct, 75.0);
    assert_close(breakdown.approved_pct, 75.0);
    assert_close(breakdown.rejected_pct, 25.0);
    assert_eq!(breakdown.features.len(), 8);
    assert_eq!(breakdown.features[0].feature, FeatureName::CreditHistory);
    assert_eq!(breakdown.features[0].label, "Credit History");
    assert_close(breakdown.features[0].width_pct, 35.0);
}

#[test]
fn rejected_breakdown_uses_larger_probability_for_confidence() {
    let mut input = application();
    input.credit_history = CreditHistory::Poor;
    let breakdown = PredictionBreakdown::from_result(&ScoreEngine::default().evaluate(&input));

    assert!(!breakdown.approved);
    assert_eq!(breakdown.status, "Loan Rejected");
    assert_close(breakdown.confidence_pct, 65.0);
    assert_eq!(breakdown.features[0].direction, Direction::Negative);
}

#[test]
fn bar_width_is_capped() {
    let mut input = application();
    input.applicant_income = 45_000;
    let breakdown = PredictionBreakdown::from_result(&ScoreEngine::default().evaluate(&input));

    let income = breakdown
        .features
        .iter()
        .find(|bar| bar.feature == FeatureName::ApplicantIncome)
        .expect("income bar present");
    assert_close(income.value, 2.0);
    assert_eq!(income.width_pct, 100.0);
    assert_eq!(income.direction, Direction::Positive);
}

#[test]
fn renders_text_report() {
    let result = ScoreEngine::default().evaluate(&application());
    let rendered = PredictionBreakdown::from_result(&result).to_string();

    assert!(rendered.starts_with("Loan Approved\nConfidence: 75.0%"));
    assert!(rendered.contains("Approval Probability:  75.0%"));
    assert!(rendered.contains("Rejection Probability: 25.0%"));
    assert!(rendered.contains("Credit History"));
    assert!(rendered.contains("0.350"));
    let loan_line = rendered
        .lines()
        .find(|line| line.trim_start().starts_with("Loan Amount"))
        .expect("loan amount line");
    assert!(loan_line.ends_with(" 0.000 +"), "{loan_line}");
    assert!(!rendered.contains("-0.000"));
    assert!(rendered.contains("Positive values increase approval probability"));
}

#[test]
fn failure_state_is_explicit() {
    let rendered = PredictionFailed.to_string();
    assert!(rendered.starts_with("Prediction Failed"));
    assert!(rendered.contains("check your connection"));
}
