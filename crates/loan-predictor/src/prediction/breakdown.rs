use std::fmt;

use serde::Serialize;

use super::domain::{FeatureName, PredictionResult};
use super::engine::rank_features;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

/// One bar in the ranked contribution list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureBar {
    pub feature: FeatureName,
    pub label: &'static str,
    pub value: f64,
    pub direction: Direction,
    /// Bar width in percent, capped at 100.
    pub width_pct: f64,
}

/// Human readable view of a prediction: banner, probability split, ranked features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionBreakdown {
    pub approved: bool,
    pub status: String,
    pub confidence_pct: f64,
    pub approved_pct: f64,
    pub rejected_pct: f64,
    pub features: Vec<FeatureBar>,
}

impl PredictionBreakdown {
    pub fn from_result(result: &PredictionResult) -> Self {
        let probability = result.probability;
        let features = rank_features(&result.feature_importance)
            .into_iter()
            .map(|(feature, value)| FeatureBar {
                feature,
                label: feature.label(),
                value,
                direction: if value >= 0.0 {
                    Direction::Positive
                } else {
                    Direction::Negative
                },
                width_pct: (value.abs() * 100.0).min(100.0),
            })
            .collect();

        Self {
            approved: result.is_approved(),
            status: format!("Loan {}", result.prediction_text),
            confidence_pct: probability.approved.max(probability.rejected) * 100.0,
            approved_pct: probability.approved * 100.0,
            rejected_pct: probability.rejected * 100.0,
            features,
        }
    }
}

impl fmt::Display for PredictionBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        writeln!(f, "Confidence: {:.1}%", self.confidence_pct)?;
        writeln!(f)?;
        writeln!(f, "Probability Breakdown")?;
        writeln!(f, "  Approval Probability:  {:.1}%", self.approved_pct)?;
        writeln!(f, "  Rejection Probability: {:.1}%", self.rejected_pct)?;
        writeln!(f)?;
        writeln!(f, "Feature Importance (SHAP Values)")?;
        for bar in &self.features {
            let sign = match bar.direction {
                Direction::Positive => '+',
                Direction::Negative => '-',
            };
            writeln!(f, "  {:<24} {:>7.3} {sign}", bar.label, bar.value)?;
        }
        writeln!(f)?;
        writeln!(f, "  + Positive values increase approval probability")?;
        write!(f, "  - Negative values decrease approval probability")
    }
}

/// Failure state shown when a prediction could not be produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionFailed;

impl fmt::Display for PredictionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction Failed")?;
        write!(
            f,
            "Unable to process your request. Please check your connection and try again."
        )
    }
}
