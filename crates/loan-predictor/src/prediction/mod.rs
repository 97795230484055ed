//! Loan approval scoring: intake validation, the heuristic score engine, the
//! presentation breakdown, and the model catalog published to the front end.

pub mod breakdown;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use breakdown::{Direction, FeatureBar, PredictionBreakdown, PredictionFailed};
pub use catalog::{DatasetError, ModelCatalog, NumericRange, ReferenceRanges};
pub use domain::{
    ApplicationInput, CreditHistory, Dependents, Education, FeatureImportance, FeatureName,
    Gender, LoanDecision, Married, PredictionResult, Probability, PropertyArea, SelfEmployed,
    UnknownOption,
};
pub use engine::{rank_features, raw_score, ScoreEngine, ScoringPolicy};
pub use intake::{InputViolation, IntakeGuard};
pub use router::prediction_router;
pub use service::PredictionService;
