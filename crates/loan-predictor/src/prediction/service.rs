use serde_json::Value;

use super::catalog::ModelCatalog;
use super::domain::PredictionResult;
use super::engine::ScoreEngine;
use super::intake::{InputViolation, IntakeGuard};

/// Service composing intake validation, the score engine, and the model catalog.
#[derive(Debug, Clone, Default)]
pub struct PredictionService {
    guard: IntakeGuard,
    engine: ScoreEngine,
    catalog: ModelCatalog,
}

impl PredictionService {
    pub fn new(engine: ScoreEngine, catalog: ModelCatalog) -> Self {
        Self {
            guard: IntakeGuard,
            engine,
            catalog,
        }
    }

    /// Validate a raw request body and score it.
    pub fn predict(&self, payload: &Value) -> Result<PredictionResult, InputViolation> {
        let input = self.guard.application_from_json(payload)?;
        Ok(self.engine.evaluate(&input))
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }
}
