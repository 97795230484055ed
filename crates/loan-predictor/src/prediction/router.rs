use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tracing::{info, warn};

use super::catalog::ModelCatalog;
use super::domain::PredictionResult;
use super::service::PredictionService;
use crate::error::AppError;

/// Router builder exposing the prediction and model-info endpoints.
pub fn prediction_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/predict", post(predict_handler))
        .route("/api/model-info", get(model_info_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<PredictionService>>,
    Json(payload): Json<Value>,
) -> Result<Json<PredictionResult>, AppError> {
    let result = service.predict(&payload).map_err(|violation| {
        warn!(%violation, "prediction request rejected");
        AppError::from(violation)
    })?;

    info!(
        prediction = result.prediction_text,
        approved = result.probability.approved,
        "prediction served"
    );
    Ok(Json(result))
}

pub(crate) async fn model_info_handler(
    State(service): State<Arc<PredictionService>>,
) -> Json<ModelCatalog> {
    Json(service.catalog().clone())
}
