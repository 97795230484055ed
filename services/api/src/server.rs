use crate::cli::ServeArgs;
use crate::infra::{cors_layer, AppState};
use crate::routes::with_api_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_predictor::config::AppConfig;
use loan_predictor::error::AppError;
use loan_predictor::prediction::{ModelCatalog, PredictionService, ScoreEngine};
use loan_predictor::telemetry;
use loan_predictor::tutor::TutorResponder;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = ModelCatalog::load(config.catalog.dataset_path.as_deref())?;
    match &config.catalog.dataset_path {
        Some(path) => info!(path = %path.display(), "model catalog loaded from dataset"),
        None => info!("model catalog using built-in reference ranges"),
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let predictions = Arc::new(PredictionService::new(ScoreEngine::default(), catalog));
    let tutor = Arc::new(TutorResponder::standard());

    let app = with_api_routes(predictions, tutor)
        .layer(Extension(app_state))
        .layer(cors_layer(config.server.allowed_origin.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
