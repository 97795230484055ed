use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use loan_predictor::prediction::{prediction_router, PredictionService};
use loan_predictor::tutor::{tutor_router, TutorResponder};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_api_routes(
    predictions: Arc<PredictionService>,
    tutor: Arc<TutorResponder>,
) -> Router {
    prediction_router(predictions)
        .merge(tutor_router(tutor))
        .route("/", axum::routing::get(index))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn index() -> Json<serde_json::Value> {
    Json(json!({ "message": "Loan Prediction API is running!" }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::cors_layer;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(state: AppState) -> Router {
        with_api_routes(
            Arc::new(PredictionService::default()),
            Arc::new(TutorResponder::standard()),
        )
        .layer(Extension(state))
        .layer(cors_layer(None))
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("valid json")
    }

    #[tokio::test]
    async fn index_reports_running() {
        let Json(body) = index().await;
        assert_eq!(body["message"], json!("Loan Prediction API is running!"));
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let state = test_state(false);
        let response = app(state.clone())
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = app(state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], json!("ready"));
    }

    #[tokio::test]
    async fn prediction_and_tutor_routes_are_merged() {
        let router = app(test_state(true));

        let predict = Request::post("/api/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "Gender": "Male",
                    "Married": "Yes",
                    "Dependents": "0",
                    "Education": "Graduate",
                    "Self_Employed": "No",
                    "ApplicantIncome": 5000,
                    "CoapplicantIncome": 0,
                    "LoanAmount": 150,
                    "Loan_Amount_Term": 360,
                    "Credit_History": 1,
                    "Property_Area": "Urban"
                })
                .to_string(),
            ))
            .unwrap();
        let response = router.clone().oneshot(predict).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["prediction_text"], json!("Approved"));

        let ask = Request::post("/api/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "question": "Is the model fair?" }).to_string()))
            .unwrap();
        let response = router.oneshot(ask).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let answer = read_json(response).await["answer"]
            .as_str()
            .map(str::to_string)
            .expect("answer text");
        assert!(answer.starts_with("That's an excellent question!"));
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let response = app(test_state(true))
            .oneshot(
                Request::options("/api/predict")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
