use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::responder::TutorResponder;

#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: &'static str,
}

/// Router builder exposing the tutor question endpoint.
pub fn tutor_router(responder: Arc<TutorResponder>) -> Router {
    Router::new()
        .route("/api/ask", post(ask_handler))
        .with_state(responder)
}

pub(crate) async fn ask_handler(
    State(responder): State<Arc<TutorResponder>>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let topic = responder.classify(&request.question);
    debug!(question = %request.question, ?topic, "tutor question received");

    Json(AskResponse {
        answer: responder.answer(&request.question),
    })
}
