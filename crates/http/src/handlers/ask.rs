use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api_types::{AskRequest, AskResponse};
use crate::AppState;

/// `POST /ask` — answer a climate question.
///
/// Every failure, including a malformed body, collapses to a 500 with the
/// message embedded in the `answer` field.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> (StatusCode, Json<AskResponse>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(&rejection.body_text()),
    };

    match state.query_service.ask(&request.query).await {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })),
        Err(e) => {
            tracing::error!(error = %e, "query failed");
            error_response(&e.to_string())
        },
    }
}

fn error_response(message: &str) -> (StatusCode, Json<AskResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(AskResponse { answer: format!("Error: {message}") }),
    )
}
