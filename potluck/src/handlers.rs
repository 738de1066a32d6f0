use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use potluck_application::SplitRequestError;
use potluck_presentation::{ErrorBody, SplitPresenter, format_split_request_error};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CalculateSplitRequest {
    #[serde(rename = "eventId", default)]
    pub event_id: Option<String>,
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn calculate_split(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<CalculateSplitRequest>(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Unreadable calculate-split body");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    let event_id = request.event_id.unwrap_or_default();
    match state.splits.calculate_split(&event_id) {
        Ok(result) => Json(SplitPresenter::render(&result)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            if status.is_server_error() {
                tracing::error!(event_id = %event_id, error = %err, "Split request failed");
            }
            error_response(status, format_split_request_error(&err))
        }
    }
}

fn status_for(err: &SplitRequestError) -> StatusCode {
    match err {
        SplitRequestError::MissingEventId => StatusCode::BAD_REQUEST,
        SplitRequestError::EventNotFound(_) => StatusCode::NOT_FOUND,
        SplitRequestError::EventSource(_) | SplitRequestError::Split(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}
