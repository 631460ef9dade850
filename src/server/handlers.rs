use super::types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use crate::{Error, Result, assistant::Assistant, error::ErrorKind};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{
        StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, HeaderName,
        },
    },
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

const CORS_HEADERS: [(HeaderName, &str); 2] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST"),
];

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    /// `None` lifts the body size limit entirely.
    pub max_body_bytes: Option<usize>,
}

pub async fn ask(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let invocation_id = Uuid::new_v4();

    async move {
        let body = match body {
            Ok(body) => body,
            Err(rejection) => {
                return Error::bad_request(format!(
                    "could not read request body: {}",
                    rejection.body_text()
                ))
                .into_response();
            }
        };

        match answer_request(&state, &body).await {
            Ok(answer) => {
                info!("Answered question ({} chars)", answer.chars().count());
                (
                    StatusCode::OK,
                    CORS_HEADERS,
                    Json(AskResponse { response: answer }),
                )
                    .into_response()
            }
            Err(e) => e.into_response(),
        }
    }
    .instrument(info_span!("ask", %invocation_id))
    .await
}

async fn answer_request(state: &AppState, body: &[u8]) -> Result<String> {
    let request = AskRequest::from_body(body)?;

    match request.prompt.as_deref() {
        Some(prompt) => info!("Received question ({} chars)", prompt.chars().count()),
        None => info!("Received request without prompt, using default question"),
    }

    state.assistant.answer(request.prompt.as_deref()).await
}

pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        CORS_HEADERS,
        [(ACCESS_CONTROL_ALLOW_HEADERS, "content-type")],
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            ErrorKind::BadRequest => warn!(?kind, "Rejected request: {}", self),
            _ => error!(?kind, "Failed to answer request: {}", self),
        }

        (
            kind.status_code(),
            CORS_HEADERS,
            Json(ErrorResponse {
                error: self.to_string(),
                kind,
            }),
        )
            .into_response()
    }
}
