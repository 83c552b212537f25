use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use flysheet_lifecycle::LifecycleError;
use flysheet_types::ArtifactId;

use crate::state::AppState;

/// Body of `POST /artifacts`.
#[derive(Debug, Deserialize)]
pub struct CreateArtifactRequest {
    pub text: String,
}

/// Success body of `POST /artifacts`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtifactResponse {
    /// Retrieval URL embedding the minted identifier.
    pub url: String,
    /// Instant from which the artifact is no longer served.
    pub expires_at: DateTime<Utc>,
}

/// A client-facing error: status code plus a JSON `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "artifact not found or expired")
    }

    fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        if err.is_absence() {
            // NotFound and Expired are expected outcomes; Corrupted has
            // already been logged at warn by the store.
            tracing::debug!(error = %err, "artifact unavailable");
            return Self::not_found();
        }
        tracing::error!(error = %err, "artifact operation failed");
        match err {
            LifecycleError::Render(_) => Self::internal("document rendering failed"),
            LifecycleError::Store(_) => Self::internal("artifact storage failed"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// `POST /artifacts`: render the text payload and hand back a short-lived
/// retrieval URL.
pub async fn create_artifact(
    State(state): State<AppState>,
    Json(request): Json<CreateArtifactRequest>,
) -> Result<Json<CreateArtifactResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::invalid_input("text is required"));
    }

    let receipt = state.lifecycle.create(&request.text)?;
    Ok(Json(CreateArtifactResponse {
        url: format!("{}/artifacts/{}", state.public_url, receipt.id),
        expires_at: receipt.expires_at,
    }))
}

/// `GET /artifacts/{id}`: serve the raw document bytes while the artifact
/// remains valid.
///
/// Unknown, expired, and corrupted artifacts all answer 404 — identifiers
/// are opaque, so a malformed one is simply unknown.
pub async fn fetch_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: ArtifactId = id.parse().map_err(|_| ApiError::not_found())?;
    let bytes = state.lifecycle.fetch(&id)?;

    let headers = [
        (header::CONTENT_TYPE, state.lifecycle.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{id}.pdf\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// Health check handler.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "flysheet-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
