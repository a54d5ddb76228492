//! API Routes
//!
//! REST API endpoints for the studio: the generation proxy, the three
//! auxiliary proxies, and the image library.

mod generate;
mod library;
mod prompt;
mod style;
mod upload;


use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch, post, put},
    Router,
};
use serde::Serialize;

use imaginary_types::error::{GatewayError, IntakeError, LibraryError, TypedError};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Status
        .route("/status", get(get_status))
        // Gateway proxies
        .route("/generate-image", post(generate::generate_image))
        .route("/improve-prompt", post(prompt::improve_prompt))
        .route("/extract-style", post(style::extract_style))
        .route("/upload-image", post(upload::upload_image))
        // Library
        .route(
            "/library/collections",
            get(library::list_collections).post(library::create_collection),
        )
        .route(
            "/library/collections/:id",
            put(library::update_collection).delete(library::delete_collection),
        )
        .route("/library/images", get(library::list_images).post(library::save_image))
        .route(
            "/library/images/:id",
            patch(library::update_image).delete(library::delete_image),
        )
        .route("/library/images/bulk", post(library::bulk_update_images))
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}

#[derive(Serialize)]
struct StatusResponse {
    version: String,
    library_available: bool,
    uploads_available: bool,
}

async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        library_available: state.repository().is_some(),
        uploads_available: state.uploader().is_some(),
    })
}

/// Error wrapper that renders as the `{ "error": message }` body every
/// endpoint promises.
#[derive(Debug)]
pub struct ApiError(pub TypedError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(TypedError::Gateway(GatewayError::InvalidRequest { message: message.into() }))
    }

    pub fn status_code(&self) -> u16 {
        self.0.http_status_code()
    }

    fn message(&self) -> String {
        match &self.0 {
            TypedError::Gateway(e) => e.client_message(),
            TypedError::Intake(e) => e.to_string(),
            TypedError::Library(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(serde_json::json!({"error": self.message()}))).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(TypedError::Gateway(err))
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        Self(TypedError::Intake(err))
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        Self(TypedError::Library(err))
    }
}
