//! HTTP API: request routing, parameter validation, response shaping.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::fetch::{FetchClient, PageFetcher};
use crate::refresh;
use crate::storage::SalaryDatabase;
use crate::{Result, WageError};

/// Shared application state. Generic over the fetcher so tests can swap
/// in a scripted one.
pub struct AppState<F = FetchClient> {
    pub db: Arc<Mutex<SalaryDatabase>>,
    pub fetcher: Arc<F>,
}

impl AppState<FetchClient> {
    pub fn new(db: SalaryDatabase) -> Result<Self> {
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            fetcher: Arc::new(FetchClient::new()?),
        })
    }
}

impl<F> AppState<F> {
    pub fn with_fetcher(db: SalaryDatabase, fetcher: F) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            fetcher: Arc::new(fetcher),
        }
    }
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

#[derive(Serialize)]
struct ApiSuccess<T> {
    status: &'static str,
    data: T,
}

impl<T> ApiSuccess<T> {
    fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Serialize)]
struct ApiError {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

#[derive(Serialize)]
struct FieldError {
    field: &'static str,
    message: String,
}

/// Build the application router.
pub fn router<F>(state: AppState<F>) -> Router
where
    F: PageFetcher + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/api/player/:name", get(get_player::<F>))
        .route("/api/club/:name", get(get_club::<F>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / - welcome message
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the wagewatch API" }))
}

/// GET /api/player/:name
async fn get_player<F: PageFetcher>(
    State(state): State<AppState<F>>,
    Path(name): Path<String>,
) -> Response {
    if let Some(rejection) = validate_name(&name, "Player") {
        return rejection;
    }

    match refresh::player::get_or_refresh(&state.db, state.fetcher.as_ref(), &name).await {
        Ok(record) => (StatusCode::OK, Json(ApiSuccess::new(record))).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/club/:name
async fn get_club<F: PageFetcher>(
    State(state): State<AppState<F>>,
    Path(name): Path<String>,
) -> Response {
    if let Some(rejection) = validate_name(&name, "Club") {
        return rejection;
    }

    match refresh::club::get_or_refresh(&state.db, state.fetcher.as_ref(), &name).await {
        Ok(record) => (StatusCode::OK, Json(ApiSuccess::new(record))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Reject names shorter than 2 characters with a structured 400.
fn validate_name(name: &str, entity: &str) -> Option<Response> {
    if name.chars().count() >= 2 {
        return None;
    }

    Some(
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                status: "error",
                message: "Validation failed".to_string(),
                errors: Some(vec![FieldError {
                    field: "name",
                    message: format!("{entity} name must be at least 2 characters"),
                }]),
            }),
        )
            .into_response(),
    )
}

/// Map core errors to the API contract: recognized domain errors become a
/// 404 with their message, anything else a generic 500.
fn error_response(err: WageError) -> Response {
    if err.is_recognized() {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError {
                status: "error",
                message: err.to_string(),
                errors: None,
            }),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError {
                status: "error",
                message: "An unexpected error occurred".to_string(),
                errors: None,
            }),
        )
            .into_response()
    }
}
