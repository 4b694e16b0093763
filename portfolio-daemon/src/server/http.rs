//! HTTP routes and handlers for the portfolio API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use portfolio_core::{NewProject, Project, ProjectPatch, StoreError};

use super::error::ApiError;
use super::state::AppState;

/// Service name reported by the index route.
pub const API_NAME: &str = "Artist Portfolio API";

/// API version reported by the index route.
pub const API_VERSION: &str = "1.0";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/:id",
            get(get_project).put(update_project).delete(delete_project),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

// =============================================================================
// Index
// =============================================================================

async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": API_NAME,
        "version": API_VERSION,
        "endpoints": [
            "/api/projects",
            "/api/projects/<id>"
        ]
    }))
}

// =============================================================================
// Projects
// =============================================================================

/// Query key carrying the case-insensitive category filter.
const CATEGORY_PARAM: &str = "category";

async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Project>> {
    // First occurrence wins; repeated keys never reject the request
    let category = params
        .iter()
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|c| !c.is_empty());
    let store = state.store.read().await;
    Json(store.list(category))
}

async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Project>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let input: NewProject = parse_body(payload)?;

    let mut store = state.store.write().await;
    let project = store.create(input)?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    payload: Option<Json<Value>>,
) -> Result<Json<Project>, ApiError> {
    let mut store = state.store.write().await;

    // An unknown id wins over a bad body
    if !store.contains(id) {
        return Err(StoreError::NotFound { id }.into());
    }
    let patch: ProjectPatch = parse_body(payload)?;

    Ok(Json(store.update(id, patch)?))
}

async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    store.delete(id)?;
    Ok(Json(serde_json::json!({ "message": "Project deleted" })))
}

/// Decode a request body into a typed payload.
///
/// A missing or unparseable body, a non-object, an empty object, or a field of
/// the wrong type are all reported as invalid input.
fn parse_body<T: DeserializeOwned>(payload: Option<Json<Value>>) -> Result<T, ApiError> {
    let Some(Json(value)) = payload else {
        debug!("Rejected request without a JSON body");
        return Err(StoreError::InvalidInput.into());
    };

    match &value {
        Value::Object(fields) if !fields.is_empty() => {}
        _ => return Err(StoreError::InvalidInput.into()),
    }

    serde_json::from_value(value).map_err(|e| {
        debug!("Rejected project payload: {}", e);
        ApiError(StoreError::InvalidInput)
    })
}
