use crate::todo::api::create_todo_router;
use crate::todo::controller::TodoController;
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// JSON response for validation and domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what was wrong with the request
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

/// JSON response for unexpected failures. Carries no detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailureResponse {
    /// Always `false`
    pub ok: bool,
}

impl FailureResponse {
    pub fn new() -> Self {
        Self { ok: false }
    }
}

impl Default for FailureResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::todo::api::get_all_todos_handler,
        crate::todo::api::get_one_todo_handler,
        crate::todo::api::insert_todo_handler,
        crate::todo::api::delete_todo_handler,
        crate::todo::api::change_todo_status_handler,
    ),
    components(schemas(
        crate::todo::controller::TodoJson,
        crate::todo::TodoPayload,
        crate::todo::StatusChange,
        crate::todo::Status,
        ErrorResponse,
        FailureResponse,
    )),
    tags((name = "Todos", description = "Create, list, fetch, update the status of and delete todos"))
)]
pub struct ApiDoc;

/// Handler for GET /api-docs/openapi.json.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(controller: Arc<dyn TodoController>) -> Router {
    Router::new()
        .nest("/api", create_todo_router(controller))
        .route("/api-docs/openapi.json", get(openapi_handler))
}
