//! Route bindings for `/api/todos`.
//!
//! Handlers only run the validating extractors and delegate to the
//! [`TodoController`]; a rejected extraction never reaches the controller.

use super::controller::{TodoController, TodoJson};
use super::{StatusChange, TodoId, TodoPayload, ValidatedJson};
use crate::web::api::{ErrorResponse, FailureResponse};
use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use std::sync::Arc;

/// Shared handle to the controller, used as router state.
pub type TodoControllerState = Arc<dyn TodoController>;

/// Handler for GET /api/todos - Returns all todos, newest first.
#[utoipa::path(
    get,
    path = "/api/todos",
    responses(
        (status = 200, description = "All todos ordered by id descending", body = [TodoJson]),
        (status = 500, description = "Internal server error", body = FailureResponse)
    ),
    tag = "Todos"
)]
pub async fn get_all_todos_handler(State(controller): State<TodoControllerState>) -> Response {
    controller.get_all_todos().await
}

/// Handler for GET /api/todos/{id} - Returns one todo.
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo id, an integer >= 1")),
    responses(
        (status = 200, description = "The todo", body = TodoJson),
        (status = 400, description = "Invalid id or todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = FailureResponse)
    ),
    tag = "Todos"
)]
pub async fn get_one_todo_handler(
    State(controller): State<TodoControllerState>,
    id: TodoId,
) -> Response {
    controller.get_one_todo(id).await
}

/// Handler for POST /api/todos - Creates a todo.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = TodoPayload,
    responses(
        (status = 201, description = "Created; `Location` points at the new todo",
            headers(("Location" = String, description = "Path of the created todo"))),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = FailureResponse)
    ),
    tag = "Todos"
)]
pub async fn insert_todo_handler(
    State(controller): State<TodoControllerState>,
    ValidatedJson(payload): ValidatedJson<TodoPayload>,
) -> Response {
    controller.insert_todo(payload).await
}

/// Handler for DELETE /api/todos/{id} - Deletes a todo.
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo id, an integer >= 1")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id or todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = FailureResponse)
    ),
    tag = "Todos"
)]
pub async fn delete_todo_handler(
    State(controller): State<TodoControllerState>,
    id: TodoId,
) -> Response {
    controller.delete_todo(id).await
}

/// Handler for PATCH /api/todos/{id} - Replaces the status of a todo.
#[utoipa::path(
    patch,
    path = "/api/todos/{id}",
    params(("id" = i32, Path, description = "Todo id, an integer >= 1")),
    request_body = StatusChange,
    responses(
        (status = 204, description = "Status changed"),
        (status = 400, description = "Invalid id or body, or todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = FailureResponse)
    ),
    tag = "Todos"
)]
pub async fn change_todo_status_handler(
    State(controller): State<TodoControllerState>,
    id: TodoId,
    ValidatedJson(change): ValidatedJson<StatusChange>,
) -> Response {
    controller.change_todo_status(id, change).await
}

/// Creates and returns the todo router. Paths are relative to `/api`.
pub fn create_todo_router(controller: TodoControllerState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(get_all_todos_handler).post(insert_todo_handler),
        )
        .route(
            "/todos/{id}",
            get(get_one_todo_handler)
                .delete(delete_todo_handler)
                .patch(change_todo_status_handler),
        )
        .with_state(controller)
}
