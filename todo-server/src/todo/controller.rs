//! Translates HTTP requests into service calls and service outcomes into
//! HTTP responses.

use super::service::{TodoService, TodoServiceError};
use super::{Status, StatusChange, Todo, TodoId, TodoPayload};
use crate::web::api::{ErrorResponse, FailureResponse};
use async_trait::async_trait;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON representation of a Todo for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoJson {
    /// Unique identifier assigned by the store
    pub id: i32,
    /// Short description of the task
    pub title: String,
    /// Current status
    pub status: Status,
}

impl From<Todo> for TodoJson {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().value(),
            title: todo.title().to_string(),
            status: todo.status(),
        }
    }
}

#[async_trait]
pub trait TodoController: Send + Sync {
    /// `GET /api/todos` → 200
    async fn get_all_todos(&self) -> Response;
    /// `GET /api/todos/{id}` → 200, 400 not found, 500
    async fn get_one_todo(&self, id: TodoId) -> Response;
    /// `POST /api/todos` → 201 with `Location`, 500
    async fn insert_todo(&self, payload: TodoPayload) -> Response;
    /// `DELETE /api/todos/{id}` → 204, 400 not found, 500
    async fn delete_todo(&self, id: TodoId) -> Response;
    /// `PATCH /api/todos/{id}` → 204, 400 not found, 500
    async fn change_todo_status(&self, id: TodoId, change: StatusChange) -> Response;
}

pub struct DefaultTodoController<S: TodoService> {
    service: S,
}

impl<S: TodoService> DefaultTodoController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

/// Location of a single todo resource.
pub fn todo_location(id: TodoId) -> String {
    format!("/api/todos/{}", id)
}

/// Domain errors become `400 {"message"}`; everything else is logged and
/// answered with an opaque `500 {"ok": false}`.
fn failure_response(action: &str, err: TodoServiceError) -> Response {
    match err {
        TodoServiceError::NotFound => {
            tracing::warn!("Error {}: {}", action, err);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response()
        }
        TodoServiceError::Database(_) => {
            tracing::error!("Error {}: {:?}", action, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::new()),
            )
                .into_response()
        }
    }
}

#[async_trait]
impl<S: TodoService> TodoController for DefaultTodoController<S> {
    #[tracing::instrument(skip(self))]
    async fn get_all_todos(&self) -> Response {
        match self.service.get_all_todos().await {
            Ok(todos) => {
                let json: Vec<TodoJson> = todos.into_iter().map(TodoJson::from).collect();
                (StatusCode::OK, Json(json)).into_response()
            }
            Err(err) => failure_response("retrieving todo data", err),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_one_todo(&self, id: TodoId) -> Response {
        match self.service.get_one_todo(id).await {
            Ok(todo) => (StatusCode::OK, Json(TodoJson::from(todo))).into_response(),
            Err(err) => failure_response("retrieving todo data", err),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn insert_todo(&self, payload: TodoPayload) -> Response {
        match self.service.insert_todo(payload).await {
            Ok(id) => (StatusCode::CREATED, [(header::LOCATION, todo_location(id))]).into_response(),
            Err(err) => failure_response("inserting todo data", err),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_todo(&self, id: TodoId) -> Response {
        match self.service.delete_todo(id).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(err) => failure_response("deleting todo data", err),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn change_todo_status(&self, id: TodoId, change: StatusChange) -> Response {
        match self.service.change_todo_status(id, change.status).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(err) => failure_response("changing todo status", err),
        }
    }
}
