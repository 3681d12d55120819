//! Todo domain: the entity model, the payloads accepted at the boundary and
//! the layers (repository, service, controller, routes) that process them.

use crate::entities::todo;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

pub mod api;
pub mod controller;
pub mod repository;
pub mod service;
pub mod validation;

pub use crate::entities::sea_orm_active_enums::Status;
pub use validation::{ValidatedJson, ValidationError};

/// Store-assigned identifier of a todo. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(i32);

impl TodoId {
    /// Wraps an id handed out by the store.
    pub(crate) fn assigned(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TodoId {
    type Error = ValidationError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        if id >= 1 {
            Ok(Self(id))
        } else {
            Err(ValidationError::InvalidId(id.to_string()))
        }
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = raw
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidId(raw.to_string()))?;
        Self::try_from(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Todo {
    id: TodoId,
    title: String,
    status: Status,
}

impl Todo {
    pub fn new(id: TodoId, title: String, status: Status) -> Self {
        Self { id, title, status }
    }

    /// Returns the ID of the todo.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Todo::new(TodoId::assigned(model.id), model.title, model.status)
    }
}

/// Body of `POST /api/todos`: a todo without its id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TodoPayload {
    /// Short description of the task, 1 to 100 characters
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters long"))]
    #[schema(min_length = 1, max_length = 100)]
    pub title: String,
    /// Initial status; never defaulted
    pub status: Status,
}

impl TodoPayload {
    pub fn new(title: impl Into<String>, status: Status) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }
}

/// Body of `PATCH /api/todos/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct StatusChange {
    /// Status replacing the current one
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_positive_id() {
        let id: TodoId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn rejects_zero_negative_and_non_numeric_ids() {
        for raw in ["0", "-1", "abc", "1.5", "", "99999999999"] {
            let result = raw.parse::<TodoId>();
            assert!(
                matches!(result, Err(ValidationError::InvalidId(_))),
                "'{raw}' should be rejected"
            );
        }
    }

    #[test]
    fn can_convert_model_into_todo() {
        let model = todo::Model {
            id: 7,
            title: "Water plants".to_string(),
            status: Status::InProgress,
        };

        let todo = Todo::from(model);

        assert_eq!(todo.id().value(), 7);
        assert_eq!(todo.title(), "Water plants");
        assert_eq!(todo.status(), Status::InProgress);
    }

    mod payload_tests {
        use super::*;

        #[test]
        fn can_deserialize_payload() {
            let payload: TodoPayload =
                serde_json::from_str(r#"{"title":"Buy milk","status":"NOT_STARTED"}"#).unwrap();
            assert_eq!(payload, TodoPayload::new("Buy milk", Status::NotStarted));
            assert!(payload.validate().is_ok());
        }

        #[test]
        fn rejects_unknown_fields() {
            let result: Result<TodoPayload, _> = serde_json::from_str(
                r#"{"title":"Buy milk","status":"NOT_STARTED","priority":1}"#,
            );
            assert!(result.is_err());
        }

        #[test]
        fn rejects_unknown_status() {
            let result: Result<TodoPayload, _> =
                serde_json::from_str(r#"{"title":"Buy milk","status":"DONE"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn rejects_missing_status() {
            let result: Result<TodoPayload, _> = serde_json::from_str(r#"{"title":"Buy milk"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn validates_title_length_bounds() {
            assert!(TodoPayload::new("", Status::NotStarted).validate().is_err());
            assert!(TodoPayload::new("a", Status::NotStarted).validate().is_ok());
            assert!(TodoPayload::new("a".repeat(100), Status::NotStarted)
                .validate()
                .is_ok());
            assert!(TodoPayload::new("a".repeat(101), Status::NotStarted)
                .validate()
                .is_err());
        }

        #[test]
        fn counts_title_length_in_characters() {
            // 100 multi-byte characters
            let title = "é".repeat(100);
            assert!(TodoPayload::new(title, Status::Completed).validate().is_ok());
        }

        #[test]
        fn status_change_accepts_only_status() {
            let change: StatusChange = serde_json::from_str(r#"{"status":"COMPLETED"}"#).unwrap();
            assert_eq!(change.status, Status::Completed);

            let result: Result<StatusChange, _> =
                serde_json::from_str(r#"{"status":"COMPLETED","title":"x"}"#);
            assert!(result.is_err());
        }
    }
}
