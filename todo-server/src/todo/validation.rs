//! Structural validation applied before a request reaches the controller.
//!
//! Rejections here are client faults: they render as `400 {"message": ...}`
//! and are never reported as server errors.

use super::TodoId;
use crate::web::api::ErrorResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Error raised when a request does not match the shape an operation expects.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The `:id` path segment is not an integer greater than or equal to 1.
    #[error("params/id must be an integer greater than or equal to 1, got '{0}'")]
    InvalidId(String),
    /// The `:id` path segment could not be extracted at all.
    #[error("params/id is invalid: {}", .0.body_text())]
    Path(#[from] PathRejection),
    /// The body is not JSON of the expected shape.
    #[error("body is invalid: {}", .0.body_text())]
    Body(#[from] JsonRejection),
    /// The body deserialized but broke a field constraint.
    #[error("{0}")]
    Constraint(String),
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("body/{field} {message}"),
                    None => format!("body/{field} failed '{}' check", error.code),
                })
            })
            .collect();
        messages.sort();
        ValidationError::Constraint(messages.join(", "))
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(self.to_string())),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        raw.parse()
    }
}

/// JSON body extractor that also enforces the payload's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
