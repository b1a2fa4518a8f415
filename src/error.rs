use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repository::RepositoryError;

/// Outcome of a handler that reached the store. Not-found and empty results
/// are outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T> {
    Ok(T),
    Created(T),
    NoContent,
    NotFound,
}

impl<T> OperationResult<T> {
    #[cfg(test)]
    pub fn data(&self) -> Option<&T> {
        match self {
            OperationResult::Ok(data) | OperationResult::Created(data) => Some(data),
            OperationResult::NoContent | OperationResult::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, OperationResult::NotFound)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: request={request}")]
    AlreadyRegistered { request: &'static str },

    #[error("type mismatch: expected={expected}")]
    TypeMismatch { expected: &'static str },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            err => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor.".to_string(),
                )
            }
        };

        (status, Json(json!({ "mensagem": message }))).into_response()
    }
}
