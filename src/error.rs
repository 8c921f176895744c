//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("bad request body: {message}")]
    BadBody { status: StatusCode, message: String },
    #[error("delete failed: {0}")]
    DeleteFailed(sqlx::Error),
    #[error("create failed: {0}")]
    CreateFailed(sqlx::Error),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn restaurant_not_found() -> Self {
        AppError::NotFound("Restaurant not found".into())
    }
}

/// Single-message error body: `{"error": "..."}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Accumulated error body: `{"errors": ["...", ...]}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            AppError::BadBody { status, message } => {
                (status, Json(ErrorsBody { errors: vec![message] })).into_response()
            }
            AppError::DeleteFailed(e) => {
                tracing::error!(error = %e, "restaurant delete rolled back");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "An error occurred while deleting the restaurant".into(),
                    }),
                )
                    .into_response()
            }
            AppError::CreateFailed(e) => {
                tracing::error!(error = %e, "restaurant pizza insert rolled back");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorsBody {
                        errors: vec![e.to_string()],
                    }),
                )
                    .into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "database error".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
