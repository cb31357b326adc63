use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::shared::validation::{ValidationError, ValidationErrors};

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error payload for anything other than validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

/// 422 payload listing field-level validation failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<ValidationError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred")
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorBody { errors: errors.0 }),
            )
                .into_response(),
            AppError::NotFound(ref msg) => error_response(StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(ref msg) => error_response(StatusCode::BAD_REQUEST, msg),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.to_string(),
        }),
    )
        .into_response()
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_errors_map_to_opaque_500() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Database error occurred");
    }

    #[tokio::test]
    async fn validation_errors_map_to_422_with_field_details() {
        let errors = ValidationErrors(vec![ValidationError {
            message: "Value for regionId does not exist".to_string(),
            rule: "exists".to_string(),
            field: "regionId".to_string(),
        }]);
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "regionId");
        assert_eq!(body["errors"][0]["rule"], "exists");
        assert_eq!(body["errors"][0]["message"], "Value for regionId does not exist");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
