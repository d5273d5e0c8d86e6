use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::StoreError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { .. } => Self::not_found(message),
            StoreError::Conflict { .. } => Self::conflict(message),
            StoreError::InvalidReference { .. } => Self::bad_request(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::EntityKind;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(StoreError::not_found(EntityKind::Agent, "agent_9"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Agent with ID agent_9 not found");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::from(StoreError::conflict(EntityKind::Workflow, "wf"));
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_reference_maps_to_400() {
        let err = ApiError::from(StoreError::InvalidReference {
            agent_id: "ghost".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Agent with ID ghost does not exist");
    }

    #[test]
    fn response_carries_status() {
        let response = ApiError::conflict("taken").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
