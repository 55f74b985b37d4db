//! Translation of failures into HTTP responses.
//!
//! Every failure leaves the handler layer as a status code plus an
//! `{"message": ...}` body. Store errors keep their own message text.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::{ErrorBody, StoreError};
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as the expected JSON payload.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Validation | StoreError::EmptyTitle) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Store(err) => err.to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
        };
        debug!(%status, %message, "request rejected");
        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        assert_eq!(ApiError::from(StoreError::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(StoreError::Validation).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(StoreError::EmptyTitle).status(), StatusCode::BAD_REQUEST);
    }
}
