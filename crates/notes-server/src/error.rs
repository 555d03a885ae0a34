use axum::http::StatusCode;
use axum::response::{IntoResponse, Response, Json};
use notes_store::StoreError;
use thiserror::Error;

use crate::payload::ErrorBody;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Validation(_) | StoreError::InvalidId(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Internal(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Server-side faults are not described.
    pub fn public_message(&self) -> String {
        if self.status().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
