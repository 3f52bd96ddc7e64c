use crate::libs::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps domain errors onto HTTP responses: `NotFound` becomes 404, anything
/// else 500 with the cause logged server-side.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            Error::NotFound { .. } => self.0.to_string(),
            Error::Database(_) | Error::Blocking(_) => {
                error!(error = %self.0, "request failed");
                "internal error".to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
