use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let kind = err.kind();
        match err {
            ApplicationError::InvalidRequest(msg) => Self::new(StatusCode::BAD_REQUEST, kind, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, kind, msg),
            ApplicationError::AmbiguousSlug(msg) => Self::new(StatusCode::CONFLICT, kind, msg),
            ApplicationError::StoreUnavailable(msg) => {
                // Store details go to the log, not the client.
                tracing::error!(error = %msg, "content store unavailable");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    kind,
                    "content store unavailable".into(),
                )
            }
        }
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self.kind.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// One of `InvalidRequest`, `NotFound`, `AmbiguousSlug`,
    /// `StoreUnavailable`.
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
