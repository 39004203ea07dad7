use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use queries::StoreError;
use thiserror::Error;

use crate::cache::CacheError;
use crate::producer::ProducerError;
use crate::responses::ApiResponse;

/// Failures caused by the caller. The message is sent back to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A business rule was violated, e.g. a duplicate username.
    #[error("{0}")]
    Invariant(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Authorization(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
}

impl ClientError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClientError::Invariant(_) | ClientError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ClientError::NotFound(_) => StatusCode::NOT_FOUND,
            ClientError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ClientError::Authorization(_) => StatusCode::FORBIDDEN,
            ClientError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("store: {0}")]
    Store(#[from] StoreError),
    #[error("cache: {0}")]
    Cache(#[from] CacheError),
    #[error("message queue: {0}")]
    Producer(#[from] ProducerError),
    #[error("password hashing: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
    #[error("token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
    #[error("blocking task: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            ApiError::Client(err) => Some(err),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Client(err) => {
                (err.status_code(), Json(ApiResponse::fail(err.to_string()))).into_response()
            }
            err => {
                error!("Unhandled error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error(
                        "Sorry, something went wrong on our side".to_string(),
                    )),
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        ApiError::Client(self).into_response()
    }
}
