//! 标准化错误处理
//!
//! 定义路由错误类型及其到 HTTP 响应的映射

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main router error type
#[derive(Error, Debug)]
pub enum RouterError {
    /// External service failed or returned a non-success status
    #[error("{0}")]
    Upstream(String),

    /// External service answered with a body we could not interpret
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for RouterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RouterError::MalformedResponse(err.to_string())
        } else {
            RouterError::Upstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::MalformedResponse(err.to_string())
    }
}

impl From<url::ParseError> for RouterError {
    fn from(err: url::ParseError) -> Self {
        RouterError::Config(err.to_string())
    }
}

/// Error payload returned to HTTP callers
#[derive(Serialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for RouterError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Router result type alias
pub type Result<T> = std::result::Result<T, RouterError>;
