//! Mapping from failures to HTTP error responses.
//!
//! `error_response` is a pure function from an error to status, payload and
//! headers. The `IntoResponse` impl adds logging on top of it.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header::RETRY_AFTER},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use savings_core::AccountError;
use savings_shared::ValidationError;
use savings_shared::types::display_dollars;

/// Retry hint sent with 503 responses.
pub const RETRY_AFTER_HINT: &str = "5000";

/// Error payload: `{"messages": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorModel {
    messages: Vec<String>,
}

impl ErrorModel {
    /// Creates a payload carrying several messages.
    #[must_use]
    pub const fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Creates a payload carrying one message.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// The messages, in order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path or body value failed its precondition.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body is not valid JSON for the endpoint.
    #[error("{0}")]
    MalformedBody(String),

    /// The request body is not declared as JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// The account operation failed.
    #[error(transparent)]
    Account(#[from] AccountError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(r) => Self::UnsupportedMediaType(r.body_text()),
            other => Self::MalformedBody(other.body_text()),
        }
    }
}

/// Status, payload and headers for an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response body.
    pub body: ErrorModel,
    /// Value of the `Retry-After` header, if any.
    pub retry_after: Option<&'static str>,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorModel::single(message),
            retry_after: None,
        }
    }
}

/// Maps an error to its HTTP representation.
#[must_use]
pub fn error_response(err: &ApiError) -> ErrorResponse {
    match err {
        ApiError::Validation(e) => ErrorResponse::new(StatusCode::BAD_REQUEST, e.to_string()),
        ApiError::MalformedBody(msg) => ErrorResponse::new(StatusCode::BAD_REQUEST, msg.clone()),
        ApiError::UnsupportedMediaType(msg) => {
            ErrorResponse::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.clone())
        }
        ApiError::Account(e) => account_error_response(e),
    }
}

fn account_error_response(err: &AccountError) -> ErrorResponse {
    match err {
        AccountError::Validation(_) | AccountError::BalanceLimitExceeded { .. } => {
            ErrorResponse::new(StatusCode::BAD_REQUEST, err.to_string())
        }
        AccountError::NotFound(_) => ErrorResponse::new(StatusCode::NOT_FOUND, err.to_string()),
        AccountError::InsufficientFunds {
            account_number,
            balance,
            withdrawal,
        } => ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            format!(
                "The bank account {account_number} has a balance of ${}. Therefore you cannot withdraw ${} since you're short ${}",
                display_dollars(balance),
                display_dollars(withdrawal),
                display_dollars(&(*withdrawal - *balance)),
            ),
        ),
        AccountError::OperationFailed { .. } if err.is_transient() => ErrorResponse {
            retry_after: Some(RETRY_AFTER_HINT),
            ..ErrorResponse::new(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        },
        AccountError::OperationFailed { .. } => {
            ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn log_error(err: &ApiError, response: &ErrorResponse) {
    let ApiError::Account(account_err) = err else {
        return;
    };
    match account_err {
        AccountError::InsufficientFunds { account_number, .. } => {
            warn!(
                account_number = %account_number,
                code = account_err.error_code(),
                detail = ?response.body.messages(),
                "Insufficient funds"
            );
        }
        AccountError::BalanceLimitExceeded {
            account_number,
            balance,
            deposit,
        } => {
            warn!(
                account_number = %account_number,
                code = account_err.error_code(),
                balance = %balance,
                deposit = %deposit,
                "Deposit rejected at balance limit"
            );
        }
        AccountError::OperationFailed {
            account_number,
            source,
        } if response.retry_after.is_some() => {
            warn!(
                account_number = %account_number,
                code = account_err.error_code(),
                error = %source,
                "Failure while processing operation on savings account"
            );
        }
        AccountError::OperationFailed {
            account_number,
            source,
        } => {
            error!(
                account_number = %account_number,
                code = account_err.error_code(),
                error = %source,
                "Failure while processing operation on savings account"
            );
        }
        AccountError::Validation(_) | AccountError::NotFound(_) => {}
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mapped = error_response(&self);
        log_error(&self, &mapped);

        let mut response = (mapped.status, Json(mapped.body)).into_response();
        if let Some(hint) = mapped.retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from_static(hint));
        }
        response
    }
}
