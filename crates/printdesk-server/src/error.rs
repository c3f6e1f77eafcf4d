// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion of core errors into the uniform JSON error envelope.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error};

use printdesk_core::PrintdeskError;

use crate::body::NO_DATA_MESSAGE;

/// `status` value of every successful response body.
pub const STATUS_SUCCESS: &str = "success";

/// `status` value of every error response body.
pub const STATUS_ERROR: &str = "error";

/// Body of every error response: `{"status":"error","message":...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}

/// Build an error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Message for a body rejected by the request-size limit.
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Message for a known path requested with an unsupported method.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Error returned from handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A store or request-validation failure.
    Domain(PrintdeskError),
    /// The request body could not be read (too large, or the connection
    /// failed mid-body).
    Body(BytesRejection),
}

impl From<PrintdeskError> for ApiError {
    fn from(err: PrintdeskError) -> Self {
        Self::Domain(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(err) => domain_response(err),
            Self::Body(rejection) => body_rejection_response(&rejection),
        }
    }
}

fn domain_response(err: PrintdeskError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_client_error() {
        debug!(status = status.as_u16(), error = %err, "request rejected");
        error_response(status, err.to_string())
    } else {
        // Internal details stay in the log.
        error!(error = %err, "request failed");
        error_response(status, "Internal server error")
    }
}

/// Envelope for a body the `Bytes` extractor refused to buffer.
pub fn body_rejection_response(rejection: &BytesRejection) -> Response {
    let status = rejection.status();
    debug!(status = status.as_u16(), detail = %rejection.body_text(), "request body rejected");
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        error_response(status, BODY_TOO_LARGE_MESSAGE)
    } else {
        error_response(status, NO_DATA_MESSAGE)
    }
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}
