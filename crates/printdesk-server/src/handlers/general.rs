// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greeting, API description, and login-stub endpoints.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::body::{NO_DATA_MESSAGE, parse_object};
use crate::error::{STATUS_SUCCESS, body_rejection_response, error_response};

pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/hello", get(hello))
        .route("/login", post(login))
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Hello World!",
        "status": STATUS_SUCCESS,
    }))
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "api": "Hello World API",
        "version": "1.0",
        "endpoints": {
            "/": "API information",
            "/hello": "Returns hello world message",
            "/login": "Login with username and password (POST)",
            "/welcome": "Welcome page (HTML)",
            "/printer": "Printer configuration page (HTML)",
            "/printer/profiles": "List (GET) or create (POST) printer profiles",
            "/printer/profiles/<id>": "Update (PUT) or delete (DELETE) a printer profile",
            "/printer/presets": "Built-in job presets",
            "/printer/preview": "Generate a print preview (POST)",
        },
    }))
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    status: &'static str,
    message: &'static str,
    username: String,
}

/// Accepts any non-empty username/password pair. There is no credential
/// store behind this endpoint.
///
/// A credential that is present but not a JSON string counts as missing.
async fn login(body: Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejection_response(&rejection),
    };
    let request = match parse_object(&body) {
        Ok(request) => request,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, NO_DATA_MESSAGE),
    };

    let credential = |key: &str| {
        request
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    };
    let (Some(username), Some(_)) = (credential("username"), credential("password")) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        );
    };

    info!(%username, "login accepted");
    Json(LoginResponse {
        status: STATUS_SUCCESS,
        message: "Login successful",
        username: username.to_string(),
    })
    .into_response()
}
