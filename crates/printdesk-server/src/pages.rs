// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static HTML pages, compiled into the binary.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

const WELCOME_PAGE: &str = include_str!("../templates/welcome.html");
const PRINTER_PAGE: &str = include_str!("../templates/printer.html");

pub fn routes() -> Router {
    Router::new()
        .route("/welcome", get(welcome))
        .route("/printer", get(printer))
}

async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

/// Browser UI for the printer profile API.
async fn printer() -> Html<&'static str> {
    Html(PRINTER_PAGE)
}
