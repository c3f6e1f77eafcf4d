// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP server: router assembly and the listen / graceful-shutdown loop.
//
// The profile store is created once per server and handed to the printer
// routes as axum state; there is no global state.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Response;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use printdesk_core::error::Result;
use printdesk_core::{ProfileStore, ServerConfig};

use crate::error::{error_response, method_not_allowed};
use crate::handlers::{general, printer};
use crate::pages;

/// Build the full application router around `store`.
pub fn router(store: Arc<ProfileStore>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .merge(general::routes())
        .merge(pages::routes())
        .merge(printer::routes(store))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

/// The PrintDesk HTTP server.
pub struct Server {
    config: ServerConfig,
    store: Arc<ProfileStore>,
}

impl Server {
    /// Create a server with a fresh store holding only the default profile.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(ProfileStore::new()))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<ProfileStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared handle to the profile store.
    pub fn store(&self) -> Arc<ProfileStore> {
        Arc::clone(&self.store)
    }

    pub fn router(&self) -> Router {
        router(self.store(), &self.config)
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server loop
    /// fails.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    /// In-flight requests are allowed to finish.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(%addr, cors = self.config.cors, "PrintDesk server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(%addr, "PrintDesk server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C or (on unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
