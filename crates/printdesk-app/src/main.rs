// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintDesk — printer profile configuration server
//
// Entry point. Loads configuration, initialises logging, and runs the HTTP
// server until Ctrl-C / SIGTERM.

use std::process::ExitCode;

use printdesk_core::ServerConfig;
use printdesk_server::Server;

#[tokio::main]
async fn main() -> ExitCode {
    // Logging depends on the config (debug mode), so config errors are
    // reported before the subscriber exists.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("printdesk: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.effective_log_filter())),
        )
        .init();

    tracing::info!(
        bind = %config.bind_addr,
        debug = config.debug,
        "PrintDesk starting"
    );

    match Server::new(config).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
