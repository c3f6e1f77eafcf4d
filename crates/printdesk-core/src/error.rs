// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PrintDesk.

use thiserror::Error;

/// Top-level error type for all PrintDesk operations.
///
/// The `Display` text of the request-level variants is the exact message
/// returned to API clients, so keep it short and user-facing.
#[derive(Debug, Error)]
pub enum PrintdeskError {
    // -- Request errors --
    /// Body absent, not JSON, not an object, or carrying mistyped fields.
    #[error("{0}")]
    MalformedRequest(String),

    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The referenced profile id is not in the store.
    #[error("{0}")]
    NotFound(String),

    /// Attempted removal of a record that must always exist.
    #[error("{0}")]
    ProtectedRecord(String),

    // -- Startup / configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PrintdeskError {
    /// HTTP status code this error maps to at the API boundary.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MalformedRequest(_) | Self::Validation(_) | Self::ProtectedRecord(_) => 400,
            Self::NotFound(_) => 404,
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => 500,
        }
    }

    /// Whether the error was caused by the client rather than the server.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintdeskError>;
