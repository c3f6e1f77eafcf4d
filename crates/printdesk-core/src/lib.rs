// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintDesk — Core types, the in-memory profile store, and error definitions
// shared across all crates.

pub mod config;
pub mod error;
pub mod presets;
pub mod store;
pub mod types;

pub use config::ServerConfig;
pub use error::PrintdeskError;
pub use store::ProfileStore;
pub use types::*;
