// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PrintDesk Server — HTTP/JSON API over the profile store from
// `printdesk-core`, plus the greeting/login stubs and the two HTML pages.

pub mod body;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

#[cfg(test)]
mod test_support;

pub use error::ApiError;
pub use server::{Server, router};
