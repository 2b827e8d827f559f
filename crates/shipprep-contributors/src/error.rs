// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Error types for shipprep-contributors

use thiserror::Error;

/// Errors that can occur while fetching or persisting contributor data
#[derive(Debug, Error)]
pub enum ContributorsError {
    /// HTTP transport or body-decoding failure from reqwest
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-success status code
    #[error("GitHub API returned {status} for {url}")]
    Status {
        /// The request URL
        url: String,
        /// The HTTP status code returned
        status: reqwest::StatusCode,
    },

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure writing serialized contributor data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
