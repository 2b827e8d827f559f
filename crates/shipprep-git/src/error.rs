// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Error types for shipprep-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// The git child process could not be started
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// The command line that failed to start
        command: String,
        /// The underlying spawn error
        source: std::io::Error,
    },

    /// A git command exited with a non-zero status
    #[error("'{command}' failed: {stderr}")]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Captured stderr of the failed command
        stderr: String,
    },
}
