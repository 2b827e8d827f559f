// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Configuration for the shipprep CLI
//!
//! This module provides the command-line surface: one subcommand per
//! release-preparation step, plus the logging flags shared by all of them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shipprep_contributors::GitHubConfig;

/// Shipprep - release preparation for CI builds
#[derive(Parser, Debug, Clone)]
#[command(name = "shipprep")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to the local git working copy
    ///
    /// Defaults to the current working directory; the repository may live
    /// in a parent directory (discovery walks upward).
    #[arg(short, long, env = "SHIPPREP_REPO_PATH", default_value = ".")]
    pub repo_path: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so that command output stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch and reconcile contributor data, writing it to a file
    ///
    /// Collects the authors of the commits in the given revision range from
    /// the local repository, fetches the all-time contributor snapshot from
    /// GitHub (which may be hours stale), merges the two, and resolves
    /// missing platform accounts from the commits of the range.
    Contributors {
        /// GitHub repository in owner/name form
        #[arg(long)]
        repository: String,

        /// Lower bound of the revision range (exclusive), e.g. the previous
        /// release tag
        #[arg(long)]
        from: String,

        /// Upper bound of the revision range (inclusive)
        #[arg(long, default_value = "HEAD")]
        to: String,

        /// File the serialized contributor data is written to
        #[arg(short, long)]
        output: PathBuf,

        /// Base GitHub API URL (override for GitHub Enterprise)
        #[arg(long, default_value = GitHubConfig::DEFAULT_API_URL)]
        api_url: String,

        /// Read-only GitHub auth token
        #[arg(long, env = "GITHUB_TOKEN")]
        auth_token: Option<String>,

        /// Match author names case-insensitively when reconciling
        #[arg(long, default_value = "false")]
        ignore_case: bool,
    },

    /// Prepare the working copy for releasing from CI
    ///
    /// Runs unshallow, checks out the release branch, and sets the generic
    /// committer identity, in that order.
    Prepare {
        /// Branch to check out for release commits
        #[arg(long)]
        branch: String,

        /// Generic user.name for commits made from CI
        #[arg(long, default_value = "shipprep")]
        user: String,

        /// Generic user.email for commits made from CI
        #[arg(long, default_value = "shipprep@users.noreply.github.com")]
        email: String,
    },

    /// Fetch full history for a shallow CI clone (failure is tolerated)
    Unshallow,

    /// Check out a branch that can be committed to
    Checkout {
        /// Branch name
        #[arg(long)]
        branch: String,
    },

    /// Overwrite the local git identity with a generic one
    SetIdentity {
        /// Value for user.name
        #[arg(long)]
        user: String,

        /// Value for user.email
        #[arg(long)]
        email: String,
    },
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repo path doesn't exist or is not a directory
    /// - A repository argument is not in owner/name form
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.repo_path.exists() {
            return Err(ConfigError::RepoPathNotFound(self.repo_path.clone()));
        }
        if !self.repo_path.is_dir() {
            return Err(ConfigError::RepoPathNotDirectory(self.repo_path.clone()));
        }

        if let Command::Contributors { repository, .. } = &self.command {
            let mut parts = repository.split('/');
            let valid = matches!(
                (parts.next(), parts.next(), parts.next()),
                (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
            );
            if !valid {
                return Err(ConfigError::InvalidRepository(repository.clone()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repo path not found
    #[error("Repo path not found: {0}")]
    RepoPathNotFound(PathBuf),

    /// Repo path is not a directory
    #[error("Repo path is not a directory: {0}")]
    RepoPathNotDirectory(PathBuf),

    /// Repository argument is not in owner/name form
    #[error("Invalid repository (expected owner/name): {0}")]
    InvalidRepository(String),
}
