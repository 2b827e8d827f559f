// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! CI working-copy setup commands
//!
//! CI servers typically produce a shallow clone checked out at a detached
//! revision. Before a release can be committed from CI the working copy
//! needs enough history for release notes, a real branch to commit to, and
//! a generic committer identity. Each step is a plain `git` child process.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::GitError;

/// Generic committer identity used for commits made from CI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitIdentity {
    /// Value for `user.name`
    pub user: String,
    /// Value for `user.email`
    pub email: String,
}

impl GitIdentity {
    /// Create an identity from a user name and email
    #[must_use]
    pub fn new(user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            email: email.into(),
        }
    }
}

/// Runs the git commands that prepare a CI working copy for releasing
pub struct GitSetup {
    workdir: PathBuf,
}

impl GitSetup {
    /// Create a setup runner operating in the given working directory
    #[must_use]
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Fetch the full history of a shallow clone via `git fetch --unshallow`.
    ///
    /// CI clones are typically shallow, which would truncate release notes.
    /// A non-zero exit is tolerated and logged: it most often means the
    /// repository already contains the full history.
    ///
    /// # Errors
    ///
    /// Returns an error only if the git process cannot be started.
    pub fn unshallow(&self) -> Result<(), GitError> {
        let output = self.run_git(&["fetch", "--unshallow"])?;
        if !output.status.success() {
            info!(
                "'git fetch --unshallow' failed and will be ignored. \
                 Most likely the repository already contains all history."
            );
        }
        Ok(())
    }

    /// Check out a branch via `git checkout <branch>`.
    ///
    /// CI servers check out the revision hash of the triggering commit,
    /// detaching from HEAD; commits made there would be lost. Release
    /// commits need a real branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or the checkout
    /// exits with a non-zero status.
    pub fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run_git_checked(&["checkout", branch])
    }

    /// Overwrite the local `user.name` with a generic name.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or exits with a
    /// non-zero status.
    pub fn set_user_name(&self, user: &str) -> Result<(), GitError> {
        self.run_git_checked(&["config", "--local", "user.name", user])
    }

    /// Overwrite the local `user.email` with a generic email.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started or exits with a
    /// non-zero status.
    pub fn set_user_email(&self, email: &str) -> Result<(), GitError> {
        self.run_git_checked(&["config", "--local", "user.email", email])
    }

    /// Set both halves of the committer identity.
    ///
    /// # Errors
    ///
    /// Returns an error if either config command fails.
    pub fn set_identity(&self, identity: &GitIdentity) -> Result<(), GitError> {
        self.set_user_name(&identity.user)?;
        self.set_user_email(&identity.email)
    }

    /// Full working-copy preparation for releasing from CI: unshallow,
    /// check out the release branch, set the generic identity.
    ///
    /// # Errors
    ///
    /// Returns an error if any non-tolerated step fails.
    pub fn prepare(&self, branch: &str, identity: &GitIdentity) -> Result<(), GitError> {
        info!(branch, user = %identity.user, "preparing working copy for CI release");
        self.unshallow()?;
        self.checkout(branch)?;
        self.set_identity(identity)
    }

    fn run_git(&self, args: &[&str]) -> Result<std::process::Output, GitError> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, workdir = %self.workdir.display(), "running git");

        Command::new("git")
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn { command, source })
    }

    fn run_git_checked(&self, args: &[&str]) -> Result<(), GitError> {
        let output = self.run_git(args)?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
