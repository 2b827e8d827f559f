// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Commit author collection over a revision range
//!
//! This module walks local history with the `git2` crate and returns the
//! distinct author display names of the commits in a range. The names feed
//! contributor reconciliation, which cross-checks them against the
//! possibly-stale all-time snapshot fetched from GitHub.

use std::collections::BTreeSet;
use std::path::Path;

use git2::{Oid, Repository, Sort};
use shipprep_contributors::RevisionRange;
use tracing::debug;

use crate::error::GitError;

/// A git repository wrapper for reading commit history
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Resolve a revision string (branch, tag, or SHA) to an object id
    fn resolve(&self, reference: &str) -> Result<Oid, GitError> {
        self.repo
            .revparse_single(reference)
            .map(|obj| obj.id())
            .map_err(|_| GitError::InvalidReference {
                reference: reference.to_string(),
            })
    }

    /// Collect the distinct author display names of the commits in
    /// `range.from..range.to` (commits reachable from `to` but not from
    /// `from`; `from` itself is excluded, the git range default).
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if either bound cannot be
    /// resolved, or a `git2` error if the walk fails.
    pub fn authors_in_range(&self, range: &RevisionRange) -> Result<BTreeSet<String>, GitError> {
        let from = self.resolve(&range.from)?;
        let to = self.resolve(&range.to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push(to)?;
        revwalk.hide(from)?;

        let mut authors = BTreeSet::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let name = commit.author().name().unwrap_or("Unknown").to_string();
            authors.insert(name);
        }

        debug!(range = %range, authors = authors.len(), "collected commit authors");
        Ok(authors)
    }
}
