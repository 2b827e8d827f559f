// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Release-preparation tasks
//!
//! This module ties the library crates together: the contributors task
//! collects recent authors locally, fetches the all-time snapshot from
//! GitHub, reconciles the two, resolves missing platform accounts, and
//! serializes the result; the setup tasks drive the git working-copy
//! commands.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use shipprep_contributors::{
    GitHubClient, GitHubConfig, MatchPolicy, RevisionRange, reconcile, serializer,
};
use shipprep_git::{GitIdentity, GitRepo, GitSetup};

/// Statistics from a contributors run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributorsStats {
    /// Distinct author names observed in the revision range
    pub recent_authors: usize,
    /// Size of the all-time snapshot fetched from GitHub
    pub snapshot_size: usize,
    /// Contributors in the serialized result
    pub total: usize,
    /// Result entries still lacking a platform account
    pub unresolved: usize,
}

/// Fetch, reconcile, and persist contributor data for a revision range.
///
/// The all-time snapshot endpoint is cached by GitHub and may be hours
/// stale, so the authors of the commits in `range` (read from the local
/// repository) are merged in; authors missing from the snapshot get their
/// platform account resolved from the commits of the range itself.
///
/// # Errors
///
/// Returns an error if the local repository or revision range cannot be
/// read, a GitHub request fails, or the output file cannot be written.
pub async fn fetch_contributors(
    repo_path: &Path,
    github: GitHubConfig,
    range: &RevisionRange,
    policy: MatchPolicy,
    output: &Path,
) -> anyhow::Result<ContributorsStats> {
    info!(repository = %github.repository, range = %range, "fetching contributors");

    let repo = GitRepo::discover(repo_path)
        .with_context(|| format!("opening repository at {}", repo_path.display()))?;
    let recent_authors = repo
        .authors_in_range(range)
        .with_context(|| format!("collecting commit authors for {range}"))?;
    debug!(count = recent_authors.len(), "recent commit authors");

    let client = GitHubClient::new(github).context("building GitHub client")?;
    let snapshot = client
        .all_contributors()
        .await
        .context("fetching all-time contributor snapshot")?;

    let merged = reconcile(
        recent_authors.iter().map(String::as_str),
        &snapshot,
        policy,
    );

    let index = client
        .commit_author_index(range)
        .await
        .context("building author index from revision range")?;
    let resolved = index.resolve(&merged);

    serializer::write_json(&resolved, output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("Serialized all contributors into: {}", output.display());

    Ok(ContributorsStats {
        recent_authors: recent_authors.len(),
        snapshot_size: snapshot.len(),
        total: resolved.len(),
        unresolved: resolved.iter().filter(|c| c.is_placeholder()).count(),
    })
}

/// Run the full working-copy preparation: unshallow, checkout, identity.
///
/// # Errors
///
/// Returns an error if the checkout or identity step fails; an unshallow
/// failure is tolerated.
pub fn prepare_working_copy(
    repo_path: &Path,
    branch: &str,
    identity: &GitIdentity,
) -> anyhow::Result<()> {
    GitSetup::new(repo_path)
        .prepare(branch, identity)
        .context("preparing working copy for CI release")?;
    Ok(())
}
