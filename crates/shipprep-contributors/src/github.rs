// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! GitHub REST API client for contributor data
//!
//! Two endpoints feed the reconciliation:
//! - `repos/{repo}/contributors` provides the all-time snapshot with
//!   aggregate commit counts. GitHub caches this endpoint, so it may lag
//!   reality by a few hours.
//! - `repos/{repo}/compare/{from}...{to}` provides the commits of a
//!   revision range, carrying both the author display name and the author
//!   login. This is what lets placeholders from the reconciler be resolved
//!   to platform accounts.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::contributor::{Contributor, ContributorSet, RevisionRange};
use crate::error::ContributorsError;

/// GitHub requires page sizes of at most 100
const PAGE_SIZE: usize = 100;

/// Immutable configuration for GitHub API access
///
/// Passed explicitly to the client; nothing here is read from ambient
/// global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    /// Base API URL, e.g. `https://api.github.com`
    pub api_url: String,
    /// Repository in `owner/name` form
    pub repository: String,
    /// Read-only auth token, if configured. Unauthenticated requests work
    /// but are rate-limited aggressively.
    pub auth_token: Option<String>,
}

impl GitHubConfig {
    /// Default public GitHub API URL
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a configuration for a repository on public GitHub
    #[must_use]
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            repository: repository.into(),
            auth_token: None,
        }
    }

    /// Override the base API URL (GitHub Enterprise, test servers)
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Attach a read-only auth token
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Contributor record from the `repos/{repo}/contributors` endpoint
#[derive(Debug, Deserialize)]
struct ContributorRecord {
    login: String,
    contributions: u32,
}

/// User profile from the `users/{login}` endpoint
#[derive(Debug, Deserialize)]
struct UserProfile {
    login: String,
    name: Option<String>,
}

/// Response of the `repos/{repo}/compare/{from}...{to}` endpoint
#[derive(Debug, Deserialize)]
struct Comparison {
    commits: Vec<ComparisonCommit>,
}

#[derive(Debug, Deserialize)]
struct ComparisonCommit {
    commit: CommitDetail,
    author: Option<AccountRef>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AccountRef {
    login: String,
}

/// Mapping from commit author display names to platform logins, built from
/// the commits of a revision range
#[derive(Debug, Clone, Default)]
pub struct AuthorIndex {
    by_name: HashMap<String, String>,
}

impl AuthorIndex {
    /// Look up the login recorded for a display name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Number of distinct display names in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Fill in logins for placeholder entries where the index knows the
    /// author. Resolved entries whose login collides with an existing
    /// identity are dropped in favor of the richer snapshot entry; names
    /// the index cannot resolve stay placeholders.
    #[must_use]
    pub fn resolve(&self, set: &ContributorSet) -> ContributorSet {
        let mut resolved = ContributorSet::new();

        for contributor in set.iter().filter(|c| !c.is_placeholder()) {
            resolved.insert(contributor.clone());
        }
        for placeholder in set.iter().filter(|c| c.is_placeholder()) {
            match self.lookup(&placeholder.name) {
                Some(login) => {
                    resolved.insert(Contributor::new(
                        placeholder.name.clone(),
                        Some(login),
                        placeholder.contributions,
                    ));
                }
                None => {
                    resolved.insert(placeholder.clone());
                }
            }
        }

        resolved
    }

    #[cfg(test)]
    fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            by_name: pairs
                .into_iter()
                .map(|(name, login)| (name.to_string(), login.to_string()))
                .collect(),
        }
    }
}

/// Client for the GitHub REST endpoints shipprep consumes
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Create a client for the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (TLS backend initialization failure).
    pub fn new(config: GitHubConfig) -> Result<Self, ContributorsError> {
        let client = Client::builder().user_agent("shipprep").build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ContributorsError> {
        debug!(%url, "GitHub API request");

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContributorsError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the all-time contributor snapshot for the configured repository.
    ///
    /// Pages through `repos/{repo}/contributors` and resolves each login to
    /// a display name via the user profile endpoint (falling back to the
    /// login when the profile carries no name). The snapshot may be hours
    /// stale; callers reconcile it against recent commit authors.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures or non-success API responses.
    pub async fn all_contributors(&self) -> Result<ContributorSet, ContributorsError> {
        let mut records = Vec::new();
        for page in 1.. {
            let url = format!(
                "{}/repos/{}/contributors?per_page={}&page={}",
                self.config.api_url, self.config.repository, PAGE_SIZE, page
            );
            let batch: Vec<ContributorRecord> = self.get_json(&url).await?;
            let short_page = batch.len() < PAGE_SIZE;
            records.extend(batch);
            if short_page {
                break;
            }
        }

        debug!(count = records.len(), "fetched contributor records");

        let mut snapshot = ContributorSet::new();
        for record in records {
            let url = format!("{}/users/{}", self.config.api_url, record.login);
            let profile: UserProfile = self.get_json(&url).await?;
            let name = profile.name.unwrap_or_else(|| profile.login.clone());
            snapshot.insert(Contributor::new(name, Some(&record.login), record.contributions));
        }
        Ok(snapshot)
    }

    /// Build an author-name-to-login index from the commits of a revision
    /// range, using the compare endpoint.
    ///
    /// Commits whose author has no associated platform account (for
    /// example, an email GitHub cannot map to a user) are logged and
    /// skipped; they simply contribute nothing to the index.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures or non-success API responses.
    pub async fn commit_author_index(
        &self,
        range: &RevisionRange,
    ) -> Result<AuthorIndex, ContributorsError> {
        let url = format!(
            "{}/repos/{}/compare/{}...{}",
            self.config.api_url, self.config.repository, range.from, range.to
        );
        let comparison: Comparison = self.get_json(&url).await?;

        let mut by_name = HashMap::new();
        for commit in comparison.commits {
            let Some(author) = commit.commit.author else {
                continue;
            };
            match commit.author {
                Some(account) => {
                    by_name.entry(author.name).or_insert(account.login);
                }
                None => {
                    warn!(author = %author.name, "commit author has no platform account");
                }
            }
        }

        debug!(range = %range, authors = by_name.len(), "built author index");
        Ok(AuthorIndex { by_name })
    }
}
