// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! shipprep-contributors: contributor fetching and reconciliation for shipprep
//!
//! This library crate fetches project contributor data from the GitHub REST
//! API and reconciles it with the authors observed in recent commits, so that
//! release notes never silently omit the newest contributors.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use shipprep_contributors::{Contributor, ContributorSet, MatchPolicy, reconcile};
//!
//! let mut snapshot = ContributorSet::new();
//! snapshot.insert(Contributor::new("Alice", Some("alice123"), 10));
//!
//! let merged = reconcile(["Alice", "Bob"], &snapshot, MatchPolicy::Exact);
//! assert_eq!(merged.len(), 2);
//! ```

pub mod contributor;
pub mod error;
pub mod github;
pub mod reconcile;
pub mod serializer;

pub use contributor::{Contributor, ContributorSet, RevisionRange};
pub use error::ContributorsError;
pub use github::{AuthorIndex, GitHubClient, GitHubConfig};
pub use reconcile::{MatchPolicy, reconcile};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::contributor::{Contributor, ContributorSet, RevisionRange};
    pub use crate::error::ContributorsError;
    pub use crate::github::{AuthorIndex, GitHubClient, GitHubConfig};
    pub use crate::reconcile::{MatchPolicy, reconcile};
}
