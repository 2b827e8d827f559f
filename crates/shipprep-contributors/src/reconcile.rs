// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Reconciliation of recent commit authors with the all-time snapshot
//!
//! The GitHub contributors endpoint is cached upstream and can lag reality
//! by hours, so authors of the newest commits may be missing from it. This
//! module merges the two sources into one consistent set so release notes
//! never drop the most recent contributors.

use crate::contributor::{Contributor, ContributorSet};

/// Policy for matching a recent author name against snapshot display names
///
/// Exact matching is the baseline; case-insensitive matching is available
/// for histories where the same person committed under differently cased
/// names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-sensitive exact comparison
    #[default]
    Exact,
    /// Unicode-lowercase comparison
    IgnoreCase,
}

impl MatchPolicy {
    /// Whether two display names are considered the same under this policy
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Merge recent commit author names with the all-time contributor snapshot.
///
/// Every entry of `snapshot` is preserved unchanged. Each recent author name
/// that matches a snapshot display name under `policy` is already covered by
/// that entry; each name with no match becomes a zero-contribution
/// placeholder whose login is resolved later (see
/// [`crate::github::AuthorIndex`]).
///
/// This is a pure function: absence of a match is expected, not an error,
/// and identical inputs always produce the identical result. Names in
/// `recent_authors` that are duplicates under `policy` collapse to a
/// single entry.
#[must_use]
pub fn reconcile<'a, I>(
    recent_authors: I,
    snapshot: &ContributorSet,
    policy: MatchPolicy,
) -> ContributorSet
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged = snapshot.clone();

    for name in recent_authors {
        // Match against the merged set, not just the snapshot, so recent
        // names that are equal under the policy share one placeholder.
        let known = merged.iter().any(|c| policy.matches(&c.name, name));
        if !known {
            merged.insert(Contributor::placeholder(name));
        }
    }

    merged
}
