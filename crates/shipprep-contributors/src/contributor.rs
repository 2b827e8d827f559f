// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! Contributor data model

use std::collections::HashMap;

use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// A single project contributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Display name as it appears in commit metadata
    pub name: String,
    /// Platform account id (GitHub login), if resolved
    pub login: Option<String>,
    /// Aggregate number of commits attributed to this contributor
    pub contributions: u32,
}

impl Contributor {
    /// Create a contributor with a resolved platform account
    #[must_use]
    pub fn new(name: impl Into<String>, login: Option<&str>, contributions: u32) -> Self {
        Self {
            name: name.into(),
            login: login.map(str::to_string),
            contributions,
        }
    }

    /// Create a placeholder for an author seen in recent commits but absent
    /// from the all-time snapshot. The login is resolved later.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            login: None,
            contributions: 0,
        }
    }

    /// Identity used for deduplication: the login when present, otherwise
    /// the display name.
    #[must_use]
    pub fn identity(&self) -> &str {
        self.login.as_deref().unwrap_or(&self.name)
    }

    /// Whether this entry still lacks a resolved platform account
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.login.is_none()
    }
}

/// A pair of source-control revisions bounding a set of commits
///
/// The identifiers are opaque here; they are interpreted by whichever
/// commit-history source consumes the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRange {
    /// Lower bound (exclusive), e.g. the previously released tag
    pub from: String,
    /// Upper bound (inclusive), e.g. `HEAD` or the release commit
    pub to: String,
}

impl RevisionRange {
    /// Create a range from two revision identifiers
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl std::fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// A collection of contributors, unique by identity
///
/// Storage is unordered; [`ContributorSet::ordered`] provides the
/// deterministic view (descending contributions, then name) used for
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorSet {
    entries: HashMap<String, Contributor>,
}

impl ContributorSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contributors in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a contributor, keeping the existing entry if the identity is
    /// already present. Returns `true` if the contributor was added.
    pub fn insert(&mut self, contributor: Contributor) -> bool {
        let identity = contributor.identity().to_string();
        if self.entries.contains_key(&identity) {
            return false;
        }
        self.entries.insert(identity, contributor);
        true
    }

    /// Look up a contributor by identity
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&Contributor> {
        self.entries.get(identity)
    }

    /// Whether an identity is present in the set
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Iterate over contributors in storage order (unspecified)
    pub fn iter(&self) -> impl Iterator<Item = &Contributor> {
        self.entries.values()
    }

    /// Contributors in deterministic output order: descending contribution
    /// count, ties broken by display name.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Contributor> {
        let mut sorted: Vec<&Contributor> = self.entries.values().collect();
        sorted.sort_by(|a, b| {
            b.contributions
                .cmp(&a.contributions)
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }
}

impl FromIterator<Contributor> for ContributorSet {
    fn from_iter<I: IntoIterator<Item = Contributor>>(iter: I) -> Self {
        let mut set = Self::new();
        for contributor in iter {
            set.insert(contributor);
        }
        set
    }
}

impl Serialize for ContributorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ordered = self.ordered();
        let mut seq = serializer.serialize_seq(Some(ordered.len()))?;
        for contributor in ordered {
            seq.serialize_element(contributor)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ContributorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Contributor>::deserialize(deserializer)?;
        let expected = entries.len();
        let set: Self = entries.into_iter().collect();
        if set.len() != expected {
            return Err(D::Error::custom("duplicate contributor identity"));
        }
        Ok(set)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate arbitrary contributors, with and without logins
    fn contributor_strategy() -> impl Strategy<Value = Contributor> {
        (
            "[A-Za-z][A-Za-z ]{0,30}",
            proptest::option::of("[a-z][a-z0-9]{0,15}"),
            0u32..100_000u32,
        )
            .prop_map(|(name, login, contributions)| Contributor {
                name,
                login,
                contributions,
            })
    }

    proptest! {
        /// Property: a set never holds two entries with the same identity
        #[test]
        fn prop_identities_unique(
            contributors in proptest::collection::vec(contributor_strategy(), 0..20)
        ) {
            let set: ContributorSet = contributors.into_iter().collect();
            let mut identities: Vec<&str> =
                set.iter().map(Contributor::identity).collect();
            identities.sort_unstable();
            identities.dedup();
            prop_assert_eq!(identities.len(), set.len());
        }

        /// Property: re-inserting every member leaves the set unchanged
        #[test]
        fn prop_reinsert_is_noop(
            contributors in proptest::collection::vec(contributor_strategy(), 0..20)
        ) {
            let set: ContributorSet = contributors.into_iter().collect();
            let mut copy = set.clone();
            for contributor in set.iter() {
                copy.insert(contributor.clone());
            }
            prop_assert_eq!(copy, set);
        }

        /// Property: ordered output is deterministic across storage orders
        #[test]
        fn prop_ordered_is_deterministic(
            contributors in proptest::collection::vec(contributor_strategy(), 0..20)
        ) {
            let forward: ContributorSet = contributors.iter().cloned().collect();
            let reverse: ContributorSet = contributors.iter().rev().cloned().collect();
            // Insertion order may change which duplicate wins, so compare
            // only when the inputs carry no duplicate identities.
            if forward.len() == contributors.len() && reverse.len() == contributors.len() {
                let a = serde_json::to_string(&forward).expect("serialize");
                let b = serde_json::to_string(&reverse).expect("serialize");
                prop_assert_eq!(a, b);
            }
        }

        /// Property: ordered output is sorted by (contributions desc, name asc)
        #[test]
        fn prop_ordered_sorted(
            contributors in proptest::collection::vec(contributor_strategy(), 0..20)
        ) {
            let set: ContributorSet = contributors.into_iter().collect();
            let ordered = set.ordered();
            for pair in ordered.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(
                    a.contributions > b.contributions
                        || (a.contributions == b.contributions && a.name <= b.name)
                );
            }
        }
    }
}
