// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! shipprep-git: git history access and CI working-copy setup
//!
//! This library crate collects commit author names over a revision range
//! (feeding contributor reconciliation) and runs the git commands that make
//! a CI clone releasable: unshallowing, checking out a real branch, and
//! configuring a generic committer identity.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use shipprep_contributors::RevisionRange;
//! use shipprep_git::GitRepo;
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let range = RevisionRange::new("v1.0.0", "HEAD");
//! let authors = repo.authors_in_range(&range).expect("collect authors");
//!
//! for name in authors {
//!     println!("{name}");
//! }
//! ```

pub mod authors;
pub mod error;
pub mod setup;

pub use authors::GitRepo;
pub use error::GitError;
pub use setup::{GitIdentity, GitSetup};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::authors::GitRepo;
    pub use crate::error::GitError;
    pub use crate::setup::{GitIdentity, GitSetup};
}
