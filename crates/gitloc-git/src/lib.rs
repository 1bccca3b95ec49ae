//! # gitloc-git
//!
//! Read-only repository access for gitloc, built on git2-rs.
//! Provides the branch, remote URL, and worktree cleanliness that the
//! locator needs. Nothing in this crate writes to a repository.

mod error;
mod repository;
mod traits;

pub use error::{Error, Result};
pub use repository::Repository;
pub use traits::GitOps;
