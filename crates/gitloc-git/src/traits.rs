//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the repository
//! queries gitloc performs, enabling dependency injection and testability.

use crate::Result;

/// Trait for read-only git repository queries.
///
/// This trait abstracts git operations, allowing for:
/// - Dependency injection into the locator
/// - Mock implementations for testing
///
/// Note: git operations are synchronous since git2 is a synchronous library.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    /// Get the checked-out branch name (or commit id when detached).
    fn head_name(&self) -> Result<String>;

    /// Get the first URL of the named remote.
    fn remote_url(&self, name: &str) -> Result<String>;

    /// Check if the working directory is clean.
    fn is_clean(&self) -> Result<bool>;
}
