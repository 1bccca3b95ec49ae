//! Error types for gitloc-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating a directory on the web.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No repository root above the starting directory.
    #[error("git repository not found (searched upward from {})", .start.display())]
    RepoNotFound {
        /// Directory the search started from.
        start: PathBuf,
    },

    /// Remote URL matches neither the SCP-like nor the HTTPS shape.
    #[error("malformed remote URL: {0}")]
    MalformedRemoteUri(String),

    /// Remote URL is well-formed but not hosted on GitHub or GitLab.
    #[error("unsupported remote repository: {0}")]
    UnsupportedRemote(String),

    /// IO error while probing the filesystem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] gitloc_git::Error),
}
