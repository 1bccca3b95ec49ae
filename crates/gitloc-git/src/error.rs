//! Error types for gitloc-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a repository.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository has no working tree.
    #[error("bare repositories have no working tree")]
    BareRepository,

    /// Remote not found, or configured without a URL.
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// HEAD points at nothing we can name.
    #[error("cannot determine the checked-out branch")]
    UnnamedHead,

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
