//! Repository wrapper providing the read-only queries gitloc needs.

use std::path::Path;

use git2::{ErrorCode, StatusOptions};

use crate::error::{Error, Result};
use crate::traits::GitOps;

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open the repository at `path`.
    ///
    /// `path` is either the working tree root or the metadata directory
    /// itself; in the latter case its parent becomes the workdir. Unlike
    /// discovery, this does not search parent directories.
    ///
    /// # Errors
    /// Returns error if `path` is neither.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::open(path.as_ref())?;
        tracing::debug!(path = %inner.path().display(), "opened repository");
        Ok(Self { inner })
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get the name of the checked-out branch.
    ///
    /// With a detached HEAD the full commit id is returned instead.
    ///
    /// # Errors
    /// Returns error if HEAD is unborn or cannot be read.
    pub fn head_name(&self) -> Result<String> {
        let head = self.inner.head()?;

        if head.is_branch() {
            return head
                .shorthand()
                .map(String::from)
                .ok_or(Error::UnnamedHead);
        }

        let oid = head.target().ok_or(Error::UnnamedHead)?;
        tracing::debug!(%oid, "HEAD is detached, using commit id");
        Ok(oid.to_string())
    }

    /// Get the first URL configured for a remote.
    ///
    /// # Errors
    /// Returns `RemoteNotFound` if the remote is missing or has no URL.
    pub fn remote_url(&self, name: &str) -> Result<String> {
        let remote = match self.inner.find_remote(name) {
            Ok(remote) => remote,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(Error::RemoteNotFound(name.into()));
            }
            Err(e) => return Err(e.into()),
        };

        remote
            .url()
            .map(String::from)
            .ok_or_else(|| Error::RemoteNotFound(name.into()))
    }

    /// Check if the working directory is clean.
    ///
    /// Untracked files count as changes; ignored files do not.
    ///
    /// # Errors
    /// Returns error if status check fails.
    pub fn is_clean(&self) -> Result<bool> {
        if self.inner.is_bare() {
            return Err(Error::BareRepository);
        }

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .include_ignored(false)
            .recurse_untracked_dirs(false);

        let statuses = self.inner.statuses(Some(&mut opts))?;
        Ok(statuses.is_empty())
    }
}

impl GitOps for Repository {
    fn head_name(&self) -> Result<String> {
        self.head_name()
    }

    fn remote_url(&self, name: &str) -> Result<String> {
        self.remote_url(name)
    }

    fn is_clean(&self) -> Result<bool> {
        self.is_clean()
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}
