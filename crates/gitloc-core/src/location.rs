//! The located directory: where it lives on the web and whether it is clean.
//!
//! [`GitLocation`] is the capability callers depend on. [`LocalClone`] backs
//! it with a checkout on disk; other backends (say, a hosting API that needs
//! no clone) can implement the same trait without touching callers.

use std::fmt;
use std::path::Path;

use gitloc_git::{GitOps, Repository};

use crate::config::LocatorConfig;
use crate::error::Result;
use crate::remote::RemoteDescriptor;
use crate::root::RootResolver;

/// Something that can be turned into a browsable tree URL.
pub trait GitLocation {
    /// The upstream remote, decomposed.
    ///
    /// # Errors
    /// Returns error if the remote is missing or malformed.
    fn remote(&self) -> Result<RemoteDescriptor>;

    /// The checked-out branch.
    ///
    /// # Errors
    /// Returns error if HEAD cannot be read.
    fn branch(&self) -> Result<String>;

    /// Path of the located directory inside the repository.
    fn subdirectory(&self) -> &str;

    /// Whether the working tree has no uncommitted changes.
    ///
    /// # Errors
    /// Returns error if the status cannot be computed.
    fn is_clean(&self) -> Result<bool>;

    /// The tree URL for the branch and subdirectory.
    ///
    /// # Errors
    /// Returns error if any input is unavailable or the host is unsupported.
    fn url(&self) -> Result<String> {
        let remote = self.remote()?;
        let branch = self.branch()?;
        remote.tree_url(&branch, self.subdirectory())
    }

    /// Gather everything into a [`ResolvedLocation`].
    ///
    /// The URL is validated before the worktree status is computed.
    ///
    /// # Errors
    /// Returns the first error any stage produces.
    fn resolve(&self) -> Result<ResolvedLocation> {
        let remote = self.remote()?;
        let branch = self.branch()?;
        let url = remote.tree_url(&branch, self.subdirectory())?;
        let clean = self.is_clean()?;

        Ok(ResolvedLocation {
            remote,
            branch,
            subdirectory: self.subdirectory().to_string(),
            url,
            clean,
        })
    }
}

/// Final answer for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Upstream remote.
    pub remote: RemoteDescriptor,
    /// Checked-out branch (or commit id when detached).
    pub branch: String,
    /// Directory inside the repository.
    pub subdirectory: String,
    /// Tree URL for `branch` at `subdirectory`.
    pub url: String,
    /// No uncommitted changes.
    pub clean: bool,
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clean {
            f.write_str(&self.url)
        } else {
            write!(f, "{} (dirty)", self.url)
        }
    }
}

/// A location backed by a local checkout.
#[derive(Debug)]
pub struct LocalClone<G: GitOps> {
    git: G,
    remote_name: String,
    subdirectory: String,
}

impl<G: GitOps> LocalClone<G> {
    /// Wrap an already opened repository.
    pub fn new(git: G, subdirectory: impl Into<String>, config: &LocatorConfig) -> Self {
        Self {
            git,
            remote_name: config.remote_name.clone(),
            subdirectory: subdirectory.into(),
        }
    }

    /// The underlying repository.
    pub const fn git(&self) -> &G {
        &self.git
    }
}

impl LocalClone<Repository> {
    /// Find the repository enclosing `start` and open it.
    ///
    /// A relative `start` is made absolute against the current directory;
    /// symlinks are not resolved. The metadata directory is opened by its
    /// configured name, so a renamed `.git` works end to end.
    ///
    /// # Errors
    /// Returns `RepoNotFound` if no root encloses `start`, or the git error
    /// if the root cannot be opened.
    pub fn discover(start: &Path, config: &LocatorConfig) -> Result<Self> {
        let start = std::path::absolute(start)?;
        let location = RootResolver::new(config).resolve(&start)?;
        let repo = Repository::open(location.root.join(&config.git_dir_name))?;

        Ok(Self::new(repo, location.subdirectory, config))
    }
}

impl<G: GitOps> GitLocation for LocalClone<G> {
    fn remote(&self) -> Result<RemoteDescriptor> {
        let uri = self.git.remote_url(&self.remote_name)?;
        tracing::debug!(remote = %self.remote_name, "read remote URL");
        RemoteDescriptor::parse(&uri)
    }

    fn branch(&self) -> Result<String> {
        Ok(self.git.head_name()?)
    }

    fn subdirectory(&self) -> &str {
        &self.subdirectory
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.git.is_clean()?)
    }
}
