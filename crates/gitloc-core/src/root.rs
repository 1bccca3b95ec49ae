//! Repository root discovery.
//!
//! Walks upward from a starting directory until it finds one that holds the
//! repository metadata directory. Only a directory counts: a `.git` *file*
//! (linked worktrees, submodules) is skipped and the walk continues.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;
use crate::error::{Error, Result};

/// Where a directory sits inside its repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    /// Directory containing the metadata directory.
    pub root: PathBuf,

    /// Starting directory relative to `root`, `/`-separated, no leading
    /// separator. Empty when the start is the root itself.
    pub subdirectory: String,
}

/// Finds the nearest enclosing repository root.
#[derive(Debug, Clone)]
pub struct RootResolver {
    git_dir_name: String,
}

impl RootResolver {
    /// Create a resolver using the configured metadata directory name.
    #[must_use]
    pub fn new(config: &LocatorConfig) -> Self {
        Self {
            git_dir_name: config.git_dir_name.clone(),
        }
    }

    /// Resolve the repository enclosing `start`.
    ///
    /// `start` itself is the first candidate. The walk ends once the
    /// filesystem root has been checked.
    ///
    /// # Errors
    /// Returns `RepoNotFound` if no ancestor qualifies, or `Io` if a
    /// candidate cannot be inspected.
    pub fn resolve(&self, start: &Path) -> Result<RepoLocation> {
        let mut candidate = start;

        loop {
            tracing::trace!(candidate = %candidate.display(), "checking for repository root");

            if self.is_root(candidate)? {
                let subdirectory = relative_url_path(start, candidate);
                tracing::debug!(
                    root = %candidate.display(),
                    subdirectory = %subdirectory,
                    "found repository root"
                );
                return Ok(RepoLocation {
                    root: candidate.to_path_buf(),
                    subdirectory,
                });
            }

            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => {
                    return Err(Error::RepoNotFound {
                        start: start.to_path_buf(),
                    });
                }
            }
        }
    }

    fn is_root(&self, dir: &Path) -> Result<bool> {
        match fs::metadata(dir.join(&self.git_dir_name)) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Render `path` relative to `base` as a URL path fragment.
fn relative_url_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}
