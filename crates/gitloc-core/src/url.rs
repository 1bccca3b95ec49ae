//! Web URL construction for GitHub and GitLab tree views.

use crate::error::{Error, Result};
use crate::remote::{Provenance, RemoteDescriptor};

/// Map an SSH-only alias host to its web-facing host.
///
/// The first `-ssh.` becomes `.`, so `gitlab-ssh.example.com` turns into
/// `gitlab.example.com`. Hosts without the marker are returned unchanged.
#[must_use]
pub fn canonical_host(host: &str) -> String {
    host.replacen("-ssh.", ".", 1)
}

/// Build the tree URL for `branch` at `subdirectory`.
///
/// An empty `subdirectory` leaves the URL ending in `tree/<branch>/`.
///
/// # Errors
/// Returns `UnsupportedRemote` for [`Provenance::Unknown`].
pub fn build(
    provenance: Provenance,
    host: &str,
    org: &str,
    repo: &str,
    branch: &str,
    subdirectory: &str,
) -> Result<String> {
    match provenance {
        Provenance::GitHub => Ok(format!(
            "https://{host}/{org}/{repo}/tree/{branch}/{subdirectory}"
        )),
        Provenance::GitLab => Ok(format!(
            "https://{}/{org}/{repo}/-/tree/{branch}/{subdirectory}",
            canonical_host(host)
        )),
        Provenance::Unknown => Err(Error::UnsupportedRemote(format!("{host}/{org}/{repo}"))),
    }
}

impl RemoteDescriptor {
    /// Build the tree URL for this remote.
    ///
    /// # Errors
    /// Returns `UnsupportedRemote` if the provider is unknown.
    pub fn tree_url(&self, branch: &str, subdirectory: &str) -> Result<String> {
        build(
            self.provenance,
            &self.host,
            &self.organization,
            &self.repository,
            branch,
            subdirectory,
        )
    }
}
