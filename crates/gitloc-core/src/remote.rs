//! Remote URL classification and decomposition.
//!
//! Two URL shapes are understood, for both GitHub and GitLab:
//! - SCP-like: `git@<host>:<org>/<repo>[.git]`
//! - HTTPS: `https://[<userinfo>@]<host>/<org>/<repo>[.git]`
//!
//! HTTPS userinfo (often a token) is matched but never captured.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Marker for self-hosted GitLab instances reached through an SSH-only alias.
const GITLAB_SSH_ALIAS: &str = "gitlab-ssh";

/// Matches both supported shapes. The start is unanchored so an
/// `ssh://git@host/...` URL is found through its `git@` part.
#[allow(clippy::expect_used)]
static REMOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<prefix>git@|https://)(?:[^@/]+@)?(?P<host>[^:/@]+)[:/](?P<org>[^/@]+(?:/[^/@]+)*)/(?P<repo>[^/@]+?)(?:\.git)?/?$",
    )
    .expect("remote pattern is valid")
});

/// Which hosting provider a remote belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// github.com
    GitHub,
    /// gitlab.com or a self-hosted instance behind a `gitlab-ssh` alias.
    GitLab,
    /// Anything else; no URL can be built for it.
    Unknown,
}

impl Provenance {
    /// Classify a raw remote URL. First match wins; the test is a
    /// case-sensitive substring search.
    #[must_use]
    pub fn classify(uri: &str) -> Self {
        if uri.contains("github.com") {
            Self::GitHub
        } else if uri.contains("gitlab.com") || uri.contains(GITLAB_SSH_ALIAS) {
            Self::GitLab
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A remote URL broken into the parts a web URL is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Hosting provider.
    pub provenance: Provenance,
    /// Host as written in the remote, possibly an internal alias.
    pub host: String,
    /// GitHub organization or GitLab group (nested groups keep their `/`).
    pub organization: String,
    /// Repository name without any `.git` suffix.
    pub repository: String,
}

impl RemoteDescriptor {
    /// Decompose and classify a remote URL.
    ///
    /// The result may carry [`Provenance::Unknown`]; that is rejected only
    /// when a URL is built from it.
    ///
    /// # Errors
    /// Returns `MalformedRemoteUri` if the URL matches neither shape.
    pub fn parse(uri: &str) -> Result<Self> {
        let (host, organization, repository) = decompose(uri)?;
        let provenance = Provenance::classify(uri);
        tracing::debug!(%provenance, %host, %organization, %repository, "parsed remote");

        Ok(Self {
            provenance,
            host,
            organization,
            repository,
        })
    }
}

/// Split a remote URL into `(host, organization, repository)`.
///
/// # Errors
/// Returns `MalformedRemoteUri` if the URL matches neither shape.
pub fn decompose(uri: &str) -> Result<(String, String, String)> {
    let caps = REMOTE_RE
        .captures(uri)
        .ok_or_else(|| Error::MalformedRemoteUri(uri.into()))?;

    tracing::trace!(prefix = &caps["prefix"], "remote shape matched");

    Ok((
        caps["host"].to_string(),
        caps["org"].to_string(),
        caps["repo"].to_string(),
    ))
}
