//! Locator settings.

/// Name of the repository metadata directory.
pub const DEFAULT_GIT_DIR_NAME: &str = ".git";

/// Remote whose URL is turned into a web link.
pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Values the locator would otherwise hard-code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Entry that marks a repository root.
    pub git_dir_name: String,

    /// Remote to read the URL from.
    pub remote_name: String,
}

impl LocatorConfig {
    /// Use a different metadata directory name.
    #[must_use]
    pub fn with_git_dir_name(mut self, name: impl Into<String>) -> Self {
        self.git_dir_name = name.into();
        self
    }

    /// Use a different remote.
    #[must_use]
    pub fn with_remote_name(mut self, name: impl Into<String>) -> Self {
        self.remote_name = name.into();
        self
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            git_dir_name: DEFAULT_GIT_DIR_NAME.into(),
            remote_name: DEFAULT_REMOTE_NAME.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocatorConfig::default();
        assert_eq!(config.git_dir_name, ".git");
        assert_eq!(config.remote_name, "origin");
    }

    #[test]
    fn test_overrides() {
        let config = LocatorConfig::default()
            .with_git_dir_name(".meta")
            .with_remote_name("upstream");
        assert_eq!(config.git_dir_name, ".meta");
        assert_eq!(config.remote_name, "upstream");
    }
}
