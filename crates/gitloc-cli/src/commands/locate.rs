//! Locate the current directory on its hosting provider.

use anyhow::{Context, Result};
use gitloc_core::{GitLocation, LocalClone, LocatorConfig};

use crate::output;

/// Run the locator against the current working directory.
pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("Cannot read the current directory")?;
    let config = LocatorConfig::default();
    tracing::debug!(cwd = %cwd.display(), "locating working directory");

    let location =
        LocalClone::discover(&cwd, &config).context("Cannot open the enclosing repository")?;

    let resolved = location
        .resolve()
        .with_context(|| format!("Cannot build a web URL for {}", cwd.display()))?;

    output::essential(&resolved.to_string());

    Ok(())
}
