//! Command-line surface.

use clap::Parser;

pub mod locate;

/// Print the GitHub or GitLab web URL for the current directory.
///
/// The URL points at the checked-out branch and is followed by
/// `(dirty)` when the working tree has uncommitted changes.
#[derive(Debug, Parser)]
#[command(name = "gitloc", version, about, long_about = None)]
pub struct Cli {}
