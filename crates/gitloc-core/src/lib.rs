//! # gitloc-core
//!
//! Core library for gitloc: finds the repository enclosing a directory,
//! classifies its upstream remote, and builds the web URL that shows the
//! checked-out branch at that directory.

pub mod config;
pub mod error;
pub mod location;
pub mod remote;
pub mod root;
pub mod url;

pub use config::LocatorConfig;
pub use error::{Error, Result};
pub use location::{GitLocation, LocalClone, ResolvedLocation};
pub use remote::{Provenance, RemoteDescriptor};
pub use root::{RepoLocation, RootResolver};
