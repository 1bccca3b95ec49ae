//! gitloc - print the web URL of the current directory in its git checkout.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::Cli;

fn main() {
    let _cli = Cli::parse();
    init_logging();

    if let Err(e) = commands::locate::run() {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout only ever carries the URL line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
