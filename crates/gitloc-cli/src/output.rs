//! Terminal output formatting utilities.

use colored::Colorize;

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print essential machine-readable output (always prints).
///
/// Use for results that should be available for piping, like the URL.
pub fn essential(msg: &str) {
    println!("{msg}");
}
