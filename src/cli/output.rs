//! Terminal output helpers for consistent CLI formatting

use console::style;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✔").green(), message);
}

/// Print an error message. Errors always go to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✖").red(), message);
}
