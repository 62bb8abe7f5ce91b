//! # bindep-filter - Conflict Filtering for Generated Bindep Manifests
//!
//! Rewrites a generated [bindep] manifest so that packages installed through
//! other channels (tarball releases, vendored binaries) are not pulled in a
//! second time by the distro package manager.
//!
//! Matching lines are not deleted: they are rewritten as annotated comments,
//! so the manifest keeps an audit trail of every exclusion. Blank lines and
//! existing comments pass through untouched, and the output always has the
//! same number of lines as the input.
//!
//! ## Quick Start
//!
//! ```bash
//! # Filter a generated manifest into a build-ready one
//! bindep-filter bindep.txt bindep-filtered.txt
//! ```
//!
//! [bindep]: https://docs.opendev.org/opendev/bindep/

pub mod cli;
pub mod filter;

pub use cli::Cli;
pub use filter::{ExcludePattern, ExcludePatterns, Filter, FilterStats};

/// Result type alias for bindep-filter operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
