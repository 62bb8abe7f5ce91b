pub mod core;
pub mod patterns;

// Re-export main types for easier access
pub use self::core::{Filter, FilterResult, FilterStats};
pub use self::patterns::{ExcludePattern, ExcludePatterns};
