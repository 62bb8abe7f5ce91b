//! Command-line interface for bindep-filter
//!
//! This module provides the CLI structure and command handling. It uses clap
//! for argument parsing and keeps the surface to the two positional paths the
//! tool has always taken.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod output;

use crate::filter::{ExcludePatterns, Filter};

/// Filter conflicting packages out of a generated bindep manifest
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generated bindep file to read
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Destination for the filtered manifest (created or overwritten)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,
}

impl Cli {
    /// Execute the filter run with the built-in exclusion set
    pub fn run(self) -> Result<()> {
        let patterns = ExcludePatterns::defaults()?;
        let filter = Filter::new(patterns);

        let stats = filter.filter_file(&self.input, &self.output)?;
        tracing::debug!(
            total = stats.lines_total,
            excluded = stats.lines_excluded,
            "bindep filter finished"
        );

        output::success(&format!(
            "Filtered bindep file: {} -> {}",
            self.input.display(),
            self.output.display()
        ));
        Ok(())
    }
}
