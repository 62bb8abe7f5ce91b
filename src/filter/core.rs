use anyhow::{Context, Result};
use std::path::Path;

use super::patterns::ExcludePatterns;

/// Counters from a single filter pass.
#[derive(Debug, Default)]
pub struct FilterStats {
    pub lines_total: usize,
    pub lines_kept: usize,
    pub lines_passed_through: usize,
    pub lines_excluded: usize,
}

/// Result of filtering manifest text: the transformed lines plus counters.
#[derive(Debug)]
pub struct FilterResult {
    pub lines: Vec<String>,
    pub stats: FilterStats,
}

/// Line filter for bindep manifests.
///
/// Each non-empty, non-comment line is tested against the exclusion set; the
/// first matching rule rewrites the line as an annotated comment. All other
/// lines pass through stripped of surrounding whitespace. The transform is
/// 1:1 on lines, so the output always has as many lines as the input.
#[derive(Debug, Clone)]
pub struct Filter {
    patterns: ExcludePatterns,
}

impl Filter {
    pub fn new(patterns: ExcludePatterns) -> Self {
        Filter { patterns }
    }

    /// Filter manifest text line by line.
    pub fn filter_text(&self, input: &str) -> FilterResult {
        let mut lines = Vec::new();
        let mut stats = FilterStats::default();

        for raw in input.lines() {
            let line = raw.trim();
            stats.lines_total += 1;

            // Blank lines and existing comments pass through unchanged
            if line.is_empty() || line.starts_with('#') {
                stats.lines_passed_through += 1;
                lines.push(line.to_string());
                continue;
            }

            match self.patterns.first_match(line) {
                Some(pattern) => {
                    stats.lines_excluded += 1;
                    tracing::debug!(pattern = %pattern.name, line, "excluded manifest line");
                    lines.push(format!("# FILTERED: {}  # {}", line, pattern.reason));
                }
                None => {
                    stats.lines_kept += 1;
                    lines.push(line.to_string());
                }
            }
        }

        FilterResult { lines, stats }
    }

    /// Filter the manifest at `input` into `output`, overwriting it.
    ///
    /// The whole input is buffered before the output is opened, so passing the
    /// same path for both does not truncate the input mid-read. That is a side
    /// effect of the buffering, not a supported mode; callers should use two
    /// paths. A failure while writing may leave `output` truncated.
    pub fn filter_file(&self, input: &Path, output: &Path) -> Result<FilterStats> {
        let content = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read bindep file: {}", input.display()))?;

        let result = self.filter_text(&content);

        let mut buf = String::with_capacity(content.len());
        for line in &result.lines {
            buf.push_str(line);
            buf.push('\n');
        }
        std::fs::write(output, buf)
            .with_context(|| format!("Failed to write filtered file: {}", output.display()))?;

        Ok(result.stats)
    }
}
