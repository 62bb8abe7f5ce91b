use anyhow::{Context, Result};
use regex::Regex;

/// Annotation appended to lines excluded by the built-in pattern set.
const TARBALL_REASON: &str = "Installed via tarball, not package manager";

/// A single exclusion rule: lines matching `regex` are rewritten as annotated
/// comments carrying `reason`.
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    pub name: String,
    pub regex: Regex,
    pub reason: String,
}

/// Ordered set of exclusion rules, static for a given run.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    pub patterns: Vec<ExcludePattern>,
}

impl ExcludePatterns {
    /// Built-in exclusions for packages installed outside the package manager.
    ///
    /// Currently one rule: openshift-clients on RHEL 8/9, which the image
    /// build installs from the release tarball instead.
    pub fn defaults() -> Result<Self> {
        let patterns = vec![ExcludePattern {
            name: "openshift-clients (RHEL 8/9)".to_string(),
            regex: Regex::new(r"openshift-clients.*platform:rhel-[89]")?,
            reason: TARBALL_REASON.to_string(),
        }];

        Ok(ExcludePatterns { patterns })
    }

    /// Compile a pattern set from raw expressions, all sharing one reason.
    ///
    /// A malformed expression fails here, before any line is processed.
    pub fn from_exprs<I, S>(exprs: I, reason: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for expr in exprs {
            let expr = expr.as_ref();
            let regex = Regex::new(expr)
                .with_context(|| format!("Invalid exclusion pattern '{}'", expr))?;
            patterns.push(ExcludePattern {
                name: expr.to_string(),
                regex,
                reason: reason.to_string(),
            });
        }

        Ok(ExcludePatterns { patterns })
    }

    /// First pattern whose regex matches anywhere in `line`, if any.
    pub fn first_match(&self, line: &str) -> Option<&ExcludePattern> {
        self.patterns.iter().find(|p| p.regex.is_match(line))
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let patterns = ExcludePatterns::defaults().unwrap();
        assert_eq!(patterns.pattern_count(), 1);
    }

    #[test]
    fn test_default_matches_rhel_8_and_9() {
        let patterns = ExcludePatterns::defaults().unwrap();
        assert!(patterns.first_match("openshift-clients [platform:rhel-8]").is_some());
        assert!(patterns.first_match("openshift-clients [platform:rhel-9]").is_some());
    }

    #[test]
    fn test_default_ignores_other_platforms_and_packages() {
        let patterns = ExcludePatterns::defaults().unwrap();
        assert!(patterns.first_match("openshift-clients [platform:rhel-7]").is_none());
        assert!(patterns.first_match("python3-devel [platform:rhel-8]").is_none());
    }

    #[test]
    fn test_first_match_respects_order() {
        let patterns =
            ExcludePatterns::from_exprs(["clients", "openshift"], "test reason").unwrap();
        let matched = patterns.first_match("openshift-clients").unwrap();
        assert_eq!(matched.name, "clients");
    }

    #[test]
    fn test_malformed_expression_fails_at_compile() {
        let result = ExcludePatterns::from_exprs(["[unclosed"], "test reason");
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Invalid exclusion pattern"));
    }
}
