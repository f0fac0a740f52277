//! # Check Configuration
//!
//! The policy a scan runs under. Exempt paths are never inspected, and the
//! filter attribute must resolve to `lfs` for a path to count as tracked.
//!
//! None of this is read from disk or the environment. A scan receives a
//! [`CheckConfig`] value, and tests build their own.

/// Number of leading bytes sampled when deciding whether a file is text.
pub const PREFIX_LEN: usize = 1024;

/// Attribute queried for every tracked path.
pub const FILTER_ATTRIBUTE: &str = "filter";

/// Filter driver name that marks a path as stored in LFS.
pub const LFS_DRIVER: &str = "lfs";

/// Repository metadata and tooling that is never classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptionSet {
    literals: Vec<&'static str>,
    prefixes: Vec<&'static str>,
}

impl ExemptionSet {
    pub fn new(literals: Vec<&'static str>, prefixes: Vec<&'static str>) -> Self {
        Self { literals, prefixes }
    }

    /// Exact, case-sensitive match against a literal, or a leading prefix match.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.literals.iter().any(|literal| *literal == path)
            || self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }
}

impl Default for ExemptionSet {
    fn default() -> Self {
        Self::new(
            vec![".gitattributes", ".gitignore", ".pre-commit-config.yaml"],
            vec![".github/"],
        )
    }
}

/// Settings for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub exemptions: ExemptionSet,
    pub prefix_len: usize,
    pub attribute: &'static str,
    pub driver: &'static str,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            exemptions: ExemptionSet::default(),
            prefix_len: PREFIX_LEN,
            attribute: FILTER_ATTRIBUTE,
            driver: LFS_DRIVER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_literals_are_exempt() {
        let exemptions = ExemptionSet::default();

        assert!(exemptions.is_exempt(".gitattributes"));
        assert!(exemptions.is_exempt(".gitignore"));
        assert!(exemptions.is_exempt(".pre-commit-config.yaml"));
    }

    #[test]
    fn test_github_prefix_is_exempt() {
        let exemptions = ExemptionSet::default();

        assert!(exemptions.is_exempt(".github/scripts/check_lfs.py"));
        assert!(exemptions.is_exempt(".github/logo.png"));
    }

    #[test]
    fn test_near_misses_are_not_exempt() {
        let exemptions = ExemptionSet::default();

        assert!(!exemptions.is_exempt("docs/.gitignore"));
        assert!(!exemptions.is_exempt(".GITIGNORE"));
        assert!(!exemptions.is_exempt(".github"));
        assert!(!exemptions.is_exempt(".githubx/file"));
        assert!(!exemptions.is_exempt("README.md"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let exemptions = ExemptionSet::new(Vec::new(), Vec::new());
        assert!(!exemptions.is_exempt(".gitattributes"));
    }

    #[test]
    fn test_default_config_values() {
        let config = CheckConfig::default();

        assert_eq!(config.prefix_len, 1024);
        assert_eq!(config.attribute, "filter");
        assert_eq!(config.driver, "lfs");
        assert_eq!(config.exemptions, ExemptionSet::default());
    }
}
