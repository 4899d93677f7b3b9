//! Deterministic collaborators injected into scenario runs.

use std::collections::HashSet;
use std::path::PathBuf;

use assay_constraint::{FileProbe, FileStatus, MxResolver, StdFileProbe};

/// MX resolver answering from a fixed set of domains.
#[derive(Debug, Clone, Default)]
pub struct KnownDomains {
    domains: HashSet<String>,
}

impl KnownDomains {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.into().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl MxResolver for KnownDomains {
    fn has_mx_record(&self, domain: &str) -> bool {
        self.domains.contains(&domain.to_ascii_lowercase())
    }
}

/// File probe resolving relative paths against the fixtures root.
#[derive(Debug, Clone)]
pub struct FixtureProbe {
    root: PathBuf,
}

impl FixtureProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileProbe for FixtureProbe {
    fn probe(&self, path: &str) -> FileStatus {
        let resolved = self.root.join(path);
        StdFileProbe.probe(&resolved.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_domains_ignore_case() {
        let resolver = KnownDomains::new(["Example.com"]);
        assert!(resolver.has_mx_record("example.COM"));
        assert!(!resolver.has_mx_record("nowhere.test"));
    }

    #[test]
    fn test_fixture_probe_resolves_relative_paths() {
        let probe = FixtureProbe::new(env!("CARGO_MANIFEST_DIR"));
        assert!(matches!(probe.probe("Cargo.toml"), FileStatus::Found { .. }));
        assert_eq!(probe.probe("missing.toml"), FileStatus::NotFound);
    }
}
