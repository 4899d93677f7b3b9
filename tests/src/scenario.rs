//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::collaborators::KnownDomains;
use crate::error::{ScenarioError, ScenarioResult};
use crate::runner::Runner;

/// A case in a scenario with its assertion.
#[derive(Debug)]
pub struct Case {
    /// Case name (a top-level key of the cases fixture).
    pub name: String,
    /// Assertion to verify the outcome.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the declaration file.
    schema_path: Option<PathBuf>,
    /// Path to the cases fixture.
    cases_path: Option<PathBuf>,
    /// Class every case is validated against.
    class: Option<String>,
    /// Domains the MX resolver confirms; no resolver when unset.
    mx_domains: Option<KnownDomains>,
    /// Cases with assertions.
    cases: Vec<Case>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_path: None,
            cases_path: None,
            class: None,
            mx_domains: None,
            cases: Vec::new(),
            base_path: fixtures_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the declaration file path (relative to fixtures/).
    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Set the cases fixture path (relative to fixtures/).
    pub fn cases(mut self, path: impl Into<PathBuf>) -> Self {
        self.cases_path = Some(path.into());
        self
    }

    /// Set the class every case is validated against.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Inject an MX resolver that confirms exactly these domains.
    pub fn mx_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mx_domains = Some(KnownDomains::new(domains));
        self
    }

    /// Add a case with an assertion.
    ///
    /// The case name must be a top-level key of the cases fixture.
    pub fn case<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.cases.push(Case { name, assertion });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        let runner = Runner::new(self)?;
        runner.run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the schema path (resolved).
    pub fn schema_path(&self) -> ScenarioResult<PathBuf> {
        match &self.schema_path {
            Some(p) => Ok(self.resolve_path(p)),
            None => Err(ScenarioError::missing_schema(&self.name)),
        }
    }

    /// Get the cases path (resolved).
    pub fn cases_path(&self) -> ScenarioResult<PathBuf> {
        match &self.cases_path {
            Some(p) => Ok(self.resolve_path(p)),
            None => Err(ScenarioError::missing_cases(&self.name)),
        }
    }

    /// Get the class under test.
    pub fn class_name(&self) -> ScenarioResult<&str> {
        self.class
            .as_deref()
            .ok_or_else(|| ScenarioError::missing_class(&self.name))
    }

    pub fn mx_resolver(&self) -> Option<&KnownDomains> {
        self.mx_domains.as_ref()
    }

    /// Get the cases.
    pub fn case_list(&self) -> &[Case] {
        &self.cases
    }

    /// Get the base path.
    pub fn root(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// The `fixtures/` directory of this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("signup")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("valid_user", |a| a.valid())
            .case("underage", |a| a.violations(1).at("age"));

        assert_eq!(scenario.name(), "signup");
        assert_eq!(scenario.case_list().len(), 2);
        assert_eq!(scenario.class_name().unwrap(), "User");
        assert!(scenario.schema_path().unwrap().ends_with("fixtures/users/schema.yaml"));
        assert!(scenario.mx_resolver().is_none());
    }

    #[test]
    fn test_missing_schema() {
        let scenario = Scenario::new("empty");
        assert!(matches!(
            scenario.schema_path(),
            Err(ScenarioError::MissingSchema { .. })
        ));
        assert!(matches!(
            scenario.class_name(),
            Err(ScenarioError::MissingClass { .. })
        ));
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let scenario = Scenario::new("abs").schema("/tmp/schema.yaml");
        assert_eq!(scenario.schema_path().unwrap(), PathBuf::from("/tmp/schema.yaml"));
    }
}
