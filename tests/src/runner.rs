//! Scenario runner.

use assay_constraint::{ConstraintChecker, MxResolver, ValidatorTable};
use assay_core::{Record, Value};
use assay_loader::{load_registry_from_path, read_document};
use assay_registry::Registry;

use crate::collaborators::FixtureProbe;
use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::Scenario;

/// Runs a scenario against the checker.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    registry: Registry,
    documents: Record,
}

impl<'s> Runner<'s> {
    /// Load the scenario's schema and cases fixture.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        let schema_path = scenario.schema_path()?;
        let registry = load_registry_from_path(&schema_path)
            .map_err(|e| ScenarioError::fixture(&schema_path, e))?;

        let cases_path = scenario.cases_path()?;
        let documents = match read_document(&cases_path)
            .map_err(|e| ScenarioError::fixture(&cases_path, e))?
        {
            Value::Record(documents) => documents,
            _ => return Err(ScenarioError::invalid_cases(&cases_path)),
        };

        Ok(Self {
            scenario,
            registry,
            documents,
        })
    }

    /// Run every case and verify its assertion.
    pub fn run(&self) -> ScenarioResult<()> {
        let class = self.scenario.class_name()?;
        let probe = FixtureProbe::new(self.scenario.root());
        let mut checker = ConstraintChecker::new(ValidatorTable::standard_ref()).with_file_probe(&probe);
        if let Some(resolver) = self.scenario.mx_resolver() {
            checker = checker.with_mx_resolver(resolver as &dyn MxResolver);
        }

        for case in self.scenario.case_list() {
            let document = self
                .documents
                .get(&case.name)
                .ok_or_else(|| ScenarioError::case_not_found(&case.name))?;

            let result = checker
                .validate_class(&self.registry, class, document)
                .map_err(|e| e.to_string());

            case.assertion.verify(&case.name, &result)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::Scenario;

    #[test]
    fn test_runner_reports_unknown_case() {
        let scenario = Scenario::new("unknown")
            .schema("users/schema.yaml")
            .cases("users/signup.yaml")
            .class("User")
            .case("no_such_case", |a| a.valid());

        let error = scenario.run().unwrap_err();
        assert!(error.to_string().contains("no_such_case"));
    }

    #[test]
    fn test_runner_requires_cases() {
        let scenario = Scenario::new("no cases").schema("users/schema.yaml");
        assert!(scenario.run().is_err());
    }
}
