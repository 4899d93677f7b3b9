//! Assay Integration Test Framework
//!
//! Provides a fluent API for writing scenario tests against assay.
//!
//! # Structure
//!
//! - **fixtures/<domain>/schema.yaml** - Constraint declarations for the domain
//! - **fixtures/<domain>/<cases>.yaml** - Documents keyed by case name
//! - **tests/** - Scenarios (Rust: schema + cases + assertions)
//!
//! # Example
//!
//! ```ignore
//! use assay_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("signup")
//!         .schema("users/schema.yaml")
//!         .cases("users/signup.yaml")
//!         .class("User")
//!         .case("valid_user", |a| a.valid())
//!         .case("underage", |a| a.violations(1).at_code("age", codes::TOO_LOW_ERROR))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod assertion;
mod collaborators;
mod error;
mod runner;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder};
pub use collaborators::{FixtureProbe, KnownDomains};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Case, Scenario};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use assay_registry::codes;
}
