//! Assay Registry
//!
//! The constraint catalog and class validation metadata.
//! Constraints are immutable rule descriptors checked at construction; the
//! registry of class metadata is immutable after construction via RegistryBuilder.

mod builder;
mod charset;
mod constraint;
mod error;
mod kind;
mod options;
mod registry;
mod types;

pub mod codes;
pub mod messages;

pub use builder::{ClassBuilder, RegistryBuilder, RegistryError, RegistryResult};
pub use charset::Charset;
pub use constraint::*;
pub use error::{CatalogError, CatalogResult};
pub use kind::{ConstraintKind, KindSpec, Target};
pub use options::{OptionValue, Options};
pub use registry::Registry;
pub use types::{ClassDef, PropertyDef};
