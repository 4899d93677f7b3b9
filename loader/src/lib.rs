//! Assay Loader
//!
//! Read constraint declarations and data documents from YAML or JSON.
//!
//! Declarations map class names to class-level and property-level
//! constraint lists and load into an immutable [`Registry`](assay_registry::Registry).
//! Documents load into [`Value`](assay_core::Value) trees.

mod document;
mod error;
mod format;
mod schema;

pub use document::{parse_document, read_document, value_from_json, value_from_yaml};
pub use error::{LoadError, LoadResult};
pub use format::Format;
pub use schema::{load_registry_from_path, load_registry_from_str, parse_constraint};
