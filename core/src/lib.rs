//! Assay Core Types
//!
//! This crate provides the foundational types used throughout assay:
//! - Value types (the Value enum with scalar and structured variants)
//! - Property paths that address values inside composite values
//! - Common error types

mod error;
mod path;
mod value;

pub use error::*;
pub use path::*;
pub use value::*;
