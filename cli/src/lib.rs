//! Assay CLI library.
//!
//! - `args`: clap definitions for `assay check` and `assay kinds`
//! - `commands`: command handlers
//! - `format`: violation and catalog rendering

mod args;
mod commands;
mod error;
mod format;

pub use args::{CheckArgs, Cli, Commands};
pub use commands::{check_documents, run};
pub use error::{CliError, CliResult};
pub use format::{format_kinds, format_violation};
