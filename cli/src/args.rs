//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Check data documents against constraint declarations.
#[derive(Parser, Debug)]
#[command(name = "assay")]
#[command(about = "Check data documents against constraint declarations")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Validate documents against a class from a declaration file.
    Check(CheckArgs),

    /// List the constraint catalog.
    Kinds,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Declaration file (.yaml, .yml or .json).
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Class to validate each document against.
    #[arg(short, long)]
    pub class: String,

    /// Documents to validate.
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
}

impl Cli {
    /// Default filter directive when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "assay=debug"
        } else {
            "assay=info"
        }
    }
}
