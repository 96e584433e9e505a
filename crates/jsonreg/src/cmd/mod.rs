use clap::{Args, Subcommand};
use std::path::PathBuf;

use jsonreg_schema::RegistryConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate documents against a named schema.
    Validate(ValidateArgs),
    /// Compile every schema in a directory and list their names.
    Check(CheckArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory of `<name>.schema.json` files.
    #[arg(long, value_name = "DIR", env = "JSONREG_SCHEMAS")]
    pub schemas: PathBuf,
    /// Name of the schema to validate against.
    #[arg(long, short = 's', value_name = "NAME")]
    pub schema: String,
    /// Reject properties that object schemas do not declare.
    #[arg(long)]
    pub strict: bool,
    /// Maximum accepted document size in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_document_size: Option<usize>,
    /// Documents to validate, reported by position.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl ValidateArgs {
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            strict_mode: self.strict,
            max_document_size: self.max_document_size,
            ..RegistryConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory of `<name>.schema.json` files.
    #[arg(value_name = "DIR", env = "JSONREG_SCHEMAS")]
    pub dir: PathBuf,
    /// Compile with closed object schemas.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
