//! Named JSON Schema registry and validator.
//!
//! Register schemas once under a name, then validate raw JSON documents
//! against them, one at a time or as a batch that reports every failing
//! index.
//!
//! # Crate Structure
//!
//! - [`schema`]: registry, parsing, validation, and diagnostics
//!
//! The `jsonreg` binary (behind the `cli` feature) loads a directory of
//! `<name>.schema.json` files and validates documents from disk.

/// Re-export schema registry types.
pub mod schema {
    pub use jsonreg_schema::*;
}

pub use jsonreg_schema::{
    AggregateDiagnostic, Diagnostic, ParseError, RegistryConfig, SchemaError, SchemaRegistry,
};
