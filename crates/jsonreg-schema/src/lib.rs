//! Named, precompiled JSON Schema registry.
//!
//! Register schemas once under a name, then validate raw JSON documents
//! against them. Failures carry the violated keyword plus URI-fragment
//! JSON pointers into both the document and the schema.
//!
//! ```
//! use jsonreg_schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::new();
//! registry
//!     .register("person", br#"{"type":"object","required":["name"]}"#)
//!     .unwrap();
//!
//! assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());
//!
//! let err = registry.validate_one("person", br#"{"age":1}"#).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "JSON Validation Failure: [required] at [#] conflicts with the schema [person] at [#/required]"
//! );
//! ```

pub mod compiled;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod parse;
pub mod pointer;
pub mod registry;
mod strict;

pub use compiled::CompiledSchema;
pub use config::RegistryConfig;
pub use diagnostic::{AggregateDiagnostic, Diagnostic, IndexedFailure};
pub use error::{ParseError, Result, SchemaError};
pub use registry::SchemaRegistry;
