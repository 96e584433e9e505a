use std::fmt;

use jsonschema::ValidationError;

use crate::error::SchemaError;
use crate::pointer::{keyword_from_schema_path, to_uri_fragment};

/// Why a well-formed document was rejected by a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "JSON Validation Failure: [{keyword}] at [{instance_pointer}] conflicts with the schema [{schema_name}] at [{schema_pointer}]"
)]
pub struct Diagnostic {
    /// The schema keyword that was violated.
    pub keyword: String,
    /// URI-fragment pointer to the failing node in the document.
    pub instance_pointer: String,
    /// URI-fragment pointer to the violated constraint in the schema.
    pub schema_pointer: String,
    /// Registered name of the schema.
    pub schema_name: String,
}

impl Diagnostic {
    pub(crate) fn from_validation_error(schema_name: &str, error: &ValidationError<'_>) -> Self {
        let schema_path = error.schema_path().to_string();
        let instance_path = error.instance_path().to_string();

        Self {
            keyword: keyword_from_schema_path(&schema_path),
            instance_pointer: to_uri_fragment(&instance_path),
            schema_pointer: to_uri_fragment(&schema_path),
            schema_name: schema_name.to_string(),
        }
    }
}

/// One failed element of a batch, tagged with its input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFailure {
    pub index: usize,
    pub error: SchemaError,
}

impl fmt::Display for IndexedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index [{}]: {}", self.index, self.error)
    }
}

/// Every failure from a batch validation, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateDiagnostic {
    pub failures: Vec<IndexedFailure>,
}

impl AggregateDiagnostic {
    /// Indices of the documents that failed.
    pub fn indices(&self) -> Vec<usize> {
        self.failures.iter().map(|failure| failure.index).collect()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for AggregateDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, failure) in self.failures.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateDiagnostic {}
