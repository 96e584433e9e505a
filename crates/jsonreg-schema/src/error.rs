use crate::diagnostic::Diagnostic;

/// The supplied bytes are not well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSON Parsing Error at character {offset}: {reason}")]
pub struct ParseError {
    /// Byte offset of the offending token.
    pub offset: usize,
    /// Parser message without location suffix.
    pub reason: String,
}

/// Errors produced by registration, lookup, and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Schema or instance bytes are not valid JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A schema is already registered under this name.
    #[error("A schema of the name [{0}] already exists")]
    DuplicateName(String),

    /// No schema is registered under this name.
    #[error("Schema [{0}] does not exist")]
    UnknownSchema(String),

    /// The document is well-formed but violates the schema.
    #[error(transparent)]
    ValidationFailed(#[from] Diagnostic),

    /// The document parsed but is not a usable JSON Schema.
    #[error("failed to compile schema [{name}]: {reason}")]
    CompileFailed { name: String, reason: String },

    /// Schema names must be non-empty.
    #[error("schema name cannot be empty")]
    InvalidName,

    /// A schema directory could not be loaded.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),
}

impl SchemaError {
    /// The validation diagnostic, if this is a document rejection.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            SchemaError::ValidationFailed(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
