use std::fmt;
use std::io;
use std::path::Path;

use jsonreg_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(path: &Path, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{}: {err}", path.display()))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match err {
        SchemaError::Parse(_)
        | SchemaError::CompileFailed { .. }
        | SchemaError::ValidationFailed(_) => DATA_INVALID,
        SchemaError::UnknownSchema(_) | SchemaError::InvalidName => USAGE,
        SchemaError::DuplicateName(_) | SchemaError::LoadFailed(_) => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_errors_map_to_exit_codes() {
        let err = schema_error("lookup", SchemaError::UnknownSchema("x".to_string()));
        assert_eq!(err.code, USAGE);
        assert_eq!(err.to_string(), "lookup: Schema [x] does not exist");

        let err = schema_error("load", SchemaError::LoadFailed("boom".to_string()));
        assert_eq!(err.code, FAILURE);

        let err = schema_error(
            "compile",
            SchemaError::CompileFailed {
                name: "a".to_string(),
                reason: "bad".to_string(),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn missing_file_is_failure() {
        let err = io_error(
            Path::new("/nope"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code, FAILURE);
        assert!(err.message.starts_with("/nope: "));
    }
}
