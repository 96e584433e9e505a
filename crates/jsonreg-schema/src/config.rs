/// Controls registration and validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, object schemas reject properties they do not declare.
    pub strict_mode: bool,
    /// Maximum number of schemas loaded from a directory.
    pub max_schemas_from_directory: usize,
    /// Maximum bytes allowed per schema file loaded from a directory.
    pub max_schema_file_size: usize,
    /// Maximum bytes accepted for a single instance document.
    pub max_document_size: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_schemas_from_directory: 256,
            max_schema_file_size: 256 * 1024,
            max_document_size: None,
        }
    }
}
