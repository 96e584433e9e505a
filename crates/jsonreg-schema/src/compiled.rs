use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::diagnostic::Diagnostic;
use crate::error::{Result, SchemaError};
use crate::strict::close_objects;

/// Refuses every external `$ref` so compilation never touches the
/// filesystem or the network.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<String>,
    ) -> std::result::Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external reference [{uri}] is not resolved").into())
    }
}

fn build_validator(name: &str, document: &Value) -> Result<Validator> {
    jsonschema::options()
        .with_retriever(OfflineRetriever)
        .build(document)
        .map_err(|err| SchemaError::CompileFailed {
            name: name.to_string(),
            reason: err.to_string(),
        })
}

/// A schema compiled once at registration and never mutated afterwards.
pub struct CompiledSchema {
    name: String,
    validator: Validator,
}

impl CompiledSchema {
    /// Compile `document` under `name`, applying strict mode if configured.
    pub fn compile(name: &str, document: &Value, config: &RegistryConfig) -> Result<Self> {
        let validator = if config.strict_mode {
            let mut closed = document.clone();
            close_objects(&mut closed);
            build_validator(name, &closed)?
        } else {
            build_validator(name, document)?
        };

        Ok(Self {
            name: name.to_string(),
            validator,
        })
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Walk `instance` and report the first violation, if any.
    ///
    /// The engine yields errors in a fixed order for a given schema and
    /// document, so the reported violation is deterministic.
    pub fn check(&self, instance: &Value) -> std::result::Result<(), Diagnostic> {
        match self.validator.iter_errors(instance).next() {
            Some(error) => Err(Diagnostic::from_validation_error(&self.name, &error)),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
