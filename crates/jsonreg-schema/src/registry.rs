use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde_json::Value;

use crate::compiled::CompiledSchema;
use crate::config::RegistryConfig;
use crate::diagnostic::{AggregateDiagnostic, IndexedFailure};
use crate::error::{Result, SchemaError};
use crate::parse::{parse_document, parse_document_limited};

const SCHEMA_FILE_SUFFIX: &str = ".schema.json";

/// Name-keyed registry of compiled JSON Schemas.
///
/// Names are register-once: a name that compiled successfully is never
/// replaced or removed. Registration and validation take `&self` and may
/// run concurrently from any number of threads.
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<CompiledSchema>>>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// The process-wide registry, created empty on first use.
    pub fn global() -> &'static SchemaRegistry {
        static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();
        GLOBAL.get_or_init(SchemaRegistry::new)
    }

    /// Register a schema from raw JSON bytes.
    pub fn register(&self, name: &str, raw_schema: &[u8]) -> Result<()> {
        if name.is_empty() {
            return Err(SchemaError::InvalidName);
        }
        let document = parse_document(raw_schema)?;
        self.register_value(name, &document)
    }

    /// Register an already-parsed schema document.
    pub fn register_value(&self, name: &str, schema: &Value) -> Result<()> {
        if name.is_empty() {
            return Err(SchemaError::InvalidName);
        }
        if self.exists(name) {
            tracing::warn!(schema = name, "refusing to replace registered schema");
            return Err(SchemaError::DuplicateName(name.to_string()));
        }

        // Compile outside the lock; publish with a single insert.
        let compiled = Arc::new(CompiledSchema::compile(name, schema, &self.config)?);

        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        match schemas.entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(schema = name, "lost registration race for schema name");
                Err(SchemaError::DuplicateName(name.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(compiled);
                tracing::debug!(schema = name, "registered schema");
                Ok(())
            }
        }
    }

    /// Check whether a schema has been registered under `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn lookup(&self, name: &str) -> Option<Arc<CompiledSchema>> {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Validate one raw document against the schema registered as `name`.
    ///
    /// A malformed document is reported as a parse error even when no
    /// schema is registered under `name`.
    pub fn validate_one(&self, name: &str, raw_json: &[u8]) -> Result<()> {
        let schema = self.lookup(name);
        self.validate_with(name, schema.as_deref(), raw_json)
    }

    /// Validate an already-parsed document.
    pub fn validate_value(&self, name: &str, instance: &Value) -> Result<()> {
        let schema = self
            .lookup(name)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;
        schema.check(instance).map_err(SchemaError::from)
    }

    /// Validate every document, collecting failures by input index.
    ///
    /// Does not stop at the first failing document.
    pub fn validate_many<I, B>(
        &self,
        name: &str,
        raw_jsons: I,
    ) -> std::result::Result<(), AggregateDiagnostic>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let schema = self.lookup(name);

        let failures: Vec<IndexedFailure> = raw_jsons
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw_json)| {
                self.validate_with(name, schema.as_deref(), raw_json.as_ref())
                    .err()
                    .map(|error| IndexedFailure { index, error })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AggregateDiagnostic { failures })
        }
    }

    fn validate_with(
        &self,
        name: &str,
        schema: Option<&CompiledSchema>,
        raw_json: &[u8],
    ) -> Result<()> {
        let instance = parse_document_limited(raw_json, self.config.max_document_size)?;
        let schema = schema.ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))?;
        schema.check(&instance)?;
        Ok(())
    }

    /// Build a registry from embedded `(name, schema_json)` pairs.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        Self::from_embedded_with_config(schemas, RegistryConfig::default())
    }

    /// Build a registry from embedded pairs with explicit config.
    pub fn from_embedded_with_config(
        schemas: &[(&str, &str)],
        config: RegistryConfig,
    ) -> Result<Self> {
        let registry = Self::with_config(config);
        for (name, schema) in schemas {
            registry.register(name, schema.as_bytes())?;
        }
        Ok(registry)
    }

    /// Load every `<name>.schema.json` file in a directory.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load schemas from a directory with explicit config.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let registry = Self::with_config(config);
        let mut loaded = 0usize;

        let mut entries = std::fs::read_dir(path)
            .map_err(|err| SchemaError::LoadFailed(format!("{}: {err}", path.display())))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(name) = schema_name_from_file_name(&file_name) else {
                continue;
            };

            let entry_path = entry.path();
            let path_metadata = std::fs::symlink_metadata(&entry_path)
                .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
            let file_type = path_metadata.file_type();
            if file_type.is_symlink() {
                return Err(SchemaError::LoadFailed(format!(
                    "refusing to load schema symlink: {file_name}"
                )));
            }
            if !file_type.is_file() {
                continue;
            }

            loaded = loaded.saturating_add(1);
            if loaded > config.max_schemas_from_directory {
                return Err(SchemaError::LoadFailed(format!(
                    "schema count exceeds configured max ({}): {loaded}",
                    config.max_schemas_from_directory
                )));
            }

            let content = read_schema_file(&entry_path, &file_name, &path_metadata, &config)?;
            registry
                .register(name, &content)
                .map_err(|err| SchemaError::LoadFailed(format!("{file_name}: {err}")))?;
        }

        tracing::debug!(
            path = %path.display(),
            count = loaded,
            "loaded schema directory"
        );
        Ok(registry)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("names", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

fn schema_name_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(SCHEMA_FILE_SUFFIX)
        .filter(|name| !name.is_empty())
}

fn read_schema_file(
    entry_path: &Path,
    file_name: &str,
    path_metadata: &std::fs::Metadata,
    config: &RegistryConfig,
) -> Result<Vec<u8>> {
    let file = std::fs::File::open(entry_path).map_err(|err| {
        SchemaError::LoadFailed(format!(
            "failed opening schema {}: {err}",
            entry_path.display()
        ))
    })?;
    let opened_metadata = file
        .metadata()
        .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;

    #[cfg(unix)]
    {
        if !same_file_identity(path_metadata, &opened_metadata) {
            return Err(SchemaError::LoadFailed(format!(
                "schema file changed during load: {file_name}"
            )));
        }
    }
    #[cfg(not(unix))]
    let _ = path_metadata;

    let max_bytes = config.max_schema_file_size;
    if opened_metadata.len() > max_bytes as u64 {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large ({} bytes): {file_name}",
            opened_metadata.len()
        )));
    }

    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = Vec::new();
    file.take(read_limit)
        .read_to_end(&mut content)
        .map_err(|err| {
            SchemaError::LoadFailed(format!(
                "failed reading schema {}: {err}",
                entry_path.display()
            ))
        })?;
    if content.len() > max_bytes {
        return Err(SchemaError::LoadFailed(format!(
            "schema file too large while reading: {file_name}"
        )));
    }

    Ok(content)
}

#[cfg(unix)]
fn same_file_identity(
    path_metadata: &std::fs::Metadata,
    opened_metadata: &std::fs::Metadata,
) -> bool {
    use std::os::unix::fs::MetadataExt;
    path_metadata.dev() == opened_metadata.dev() && path_metadata.ino() == opened_metadata.ino()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::thread;

    use serde_json::json;

    use super::*;

    const PERSON_SCHEMA: &str =
        r#"{"type":"object","required":["name"],"properties":{"name":{"type":"string"}}}"#;

    fn person_registry() -> SchemaRegistry {
        let registry = SchemaRegistry::new();
        registry
            .register("person", PERSON_SCHEMA.as_bytes())
            .unwrap();
        registry
    }

    #[test]
    fn register_and_validate_person() {
        let registry = person_registry();
        assert!(registry.exists("person"));
        assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());

        let err = registry
            .validate_one("person", br#"{"age":1}"#)
            .unwrap_err();
        let diagnostic = err.diagnostic().unwrap();
        assert_eq!(diagnostic.keyword, "required");
        assert_eq!(diagnostic.instance_pointer, "#");
        assert_eq!(diagnostic.schema_pointer, "#/required");
        assert_eq!(diagnostic.schema_name, "person");
    }

    #[test]
    fn malformed_document_is_parse_error_at_zero() {
        let registry = person_registry();
        match registry.validate_one("person", b"not json") {
            Err(SchemaError::Parse(err)) => assert_eq!(err.offset, 0),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_wins_over_unknown_schema() {
        let registry = SchemaRegistry::new();
        assert!(matches!(
            registry.validate_one("missing", b"{oops"),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_registration_keeps_first_schema() {
        let registry = person_registry();
        let err = registry
            .register("person", br#"{"type":"array"}"#)
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("person".to_string()));
        assert_eq!(
            err.to_string(),
            "A schema of the name [person] already exists"
        );

        assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());
        assert!(registry.validate_one("person", b"[]").is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_check_precedes_compilation() {
        let registry = person_registry();
        assert!(matches!(
            registry.register("person", br#"{"type":"definitely-not-a-type"}"#),
            Err(SchemaError::DuplicateName(_))
        ));
    }

    #[test]
    fn malformed_schema_creates_no_entry() {
        let registry = SchemaRegistry::new();
        let err = registry.register("broken", b"{\"type\":").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
        assert!(err
            .to_string()
            .starts_with("JSON Parsing Error at character "));
        assert!(!registry.exists("broken"));
        assert!(registry.is_empty());

        // The name stays available after a failed attempt.
        registry
            .register("broken", PERSON_SCHEMA.as_bytes())
            .unwrap();
        assert!(registry.exists("broken"));
    }

    #[test]
    fn uncompilable_schema_creates_no_entry() {
        let registry = SchemaRegistry::new();
        assert!(matches!(
            registry.register("bad", br#"{"type":"definitely-not-a-type"}"#),
            Err(SchemaError::CompileFailed { .. })
        ));
        assert!(!registry.exists("bad"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.register("", PERSON_SCHEMA.as_bytes()),
            Err(SchemaError::InvalidName)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_schema_always_fails() {
        let registry = person_registry();
        for doc in [&b"{}"[..], b"[]", b"1", br#"{"name":"Ada"}"#] {
            assert_eq!(
                registry.validate_one("nobody", doc),
                Err(SchemaError::UnknownSchema("nobody".to_string()))
            );
        }
        assert_eq!(
            SchemaError::UnknownSchema("nobody".to_string()).to_string(),
            "Schema [nobody] does not exist"
        );
    }

    #[test]
    fn repeated_validation_is_deterministic() {
        let registry = person_registry();
        let first = registry.validate_one("person", br#"{"age":1}"#);
        for _ in 0..5 {
            assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());
            assert_eq!(registry.validate_one("person", br#"{"age":1}"#), first);
        }
    }

    #[test]
    fn validate_value_skips_parsing() {
        let registry = person_registry();
        assert!(registry
            .validate_value("person", &json!({ "name": "Ada" }))
            .is_ok());
        assert!(matches!(
            registry.validate_value("person", &json!({ "name": 3 })),
            Err(SchemaError::ValidationFailed(_))
        ));
        assert!(matches!(
            registry.validate_value("nobody", &json!({})),
            Err(SchemaError::UnknownSchema(_))
        ));
    }

    #[test]
    fn validate_many_reports_failing_indices_in_order() {
        let registry = person_registry();
        let docs: [&[u8]; 4] = [
            br#"{"name":"Ada"}"#,
            br#"{"age":1}"#,
            br#"{"name":"Grace"}"#,
            br#"{"name":false}"#,
        ];

        let aggregate = registry.validate_many("person", docs).unwrap_err();
        assert_eq!(aggregate.indices(), vec![1, 3]);

        let text = aggregate.to_string();
        let entries: Vec<&str> = text.split(", Index ").collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("Index [1]: JSON Validation Failure: [required]"));
        assert!(entries[1].starts_with("[3]: JSON Validation Failure: [type] at [#/name]"));
    }

    #[test]
    fn validate_many_batch_text() {
        let registry = person_registry();
        let aggregate = registry
            .validate_many("person", [r#"{"name":"Ada"}"#, r#"{"age":1}"#])
            .unwrap_err();
        assert_eq!(
            aggregate.to_string(),
            "Index [1]: JSON Validation Failure: [required] at [#] conflicts with the schema [person] at [#/required]"
        );
    }

    #[test]
    fn validate_many_all_valid_and_empty_batches_succeed() {
        let registry = person_registry();
        assert!(registry
            .validate_many("person", [r#"{"name":"a"}"#, r#"{"name":"b"}"#])
            .is_ok());
        assert!(registry
            .validate_many("person", Vec::<Vec<u8>>::new())
            .is_ok());
    }

    #[test]
    fn validate_many_unknown_schema_fails_every_element() {
        let registry = SchemaRegistry::new();
        let aggregate = registry
            .validate_many("nobody", ["{}", "not json", "[]"])
            .unwrap_err();
        assert_eq!(aggregate.indices(), vec![0, 1, 2]);
        assert!(matches!(
            aggregate.failures[1].error,
            SchemaError::Parse(_)
        ));
        assert_eq!(
            aggregate.failures[2].error,
            SchemaError::UnknownSchema("nobody".to_string())
        );
    }

    #[test]
    fn document_size_limit_is_enforced() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            max_document_size: Some(16),
            ..RegistryConfig::default()
        });
        registry
            .register("person", PERSON_SCHEMA.as_bytes())
            .unwrap();

        assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());
        assert!(matches!(
            registry.validate_one("person", br#"{"name":"Ada Lovelace"}"#),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn concurrent_registration_admits_exactly_one_winner() {
        let registry = Arc::new(SchemaRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let schema = format!(r#"{{"type":"object","title":"t{i}"}}"#);
                    registry.register("shared", schema.as_bytes()).is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(registry.names(), vec!["shared".to_string()]);
    }

    #[test]
    fn concurrent_validation_during_registration() {
        let registry = Arc::new(person_registry());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());
                        let late = registry.validate_one("late", b"{}");
                        assert!(matches!(
                            late,
                            Ok(()) | Err(SchemaError::UnknownSchema(_))
                        ));
                    }
                })
            })
            .collect();

        registry.register("late", br#"{"type":"object"}"#).unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert!(registry.validate_one("late", b"{}").is_ok());
    }

    #[test]
    fn global_registry_is_shared() {
        let name = "registry-tests-global";
        if !SchemaRegistry::global().exists(name) {
            let _ = SchemaRegistry::global().register(name, br#"{"type":"null"}"#);
        }
        assert!(SchemaRegistry::global().exists(name));
        assert!(SchemaRegistry::global().validate_one(name, b"null").is_ok());
    }

    #[test]
    fn from_embedded_loads_schemas() {
        let registry = SchemaRegistry::from_embedded(&[
            ("person", PERSON_SCHEMA),
            ("flags", r#"{"type":"array","items":{"type":"boolean"}}"#),
        ])
        .unwrap();
        assert_eq!(registry.names(), vec!["flags", "person"]);
        assert!(registry.validate_one("flags", b"[true,false]").is_ok());
        assert!(registry.validate_one("flags", b"[true,1]").is_err());
    }

    #[test]
    fn from_embedded_with_config_applies_config() {
        let config = RegistryConfig {
            strict_mode: true,
            max_document_size: Some(32),
            ..RegistryConfig::default()
        };
        let registry = SchemaRegistry::from_embedded_with_config(
            &[("point", r#"{"type":"object","properties":{"x":{"type":"integer"}}}"#)],
            config,
        )
        .unwrap();
        assert!(registry.config().strict_mode);

        let err = registry
            .validate_one("point", br#"{"x":1,"y":2}"#)
            .unwrap_err();
        assert_eq!(err.diagnostic().unwrap().keyword, "additionalProperties");

        let err = registry
            .validate_one("point", br#"{"x":1000000000000000000000000000000}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::Parse(ref parse) if parse.offset == 32));
    }

    #[test]
    fn external_ref_registration_creates_no_entry() {
        let registry = SchemaRegistry::new();
        for (name, schema) in [
            ("file-ref", r#"{"$ref":"file:///tmp/jsonreg-external/ext.json"}"#),
            ("http-ref", r#"{"$ref":"http://10.255.255.1/ext.json"}"#),
        ] {
            let err = registry.register(name, schema.as_bytes()).unwrap_err();
            assert!(matches!(err, SchemaError::CompileFailed { .. }), "{err}");
            assert!(!registry.exists(name));
        }
        assert!(registry.is_empty());
    }

    fn make_temp_schema_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "jsonreg-schema-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_schema(dir: &Path, file_name: &str, contents: &str) {
        std::fs::write(dir.join(file_name), contents.as_bytes()).unwrap();
    }

    #[test]
    fn from_directory_loads_schema_files_only() {
        let dir = make_temp_schema_dir("from-directory");
        write_schema(&dir, "person.schema.json", PERSON_SCHEMA);
        write_schema(&dir, "ids.schema.json", r#"{"type":"array","items":{"type":"integer"}}"#);
        write_schema(&dir, "notes.json", "not even json");
        std::fs::create_dir_all(dir.join("nested.schema.json")).unwrap();

        let registry = SchemaRegistry::from_directory(&dir).unwrap();
        assert_eq!(registry.names(), vec!["ids", "person"]);
        assert!(registry.validate_one("ids", b"[1,2,3]").is_ok());
        assert!(registry.validate_one("person", br#"{"name":"Ada"}"#).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_directory_reports_malformed_file() {
        let dir = make_temp_schema_dir("malformed");
        write_schema(&dir, "broken.schema.json", "{ nope");

        match SchemaRegistry::from_directory(&dir) {
            Err(SchemaError::LoadFailed(message)) => {
                assert!(message.starts_with("broken.schema.json: JSON Parsing Error"));
            }
            other => panic!("expected load failure, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = std::env::temp_dir().join(format!(
            "jsonreg-schema-missing-{}",
            std::process::id()
        ));
        assert!(matches!(
            SchemaRegistry::from_directory(&dir),
            Err(SchemaError::LoadFailed(_))
        ));
    }

    #[test]
    fn schema_count_limit_is_enforced() {
        let dir = make_temp_schema_dir("schema-count-limit");
        write_schema(&dir, "a.schema.json", PERSON_SCHEMA);
        write_schema(&dir, "b.schema.json", PERSON_SCHEMA);

        let config = RegistryConfig {
            max_schemas_from_directory: 1,
            ..RegistryConfig::default()
        };
        let result = SchemaRegistry::from_directory_with_config(&dir, config);
        assert!(matches!(result, Err(SchemaError::LoadFailed(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_file_size_limit_is_enforced() {
        let dir = make_temp_schema_dir("schema-size-limit");
        write_schema(&dir, "person.schema.json", PERSON_SCHEMA);

        let config = RegistryConfig {
            max_schema_file_size: 8,
            ..RegistryConfig::default()
        };
        let result = SchemaRegistry::from_directory_with_config(&dir, config);
        assert!(matches!(result, Err(SchemaError::LoadFailed(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn directory_config_carries_strict_mode() {
        let dir = make_temp_schema_dir("strict");
        write_schema(
            &dir,
            "point.schema.json",
            r#"{"properties":{"x":{"type":"number"}},"required":["x"]}"#,
        );

        let config = RegistryConfig {
            strict_mode: true,
            ..RegistryConfig::default()
        };
        let registry = SchemaRegistry::from_directory_with_config(&dir, config).unwrap();
        assert_eq!(registry.config(), &config);
        assert!(registry.validate_one("point", br#"{"x":1}"#).is_ok());
        assert!(registry.validate_one("point", br#"{"x":1,"y":2}"#).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_schema_is_rejected() {
        let dir = make_temp_schema_dir("symlink-schema");
        let target = dir.join("target.json");
        std::fs::write(&target, PERSON_SCHEMA.as_bytes()).unwrap();
        std::os::unix::fs::symlink(&target, dir.join("person.schema.json")).unwrap();

        let result = SchemaRegistry::from_directory(&dir);
        assert!(matches!(result, Err(SchemaError::LoadFailed(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_names_come_from_file_names() {
        assert_eq!(schema_name_from_file_name("person.schema.json"), Some("person"));
        assert_eq!(
            schema_name_from_file_name("order.v2.schema.json"),
            Some("order.v2")
        );
        assert_eq!(schema_name_from_file_name(".schema.json"), None);
        assert_eq!(schema_name_from_file_name("person.json"), None);
    }
}
