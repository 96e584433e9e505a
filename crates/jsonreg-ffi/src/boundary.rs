//! Host-facing adapter: maps registry results onto optional error strings.
//!
//! `None` is the success sentinel. Hosts that cannot represent an absent
//! string use the empty string for the same meaning; every failure message
//! produced here is non-empty.

use jsonreg_schema::SchemaRegistry;

/// Register `raw_schema` under `name`.
pub fn register_schema(registry: &SchemaRegistry, name: &str, raw_schema: &[u8]) -> Option<String> {
    registry.register(name, raw_schema).err().map(|err| err.to_string())
}

/// True iff a schema was registered under exactly `name`.
pub fn schema_exists(registry: &SchemaRegistry, name: &str) -> bool {
    registry.exists(name)
}

/// Validate one document.
pub fn validate_json(registry: &SchemaRegistry, name: &str, raw_json: &[u8]) -> Option<String> {
    registry
        .validate_one(name, raw_json)
        .err()
        .map(|err| err.to_string())
}

/// Validate a batch; failures are reported as `Index [i]: ...` joined by `", "`.
pub fn validate_json_multiple<B: AsRef<[u8]>>(
    registry: &SchemaRegistry,
    name: &str,
    raw_jsons: &[B],
) -> Option<String> {
    registry
        .validate_many(name, raw_jsons)
        .err()
        .map(|aggregate| aggregate.to_string())
}
