//! JSON pointer helpers for diagnostics.
//!
//! Pointers arrive from the validation engine in plain RFC 6901 form
//! (`""`, `/properties/name`) and are rendered as URI fragments
//! (`#`, `#/properties/name`).

use std::fmt::Write;

/// Render a JSON pointer as a URI fragment.
pub fn to_uri_fragment(pointer: &str) -> String {
    let mut out = String::with_capacity(pointer.len() + 1);
    out.push('#');
    for byte in pointer.bytes() {
        if is_fragment_safe(byte) {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

fn is_fragment_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'/')
}

/// Split a JSON pointer into unescaped reference tokens.
pub fn segments(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// What the next pointer segment denotes while walking a schema location.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Keyword,
    MemberName,
    ArrayIndex,
    ItemsOrKeyword,
    Value,
}

const NAMED_SUBSCHEMAS: [&str; 6] = [
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
    "dependencies",
];

const INDEXED_SUBSCHEMAS: [&str; 4] = ["allOf", "anyOf", "oneOf", "prefixItems"];

const SINGLE_SUBSCHEMAS: [&str; 13] = [
    "not",
    "if",
    "then",
    "else",
    "contains",
    "propertyNames",
    "additionalProperties",
    "additionalItems",
    "unevaluatedProperties",
    "unevaluatedItems",
    "$ref",
    "$dynamicRef",
    "$recursiveRef",
];

/// Derive the violated keyword from the schema location of a failure.
///
/// The keyword is the last keyword-position segment. A location that ends on
/// a member name or array index points at a boolean `false` sub-schema.
pub fn keyword_from_schema_path(pointer: &str) -> String {
    let mut slot = Slot::Keyword;
    let mut keyword: Option<String> = None;
    let mut ends_on_subschema = true;

    for segment in segments(pointer) {
        match slot {
            Slot::Keyword => {
                slot = slot_after(&segment);
                keyword = Some(segment);
                ends_on_subschema = false;
            }
            Slot::ItemsOrKeyword if is_index(&segment) => {
                slot = Slot::Keyword;
                ends_on_subschema = true;
            }
            Slot::ItemsOrKeyword => {
                slot = slot_after(&segment);
                keyword = Some(segment);
                ends_on_subschema = false;
            }
            Slot::MemberName | Slot::ArrayIndex => {
                slot = Slot::Keyword;
                ends_on_subschema = true;
            }
            Slot::Value => {}
        }
    }

    match keyword {
        Some(keyword) if !ends_on_subschema => keyword,
        _ => "false".to_string(),
    }
}

fn slot_after(keyword: &str) -> Slot {
    if NAMED_SUBSCHEMAS.contains(&keyword) {
        Slot::MemberName
    } else if INDEXED_SUBSCHEMAS.contains(&keyword) {
        Slot::ArrayIndex
    } else if keyword == "items" {
        Slot::ItemsOrKeyword
    } else if SINGLE_SUBSCHEMAS.contains(&keyword) {
        Slot::Keyword
    } else {
        Slot::Value
    }
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
