//! Whole-buffer JSON parsing with byte-offset error reporting.

use serde_json::Value;

use crate::error::ParseError;

/// Parse a single JSON document from `input`.
pub fn parse_document(input: &[u8]) -> Result<Value, ParseError> {
    serde_json::from_slice(input).map_err(|err| ParseError::from_serde(&err, input))
}

/// Parse `input`, refusing buffers longer than `max_size` bytes.
pub fn parse_document_limited(input: &[u8], max_size: Option<usize>) -> Result<Value, ParseError> {
    if let Some(max) = max_size {
        if input.len() > max {
            return Err(ParseError {
                offset: max,
                reason: format!("document exceeds maximum size of {max} bytes"),
            });
        }
    }
    parse_document(input)
}

impl ParseError {
    pub(crate) fn from_serde(err: &serde_json::Error, input: &[u8]) -> Self {
        let reason = error_reason(err);
        let mut offset = error_offset(err, input);
        if points_inside_literal(&reason) {
            offset = rewind_to_token_start(input, offset);
        }
        Self { offset, reason }
    }
}

fn error_reason(err: &serde_json::Error) -> String {
    let text = err.to_string();
    if err.line() == 0 {
        return text;
    }

    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match text.strip_suffix(&suffix) {
        Some(reason) => reason.to_string(),
        None => text,
    }
}

fn error_offset(err: &serde_json::Error, input: &[u8]) -> usize {
    if err.is_eof() {
        return input.len();
    }

    let line = err.line();
    if line == 0 {
        return 0;
    }

    // serde_json reports 1-based line and column; column counts bytes.
    let line_start = if line == 1 {
        0
    } else {
        input
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte == b'\n')
            .nth(line - 2)
            .map(|(idx, _)| idx + 1)
            .unwrap_or(0)
    };

    line_start
        .saturating_add(err.column().saturating_sub(1))
        .min(input.len())
}

/// Errors raised part way through a bare word such as `tru` or `nope`.
///
/// Structural errors after a complete literal (`truex`, `[true,falsey]`)
/// already point at the offending byte and are left alone.
fn points_inside_literal(reason: &str) -> bool {
    reason.starts_with("expected ident") || reason.starts_with("expected value")
}

/// Move back to the first byte of a bare literal such as `tru` or `not`.
fn rewind_to_token_start(input: &[u8], mut offset: usize) -> usize {
    while offset > 0 && input[offset - 1].is_ascii_alphabetic() {
        offset -= 1;
    }
    offset
}
