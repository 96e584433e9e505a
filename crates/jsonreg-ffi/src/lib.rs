//! jsonreg-ffi: C-ABI exports over the process-wide schema registry.
//!
//! Every fallible call returns either null (success) or an owned,
//! NUL-terminated message that the host releases with [`jr_string_free`].

mod args;
pub mod boundary;
mod error;
mod schema;
mod types;

use std::os::raw::c_char;
use std::panic::AssertUnwindSafe;

pub use schema::{
    jr_register_schema, jr_schema_exists, jr_string_free, jr_validate_json,
    jr_validate_json_multiple,
};
pub use types::JrBuffer;

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => on_panic,
    }
}

/// Run a message-returning call, turning argument errors and panics into messages.
fn ffi_message_boundary(f: impl FnOnce() -> Result<Option<String>, String>) -> *mut c_char {
    let message = match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(message)) => message,
        Ok(Err(invalid)) => Some(invalid),
        Err(_) => Some(error::PANIC_MESSAGE.to_string()),
    };
    error::into_c_message(message)
}
