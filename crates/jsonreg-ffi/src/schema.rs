use std::ffi::CString;
use std::os::raw::c_char;

use jsonreg_schema::SchemaRegistry;

use crate::args::{buffers_arg, bytes_arg, required_str_arg};
use crate::boundary;
use crate::types::JrBuffer;

/// Register a schema in the process-wide registry.
///
/// Returns null on success, or an owned error string to be released with
/// `jr_string_free`.
///
/// # Safety
/// `name` must be a valid NUL-terminated C string. If `len > 0`, `data` must
/// be non-null and readable for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn jr_register_schema(
    name: *const c_char,
    data: *const u8,
    len: usize,
) -> *mut c_char {
    crate::ffi_message_boundary(|| {
        // SAFETY: We validate null and UTF-8 in helper.
        let name = unsafe { required_str_arg(name, "name") }?;
        // SAFETY: We validate pointer/length pairing in helper.
        let raw_schema = unsafe { bytes_arg(data, len, "data") }?;
        Ok(boundary::register_schema(
            SchemaRegistry::global(),
            name,
            raw_schema,
        ))
    })
}

/// Check whether a schema name is registered.
///
/// # Safety
/// `name` must be null or a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn jr_schema_exists(name: *const c_char) -> bool {
    crate::ffi_boundary(false, || {
        // SAFETY: We validate null and UTF-8 in helper.
        match unsafe { required_str_arg(name, "name") } {
            Ok(name) => boundary::schema_exists(SchemaRegistry::global(), name),
            Err(_) => false,
        }
    })
}

/// Validate one document against a registered schema.
///
/// Returns null on success, or an owned error string.
///
/// # Safety
/// Same contract as `jr_register_schema`.
#[no_mangle]
pub unsafe extern "C" fn jr_validate_json(
    name: *const c_char,
    data: *const u8,
    len: usize,
) -> *mut c_char {
    crate::ffi_message_boundary(|| {
        // SAFETY: We validate null and UTF-8 in helper.
        let name = unsafe { required_str_arg(name, "name") }?;
        // SAFETY: We validate pointer/length pairing in helper.
        let raw_json = unsafe { bytes_arg(data, len, "data") }?;
        Ok(boundary::validate_json(
            SchemaRegistry::global(),
            name,
            raw_json,
        ))
    })
}

/// Validate every document in `docs`, reporting all failing indices.
///
/// Returns null when every document is valid, or an owned error string.
///
/// # Safety
/// `name` must be a valid NUL-terminated C string. If `count > 0`, `docs`
/// must be readable for `count` elements, each a valid buffer.
#[no_mangle]
pub unsafe extern "C" fn jr_validate_json_multiple(
    name: *const c_char,
    docs: *const JrBuffer,
    count: usize,
) -> *mut c_char {
    crate::ffi_message_boundary(|| {
        // SAFETY: We validate null and UTF-8 in helper.
        let name = unsafe { required_str_arg(name, "name") }?;
        // SAFETY: We validate the array and each element in helper.
        let raw_jsons = unsafe { buffers_arg(docs, count) }?;
        tracing::trace!(schema = name, count, "validating batch");
        Ok(boundary::validate_json_multiple(
            SchemaRegistry::global(),
            name,
            &raw_jsons,
        ))
    })
}

/// Release a string returned by any `jr_*` function.
///
/// # Safety
/// `message` must be null or a pointer returned by this library that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn jr_string_free(message: *mut c_char) {
    crate::ffi_boundary((), || {
        if message.is_null() {
            return;
        }
        // SAFETY: Caller guarantees this pointer came from CString::into_raw in this library.
        unsafe {
            drop(CString::from_raw(message));
        }
    });
}
