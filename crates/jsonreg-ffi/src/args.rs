//! Host argument conversion.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::invalid_argument;
use crate::types::JrBuffer;

/// Convert a required C string argument into UTF-8.
///
/// # Safety
/// If non-null, `value` must point to a valid NUL-terminated C string.
pub(crate) unsafe fn required_str_arg<'a>(
    value: *const c_char,
    name: &str,
) -> Result<&'a str, String> {
    if value.is_null() {
        return Err(invalid_argument(format!("{name} cannot be null")));
    }

    let as_cstr = {
        // SAFETY: The caller guarantees `value` points to a valid NUL-terminated C string.
        unsafe { CStr::from_ptr(value) }
    };

    as_cstr
        .to_str()
        .map_err(|_| invalid_argument(format!("{name} must be valid UTF-8")))
}

/// Convert a byte pointer + length into a slice.
///
/// # Safety
/// If `len > 0`, `data` must be non-null and readable for `len` bytes.
pub(crate) unsafe fn bytes_arg<'a>(
    data: *const u8,
    len: usize,
    name: &str,
) -> Result<&'a [u8], String> {
    if len == 0 {
        return Ok(&[]);
    }
    if data.is_null() {
        return Err(invalid_argument(format!("{name} cannot be null when len > 0")));
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Ok(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Convert an array of host buffers into borrowed slices.
///
/// # Safety
/// If `count > 0`, `buffers` must be readable for `count` elements, and each
/// element must satisfy the contract of [`bytes_arg`].
pub(crate) unsafe fn buffers_arg<'a>(
    buffers: *const JrBuffer,
    count: usize,
) -> Result<Vec<&'a [u8]>, String> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if buffers.is_null() {
        return Err(invalid_argument("docs cannot be null when count > 0"));
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    let buffers = unsafe { std::slice::from_raw_parts(buffers, count) };
    buffers
        .iter()
        .enumerate()
        .map(|(index, buffer)| {
            // SAFETY: Each element carries the same contract as a single buffer argument.
            unsafe { bytes_arg(buffer.data, buffer.len, &format!("docs[{index}].data")) }
        })
        .collect()
}
