use std::ffi::CString;
use std::os::raw::c_char;

pub(crate) const PANIC_MESSAGE: &str = "panic across FFI boundary";

/// Hand an optional message to the host as an owned C string.
///
/// `None` becomes a null pointer, the success sentinel.
pub(crate) fn into_c_message(message: Option<String>) -> *mut c_char {
    match message {
        Some(message) => c_message(message),
        None => std::ptr::null_mut(),
    }
}

pub(crate) fn c_message(message: impl Into<String>) -> *mut c_char {
    let sanitized = message.into().replace('\0', "?");
    CString::new(sanitized)
        .unwrap_or_else(|_| c"internal error".to_owned())
        .into_raw()
}

pub(crate) fn invalid_argument(detail: impl AsRef<str>) -> String {
    format!("invalid argument: {}", detail.as_ref())
}
