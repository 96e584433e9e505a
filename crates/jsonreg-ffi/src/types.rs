/// A borrowed byte buffer supplied by the host for one call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct JrBuffer {
    pub data: *const u8,
    pub len: usize,
}

impl Default for JrBuffer {
    fn default() -> Self {
        Self {
            data: std::ptr::null(),
            len: 0,
        }
    }
}
