use libc::c_void;

/// OpaquePointer represents pointers that the observer needs to store for the runtime but never
/// dereferences, such as a tracepoint object owned by the runtime.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OpaquePointer(*mut c_void);

// We never dereference an opaque pointer.
unsafe impl Sync for OpaquePointer {}
unsafe impl Send for OpaquePointer {}

impl Default for OpaquePointer {
    fn default() -> Self {
        Self::UNINITIALIZED
    }
}

impl OpaquePointer {
    /// Represents an uninitialized value for [`OpaquePointer`].
    pub const UNINITIALIZED: Self = Self(std::ptr::null_mut());

    /// Wrap an integer handle, such as a runtime object reference or a table index.
    pub fn from_usize(value: usize) -> Self {
        OpaquePointer(value as *mut c_void)
    }

    /// The pointer as an integer.
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Is this opaque pointer null?
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

/// A TracepointHandle identifies a GC event subscription created by the runtime.
/// The observer stores at most one and passes it back to the runtime to enable or disable it.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TracepointHandle(pub OpaquePointer);
