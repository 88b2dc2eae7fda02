//! Path builder.
//!
//! A built path is sized exactly once from the input lengths, allocated in a
//! single fallible reservation and then filled. It never grows after that.

use crate::errors::{FsError, FsResult};
use crate::platform::PathRules;
use std::ffi::CStr;
use std::fmt;
use std::path::PathBuf;

/// An owned, NUL-terminated path produced by [`build_path`].
#[derive(Clone, PartialEq, Eq)]
pub struct ScratchPath {
    buf: Box<[u8]>,
}

impl ScratchPath {
    /// Path bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// `None` when the name carried an interior NUL.
    pub fn as_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(&self.buf).ok()
    }

    /// Bytes held by the allocation, terminator included.
    pub fn allocated_len(&self) -> usize {
        self.buf.len()
    }

    #[cfg(unix)]
    pub fn to_path_buf(&self) -> PathBuf {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(OsStr::from_bytes(self.as_bytes()))
    }

    #[cfg(not(unix))]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(String::from_utf8_lossy(self.as_bytes()).into_owned())
    }
}

impl fmt::Display for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScratchPath").field(&self.to_string()).finish()
    }
}

/// Allocation size for a path, terminator included. `None` on overflow.
pub fn required_len(home_len: usize, name_len: usize, absolute: bool) -> Option<usize> {
    if absolute {
        name_len.checked_add(1)
    } else {
        home_len.checked_add(1)?.checked_add(name_len)?.checked_add(1)
    }
}

/// Source of exact-size scratch buffers for built paths.
pub trait ScratchAlloc {
    /// An empty buffer able to hold `len` bytes without growing.
    fn alloc_exact(&self, len: usize) -> FsResult<Vec<u8>>;
}

/// The global allocator, through a fallible reservation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAlloc;

impl ScratchAlloc for HeapAlloc {
    fn alloc_exact(&self, len: usize) -> FsResult<Vec<u8>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| FsError::OutOfMemory { requested: len })?;
        Ok(buf)
    }
}

/// Resolve `name` against `home`.
///
/// An absolute name is duplicated as is and `home` is ignored. Anything else
/// becomes `home`, the platform separator, then `name`. The length of `name`
/// is the slice length; interior NULs are copied verbatim.
pub fn build_path(home: &[u8], name: &[u8], rules: &dyn PathRules) -> FsResult<ScratchPath> {
    build_path_in(home, name, rules, &HeapAlloc)
}

/// [`build_path`] drawing its buffer from `alloc`.
pub fn build_path_in(
    home: &[u8],
    name: &[u8],
    rules: &dyn PathRules,
    alloc: &dyn ScratchAlloc,
) -> FsResult<ScratchPath> {
    let absolute = rules.is_absolute(name);
    let len = required_len(home.len(), name.len(), absolute)
        .ok_or(FsError::OutOfMemory { requested: usize::MAX })?;

    let mut buf = alloc.alloc_exact(len)?;
    if !absolute {
        buf.extend_from_slice(home);
        buf.push(rules.separator());
    }
    buf.extend_from_slice(name);
    buf.push(0);
    debug_assert_eq!(buf.len(), len);

    Ok(ScratchPath { buf: buf.into_boxed_slice() })
}

/// Same as [`build_path`], measuring a NUL-terminated name first.
pub fn build_path_cstr(home: &[u8], name: &CStr, rules: &dyn PathRules) -> FsResult<ScratchPath> {
    build_path(home, name.to_bytes(), rules)
}
