use std::io;
use thiserror::Error;

/// Code reported when the platform gives no OS error number.
pub const UNKNOWN_OS_ERROR: i32 = -31800;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("out of memory allocating {requested} bytes for a path")]
    OutOfMemory { requested: usize },
    #[error("i/o error (os error {code}): {source}")]
    Io {
        code: i32,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub fn code(&self) -> &'static str {
        match self {
            FsError::OutOfMemory { .. } => "OutOfMemory",
            FsError::Io { .. } => "IoError",
        }
    }

    /// The platform error number carried by an I/O failure.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            FsError::OutOfMemory { .. } => None,
            FsError::Io { code, .. } => Some(*code),
        }
    }
}

impl From<io::Error> for FsError {
    fn from(source: io::Error) -> Self {
        let code = source.raw_os_error().unwrap_or(UNKNOWN_OS_ERROR);
        FsError::Io { code, source }
    }
}

pub type FsResult<T> = Result<T, FsError>;
