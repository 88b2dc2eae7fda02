use crate::errors::FsResult;
use crate::filename::ScratchPath;
use std::fmt;
use std::fs;

/// Existence and removal primitives used by conditional removal.
pub trait FileSystem: Send + Sync + fmt::Debug {
    fn exists(&self, path: &ScratchPath) -> FsResult<bool>;
    fn remove(&self, path: &ScratchPath) -> FsResult<()>;
}

/// The host filesystem through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn exists(&self, path: &ScratchPath) -> FsResult<bool> {
        Ok(path.to_path_buf().try_exists()?)
    }

    fn remove(&self, path: &ScratchPath) -> FsResult<()> {
        fs::remove_file(path.to_path_buf())?;
        Ok(())
    }
}
