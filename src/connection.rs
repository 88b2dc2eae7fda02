//! Connection context: the home directory and the collaborators every
//! name-based operation resolves through.

use crate::config::Config;
use crate::errors::FsResult;
use crate::filename::{build_path, build_path_cstr, ScratchPath};
use crate::fs::{FileSystem, HostFs};
use crate::handle::FileHandle;
use crate::platform::{NativeRules, PathRules};
use std::ffi::CStr;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Connection {
    home: Arc<[u8]>,
    rules: Arc<dyn PathRules>,
    fs: Arc<dyn FileSystem>,
}

impl Connection {
    /// Connection on the host filesystem with native path rules.
    pub fn new(home: impl AsRef<Path>) -> Self {
        Self::with_parts(path_bytes(home.as_ref()), Arc::new(NativeRules::default()), Arc::new(HostFs))
    }

    pub fn with_parts(home: impl Into<Arc<[u8]>>, rules: Arc<dyn PathRules>, fs: Arc<dyn FileSystem>) -> Self {
        Self { home: home.into(), rules, fs }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        cfg.validate()?;
        let home = cfg.resolved_home()?;
        debug!(home = %home.display(), "connection home set");
        Ok(Self::new(home))
    }

    pub fn home(&self) -> &[u8] {
        &self.home
    }

    pub fn rules(&self) -> &dyn PathRules {
        self.rules.as_ref()
    }

    /// Resolve a name whose length is the slice length.
    pub fn nfilename(&self, name: &[u8]) -> FsResult<ScratchPath> {
        build_path(&self.home, name, self.rules.as_ref())
    }

    pub fn filename(&self, name: &str) -> FsResult<ScratchPath> {
        self.nfilename(name.as_bytes())
    }

    pub fn filename_cstr(&self, name: &CStr) -> FsResult<ScratchPath> {
        build_path_cstr(&self.home, name, self.rules.as_ref())
    }

    /// Remove `name` if present. A missing file is success.
    pub fn remove_if_exists(&self, name: impl AsRef<[u8]>) -> FsResult<()> {
        let path = self.nfilename(name.as_ref())?;
        if self.fs.exists(&path)? {
            debug!(path = %path, "removing file");
            self.fs.remove(&path)?;
        }
        Ok(())
    }

    /// Open `name` for writing, creating or truncating it.
    pub fn open_for_write(&self, name: impl AsRef<[u8]>) -> FsResult<FileHandle> {
        let path = self.nfilename(name.as_ref())?;
        let opened = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.to_path_buf());
        match opened {
            Ok(file) => {
                debug!(path = %path, "file opened for write");
                drop(path);
                Ok(FileHandle::from_stream(BufWriter::new(file)))
            }
            Err(e) => {
                warn!(path = %path, code = ?e.raw_os_error(), error = %e, "open for write failed");
                drop(path);
                Err(e.into())
            }
        }
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}
