pub mod config;
pub mod connection;
pub mod errors;
pub mod filename;
pub mod fs;
pub mod handle;
pub mod logging;
pub mod platform;


pub use crate::connection::Connection;
pub use crate::errors::{FsError, FsResult};
pub use crate::filename::{build_path, build_path_cstr, build_path_in, HeapAlloc, ScratchAlloc, ScratchPath};
pub use crate::handle::{CloseStream, FileHandle, HandleStatus};
