//! Write handles with an explicit lifecycle.
//!
//! A handle moves `Unopened -> Open -> Closed`. Closing is terminal whether
//! or not the flush and the OS close succeeded, and closing a handle that is
//! not open does nothing.

use crate::errors::{FsError, FsResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleStatus {
    Unopened,
    Open,
    Closed,
}

#[derive(Debug)]
enum State<S> {
    Unopened,
    Open(S),
    Closed,
}

/// A stream that can be flushed and released with the outcome reported.
pub trait CloseStream: Write {
    fn close_stream(self) -> io::Result<()>;
}

impl<W: CloseStream> CloseStream for BufWriter<W> {
    fn close_stream(mut self) -> io::Result<()> {
        let flushed = self.flush();
        // into_parts hands back the inner stream without another flush attempt.
        let (inner, _unflushed) = self.into_parts();
        let closed = inner.close_stream();
        flushed.and(closed)
    }
}

#[cfg(unix)]
impl CloseStream for File {
    fn close_stream(self) -> io::Result<()> {
        use std::os::unix::io::IntoRawFd;
        let fd = self.into_raw_fd();
        // SAFETY: fd was just released by the File and is closed exactly once.
        if unsafe { libc::close(fd) } == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

#[cfg(not(unix))]
impl CloseStream for File {
    fn close_stream(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileHandle<S: CloseStream = BufWriter<File>> {
    state: State<S>,
}

impl<S: CloseStream> Default for FileHandle<S> {
    fn default() -> Self {
        Self { state: State::Unopened }
    }
}

impl<S: CloseStream> FileHandle<S> {
    pub fn unopened() -> Self {
        Self::default()
    }

    /// Wrap an already opened stream.
    pub fn from_stream(stream: S) -> Self {
        Self { state: State::Open(stream) }
    }

    pub fn status(&self) -> HandleStatus {
        match self.state {
            State::Unopened => HandleStatus::Unopened,
            State::Open(_) => HandleStatus::Open,
            State::Closed => HandleStatus::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// Flush and release the stream.
    ///
    /// The handle is `Closed` afterwards even when the flush or the OS close
    /// fails; the first failure is still returned.
    pub fn close(&mut self) -> FsResult<()> {
        let stream = match std::mem::replace(&mut self.state, State::Closed) {
            State::Open(stream) => stream,
            State::Unopened => {
                self.state = State::Unopened;
                return Ok(());
            }
            State::Closed => return Ok(()),
        };

        match stream.close_stream() {
            Ok(()) => {
                debug!("file handle closed");
                Ok(())
            }
            Err(e) => {
                let err = FsError::from(e);
                warn!(code = ?err.os_code(), error = %err, "file handle close failed");
                Err(err)
            }
        }
    }
}

impl<S: CloseStream> Write for FileHandle<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.state {
            State::Open(stream) => stream.write(buf),
            _ => Err(not_open()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.state {
            State::Open(stream) => stream.flush(),
            _ => Err(not_open()),
        }
    }
}

fn not_open() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "file handle is not open")
}
