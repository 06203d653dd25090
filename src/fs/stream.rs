use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use log::warn;

use crate::core::{FsError, Result};

/// A file handle that can be used as a byte sink or byte source.
///
/// The handle stays open for the lifetime of the stream and is released by
/// [`close`](FileStream::close) or on drop, whichever comes first. Reading or writing
/// after `close` fails with a bad-descriptor error.
///
/// `FileStream` implements [`Read`] and [`Write`], so it can be handed directly to a
/// serializer that streams into or out of a writer/reader.
///
/// ### Example
///
/// ```no_run
/// use std::io::Write;
/// use file_helper::FileStream;
///
/// let mut stream = FileStream::create("/data/out.bin").unwrap();
/// stream.write_all(b"hello").unwrap();
/// stream.close().unwrap();
/// ```
#[derive(Debug)]
pub struct FileStream {
    file: Option<File>,
}

impl FileStream {
    /// Opens `path` for writing, creating it or truncating existing content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self { file: Some(file) })
    }

    /// Opens an existing `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self { file: Some(file) })
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Flushes pending writes and releases the handle.
    ///
    /// Closing an already closed stream does nothing.
    pub fn close(&mut self) -> Result<()> {
        match self.file.take() {
            Some(mut file) => Ok(file.flush()?),
            None => Ok(()),
        }
    }

    fn handle(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other(FsError::BadDescriptor))
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.handle()?.read(buf)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.handle()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.handle()?.flush()
    }
}

impl Drop for FileStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close FileStream: {}", e);
        }
    }
}

/// Recovers the category of an IO error that came out of a [`FileStream`].
#[cfg_attr(not(feature = "cbor"), allow(dead_code))]
pub(crate) fn stream_error(err: io::Error) -> FsError {
    match err.get_ref().and_then(|inner| inner.downcast_ref::<FsError>()) {
        Some(inner) => *inner,
        None => err.into(),
    }
}
