//! Whole-file reads and writes.
//!
//! Every function opens the file, transfers everything in one go and closes it again
//! before returning. Writes always create the file if needed and truncate old content.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use log::{error, info};

use crate::core::{FsError, Result};

/// Replaces the contents of `path` with `data`, creating the file if necessary.
///
/// `None` or an empty slice is not an error: the result is a zero-length file.
pub fn store_bytes<P: AsRef<Path>>(path: P, data: Option<&[u8]>) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .inspect_err(|e| info!("store_bytes did not open {}: {}", path.display(), e))?;

    if let Some(data) = data.filter(|data| !data.is_empty()) {
        file.write_all(data).inspect_err(|e| {
            error!(
                "store_bytes short write to {} expected={}: {}",
                path.display(),
                data.len(),
                e
            )
        })?;
    }
    Ok(())
}

/// Replaces the contents of `path` with the UTF-8 bytes of `data`.
///
/// `None` stores an empty file, same as `Some("")`.
pub fn store_string<P: AsRef<Path>>(path: P, data: Option<&str>) -> Result<()> {
    store_bytes(path, data.map(str::as_bytes))
}

/// Reads the whole file into a buffer sized exactly to the file.
///
/// With `null_terminate` one extra zero byte is appended, so an empty file yields
/// `[0]` instead of an empty buffer.
///
/// # Errors
/// * `OutOfMemory` if the buffer cannot be allocated.
/// * `Io` if fewer bytes than the reported size could be read.
/// * Any translated open/stat/read error.
pub fn read_bytes<P: AsRef<Path>>(path: P, null_terminate: bool) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)
        .inspect_err(|e| info!("read_bytes did not open {}: {}", path.display(), e))?;
    let size = file_len(&file)?;

    let mut data = Vec::new();
    data.try_reserve_exact(size + usize::from(null_terminate))?;

    let read = file.take(size as u64).read_to_end(&mut data)?;
    if read != size {
        error!(
            "read_bytes bad length in {} expected={} got={}",
            path.display(),
            size,
            read
        );
        return Err(FsError::Io);
    }

    if null_terminate {
        data.push(0);
    }
    Ok(data)
}

/// Reads the whole file as a UTF-8 string.
///
/// Contents that are not valid UTF-8 are rejected with `InvalidArgument`.
pub fn read_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = read_bytes(path, false)?;
    String::from_utf8(data).map_err(|_| FsError::InvalidArgument)
}

/// Copies the start of the file into `buf` without allocating.
///
/// At most `buf.len()` bytes are copied, fewer if the file is shorter. Returns the
/// number of bytes copied; the rest of `buf` is left untouched.
pub fn read_bytes_into<P: AsRef<Path>>(path: P, buf: &mut [u8]) -> Result<usize> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .inspect_err(|e| info!("read_bytes_into did not open {}: {}", path.display(), e))?;
    let count = buf.len().min(file_len(&file)?);

    file.read_exact(&mut buf[..count]).inspect_err(|e| {
        error!(
            "read_bytes_into bad length in {} expected={}: {}",
            path.display(),
            count,
            e
        )
    })?;
    Ok(count)
}

fn file_len(file: &File) -> Result<usize> {
    let len = file.metadata()?.len();
    usize::try_from(len).map_err(|_| FsError::FileTooLarge)
}
