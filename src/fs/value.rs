//! Structured values stored as CBOR.
//!
//! Encoding and decoding are done by `ciborium`; this module only streams the bytes
//! through a [`FileStream`].

use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::stream::{FileStream, stream_error};
use crate::core::{FsError, Result};

/// Encodes `value` as CBOR into `path`, replacing the old contents.
///
/// # Errors
/// * `InvalidArgument` if `value` cannot be represented (its `Serialize` impl failed).
/// * Any translated open/write error.
pub fn store_value<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut stream = FileStream::create(path)?;
    {
        let mut writer = BufWriter::new(&mut stream);
        ciborium::into_writer(value, &mut writer).map_err(|e| match e {
            ciborium::ser::Error::Io(e) => stream_error(e),
            ciborium::ser::Error::Value(msg) => {
                error!("store_value cannot encode into {}: {}", path.display(), msg);
                FsError::InvalidArgument
            }
        })?;
        writer.flush().map_err(stream_error)?;
    }
    stream.close()
}

/// Decodes a CBOR value previously written by [`store_value`].
///
/// # Errors
/// * `InvalidArgument` if the contents are not valid CBOR for `T`.
/// * `Io` if the file ends in the middle of a value (including an empty file).
/// * Any translated open/read error.
pub fn read_value<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut stream = FileStream::open(path)?;
    let value = ciborium::from_reader(BufReader::new(&mut stream)).map_err(|e| match e {
        ciborium::de::Error::Io(e) => stream_error(e),
        other => {
            error!("read_value cannot decode {}: {:?}", path.display(), other);
            FsError::InvalidArgument
        }
    })?;
    stream.close()?;
    Ok(value)
}
