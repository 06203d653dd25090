//! Fixed-layout record persistence.
//!
//! A record is stored as its raw in-memory bytes: no header, no length prefix, no
//! endianness or alignment normalization. Only the same build can be relied on to
//! read back what it wrote. Records must be [`Pod`], which rules out padding, pointers
//! and invalid bit patterns.

use std::path::Path;

use bytemuck::Pod;

use super::files::{read_bytes_into, store_bytes};
use crate::core::Result;

/// Writes the raw bytes of `value` to `path`, replacing the old contents.
pub fn store_struct<T: Pod, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    store_bytes(path, Some(bytemuck::bytes_of(value)))
}

/// Reads a record written by [`store_struct`] into `value`.
///
/// A stored record shorter than `T` (for instance written before `T` grew a field)
/// fills the leading bytes and leaves the rest zero. On error `value` is entirely
/// zeroed.
pub fn read_struct<T: Pod, P: AsRef<Path>>(path: P, value: &mut T) -> Result<()> {
    let bytes = bytemuck::bytes_of_mut(value);
    bytes.fill(0);
    if let Err(e) = read_bytes_into(path, bytes) {
        bytes.fill(0);
        return Err(e);
    }
    Ok(())
}
