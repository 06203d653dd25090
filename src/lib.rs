//! Filesystem convenience helpers for small devices.
//!
//! ### Overview
//!
//! `file-helper` wraps the handful of filesystem chores that every firmware ends up
//! rewriting: creating and removing directory trees, reading and writing whole files,
//! persisting fixed-layout records and structured values, splitting paths and walking
//! a directory tree.
//!
//! **Key ideas**:
//! - **One call, one job**: every helper opens, transfers and closes before returning.
//!   Only [`FileStream`] keeps a handle across calls.
//! - **Closed error set**: failures are reported as an [`FsError`] category, translated
//!   from the OS error at the point of failure.
//! - **Plain paths**: `/`-delimited strings, absolute or relative, taken as they are
//!   (no `.`/`..` resolution).
//! - **Optional CBOR**: [`store_value`] / [`read_value`] are available with the default
//!   `cbor` feature.
//!
//! ### Example
//!
//! ```no_run
//! use file_helper::{Usage, mkdirs, path_join, read_string, store_string};
//!
//! let dir = path_join(Some("/data"), Some("logs"));
//! mkdirs(&dir).unwrap();
//!
//! let file = path_join(Some(dir.as_str()), Some("last.txt"));
//! store_string(&file, Some("boot ok")).unwrap();
//! assert_eq!(read_string(&file).unwrap(), "boot ok");
//!
//! let usage = Usage::of("/data").unwrap();
//! println!("{}", usage);
//! ```

mod core;
mod fs;
mod path;

pub use crate::core::{FsError, Result};
pub use fs::{
    EntryType, FileStream, SECTOR_SIZE, Usage, WalkEntry, delete_recursive, mkdirs, read_bytes,
    read_bytes_into, read_string, read_struct, store_bytes, store_string, store_struct, walk,
};
#[cfg(feature = "cbor")]
pub use fs::{read_value, store_value};
pub use path::{DELIMITER, ParsedPath, path_join};
