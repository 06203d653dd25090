mod dirs;
mod entry;
mod files;
mod record;
mod stream;
mod usage;
#[cfg(feature = "cbor")]
mod value;
mod walk;

pub use dirs::{delete_recursive, mkdirs};
pub use entry::{EntryType, WalkEntry};
pub use files::{read_bytes, read_bytes_into, read_string, store_bytes, store_string};
pub use record::{read_struct, store_struct};
pub use stream::FileStream;
pub use usage::{SECTOR_SIZE, Usage};
#[cfg(feature = "cbor")]
pub use value::{read_value, store_value};
pub use walk::walk;
