use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// One filesystem node delivered to a [`walk`](crate::walk) callback.
///
/// Entries are produced one at a time and borrowed by the callback; clone one if it
/// has to outlive the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    path: PathBuf,
    entry_type: EntryType,
    size: u64,
}

impl WalkEntry {
    pub(crate) fn file<P: AsRef<Path>>(path: P, size: u64) -> WalkEntry {
        WalkEntry {
            path: path.as_ref().to_path_buf(),
            entry_type: EntryType::File,
            size,
        }
    }

    pub(crate) fn directory<P: AsRef<Path>>(path: P) -> WalkEntry {
        WalkEntry {
            path: path.as_ref().to_path_buf(),
            entry_type: EntryType::Directory,
            size: 0,
        }
    }

    /// The walk root joined with the names below it; absolute iff the root was.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Size in bytes, always 0 for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

impl fmt::Display for WalkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path={} dir={} size={}",
            self.path.display(),
            self.is_dir(),
            self.size
        )
    }
}
