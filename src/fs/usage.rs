use std::fmt;
use std::path::Path;

use super::entry::WalkEntry;
use super::walk::walk;
use crate::core::Result;

/// Accounting unit for [`Usage::sectors`]. Not a real block size.
pub const SECTOR_SIZE: u64 = 512;

/// Approximate space used by a file or directory tree.
///
/// Each file costs one metadata sector plus its data rounded up to whole sectors;
/// each directory costs one sector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub file_bytes: u64,
    pub sectors: u64,
    pub num_files: u64,
    pub num_directories: u64,
}

impl Usage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures a fresh tree rooted at `path`.
    pub fn of<P: AsRef<Path>>(path: P) -> Result<Usage> {
        let mut usage = Usage::new();
        usage.measure(path, true)?;
        Ok(usage)
    }

    /// Walks `path` and adds everything found to the counters.
    ///
    /// With `clear_stats` the counters are reset first; without it, repeated calls
    /// accumulate. A failing walk leaves whatever was counted before the error.
    pub fn measure<P: AsRef<Path>>(&mut self, path: P, clear_stats: bool) -> Result<()> {
        if clear_stats {
            self.clear();
        }
        walk(path, |entry| self.add(entry))
    }

    pub fn clear(&mut self) {
        *self = Usage::default();
    }

    fn add(&mut self, entry: &WalkEntry) {
        if entry.is_dir() {
            self.num_directories += 1;
            self.sectors += 1;
        } else {
            self.num_files += 1;
            self.file_bytes += entry.size();
            self.sectors += entry.size().div_ceil(SECTOR_SIZE) + 1;
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file_bytes={} sectors={} num_files={} num_directories={}",
            self.file_bytes, self.sectors, self.num_files, self.num_directories
        )
    }
}
