use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::{FsError, Result};
use crate::path::ParsedPath;

/// Creates directory `path` and all its missing parents.
///
/// The deepest existing prefix of `path` is looked up first, then every missing
/// level below it is created, shallowest first. A path that already exists as a
/// directory is a successful no-op.
///
/// # Errors
/// * `NotADirectory` if an existing prefix is not a directory.
/// * `InvalidArgument` if `path` is not valid UTF-8.
/// * Any translated error from creating a level. Levels created before the failure
///   are left in place.
pub fn mkdirs<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref().to_str().ok_or(FsError::InvalidArgument)?;

    let mut parsed = ParsedPath::new();
    parsed.parse(path)?;
    let num_parts = parsed.num_parts();

    // Looking for the deepest existing prefix
    let mut existing = num_parts;
    while existing > 0 {
        let partial = parsed.generate_path_string(Some(existing));
        if let Ok(metadata) = std::fs::metadata(&partial) {
            if !metadata.is_dir() {
                return Err(FsError::NotADirectory);
            }
            break;
        }
        existing -= 1;
    }

    for count in existing + 1..=num_parts {
        let partial = parsed.generate_path_string(Some(count));
        std::fs::create_dir(&partial)?;
        debug!("mkdirs created {}", partial);
    }

    Ok(())
}

/// Deletes the directory `path` together with everything below it.
///
/// Sub-directories are deleted first (recursively), then the files of `path`, then
/// `path` itself unless `contents_only` is set. Symbolic links are removed, never
/// followed. Other entry types are left alone, which makes removal of their parent
/// fail with `NotEmpty`.
///
/// Deletion is best-effort: a failure on one entry is logged and the remaining
/// entries are still processed. The first failure is returned once everything has
/// been attempted, so `Ok(())` means the whole tree is gone.
pub fn delete_recursive<P: AsRef<Path>>(path: P, contents_only: bool) -> Result<()> {
    let path = path.as_ref();
    let mut failure: Option<FsError> = None;

    match list_children(path) {
        Ok((directories, files)) => {
            for directory in &directories {
                // logged where it happened
                if let Err(e) = delete_recursive(directory, false) {
                    failure.get_or_insert(e);
                }
            }
            for file in &files {
                if let Err(e) = std::fs::remove_file(file) {
                    warn!("delete_recursive unlink failed {}: {}", file.display(), e);
                    failure.get_or_insert(e.into());
                }
            }
        }
        Err(e) => {
            warn!("delete_recursive cannot list {}: {}", path.display(), e);
            failure.get_or_insert(e);
        }
    }

    if !contents_only {
        if let Err(e) = std::fs::remove_dir(path) {
            warn!("delete_recursive rmdir failed {}: {}", path.display(), e);
            failure.get_or_insert(e.into());
        }
    }

    failure.map_or(Ok(()), Err)
}

/// Splits the direct children of `dir` into directories and unlinkable entries.
fn list_children(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            directories.push(entry.path());
        } else if file_type.is_file() || file_type.is_symlink() {
            files.push(entry.path());
        }
    }

    Ok((directories, files))
}
