//! Depth-first traversal of a real directory tree.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::entry::WalkEntry;
use crate::core::Result;

/// Visits `path` and everything below it, calling `visit` once per node.
///
/// # Behavior
///
/// - **Directory**: the directory itself is visited first (size 0). Its direct children
///   are then stat'ed and split into sub-directories and regular files; every
///   sub-directory is walked completely before the regular files of the directory are
///   visited. Both groups keep the order the OS enumerates them in, which is not
///   guaranteed to be stable between filesystems.
/// - **Regular file**: visited once with its size.
/// - **Anything else** (sockets, fifos, devices) is skipped.
///
/// Symbolic links are followed, as `stat` would.
///
/// # Errors
///
/// A `path` that cannot be stat'ed or, for a directory, listed fails after at most the
/// root itself was visited. The first error of any nested `stat` aborts the walk and is
/// returned; entries delivered up to that point are not taken back.
///
/// A sub-directory that cannot be listed is still visited, logged and treated as
/// empty; the walk goes on with its siblings.
///
/// # Example
///
/// ```no_run
/// use file_helper::walk;
///
/// walk("/data", |entry| println!("{}", entry)).unwrap();
/// ```
pub fn walk<P, F>(path: P, mut visit: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&WalkEntry),
{
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)?;

    if metadata.is_dir() {
        walk_dir(path, &mut visit, true)
    } else {
        if metadata.is_file() {
            visit(&WalkEntry::file(path, metadata.len()));
        }
        Ok(())
    }
}

fn walk_dir<F: FnMut(&WalkEntry)>(dir: &Path, visit: &mut F, is_root: bool) -> Result<()> {
    debug!("walk dir={}", dir.display());
    visit(&WalkEntry::directory(dir));

    let children = match list_dir(dir) {
        Ok(children) => children,
        Err(e) if !is_root => {
            warn!("walk cannot list {}: {}", dir.display(), e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut directories: Vec<PathBuf> = Vec::new();
    let mut files: Vec<(PathBuf, u64)> = Vec::new();

    for child in children {
        let metadata = std::fs::metadata(&child)?;
        if metadata.is_dir() {
            directories.push(child);
        } else if metadata.is_file() {
            files.push((child, metadata.len()));
        }
    }

    for directory in &directories {
        walk_dir(directory, visit, false)?;
    }
    for (file, size) in &files {
        visit(&WalkEntry::file(file, *size));
    }

    Ok(())
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        children.push(entry?.path());
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FsError;
    use crate::fs::entry::EntryType;
    use tempdir::TempDir;

    fn collect(path: &Path) -> Result<Vec<WalkEntry>> {
        let mut entries = Vec::new();
        walk(path, |entry| entries.push(entry.clone()))?;
        Ok(entries)
    }

    #[test]
    fn test_walk_single_file() -> anyhow::Result<()> {
        let temp_dir = setup_test_env();
        let file = temp_dir.path().join("data.bin");
        std::fs::write(&file, [1u8; 100])?;

        let entries = collect(&file)?;

        assert_eq!(entries, vec![WalkEntry::file(&file, 100)]);
        Ok(())
    }

    #[test]
    fn test_walk_empty_directory() -> anyhow::Result<()> {
        let temp_dir = setup_test_env();

        let entries = collect(temp_dir.path())?;

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_dir());
        assert_eq!(entries[0].path(), temp_dir.path());
        Ok(())
    }

    #[test]
    fn test_walk_visits_directories_before_files() -> anyhow::Result<()> {
        let temp_dir = setup_test_env();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("sub/deeper"))?;
        std::fs::write(root.join("top.txt"), b"top")?;
        std::fs::write(root.join("sub/inner.txt"), b"inner!")?;
        std::fs::write(root.join("sub/deeper/leaf.txt"), b"")?;

        let entries = collect(root)?;
        let names: Vec<_> = entries
            .iter()
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from(""),
                PathBuf::from("sub"),
                PathBuf::from("sub/deeper"),
                PathBuf::from("sub/deeper/leaf.txt"),
                PathBuf::from("sub/inner.txt"),
                PathBuf::from("top.txt"),
            ]
        );

        let inner = &entries[4];
        assert_eq!(inner.entry_type(), EntryType::File);
        assert_eq!(inner.size(), 6);
        assert!(entries[..3].iter().all(|e| e.is_dir() && e.size() == 0));
        Ok(())
    }

    #[test]
    fn test_walk_files_follow_all_subdirectories() -> anyhow::Result<()> {
        let temp_dir = setup_test_env();
        let root = temp_dir.path();
        for name in ["a", "b", "c"] {
            std::fs::create_dir(root.join(name))?;
            std::fs::write(root.join(name).join("f"), name)?;
            std::fs::write(root.join(format!("{}.txt", name)), name)?;
        }

        let entries = collect(root)?;

        assert_eq!(entries.len(), 10);
        // the three top-level files come last, after every subtree
        assert!(entries[7..].iter().all(|e| {
            e.is_file() && e.path().parent() == Some(root)
        }));
        Ok(())
    }

    #[test]
    fn test_walk_nonexistent_path() {
        let temp_dir = setup_test_env();
        let mut visited = 0;

        let result = walk(temp_dir.path().join("missing"), |_| visited += 1);

        assert_eq!(result, Err(FsError::NotFound));
        assert_eq!(visited, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_aborts_on_nested_stat_error() -> anyhow::Result<()> {
        let temp_dir = setup_test_env();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("sub"))?;
        std::os::unix::fs::symlink(root.join("nowhere"), root.join("sub/dangling"))?;

        let mut visited = Vec::new();
        let result = walk(root, |e| visited.push(e.path().to_path_buf()));

        assert_eq!(result, Err(FsError::NotFound));
        // the root was delivered before the failure
        assert_eq!(visited.first().map(PathBuf::as_path), Some(root));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_unlistable_subdirectory() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = setup_test_env();
        let root = temp_dir.path();
        let locked = root.join("locked");
        std::fs::create_dir(&locked)?;
        std::fs::write(root.join("f.txt"), b"12345")?;
        std::fs::set_permissions(&locked, PermissionsExt::from_mode(0o000))?;

        let result = collect(root);
        std::fs::set_permissions(&locked, PermissionsExt::from_mode(0o755))?;

        let entries = result?;
        assert_eq!(entries.len(), 3);
        assert!(entries.contains(&WalkEntry::directory(&locked)));
        assert_eq!(entries.last(), Some(&WalkEntry::file(root.join("f.txt"), 5)));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_special_files() -> anyhow::Result<()> {
        use crate::fs::usage::Usage;
        use std::os::unix::net::UnixListener;

        let temp_dir = setup_test_env();
        let root = temp_dir.path();
        std::fs::create_dir(root.join("sub"))?;
        std::fs::write(root.join("sub/data"), b"abc")?;
        let _listener = UnixListener::bind(root.join("sub/sock"))?;

        let entries = collect(root)?;
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.path() != root.join("sub/sock")));

        let usage = Usage::of(root)?;
        assert_eq!(usage.num_directories, 2);
        assert_eq!(usage.num_files, 1);
        assert_eq!(usage.file_bytes, 3);
        assert_eq!(usage.sectors, 2 + 2);
        Ok(())
    }

    fn setup_test_env() -> TempDir {
        TempDir::new("walk_test").unwrap()
    }
}
