use std::path::Path;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use file_helper::{
    FsError, ParsedPath, Usage, delete_recursive, mkdirs, path_join, read_string, read_struct,
    store_string, store_struct, walk,
};
use tempdir::TempDir;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct Record {
    magic: u32,
    name: [u8; 12],
}

fn base_dir(temp_dir: &TempDir) -> String {
    temp_dir.path().to_str().unwrap().to_string()
}

#[test]
fn test_full_session() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let temp_dir = TempDir::new("helpers_test")?;
    let base = base_dir(&temp_dir);
    let foo = path_join(Some(base.as_str()), Some("foo"));

    mkdirs(&foo)?;
    mkdirs(path_join(Some(base.as_str()), Some("foo/a/b")))?;
    mkdirs(path_join(Some(base.as_str()), Some("foo/a/c")))?;

    let test1 = path_join(Some(foo.as_str()), Some("test1"));
    store_string(&test1, Some("this is a test"))?;
    assert_eq!(read_string(&test1)?, "this is a test");

    let usage = Usage::of(&test1)?;
    assert_eq!(usage.num_files, 1);
    assert_eq!(usage.num_directories, 0);
    assert_eq!(usage.file_bytes, 14);
    assert_eq!(usage.sectors, 2);

    let record = Record {
        magic: 0x12345678,
        name: *b"testing!\0\0\0\0",
    };
    let test2 = path_join(Some(foo.as_str()), Some("test2"));
    store_struct(&test2, &record)?;
    let mut loaded = Record::zeroed();
    read_struct(&test2, &mut loaded)?;
    assert_eq!(loaded, record);

    // foo, a, a/b, a/c plus the two files
    let usage = Usage::of(&foo)?;
    assert_eq!(usage.num_directories, 4);
    assert_eq!(usage.num_files, 2);
    assert_eq!(usage.file_bytes, 14 + 16);

    delete_recursive(&foo, false)?;
    assert!(!Path::new(&foo).exists());
    assert!(temp_dir.path().is_dir());
    Ok(())
}

#[test]
fn test_mkdirs_paths_agree_with_parser() -> Result<()> {
    let temp_dir = TempDir::new("helpers_test")?;
    let target = format!("{}//x///y/z/", base_dir(&temp_dir));

    mkdirs(&target)?;

    let mut parsed = ParsedPath::new();
    parsed.parse(&target)?;
    for count in 1..=parsed.num_parts() {
        assert!(Path::new(&parsed.generate_path_string(Some(count))).is_dir());
    }
    assert_eq!(parsed.file_base_name(), "z");
    Ok(())
}

#[test]
fn test_mkdirs_over_file() -> Result<()> {
    let temp_dir = TempDir::new("helpers_test")?;
    let a = path_join(Some(base_dir(&temp_dir).as_str()), Some("a"));
    store_string(&a, Some("regular file"))?;

    assert_eq!(
        mkdirs(path_join(Some(a.as_str()), Some("b/c"))),
        Err(FsError::NotADirectory)
    );
    Ok(())
}

#[test]
fn test_walk_reports_every_node_once() -> Result<()> {
    let temp_dir = TempDir::new("helpers_test")?;
    let base = base_dir(&temp_dir);
    for dir in ["p/q", "p/r", "s"] {
        mkdirs(path_join(Some(base.as_str()), Some(dir)))?;
    }
    for file in ["p/q/1", "p/2", "s/3", "4"] {
        store_string(path_join(Some(base.as_str()), Some(file)), Some(file))?;
    }

    let mut paths = Vec::new();
    walk(&base, |entry| paths.push(entry.path().to_path_buf()))?;

    assert_eq!(paths.len(), 1 + 4 + 4);
    let mut unique = paths.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), paths.len());
    assert_eq!(paths[0], Path::new(&base));
    Ok(())
}

#[cfg(feature = "cbor")]
#[test]
fn test_value_round_trip() -> Result<()> {
    use std::collections::BTreeMap;

    let temp_dir = TempDir::new("helpers_test")?;
    let path = path_join(Some(base_dir(&temp_dir).as_str()), Some("values"));
    let mut map = BTreeMap::new();
    map.insert("a".to_string(), vec![1u32, 2, 3]);
    map.insert("b".to_string(), vec![]);

    file_helper::store_value(&path, &map)?;
    let loaded: BTreeMap<String, Vec<u32>> = file_helper::read_value(&path)?;

    assert_eq!(loaded, map);
    Ok(())
}
