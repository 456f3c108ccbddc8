use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use folder_insights_scanner::{walk, FsDirectory, WalkOptions, WarningKind};

fn write(path: &Path, bytes: &[u8]) {
    File::create(path).unwrap().write_all(bytes).unwrap();
}

/// 在 tempfile 中建立的真实目录：
///
/// root/
///   a.txt          depth 0
///   l1/b.md        depth 1
///   l1/l2/c.rs     depth 2
///   l1/l2/l3/d.js  depth 3
fn create_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let l3 = dir.path().join("l1").join("l2").join("l3");
    fs::create_dir_all(&l3).unwrap();
    write(&dir.path().join("a.txt"), b"aaaa");
    write(&dir.path().join("l1").join("b.md"), b"bb");
    write(&dir.path().join("l1").join("l2").join("c.rs"), b"c");
    write(&l3.join("d.js"), b"dddddddd");
    dir
}

fn open(dir: &tempfile::TempDir) -> FsDirectory {
    FsDirectory::open(&dir.path().to_string_lossy()).expect("open root")
}

#[test]
fn walk_collects_relative_paths() {
    let dir = create_tree();
    let outcome = walk(&open(&dir), &WalkOptions::default());
    let mut found: Vec<_> = outcome
        .records
        .iter()
        .map(|r| (r.path.clone(), r.depth, r.size))
        .collect();
    found.sort();
    assert_eq!(
        found,
        vec![
            ("a.txt".to_string(), 0, 4),
            ("l1/b.md".to_string(), 1, 2),
            ("l1/l2/c.rs".to_string(), 2, 1),
            ("l1/l2/l3/d.js".to_string(), 3, 8),
        ]
    );
    assert!(outcome.warnings.is_empty());
    assert!(outcome.records.iter().all(|r| r.last_modified.is_some()));
}

#[test]
fn depth_boundary_holds_for_every_bound() {
    let dir = create_tree();
    let root = open(&dir);
    for bound in 0..5usize {
        let outcome = walk(&root, &WalkOptions::new(Some(bound)));
        assert!(outcome.records.iter().all(|r| r.depth < bound), "bound {}", bound);
        assert_eq!(outcome.records.len(), bound.min(4), "bound {}", bound);
    }
}

#[test]
#[cfg(unix)]
fn directory_symlinks_are_not_followed() {
    let dir = create_tree();
    std::os::unix::fs::symlink(dir.path().join("l1"), dir.path().join("loop")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("a.txt"), dir.path().join("alias.txt")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling.txt")).unwrap();

    let outcome = walk(&open(&dir), &WalkOptions::default());
    let paths: Vec<_> = outcome.records.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"alias.txt"));
    assert!(!paths.iter().any(|p| p.starts_with("loop/")));
    assert!(!paths.contains(&"dangling.txt"));
    assert_eq!(outcome.records.len(), 5);

    // 断开的链接按文件报告元数据失败，目录链接静默跳过
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].path, "dangling.txt");
    assert_eq!(outcome.warnings[0].kind, WarningKind::FileMetadata);
}

#[test]
#[cfg(unix)]
fn dangling_symlink_is_reported_as_warning() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(&dir.path().join("a.txt"), b"a");
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling.txt")).unwrap();

    let outcome = walk(&open(&dir), &WalkOptions::default());
    let paths: Vec<_> = outcome.records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["a.txt"]);
    assert!(!outcome.warnings.is_empty());
    assert!(outcome.warnings.iter().any(|w| w.path == "dangling.txt"));
}
