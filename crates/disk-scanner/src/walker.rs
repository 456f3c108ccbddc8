use std::time::Instant;

use folder_insights_domain::{file_extension, join_path, FileRecord, WalkWarning, WarningKind};

use crate::handle::{DirectoryHandle, Entry, FileHandle};
use crate::WalkOptions;

/// 一次遍历的结果：文件记录与被跳过条目的警告
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub records: Vec<FileRecord>,
    pub warnings: Vec<WalkWarning>,
    /// 遍历因取消而提前结束
    pub cancelled: bool,
}

impl WalkOutcome {
    fn warn(&mut self, path: &str, kind: WarningKind, err: impl std::fmt::Display) {
        let shown = if path.is_empty() { "." } else { path };
        match kind {
            WarningKind::ListDirectory => log::warn!("Failed to read directory {}: {}", shown, err),
            _ => log::warn!("Failed to read file {}: {}", shown, err),
        }
        self.warnings.push(WalkWarning::new(shown, kind, err));
    }
}

/// 栈帧：一个已列出子项的目录及剩余待处理的子项
struct Frame<D: DirectoryHandle> {
    entries: std::vec::IntoIter<(String, Entry<D>)>,
    path: String,
    depth: usize,
}

/// 列出目录子项；超出深度上限时不展开，列出失败记一条警告
fn open_frame<D: DirectoryHandle>(
    dir: &D,
    path: String,
    depth: usize,
    options: &WalkOptions,
    outcome: &mut WalkOutcome,
) -> Option<Frame<D>> {
    if !options.allows(depth) {
        return None;
    }
    if options.cancel.is_cancelled() {
        outcome.cancelled = true;
        return None;
    }
    match dir.entries() {
        Ok(listing) => {
            // 无法识别的条目没有名称，只能记到所在目录上
            for err in listing.skipped {
                outcome.warn(&path, WarningKind::ListDirectory, err);
            }
            Some(Frame {
                entries: listing.entries.into_iter(),
                path,
                depth,
            })
        }
        Err(e) => {
            outcome.warn(&path, WarningKind::ListDirectory, e);
            None
        }
    }
}

/// 深度优先遍历目录树，返回扁平的文件记录。
///
/// 使用显式栈而非递归，顺序与递归下降一致：每个目录按宿主枚举顺序处理，遇到子目录立即进入。
/// 单个文件或目录读取失败只会跳过该条目（目录则连同其子树），不会中断整个遍历。
pub fn walk<D: DirectoryHandle>(root: &D, options: &WalkOptions) -> WalkOutcome {
    let start = Instant::now();
    let mut outcome = WalkOutcome::default();
    let mut stack: Vec<Frame<D>> = Vec::new();

    if let Some(frame) = open_frame(root, String::new(), 0, options, &mut outcome) {
        stack.push(frame);
    }

    while let Some(frame) = stack.last_mut() {
        if options.cancel.is_cancelled() {
            outcome.cancelled = true;
            break;
        }
        let Some((name, entry)) = frame.entries.next() else {
            stack.pop();
            continue;
        };
        let path = join_path(&frame.path, &name);
        let depth = frame.depth;

        match entry {
            Entry::File(file) => match file.metadata() {
                Ok(meta) => outcome.records.push(FileRecord {
                    extension: file_extension(&name),
                    path,
                    name,
                    size: meta.size,
                    depth,
                    last_modified: meta.last_modified,
                    content: None,
                }),
                Err(e) => outcome.warn(&path, WarningKind::FileMetadata, e),
            },
            Entry::Directory(dir) => {
                if let Some(child) = open_frame(&dir, path, depth + 1, options, &mut outcome) {
                    stack.push(child);
                }
            }
        }
    }

    log::debug!(
        "walk done: {} files, {} warnings, cancelled={}, {} ms",
        outcome.records.len(),
        outcome.warnings.len(),
        outcome.cancelled,
        start.elapsed().as_millis()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryFile, MemoryTree};
    use crate::CancelToken;

    fn paths(outcome: &WalkOutcome) -> Vec<&str> {
        outcome.records.iter().map(|r| r.path.as_str()).collect()
    }

    fn nested() -> crate::memory::MemoryDirectory {
        MemoryTree::new()
            .file("top.txt", "0")
            .dir(
                "a",
                MemoryTree::new()
                    .file("one.md", "1")
                    .dir("b", MemoryTree::new().file("two.rs", "22")),
            )
            .file("z.log", "last")
            .into_handle()
    }

    #[test]
    fn test_preorder_matches_recursive_descent() {
        let outcome = walk(&nested(), &WalkOptions::default());
        assert_eq!(paths(&outcome), vec!["top.txt", "a/one.md", "a/b/two.rs", "z.log"]);
        let depths: Vec<_> = outcome.records.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 0]);
        assert!(outcome.warnings.is_empty());
        assert!(!outcome.cancelled);
    }

    #[test]
    fn test_record_fields() {
        let root = MemoryTree::new()
            .file_entry("Report.CSV", MemoryFile::new("a,b").with_last_modified(1_700_000_000_000))
            .file("Makefile", "all:")
            .into_handle();
        let outcome = walk(&root, &WalkOptions::default());
        let csv = &outcome.records[0];
        assert_eq!(csv.name, "Report.CSV");
        assert_eq!(csv.extension, "csv");
        assert_eq!(csv.size, 3);
        assert_eq!(csv.last_modified, Some(1_700_000_000_000));
        assert!(csv.content.is_none());
        assert_eq!(outcome.records[1].extension, "");
    }

    #[test]
    fn test_max_depth_is_exclusive() {
        let root = nested();
        assert!(walk(&root, &WalkOptions::new(Some(0))).records.is_empty());
        assert_eq!(paths(&walk(&root, &WalkOptions::new(Some(1)))), vec!["top.txt", "z.log"]);
        assert_eq!(
            paths(&walk(&root, &WalkOptions::new(Some(2)))),
            vec!["top.txt", "a/one.md", "z.log"]
        );
        assert_eq!(walk(&root, &WalkOptions::new(Some(3))).records.len(), 4);
    }

    #[test]
    fn test_unlistable_subdir_is_isolated() {
        let root = MemoryTree::new()
            .dir("ok1", MemoryTree::new().file("a.txt", "a"))
            .dir("locked", MemoryTree::new().file("hidden.txt", "h").unlistable())
            .dir("ok2", MemoryTree::new().file("b.txt", "b"))
            .into_handle();
        let outcome = walk(&root, &WalkOptions::default());
        assert_eq!(paths(&outcome), vec!["ok1/a.txt", "ok2/b.txt"]);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].path, "locked");
        assert_eq!(outcome.warnings[0].kind, WarningKind::ListDirectory);
    }

    #[test]
    fn test_metadata_failure_skips_only_that_file() {
        let root = MemoryTree::new()
            .file("a.txt", "a")
            .file_entry("bad.txt", MemoryFile::new("x").failing_metadata())
            .file("c.txt", "c")
            .into_handle();
        let outcome = walk(&root, &WalkOptions::default());
        assert_eq!(paths(&outcome), vec!["a.txt", "c.txt"]);
        assert_eq!(outcome.warnings[0].path, "bad.txt");
        assert_eq!(outcome.warnings[0].kind, WarningKind::FileMetadata);
    }

    #[test]
    fn test_unreadable_entry_warns_on_its_directory() {
        let root = MemoryTree::new()
            .dir("src", MemoryTree::new().file("a.rs", "a").unreadable_entry())
            .file("b.txt", "b")
            .into_handle();
        let outcome = walk(&root, &WalkOptions::default());
        assert_eq!(paths(&outcome), vec!["src/a.rs", "b.txt"]);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].path, "src");
        assert_eq!(outcome.warnings[0].kind, WarningKind::ListDirectory);
    }

    #[test]
    fn test_unlistable_root_yields_empty() {
        let root = MemoryTree::new().file("a.txt", "a").unlistable().into_handle();
        let outcome = walk(&root, &WalkOptions::default());
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings[0].path, ".");
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let outcome = walk(&nested(), &WalkOptions::default().with_cancel(cancel));
        assert!(outcome.cancelled);
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let mut tree = MemoryTree::new().file("leaf.txt", "x");
        for i in 0..500 {
            tree = MemoryTree::new().dir(&format!("d{}", i), tree);
        }
        let outcome = walk(&tree.into_handle(), &WalkOptions::default());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].depth, 500);
    }
}
