use std::sync::Arc;

use folder_insights_common::InsightsError;
use folder_insights_domain::join_path;

use crate::handle::{DirectoryHandle, Entry, FileHandle, FileMeta, Listing};

/// 内存中的文件
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    content: String,
    size: Option<u64>,
    last_modified: Option<u64>,
    metadata_error: bool,
    read_error: bool,
}

impl MemoryFile {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// 覆盖报告的大小（不必真的分配那么多内容）
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_last_modified(mut self, millis: u64) -> Self {
        self.last_modified = Some(millis);
        self
    }

    pub fn failing_metadata(mut self) -> Self {
        self.metadata_error = true;
        self
    }

    pub fn failing_read(mut self) -> Self {
        self.read_error = true;
        self
    }
}

#[derive(Debug, Clone)]
enum MemoryNode {
    Dir(Arc<MemoryTree>),
    File(Arc<MemoryFile>),
}

/// 内存目录树的构建器：实现能力句柄接口，可对任意条目注入读取失败，供宿主嵌入与测试使用
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    children: Vec<(String, MemoryNode)>,
    unreadable_entries: usize,
    list_error: bool,
    open_error: bool,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(self, name: &str, content: impl Into<String>) -> Self {
        self.file_entry(name, MemoryFile::new(content))
    }

    pub fn file_entry(mut self, name: &str, file: MemoryFile) -> Self {
        self.children.push((name.to_string(), MemoryNode::File(Arc::new(file))));
        self
    }

    pub fn dir(mut self, name: &str, tree: MemoryTree) -> Self {
        self.children.push((name.to_string(), MemoryNode::Dir(Arc::new(tree))));
        self
    }

    /// 列出时多出一个宿主无法读取的条目
    pub fn unreadable_entry(mut self) -> Self {
        self.unreadable_entries += 1;
        self
    }

    /// 列出子项时失败
    pub fn unlistable(mut self) -> Self {
        self.list_error = true;
        self
    }

    /// 被父目录按名称打开时失败
    pub fn unopenable(mut self) -> Self {
        self.open_error = true;
        self
    }

    pub fn into_handle(self) -> MemoryDirectory {
        MemoryDirectory {
            tree: Arc::new(self),
            path: String::new(),
        }
    }

    fn child(&self, name: &str) -> Option<&MemoryNode> {
        self.children.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDirectory {
    tree: Arc<MemoryTree>,
    path: String,
}

#[derive(Debug, Clone)]
pub struct MemoryFileHandle {
    file: Arc<MemoryFile>,
    path: String,
}

impl DirectoryHandle for MemoryDirectory {
    type File = MemoryFileHandle;

    fn entries(&self) -> Result<Listing<Self>, InsightsError> {
        if self.tree.list_error {
            return Err(InsightsError::PermissionDenied(self.path.clone()));
        }
        let entries = self
            .tree
            .children
            .iter()
            .map(|(name, node)| {
                let path = join_path(&self.path, name);
                let entry = match node {
                    MemoryNode::Dir(tree) => Entry::Directory(MemoryDirectory {
                        tree: Arc::clone(tree),
                        path,
                    }),
                    MemoryNode::File(file) => Entry::File(MemoryFileHandle {
                        file: Arc::clone(file),
                        path,
                    }),
                };
                (name.clone(), entry)
            })
            .collect();
        let mut listing = Listing::new(entries);
        for _ in 0..self.tree.unreadable_entries {
            listing
                .skipped
                .push(InsightsError::PermissionDenied(self.path.clone()));
        }
        Ok(listing)
    }

    fn directory(&self, name: &str) -> Result<Self, InsightsError> {
        let path = join_path(&self.path, name);
        match self.tree.child(name) {
            Some(MemoryNode::Dir(tree)) if tree.open_error => Err(InsightsError::PermissionDenied(path)),
            Some(MemoryNode::Dir(tree)) => Ok(MemoryDirectory {
                tree: Arc::clone(tree),
                path,
            }),
            _ => Err(InsightsError::NotFound(path)),
        }
    }

    fn file(&self, name: &str) -> Result<MemoryFileHandle, InsightsError> {
        let path = join_path(&self.path, name);
        match self.tree.child(name) {
            Some(MemoryNode::File(file)) => Ok(MemoryFileHandle {
                file: Arc::clone(file),
                path,
            }),
            _ => Err(InsightsError::NotFound(path)),
        }
    }
}

impl FileHandle for MemoryFileHandle {
    fn metadata(&self) -> Result<FileMeta, InsightsError> {
        if self.file.metadata_error {
            return Err(InsightsError::PermissionDenied(self.path.clone()));
        }
        Ok(FileMeta {
            size: self.file.size.unwrap_or(self.file.content.len() as u64),
            last_modified: self.file.last_modified,
        })
    }

    fn read_text(&self) -> Result<String, InsightsError> {
        if self.file.read_error {
            return Err(InsightsError::PermissionDenied(self.path.clone()));
        }
        Ok(self.file.content.clone())
    }
}
