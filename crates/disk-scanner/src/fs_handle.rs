use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use folder_insights_common::InsightsError;

use crate::handle::{DirectoryHandle, Entry, FileHandle, FileMeta, Listing};

/// 基于 std::fs 的目录句柄
#[derive(Debug, Clone)]
pub struct FsDirectory {
    path: PathBuf,
}

/// 基于 std::fs 的文件句柄
#[derive(Debug, Clone)]
pub struct FsFile {
    path: PathBuf,
}

/// 规范化路径（支持正斜杠、去除首尾空白）
pub(crate) fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl FsDirectory {
    /// 打开一个已存在的目录作为遍历根
    pub fn open(path: &str) -> Result<Self, InsightsError> {
        let path_buf = normalize_path(path);
        if !path_buf.exists() {
            return Err(InsightsError::InvalidPath(format!("路径不存在: {}", path)));
        }
        let path_buf = fs::canonicalize(&path_buf)
            .map_err(|e| InsightsError::InvalidPath(format!("无法解析路径: {}", e)))?;
        if !path_buf.is_dir() {
            return Err(InsightsError::InvalidPath(format!("不是目录: {}", path)));
        }
        Ok(Self { path: path_buf })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 目录名，用于展示
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| display(&self.path))
    }
}

impl DirectoryHandle for FsDirectory {
    type File = FsFile;

    fn entries(&self) -> Result<Listing<Self>, InsightsError> {
        let read_dir =
            fs::read_dir(&self.path).map_err(|e| InsightsError::from_io(e, &display(&self.path)))?;

        let mut listing = Listing::new(Vec::new());
        for item in read_dir {
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    listing.skipped.push(InsightsError::from_io(e, &display(&self.path)));
                    continue;
                }
            };
            let child = item.path();
            let name = item.file_name().to_string_lossy().to_string();

            // 类型未知或链接断开时按文件处理，读取元数据时再报告失败
            let entry = match item.file_type() {
                Ok(t) if t.is_dir() => Entry::Directory(FsDirectory { path: child }),
                Ok(t) if t.is_symlink() => match fs::metadata(&child) {
                    // 目录链接可能成环，不跟随
                    Ok(meta) if meta.is_dir() => {
                        log::debug!("Skipping directory symlink {}", display(&child));
                        continue;
                    }
                    _ => Entry::File(FsFile { path: child }),
                },
                Ok(t) if !t.is_file() => {
                    log::debug!("Skipping special file {}", display(&child));
                    continue;
                }
                _ => Entry::File(FsFile { path: child }),
            };
            listing.entries.push((name, entry));
        }

        listing.entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(listing)
    }

    fn directory(&self, name: &str) -> Result<Self, InsightsError> {
        let path = self.path.join(name);
        let meta = fs::metadata(&path).map_err(|e| InsightsError::from_io(e, &display(&path)))?;
        if !meta.is_dir() {
            return Err(InsightsError::NotFound(display(&path)));
        }
        Ok(FsDirectory { path })
    }

    fn file(&self, name: &str) -> Result<FsFile, InsightsError> {
        let path = self.path.join(name);
        let meta = fs::metadata(&path).map_err(|e| InsightsError::from_io(e, &display(&path)))?;
        if !meta.is_file() {
            return Err(InsightsError::NotFound(display(&path)));
        }
        Ok(FsFile { path })
    }
}

impl FileHandle for FsFile {
    fn metadata(&self) -> Result<FileMeta, InsightsError> {
        let meta =
            fs::metadata(&self.path).map_err(|e| InsightsError::from_io(e, &display(&self.path)))?;
        let last_modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64);
        Ok(FileMeta {
            size: meta.len(),
            last_modified,
        })
    }

    fn read_text(&self) -> Result<String, InsightsError> {
        let bytes = fs::read(&self.path).map_err(|e| InsightsError::from_io(e, &display(&self.path)))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
