use folder_insights_common::{EngineConfig, InsightsError};
use folder_insights_domain::file_extension;

use crate::handle::FileHandle;

/// 安全读取文本文件内容。
///
/// 扩展名不在文本白名单、或大小超过上限时返回 `Ok(None)`（视为无内容，不算错误）；
/// 真正的读取失败才返回 `Err`，由调用方决定是否记为警告。
pub fn safe_read_text_file<F: FileHandle>(
    file: &F,
    name: &str,
    config: &EngineConfig,
) -> Result<Option<String>, InsightsError> {
    let ext = file_extension(name);
    if !config.is_text_extension(&ext) {
        return Ok(None);
    }

    let meta = file.metadata()?;
    if meta.size > config.text_size_limit {
        log::debug!("Skipping {}: {} bytes exceeds text limit", name, meta.size);
        return Ok(None);
    }

    file.read_text().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::DirectoryHandle;
    use crate::memory::{MemoryFile, MemoryTree};

    #[test]
    fn test_reads_known_text_extension() {
        let root = MemoryTree::new().file("notes.md", "TODO: fix").into_handle();
        let file = root.file("notes.md").unwrap();
        let content = safe_read_text_file(&file, "notes.md", &EngineConfig::default()).unwrap();
        assert_eq!(content.as_deref(), Some("TODO: fix"));
    }

    #[test]
    fn test_unknown_extension_has_no_content() {
        let root = MemoryTree::new()
            .file("image.png", "TODO")
            .file("LICENSE", "TODO")
            .into_handle();
        let config = EngineConfig::default();
        for name in ["image.png", "LICENSE"] {
            let file = root.file(name).unwrap();
            assert_eq!(safe_read_text_file(&file, name, &config).unwrap(), None);
        }
    }

    #[test]
    fn test_size_cap() {
        let config = EngineConfig::default();
        let root = MemoryTree::new()
            .file_entry("at_cap.log", MemoryFile::new("x").with_size(10 * 1024 * 1024))
            .file_entry("over_cap.log", MemoryFile::new("x").with_size(10 * 1024 * 1024 + 1))
            .into_handle();

        let at = root.file("at_cap.log").unwrap();
        assert!(safe_read_text_file(&at, "at_cap.log", &config).unwrap().is_some());
        let over = root.file("over_cap.log").unwrap();
        assert!(safe_read_text_file(&over, "over_cap.log", &config).unwrap().is_none());
    }

    #[test]
    fn test_read_failure_is_error() {
        let root = MemoryTree::new()
            .file_entry("broken.txt", MemoryFile::new("x").failing_read())
            .into_handle();
        let file = root.file("broken.txt").unwrap();
        assert!(safe_read_text_file(&file, "broken.txt", &EngineConfig::default()).is_err());
    }
}
