use serde::{Deserialize, Serialize};

/// 遍历得到的单个文件记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// 相对遍历根目录的路径，以 `/` 连接
    pub path: String,
    pub name: String,
    pub size: u64,
    /// 小写扩展名，不含点；没有扩展名时为空串
    pub extension: String,
    /// 根目录的直接子项深度为 0
    pub depth: usize,
    /// Unix 时间戳（毫秒），最近修改时间
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<u64>,
    /// 内容预览，仅文本搜索结果填充
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileRecord {
    /// 返回附带内容预览的副本
    pub fn with_content(&self, preview: String) -> Self {
        Self {
            content: Some(preview),
            ..self.clone()
        }
    }
}

/// 取文件扩展名：最后一个点之后的部分并转小写；无点或以点开头（如 `.gitignore`）视为无扩展名
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        None | Some(0) => String::new(),
        Some(idx) => name[idx + 1..].to_lowercase(),
    }
}

/// 以 `/` 拼接相对路径
pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}
