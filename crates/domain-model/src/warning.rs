use serde::{Deserialize, Serialize};

/// 非致命故障的类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningKind {
    /// 读取文件元数据失败
    FileMetadata,
    /// 枚举目录子项失败
    ListDirectory,
    /// 文本搜索时按路径重新定位文件失败
    PathResolution,
    /// 读取文件内容失败
    ReadContent,
}

/// 遍历或查询过程中被跳过的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkWarning {
    pub path: String,
    pub kind: WarningKind,
    pub message: String,
}

impl WalkWarning {
    pub fn new(path: impl Into<String>, kind: WarningKind, message: impl ToString) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.to_string(),
        }
    }
}
