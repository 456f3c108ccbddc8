use serde::{Deserialize, Serialize};

/// 无扩展名文件在统计结果中的显示标签
pub const NO_EXTENSION_LABEL: &str = "(no extension)";

/// 按扩展名汇总的数量与总大小
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionAggregate {
    pub extension: String,
    pub count: u64,
    pub total_size: u64,
}
