use serde::{Deserialize, Serialize};

/// 大文件查询的默认阈值（MB）
pub const DEFAULT_THRESHOLD_MB: u64 = 50;

/// 文本搜索提取不到关键字时使用的默认查询
pub const DEFAULT_QUERY: &str = "TODO";

/// 意图类型标签，与序列化时的 `type` 字段一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "LARGE_FILES")]
    LargeFiles,
    #[serde(rename = "COUNT_BY_EXT")]
    CountByExtension,
    #[serde(rename = "TEXT_SEARCH")]
    TextSearch,
}

impl IntentKind {
    pub const ALL: [IntentKind; 3] = [
        IntentKind::LargeFiles,
        IntentKind::CountByExtension,
        IntentKind::TextSearch,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            IntentKind::LargeFiles => "LARGE_FILES",
            IntentKind::CountByExtension => "COUNT_BY_EXT",
            IntentKind::TextSearch => "TEXT_SEARCH",
        }
    }

    /// 按标签查找意图类型，未知标签返回 None
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

/// 查找大文件的参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargeFilesParams {
    /// 阈值，单位 MB
    pub threshold: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl LargeFilesParams {
    pub fn threshold_bytes(&self) -> u64 {
        self.threshold.saturating_mul(1024 * 1024)
    }
}

impl Default for LargeFilesParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_MB,
            max_depth: None,
        }
    }
}

/// 按扩展名统计的参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountByExtensionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// 文本搜索的参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchParams {
    pub query: String,
    /// 扩展名白名单（小写、不含点），None 表示不过滤
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub is_regex: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for TextSearchParams {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            extensions: None,
            is_regex: false,
            max_depth: None,
        }
    }
}

/// 由自然语言目标解析出的结构化查询
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Intent {
    #[serde(rename = "LARGE_FILES")]
    LargeFiles(LargeFilesParams),
    #[serde(rename = "COUNT_BY_EXT")]
    CountByExtension(CountByExtensionParams),
    #[serde(rename = "TEXT_SEARCH")]
    TextSearch(TextSearchParams),
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::LargeFiles(_) => IntentKind::LargeFiles,
            Intent::CountByExtension(_) => IntentKind::CountByExtension,
            Intent::TextSearch(_) => IntentKind::TextSearch,
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        match self {
            Intent::LargeFiles(p) => p.max_depth,
            Intent::CountByExtension(p) => p.max_depth,
            Intent::TextSearch(p) => p.max_depth,
        }
    }

    /// 覆盖遍历深度（CLI 的 --depth 使用）
    pub fn set_max_depth(&mut self, depth: Option<usize>) {
        match self {
            Intent::LargeFiles(p) => p.max_depth = depth,
            Intent::CountByExtension(p) => p.max_depth = depth,
            Intent::TextSearch(p) => p.max_depth = depth,
        }
    }
}
