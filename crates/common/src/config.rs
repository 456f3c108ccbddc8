use crate::InsightsError;

/// 文本读取上限：超过该大小的文件不读取内容（10 MiB）
pub const DEFAULT_TEXT_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

/// 文本搜索结果中附带的内容预览长度（字符数）
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// 视为文本/源码的扩展名白名单（小写，不含点）
pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "js", "ts", "jsx", "tsx", "py", "java", "c", "cpp", "h",
    "css", "scss", "html", "xml", "yml", "yaml", "toml", "ini", "cfg", "conf",
    "log", "csv", "tsv", "sql", "sh", "bash", "zsh", "fish", "ps1", "bat",
    "php", "rb", "go", "rs", "swift", "kt", "scala", "clj", "elm", "hs",
    "r", "matlab", "pl", "pm", "tcl", "lua", "vim", "el", "lisp", "scm",
];

const ENV_TEXT_LIMIT: &str = "FOLDER_INSIGHTS_TEXT_LIMIT";
const ENV_PREVIEW_CHARS: &str = "FOLDER_INSIGHTS_PREVIEW_CHARS";

/// 引擎配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 单个文件允许读取的最大字节数
    pub text_size_limit: u64,
    /// 匹配结果附带的预览字符数
    pub preview_chars: usize,
    pub text_extensions: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            text_size_limit: DEFAULT_TEXT_SIZE_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            text_extensions: TEXT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// 从环境变量读取覆盖项，未设置的字段保持默认值
    pub fn from_env() -> Result<Self, InsightsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, InsightsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_TEXT_LIMIT) {
            config.text_size_limit = raw.trim().parse().map_err(|_| {
                InsightsError::Config(format!("{} 不是合法的字节数: {}", ENV_TEXT_LIMIT, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_PREVIEW_CHARS) {
            config.preview_chars = raw.trim().parse().map_err(|_| {
                InsightsError::Config(format!("{} 不是合法的字符数: {}", ENV_PREVIEW_CHARS, raw))
            })?;
        }
        Ok(config)
    }

    pub fn is_text_extension(&self, ext: &str) -> bool {
        self.text_extensions.iter().any(|e| e == ext)
    }
}
