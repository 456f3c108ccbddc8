use folder_insights_domain::{
    CountByExtensionParams, LargeFilesParams, TextSearchParams, DEFAULT_QUERY, DEFAULT_THRESHOLD_MB,
};
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_MB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*mb").unwrap());
static GREATER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r">(\d+)").unwrap());
static DEPTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)depth\s*(\d+)|level\s*(\d+)").unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"|'([^']+)'"#).unwrap());
static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(\w+)(?:\s|,|$)").unwrap());

/// 未加引号时依次尝试的查询提取模式，在 in / depth / 结尾处截断
static QUERY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)search\s+for\s+(.+?)(?:\s+in|\s+depth|\s*$)",
        r"(?i)find\s+(?:text|string)\s+(.+?)(?:\s+in|\s+depth|\s*$)",
        r"(?i)containing\s+(.+?)(?:\s+in|\s+depth|\s*$)",
        r"(?i)with\s+(.+?)(?:\s+in|\s+depth|\s*$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const REGEX_WORDS: [&str; 3] = ["regex", "regexp", "pattern"];
const REGEX_CHARS: [char; 4] = ['*', '?', '[', '('];

/// 阈值（MB）：先取 `N MB`，其次 `>N`，否则默认 50
pub fn parse_threshold(goal: &str) -> u64 {
    SIZE_MB
        .captures(goal)
        .or_else(|| GREATER_THAN.captures(goal))
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(DEFAULT_THRESHOLD_MB)
}

/// 深度：`depth N` 或 `level N`，未提及则不限
pub fn parse_depth(goal: &str) -> Option<usize> {
    let caps = DEPTH.captures(goal)?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

/// 查询词：引号内文本优先，其次按模式提取；提取失败返回 None
pub fn parse_query(goal: &str) -> Option<String> {
    if let Some(caps) = QUOTED.captures(goal) {
        return caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str().to_string());
    }
    QUERY_PATTERNS
        .iter()
        .find_map(|p| p.captures(goal))
        .map(|caps| caps[1].trim().to_string())
        .filter(|q| !q.is_empty())
}

/// 扩展名过滤：所有 `.word` 记号，小写、去点、去重，保持出现顺序
pub fn parse_extensions(goal: &str) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for caps in EXTENSION.captures_iter(goal) {
        let ext = caps[1].to_lowercase();
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }
    extensions
}

/// 目标中提到 regex/pattern，或查询词含正则元字符时按正则匹配
pub fn parse_is_regex(goal: &str, query: &str) -> bool {
    let goal_lower = goal.to_lowercase();
    REGEX_WORDS.iter().any(|w| goal_lower.contains(w)) || query.contains(&REGEX_CHARS[..])
}

/// 从原始目标文本提取大文件查询的参数
pub fn parse_large_files_params(goal: &str) -> LargeFilesParams {
    LargeFilesParams {
        threshold: parse_threshold(goal),
        max_depth: parse_depth(goal),
    }
}

pub fn parse_count_by_extension_params(goal: &str) -> CountByExtensionParams {
    CountByExtensionParams {
        max_depth: parse_depth(goal),
    }
}

pub fn parse_text_search_params(goal: &str) -> TextSearchParams {
    let query = parse_query(goal).unwrap_or_default();
    let is_regex = parse_is_regex(goal, &query);
    let extensions = parse_extensions(goal);

    TextSearchParams {
        query: if query.is_empty() { DEFAULT_QUERY.to_string() } else { query },
        extensions: (!extensions.is_empty()).then_some(extensions),
        is_regex,
        max_depth: parse_depth(goal),
    }
}
