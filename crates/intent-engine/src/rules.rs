use folder_insights_domain::{Intent, IntentKind};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::{parse_count_by_extension_params, parse_large_files_params, parse_text_search_params};

/// 一条识别规则
pub struct Rule {
    pub label: &'static str,
    pub kind: IntentKind,
    /// 兜底规则只在所有模式组都未命中时才生效
    pub fallback: bool,
    pattern: Regex,
    extract: fn(&str) -> Intent,
}

impl Rule {
    /// `goal_lower` 须已去除首尾空白并转为小写
    pub fn matches(&self, goal_lower: &str) -> bool {
        self.pattern.is_match(goal_lower)
    }

    /// 从原始目标文本提取参数
    pub fn extract(&self, goal: &str) -> Intent {
        (self.extract)(goal)
    }
}

fn large_files(goal: &str) -> Intent {
    Intent::LargeFiles(parse_large_files_params(goal))
}

fn count_by_extension(goal: &str) -> Intent {
    Intent::CountByExtension(parse_count_by_extension_params(goal))
}

fn text_search(goal: &str) -> Intent {
    Intent::TextSearch(parse_text_search_params(goal))
}

fn group(
    kind: IntentKind,
    extract: fn(&str) -> Intent,
    fallback: bool,
    patterns: &[(&'static str, &str)],
) -> Vec<Rule> {
    patterns
        .iter()
        .map(|&(label, pattern)| Rule {
            label,
            kind,
            fallback,
            pattern: Regex::new(pattern).expect("built-in intent pattern"),
            extract,
        })
        .collect()
}

/// 意图识别规则表：按优先级排列的 (模式, 参数提取器) 列表，先匹配者胜出。
///
/// 顺序即优先级：大文件 → 按扩展名统计 → 文本搜索 → 兜底（提到大小即视为大文件查询）。
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = Vec::new();
    rules.extend(group(
        IntentKind::LargeFiles,
        large_files,
        false,
        &[
            ("find large files", r"find.*large.*files?"),
            ("files larger than", r"files?.*larger?.*than"),
            ("files bigger than", r"files?.*bigger?.*than"),
            ("files over", r"files?.*over"),
            ("files above", r"files?.*above"),
            ("files > N", r"files?.*>\s*(\d+)(?:\s*mb)?"),
            ("N MB files", r"(\d+)\s*mb.*files?"),
            ("big files", r"big.*files?"),
            ("huge files", r"huge.*files?"),
        ],
    ));
    rules.extend(group(
        IntentKind::CountByExtension,
        count_by_extension,
        false,
        &[
            ("count by ext", r"count.*by.*ext"),
            ("count ext", r"count.*ext"),
            ("group by ext", r"group.*by.*ext"),
            ("breakdown ext", r"breakdown.*ext"),
            ("files by type", r"files?.*by.*type"),
            ("file types", r"file.*types?"),
            ("extension count", r"extension.*count"),
            ("how many .ext", r"how.*many.*\.(js|py|txt|md|csv)"),
        ],
    ));
    rules.extend(group(
        IntentKind::TextSearch,
        text_search,
        false,
        &[
            ("search for", r"search.*for"),
            ("find text", r"find.*text"),
            ("find string", r"find.*string"),
            ("contains", r"contains?"),
            ("grep", r"grep"),
            ("look for", r"look.*for"),
            ("files with", r"files?.*with"),
            ("files containing", r"files?.*containing"),
            ("text search", r"text.*search"),
        ],
    ));
    rules.extend(group(
        IntentKind::LargeFiles,
        large_files,
        true,
        &[("size mentioned", r"\d+\s*mb|\d+\s*gb|size")],
    ));
    rules
});

/// 返回第一条命中的规则
pub fn matching_rule(goal_lower: &str) -> Option<&'static Rule> {
    first_match(&RULES, goal_lower)
}

/// 先在普通规则中按顺序查找，全部未命中才轮到兜底规则
fn first_match<'a>(rules: &'a [Rule], goal_lower: &str) -> Option<&'a Rule> {
    rules
        .iter()
        .filter(|rule| !rule.fallback)
        .find(|rule| rule.matches(goal_lower))
        .or_else(|| {
            rules
                .iter()
                .filter(|rule| rule.fallback)
                .find(|rule| rule.matches(goal_lower))
        })
}
