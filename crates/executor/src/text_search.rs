use folder_insights_common::InsightsError;
use folder_insights_domain::{
    FileRecord, QueryOutcome, QueryResults, TextSearchParams, WalkWarning, WarningKind,
};
use folder_insights_scanner::{resolve_file, safe_read_text_file, DirectoryHandle};
use rayon::prelude::*;
use regex::{Regex, RegexBuilder};

use crate::QueryContext;

/// 内容匹配方式：大小写不敏感的子串，或大小写不敏感的正则
pub enum Matcher {
    Substring(String),
    Pattern(Regex),
}

impl Matcher {
    /// 正则无法编译时退回子串匹配
    pub fn new(query: &str, is_regex: bool) -> Self {
        if is_regex {
            match RegexBuilder::new(query).case_insensitive(true).build() {
                Ok(re) => return Matcher::Pattern(re),
                Err(e) => log::warn!("Invalid regex {:?}, using substring search: {}", query, e),
            }
        }
        Matcher::Substring(query.to_lowercase())
    }

    pub fn is_match(&self, content: &str) -> bool {
        match self {
            Matcher::Substring(needle) => content.to_lowercase().contains(needle.as_str()),
            Matcher::Pattern(re) => re.is_match(content),
        }
    }
}

fn fault(record: &FileRecord, kind: WarningKind, err: InsightsError) -> WalkWarning {
    log::warn!("Failed to search in file {}: {}", record.path, err);
    WalkWarning::new(record.path.as_str(), kind, err)
}

/// 检查单个候选文件；Ok(None) 表示无内容或未命中
fn search_one<D: DirectoryHandle>(
    root: &D,
    record: &FileRecord,
    matcher: &Matcher,
    ctx: &QueryContext,
) -> Result<Option<FileRecord>, WalkWarning> {
    if ctx.cancel.is_cancelled() {
        return Ok(None);
    }

    // 遍历只保留元数据，这里按路径重新定位文件
    let file = resolve_file(root, &record.path)
        .map_err(|e| fault(record, WarningKind::PathResolution, e))?;

    let content = match safe_read_text_file(&file, &record.name, &ctx.config) {
        Ok(Some(content)) => content,
        Ok(None) => return Ok(None),
        Err(e) => return Err(fault(record, WarningKind::ReadContent, e)),
    };

    if !matcher.is_match(&content) {
        return Ok(None);
    }
    let preview: String = content.chars().take(ctx.config.preview_chars).collect();
    Ok(Some(record.with_content(preview)))
}

/// 在文本文件中搜索关键字或正则。
///
/// 先按扩展名白名单筛选，再并行读取候选文件内容；结果保持遍历顺序。
/// 任何单个文件的定位或读取失败只记为警告，不影响其余文件。
pub fn search_text<D>(
    root: &D,
    params: &TextSearchParams,
    ctx: &QueryContext,
) -> Result<QueryOutcome, InsightsError>
where
    D: DirectoryHandle + Sync,
{
    let walked = ctx.walk(root, params.max_depth)?;
    let mut warnings = walked.warnings;

    let candidates: Vec<&FileRecord> = match &params.extensions {
        Some(allowed) => walked
            .records
            .iter()
            .filter(|r| allowed.contains(&r.extension))
            .collect(),
        None => walked.records.iter().collect(),
    };

    let matcher = Matcher::new(&params.query, params.is_regex);
    let scanned: Vec<_> = candidates
        .par_iter()
        .map(|record| search_one(root, record, &matcher, ctx))
        .collect();

    if ctx.cancel.is_cancelled() {
        return Err(InsightsError::Cancelled);
    }

    let mut matches = Vec::new();
    for item in scanned {
        match item {
            Ok(Some(record)) => matches.push(record),
            Ok(None) => {}
            Err(warning) => warnings.push(warning),
        }
    }

    log::debug!(
        "text search {:?}: {} candidates, {} matches",
        params.query,
        candidates.len(),
        matches.len()
    );
    Ok(QueryOutcome {
        results: QueryResults::Files(matches),
        warnings,
    })
}
