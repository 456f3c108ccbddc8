use folder_insights_common::InsightsError;
use folder_insights_domain::{ExtensionAggregate, FileRecord, QueryOutcome, QueryResults};
use folder_insights_executor::format_file_size;

const PREVIEW_LINE_CHARS: usize = 80;

/// 文本搜索结果附带的预览中第一行非空内容
fn first_line(preview: &str) -> Option<String> {
    let line = preview.lines().map(str::trim).find(|l| !l.is_empty())?;
    Some(line.chars().take(PREVIEW_LINE_CHARS).collect())
}

fn render_files(files: &[FileRecord], out: &mut String) {
    out.push_str(&format!("{:>10}  {:>5}  {}\n", "SIZE", "DEPTH", "PATH"));
    for file in files {
        out.push_str(&format!(
            "{:>10}  {:>5}  {}\n",
            format_file_size(file.size),
            file.depth,
            file.path
        ));
        if let Some(line) = file.content.as_deref().and_then(first_line) {
            out.push_str(&format!("{:>19}{}\n", "", line));
        }
    }
}

fn render_extensions(groups: &[ExtensionAggregate], out: &mut String) {
    let width = groups
        .iter()
        .map(|g| g.extension.chars().count())
        .max()
        .unwrap_or(0)
        .max("EXTENSION".len());
    out.push_str(&format!("{:<width$}  {:>7}  {:>10}\n", "EXTENSION", "COUNT", "TOTAL", width = width));
    for group in groups {
        out.push_str(&format!(
            "{:<width$}  {:>7}  {:>10}\n",
            group.extension,
            group.count,
            format_file_size(group.total_size),
            width = width
        ));
    }
}

/// 渲染查询结果为纯文本表格
pub fn render_table(folder: &str, results: &QueryResults) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str(&format!("No results in {}\n", folder));
        return out;
    }
    match results {
        QueryResults::Files(files) => render_files(files, &mut out),
        QueryResults::Extensions(groups) => render_extensions(groups, &mut out),
    }
    out.push_str(&format!("\n{} result(s) in {}\n", results.len(), folder));
    out
}

/// 渲染结果与警告为 JSON
pub fn render_json(outcome: &QueryOutcome) -> Result<String, InsightsError> {
    serde_json::to_string_pretty(outcome).map_err(|e| InsightsError::Serialization(e.to_string()))
}
