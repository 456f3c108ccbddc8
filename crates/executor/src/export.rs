use std::path::Path;

use chrono::{SecondsFormat, TimeZone, Utc};
use folder_insights_common::InsightsError;
use folder_insights_domain::{ExtensionAggregate, FileRecord, QueryResults};

use crate::format_file_size;

pub const FILE_HEADER: &str = "Path,Name,Size (Bytes),Size (Formatted),Extension,Depth,Last Modified";
pub const EXTENSION_HEADER: &str = "Extension,Count,Total Size (Bytes),Total Size (Formatted)";
const EMPTY_EXPORT: &str = "No data to export";

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn iso_millis(millis: u64) -> Option<String> {
    let millis = i64::try_from(millis).ok()?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn file_row(file: &FileRecord) -> String {
    let modified = file.last_modified.and_then(iso_millis).unwrap_or_default();
    [
        quoted(&file.path),
        quoted(&file.name),
        file.size.to_string(),
        quoted(&format_file_size(file.size)),
        quoted(&file.extension),
        file.depth.to_string(),
        quoted(&modified),
    ]
    .join(",")
}

fn extension_row(ext: &ExtensionAggregate) -> String {
    [
        quoted(&ext.extension),
        ext.count.to_string(),
        ext.total_size.to_string(),
        quoted(&format_file_size(ext.total_size)),
    ]
    .join(",")
}

/// 将查询结果导出为 CSV 文本
pub fn export_csv(results: &QueryResults) -> String {
    if results.is_empty() {
        return EMPTY_EXPORT.to_string();
    }
    let (header, rows): (&str, Vec<String>) = match results {
        QueryResults::Files(files) => (FILE_HEADER, files.iter().map(file_row).collect()),
        QueryResults::Extensions(exts) => (EXTENSION_HEADER, exts.iter().map(extension_row).collect()),
    };

    let mut csv = String::with_capacity(header.len() + 1 + rows.len() * 64);
    csv.push_str(header);
    csv.push('\n');
    for row in rows {
        csv.push_str(&row);
        csv.push('\n');
    }
    csv
}

/// 导出 CSV 到文件
pub fn write_csv(results: &QueryResults, path: &Path) -> Result<(), InsightsError> {
    std::fs::write(path, export_csv(results))
        .map_err(|e| InsightsError::from_io(e, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, size: u64, modified: Option<u64>) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap().to_string(),
            size,
            extension: "mp4".to_string(),
            depth: path.matches('/').count(),
            last_modified: modified,
            content: None,
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(export_csv(&QueryResults::Files(vec![])), "No data to export");
        assert_eq!(export_csv(&QueryResults::Extensions(vec![])), "No data to export");
    }

    #[test]
    fn test_file_rows() {
        let csv = export_csv(&QueryResults::Files(vec![
            file("videos/a.mp4", 1536, Some(1_700_000_000_123)),
            file("b \"x\".mp4", 10, None),
        ]));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], FILE_HEADER);
        assert_eq!(
            lines[1],
            r#""videos/a.mp4","a.mp4",1536,"1.5 KB","mp4",1,"2023-11-14T22:13:20.123Z""#
        );
        assert_eq!(lines[2], r#""b ""x"".mp4","b ""x"".mp4",10,"10 B","mp4",0,"""#);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_extension_rows() {
        let csv = export_csv(&QueryResults::Extensions(vec![ExtensionAggregate {
            extension: "(no extension)".to_string(),
            count: 3,
            total_size: 2048,
        }]));
        assert_eq!(
            csv,
            format!("{}\n\"(no extension)\",3,2048,\"2.0 KB\"\n", EXTENSION_HEADER)
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");
        write_csv(&QueryResults::Files(vec![file("a.mp4", 1, None)]), &target).unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with(FILE_HEADER));
    }
}
