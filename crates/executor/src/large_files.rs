use folder_insights_common::InsightsError;
use folder_insights_domain::{LargeFilesParams, QueryOutcome, QueryResults};
use folder_insights_scanner::DirectoryHandle;

use crate::QueryContext;

/// 查找不小于阈值的文件，按大小降序（同大小保持遍历顺序）
pub fn find_large_files<D: DirectoryHandle>(
    root: &D,
    params: &LargeFilesParams,
    ctx: &QueryContext,
) -> Result<QueryOutcome, InsightsError> {
    let threshold_bytes = params.threshold_bytes();
    let walked = ctx.walk(root, params.max_depth)?;

    let mut large: Vec<_> = walked
        .records
        .into_iter()
        .filter(|r| r.size >= threshold_bytes)
        .collect();
    large.sort_by(|a, b| b.size.cmp(&a.size));

    log::debug!("large files >= {} bytes: {}", threshold_bytes, large.len());
    Ok(QueryOutcome {
        results: QueryResults::Files(large),
        warnings: walked.warnings,
    })
}
