use std::collections::HashMap;

use folder_insights_common::InsightsError;
use folder_insights_domain::{
    CountByExtensionParams, ExtensionAggregate, FileRecord, QueryOutcome, QueryResults,
    NO_EXTENSION_LABEL,
};
use folder_insights_scanner::DirectoryHandle;

use crate::QueryContext;

/// 按扩展名分组汇总数量与总大小；分组按首次出现排序后再按数量稳定降序
pub fn aggregate_by_extension(records: &[FileRecord]) -> Vec<ExtensionAggregate> {
    let mut groups: Vec<ExtensionAggregate> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let ext = if record.extension.is_empty() {
            NO_EXTENSION_LABEL
        } else {
            record.extension.as_str()
        };
        let slot = *index.entry(ext).or_insert_with(|| {
            groups.push(ExtensionAggregate {
                extension: ext.to_string(),
                count: 0,
                total_size: 0,
            });
            groups.len() - 1
        });
        groups[slot].count += 1;
        groups[slot].total_size += record.size;
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

pub fn count_by_extension<D: DirectoryHandle>(
    root: &D,
    params: &CountByExtensionParams,
    ctx: &QueryContext,
) -> Result<QueryOutcome, InsightsError> {
    let walked = ctx.walk(root, params.max_depth)?;
    let groups = aggregate_by_extension(&walked.records);

    log::debug!("{} files in {} extension groups", walked.records.len(), groups.len());
    Ok(QueryOutcome {
        results: QueryResults::Extensions(groups),
        warnings: walked.warnings,
    })
}
