use serde::{Deserialize, Serialize};

use crate::{ExtensionAggregate, FileRecord, WalkWarning};

/// 查询结果集合：文件列表或扩展名统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResults {
    Files(Vec<FileRecord>),
    Extensions(Vec<ExtensionAggregate>),
}

impl QueryResults {
    pub fn len(&self) -> usize {
        match self {
            QueryResults::Files(v) => v.len(),
            QueryResults::Extensions(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_files(&self) -> Option<&[FileRecord]> {
        match self {
            QueryResults::Files(v) => Some(v),
            QueryResults::Extensions(_) => None,
        }
    }

    pub fn as_extensions(&self) -> Option<&[ExtensionAggregate]> {
        match self {
            QueryResults::Extensions(v) => Some(v),
            QueryResults::Files(_) => None,
        }
    }
}

/// 一次查询的完整输出，warnings 记录被跳过的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub results: QueryResults,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WalkWarning>,
}
