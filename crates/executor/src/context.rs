use folder_insights_common::{EngineConfig, InsightsError};
use folder_insights_scanner::{walk, CancelToken, DirectoryHandle, WalkOptions, WalkOutcome};

/// 单次查询的执行上下文
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub config: EngineConfig,
    pub cancel: CancelToken,
}

impl QueryContext {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::default(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// 按给定深度遍历一次；被取消时返回 Cancelled
    pub(crate) fn walk<D: DirectoryHandle>(
        &self,
        root: &D,
        max_depth: Option<usize>,
    ) -> Result<WalkOutcome, InsightsError> {
        let options = WalkOptions::new(max_depth).with_cancel(self.cancel.clone());
        let outcome = walk(root, &options);
        if outcome.cancelled {
            return Err(InsightsError::Cancelled);
        }
        Ok(outcome)
    }
}
