use crate::CancelToken;

/// 遍历选项
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// 排他上界：深度等于 max_depth 的目录不展开；None 表示不限
    pub max_depth: Option<usize>,
    pub cancel: CancelToken,
}

impl WalkOptions {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            cancel: CancelToken::default(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub(crate) fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}
