use folder_insights_common::InsightsError;
use folder_insights_domain::{Intent, IntentKind, QueryOutcome, TextSearchParams};
use folder_insights_scanner::DirectoryHandle;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{count_by_extension, find_large_files, search_text, QueryContext};

/// 未经校验的意图，例如宿主通过消息传来的 JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIntent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: Value,
}

impl RawIntent {
    /// 校验类型标签与参数；未知标签是引擎唯一的致命错误
    pub fn into_intent(self) -> Result<Intent, InsightsError> {
        let kind = IntentKind::from_tag(&self.kind)
            .ok_or_else(|| InsightsError::UnknownIntentType(self.kind.clone()))?;
        let params = match self.params {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };
        let invalid = |e: serde_json::Error| InsightsError::InvalidIntent {
            kind: kind.tag().to_string(),
            message: e.to_string(),
        };
        let intent = match kind {
            IntentKind::LargeFiles => Intent::LargeFiles(serde_json::from_value(params).map_err(invalid)?),
            IntentKind::CountByExtension => {
                Intent::CountByExtension(serde_json::from_value(params).map_err(invalid)?)
            }
            IntentKind::TextSearch => {
                let mut params: TextSearchParams = serde_json::from_value(params).map_err(invalid)?;
                // 白名单与记录的扩展名同为小写、不含点
                if let Some(extensions) = params.extensions.as_mut() {
                    for ext in extensions.iter_mut() {
                        *ext = ext.trim_start_matches('.').to_lowercase();
                    }
                }
                Intent::TextSearch(params)
            }
        };
        Ok(intent)
    }
}

/// 以默认配置执行意图
pub fn execute<D>(root: &D, intent: &Intent) -> Result<QueryOutcome, InsightsError>
where
    D: DirectoryHandle + Sync,
{
    execute_with(root, intent, &QueryContext::default())
}

/// 将意图分派给对应的执行器
pub fn execute_with<D>(root: &D, intent: &Intent, ctx: &QueryContext) -> Result<QueryOutcome, InsightsError>
where
    D: DirectoryHandle + Sync,
{
    log::info!("executing {} query", intent.kind().tag());
    match intent {
        Intent::LargeFiles(params) => find_large_files(root, params, ctx),
        Intent::CountByExtension(params) => count_by_extension(root, params, ctx),
        Intent::TextSearch(params) => search_text(root, params, ctx),
    }
}

/// 执行未经校验的意图
pub fn execute_raw<D>(root: &D, raw: RawIntent, ctx: &QueryContext) -> Result<QueryOutcome, InsightsError>
where
    D: DirectoryHandle + Sync,
{
    let intent = raw.into_intent()?;
    execute_with(root, &intent, ctx)
}
