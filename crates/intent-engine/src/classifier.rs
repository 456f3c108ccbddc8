use folder_insights_domain::Intent;

use crate::rules::matching_rule;

/// 将自然语言目标解析为结构化意图。
///
/// 纯函数、大小写不敏感；所有规则都未命中时返回 None，调用方应提示用户描述得更具体。
pub fn classify(goal: &str) -> Option<Intent> {
    let goal_lower = goal.trim().to_lowercase();
    let rule = matching_rule(&goal_lower)?;
    Some(rule.extract(goal))
}
