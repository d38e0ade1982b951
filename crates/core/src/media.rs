use crate::naming::to_bare_variable_name;
use crate::types::{SemanticTable, TokenValue, VariableMap};

/// 断点表 → 自定义媒体查询表
///
/// `{ phone: 544 }` → `{ "--phone": "(min-width: 544px)" }`
///
/// 数字值追加 `px`；字符串值视为已带单位，原样放入表达式。
pub fn custom_media(breakpoints: &SemanticTable) -> VariableMap {
    breakpoints
        .iter()
        .map(|(name, value)| (to_bare_variable_name(name), min_width_query(value)))
        .collect()
}

fn min_width_query(value: &TokenValue) -> String {
    format!("(min-width: {})", value.with_unit("px"))
}
