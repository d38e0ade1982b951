use crate::error::TokenError;
use crate::tokens::TokenSet;

/// 从 JSON 字符串加载设计值
///
/// 缺失的表为空表。JSON 格式示例：
/// ```json
/// {
///   "sizes": { "borderRadius": 5, "wizardSidebarWidth": "30%" },
///   "mediaQueries": { "phone": 544 },
///   "colors": {
///     "base": { "purple": "#964bff" },
///     "aliases": {
///       "primary": { "ref": "purple" },
///       "borderAlpha": { "raw": "rgba(0, 0, 0, 0.07)" }
///     }
///   }
/// }
/// ```
pub fn load_from_json(json_str: &str) -> Result<TokenSet, TokenError> {
    let tokens: TokenSet = serde_json::from_str(json_str)?;
    Ok(tokens)
}

/// 导出为 JSON，格式与 [`load_from_json`] 相同
pub fn to_json(tokens: &TokenSet) -> Result<String, TokenError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
