use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 语义表：camelCase 标识符 → 设计值（保持声明顺序）
pub type SemanticTable = IndexMap<String, TokenValue>;

/// 扁平变量表：`--prefix-key` → 最终字符串值
pub type VariableMap = IndexMap<String, String>;

/// 单个设计值
///
/// - `Numeric`：裸数字，派生时追加单位（如 `5` → `5px`）
/// - `Literal`：已格式化的字符串（颜色、时长、带单位的值），原样使用
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Numeric(f64),
    Literal(String),
}

impl TokenValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, TokenValue::Numeric(_))
    }

    /// 带单位渲染；`Literal` 忽略单位
    pub fn with_unit(&self, unit: &str) -> String {
        match self {
            TokenValue::Numeric(_) => format!("{}{}", self, unit),
            TokenValue::Literal(s) => s.clone(),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 的 Display 对整数不输出小数部分：544.0 → "544"
            TokenValue::Numeric(n) => write!(f, "{}", n),
            TokenValue::Literal(s) => f.write_str(s),
        }
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenValue::Numeric(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            TokenValue::Numeric(n) => serializer.serialize_f64(*n),
            TokenValue::Literal(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i32> for TokenValue {
    fn from(n: i32) -> Self {
        TokenValue::Numeric(f64::from(n))
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Numeric(n)
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Literal(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Literal(s)
    }
}

/// 从字面量数组构造语义表
pub fn table<const N: usize>(entries: [(&str, TokenValue); N]) -> SemanticTable {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// 对外导出的共享变量
///
/// 字段名即 JS 侧的 key：`css`、`colors`、`sizes`、`mediaQueries`、`media`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedVariables {
    /// 合并后的扁平变量表（供 postcss-css-variables 使用）
    pub css: VariableMap,
    /// 解析别名后的颜色表
    pub colors: SemanticTable,
    pub sizes: SemanticTable,
    /// 原始断点表
    pub media_queries: SemanticTable,
    /// 自定义媒体查询（供 postcss-custom-media 使用）
    pub media: VariableMap,
}

/// 输出：派生结果
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub variables: SharedVariables,
    /// 警告/错误（如未解析的颜色别名）
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_display_drops_trailing_zero() {
        assert_eq!(TokenValue::from(544).to_string(), "544");
        assert_eq!(TokenValue::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(TokenValue::from(5).with_unit("px"), "5px");
        assert_eq!(TokenValue::from("30%").with_unit("px"), "30%");
        assert_eq!(TokenValue::from(60).with_unit(""), "60");
    }

    #[test]
    fn test_serialize_integral_as_integer() {
        let t = table([("a", 5.into()), ("b", 0.25.into()), ("c", "1em".into())]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"a":5,"b":0.25,"c":"1em"}"#);
    }

    #[test]
    fn test_deserialize_untagged() {
        let t: SemanticTable = serde_json::from_str(r#"{"a": 5, "b": "0.2s"}"#).unwrap();
        assert_eq!(t["a"], TokenValue::Numeric(5.0));
        assert_eq!(t["b"], TokenValue::Literal("0.2s".to_string()));
    }

    #[test]
    fn test_deserialize_rejects_other_types() {
        let result: Result<SemanticTable, _> = serde_json::from_str(r#"{"a": null}"#);
        assert!(result.is_err());
    }
}
