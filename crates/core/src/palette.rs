//! 颜色表：基础色 + 语义别名
//!
//! 两阶段构造：先定义基础色，再基于基础色的不可变引用解析别名，最后拼接。
//! 别名只能引用基础色；引用不存在的 key 会被标记出来，而不是产生空值。

use crate::error::TokenError;
use crate::types::{Diagnostic, SemanticTable, TokenValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 别名条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorAlias {
    /// 复制基础色表中某个 key 的值（如 `primary` → `purple`）
    Ref(String),
    /// 不经过基础色表的原始值（如 rgba 半透明色）
    Raw(String),
}

impl ColorAlias {
    pub fn reference(key: &str) -> Self {
        ColorAlias::Ref(key.to_string())
    }

    pub fn raw(value: &str) -> Self {
        ColorAlias::Raw(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub base: SemanticTable,
    pub aliases: IndexMap<String, ColorAlias>,
}

/// 未解析的别名：(别名, 目标 key)
type Unresolved = Vec<(String, String)>;

impl Palette {
    pub fn new(base: SemanticTable) -> Self {
        Self {
            base,
            aliases: IndexMap::new(),
        }
    }

    /// 追加别名，返回自身以便链式调用
    pub fn alias(mut self, name: &str, alias: ColorAlias) -> Self {
        self.aliases.insert(name.to_string(), alias);
        self
    }

    /// 严格解析：遇到第一个未定义的引用即返回错误
    pub fn resolve(&self) -> Result<SemanticTable, TokenError> {
        let (table, unresolved) = self.resolve_aliases();

        match unresolved.into_iter().next() {
            Some((alias, target)) => Err(TokenError::UnresolvedAlias { alias, target }),
            None => Ok(table),
        }
    }

    /// 宽松解析：未解析的别名不进入结果表，每个生成一条 Error 诊断
    pub fn resolve_lenient(&self) -> (SemanticTable, Vec<Diagnostic>) {
        let (table, unresolved) = self.resolve_aliases();

        let diagnostics = unresolved
            .into_iter()
            .map(|(alias, target)| {
                log::warn!("color alias '{}' references undefined color '{}'", alias, target);
                Diagnostic::error(
                    TokenError::UnresolvedAlias { alias, target }.to_string(),
                )
            })
            .collect();

        (table, diagnostics)
    }

    fn resolve_aliases(&self) -> (SemanticTable, Unresolved) {
        let base = &self.base;
        let mut resolved = SemanticTable::new();
        let mut unresolved = Unresolved::new();

        for (name, alias) in &self.aliases {
            let value = match alias {
                ColorAlias::Ref(target) => match base.get(target) {
                    Some(value) => value.clone(),
                    None => {
                        unresolved.push((name.clone(), target.clone()));
                        continue;
                    }
                },
                ColorAlias::Raw(value) => TokenValue::Literal(value.clone()),
            };
            resolved.insert(name.clone(), value);
        }

        let mut table = base.clone();
        table.extend(resolved);

        (table, unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::table;

    fn palette() -> Palette {
        Palette::new(table([("purple", "#964bff".into()), ("red", "#ff2638".into())]))
            .alias("primary", ColorAlias::reference("purple"))
            .alias("borderAlpha", ColorAlias::raw("rgba(0, 0, 0, 0.07)"))
    }

    #[test]
    fn test_alias_copies_base_value() {
        let colors = palette().resolve().unwrap();
        assert_eq!(colors["primary"], TokenValue::from("#964bff"));
        assert_eq!(colors["borderAlpha"], TokenValue::from("rgba(0, 0, 0, 0.07)"));
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn test_aliases_follow_base_entries() {
        let colors = palette().resolve().unwrap();
        let keys: Vec<&str> = colors.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["purple", "red", "primary", "borderAlpha"]);
    }

    #[test]
    fn test_alias_cannot_reference_alias() {
        // 别名只看得到基础色
        let p = palette().alias("brand", ColorAlias::reference("primary"));
        let err = p.resolve().unwrap_err();
        match err {
            TokenError::UnresolvedAlias { alias, target } => {
                assert_eq!(alias, "brand");
                assert_eq!(target, "primary");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_drops_unresolved() {
        let p = palette()
            .alias("theme1", ColorAlias::reference("violet"))
            .alias("danger", ColorAlias::reference("red"));
        let (colors, diagnostics) = p.resolve_lenient();

        assert!(!colors.contains_key("theme1"));
        assert_eq!(colors["danger"], TokenValue::from("#ff2638"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("violet"));
    }

    #[test]
    fn test_alias_may_override_base_key() {
        let p = palette().alias("red", ColorAlias::reference("purple"));
        let colors = p.resolve().unwrap();
        assert_eq!(colors["red"], TokenValue::from("#964bff"));
        assert_eq!(colors.get_index_of("red"), Some(1));
    }

    #[test]
    fn test_deserialize_aliases() {
        let json = r##"{
            "base": { "blue": "#258bff" },
            "aliases": {
                "formInputFocus": { "ref": "blue" },
                "formLabel": { "raw": "rgba(0, 0, 0, 0.6)" }
            }
        }"##;
        let p: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(p.aliases["formInputFocus"], ColorAlias::reference("blue"));
        assert_eq!(p.aliases["formLabel"], ColorAlias::raw("rgba(0, 0, 0, 0.6)"));
    }
}
