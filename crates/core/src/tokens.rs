//! 项目的设计值定义
//!
//! 这些表同时被 CSS（经由 postcss 插件）和 JS 使用。
//! 例如 `formLabel` 会被派生为 `--color-form-label`，
//! `headingMedium` 会被派生为 `--font-size-heading-medium`。

use crate::palette::{ColorAlias, Palette};
use crate::types::{table, SemanticTable, VariableMap};
use serde::{Deserialize, Serialize};

/// 全部语义表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default = "TokenSet::empty", rename_all = "camelCase")]
pub struct TokenSet {
    pub sizes: SemanticTable,
    /// 断点，单位 px
    pub media_queries: SemanticTable,
    pub spacing: SemanticTable,
    pub duration: SemanticTable,
    pub colors: Palette,
    pub font_sizes: SemanticTable,
    pub shadows: SemanticTable,
}

impl TokenSet {
    /// 所有表均为空
    pub fn empty() -> Self {
        Self {
            sizes: SemanticTable::new(),
            media_queries: SemanticTable::new(),
            spacing: SemanticTable::new(),
            duration: SemanticTable::new(),
            colors: Palette::default(),
            font_sizes: SemanticTable::new(),
            shadows: SemanticTable::new(),
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            media_queries: default_media_queries(),
            spacing: default_spacing(),
            duration: default_duration(),
            colors: default_palette(),
            font_sizes: default_font_sizes(),
            shadows: default_shadows(),
        }
    }
}

fn default_sizes() -> SemanticTable {
    table([
        ("borderRadius", 5.into()),
        ("navigationHeight", 60.into()),
        // 与 navigationHeight 保持一致
        ("wizardHeaderHeight", 60.into()),
        ("wizardFooterHeight", 80.into()),
        ("wizardSidebarMinWidth", 432.into()),
        ("wizardSidebarWidth", "30%".into()),
    ])
}

fn default_media_queries() -> SemanticTable {
    table([
        ("phone", 544.into()),
        ("tablet", 768.into()),
        ("desktop", 1200.into()),
        ("desktopLarge", 1400.into()),
    ])
}

fn default_spacing() -> SemanticTable {
    table([
        ("horizontal", 22.into()),
        ("horizontalSmall", 15.into()),
        ("horizontalLarge", 30.into()),
        ("horizontalExtraLarge", 60.into()),
        ("vertical", 15.into()),
        ("verticalSmall", 10.into()),
        ("verticalLarge", 25.into()),
        ("verticalExtraLarge", 50.into()),
    ])
}

fn default_duration() -> SemanticTable {
    table([
        ("short", "0.15s".into()),
        ("default", "0.2s".into()),
        ("long", "0.4s".into()),
    ])
}

fn default_palette() -> Palette {
    let base = table([
        ("white", "#fff".into()),
        ("black", "#000".into()),
        ("gray99", "hsl(214, 10%, 99%)".into()),
        ("gray98", "hsl(214, 10%, 98%)".into()),
        ("gray97", "hsl(214, 10%, 97%)".into()),
        ("gray95", "hsl(214, 10%, 95%)".into()),
        ("gray93", "hsl(214, 10%, 93%)".into()),
        ("gray90", "hsl(214, 10%, 90%)".into()),
        ("gray85", "hsl(214, 10%, 85%)".into()),
        ("gray80", "hsl(214, 8%, 80%)".into()),
        ("gray75", "hsl(214, 8%, 75%)".into()),
        ("gray70", "hsl(214, 8%, 70%)".into()),
        ("gray50", "hsl(214, 5%, 50%)".into()),
        ("gray40", "hsl(214, 5%, 40%)".into()),
        ("gray25", "hsl(214, 5%, 25%)".into()),
        ("purple", "#964bff".into()),
        ("blue", "#258bff".into()),
        ("green", "#00b483".into()),
        ("red", "#ff2638".into()),
    ]);

    use ColorAlias as A;

    // theme1 / headerBackground 引用的 violet 在基础色中并不存在，
    // 保留原样，由 resolve 阶段报告
    Palette::new(base)
        .alias("primary", A::reference("purple"))
        .alias("danger", A::reference("red"))
        .alias("complete", A::reference("green"))
        .alias("theme1", A::reference("violet"))
        .alias("theme2", A::reference("blue"))
        .alias("text", A::reference("gray25"))
        .alias("textLight", A::reference("gray40"))
        .alias("meta", A::reference("gray50"))
        .alias("headerBackground", A::reference("violet"))
        .alias("background", A::reference("gray95"))
        .alias("barBackground", A::reference("gray98"))
        .alias("border", A::reference("gray90"))
        .alias("borderAlpha", A::raw("rgba(0, 0, 0, 0.07)"))
        // 表单
        .alias("formLabel", A::raw("rgba(0, 0, 0, 0.6)"))
        .alias("formInputBackground", A::reference("gray99"))
        .alias("formInputDisabledBackground", A::reference("gray95"))
        .alias("formInputFocus", A::reference("blue"))
        .alias("formInputPlaceholder", A::reference("gray70"))
        // 提示框
        .alias("alertDefault", A::reference("gray93"))
        .alias("alertInfo", A::raw("#ccebff"))
        .alias("alertSuccess", A::raw("#cfecdb"))
        .alias("alertWarning", A::raw("#ffedb8"))
        .alias("alertDanger", A::raw("#fbd0dc"))
}

fn default_font_sizes() -> SemanticTable {
    table([
        ("baseMobile", "14px".into()),
        ("base", "16px".into()),
        ("extraLarge", "1.333em".into()),
        ("large", "1.111em".into()),
        ("default", "1em".into()),
        ("medium", "1em".into()),
        ("small", "0.889em".into()),
        ("tiny", "0.778em".into()),
        ("capitalizedLarge", "0.944em".into()),
        ("capitalizedMedium", "0.778em".into()),
        ("capitalizedSmall", "0.75em".into()),
        ("capitalizedTiny", "0.7em".into()),
        ("headingExtraLarge", "2.556em".into()),
        ("headingLarge", "1.7em".into()),
        ("headingMedium", "1.4em".into()),
        ("headingSmall", "1.1em".into()),
        ("headingTiny", "1em".into()),
        ("badgeDefault", "0.8em".into()),
        ("badgeSmall", "0.7em".into()),
    ])
}

fn default_shadows() -> SemanticTable {
    table([
        ("header", "0 5px 10px rgba(0,0,0,0.05);".into()),
        (
            "panel",
            "0 5px 15px rgba(0, 0, 0, 0.03), 0 2px 3px rgba(0, 0, 0, 0.04);".into(),
        ),
    ])
}

const FONT_FAMILY_BASE: &str = "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif, Apple Color Emoji, Segoe UI Emoji, Segoe UI Symbol";
const FONT_FAMILY_MONOSPACE: &str = "'Courier New', Courier, monospace";

/// 字体族 / 基础字号等不经过语义表的常量
///
/// `--base-font-size(-mobile)` 原样取自 font_sizes 的 `base` / `baseMobile`（不追加单位，
/// 与 `--font-size-*` 一致），缺失时不输出。
pub fn base_constants(font_sizes: &SemanticTable) -> VariableMap {
    let mut vars = VariableMap::new();

    vars.insert("--font-family-base".to_string(), FONT_FAMILY_BASE.to_string());
    vars.insert(
        "--font-family-header".to_string(),
        "var(--font-family-base)".to_string(),
    );
    vars.insert(
        "--font-family-monospace".to_string(),
        FONT_FAMILY_MONOSPACE.to_string(),
    );

    if let Some(size) = font_sizes.get("baseMobile") {
        vars.insert("--base-font-size-mobile".to_string(), size.to_string());
    }
    if let Some(size) = font_sizes.get("base") {
        vars.insert("--base-font-size".to_string(), size.to_string());
    }

    vars.insert("--base-line-height".to_string(), "1.4".to_string());
    vars.insert("--line-height-medium".to_string(), "1.2".to_string());
    vars.insert("--line-height-small".to_string(), "1".to_string());

    vars
}
