use crate::derive::derive_variable_table;
use crate::error::TokenError;
use crate::media::custom_media;
use crate::merge::merge_all;
use crate::tokens::{base_constants, TokenSet};
use crate::types::{BuildResult, SemanticTable, SharedVariables};

/// 主派生函数
///
/// 将全部语义表转换为对外导出的共享变量
///
/// # 步骤
///
/// 1. 解析颜色别名（未解析的别名产生诊断，不进入输出）
/// 2. 各表按前缀/单位派生为扁平变量表
/// 3. 按固定顺序合并，后者覆盖前者
/// 4. 从断点表派生自定义媒体查询
pub fn bundle(tokens: &TokenSet) -> BuildResult {
    let (colors, diagnostics) = tokens.colors.resolve_lenient();
    let variables = assemble(tokens, colors);

    log::debug!(
        "bundled {} css variables, {} custom media, {} diagnostics",
        variables.css.len(),
        variables.media.len(),
        diagnostics.len()
    );

    BuildResult {
        variables,
        diagnostics,
    }
}

/// 严格模式：存在未解析的颜色别名时返回错误
pub fn bundle_strict(tokens: &TokenSet) -> Result<SharedVariables, TokenError> {
    let colors = tokens.colors.resolve()?;
    Ok(assemble(tokens, colors))
}

fn assemble(tokens: &TokenSet, colors: SemanticTable) -> SharedVariables {
    let css = merge_all([
        derive_variable_table(&tokens.media_queries, "media", "px"),
        derive_variable_table(&tokens.sizes, "size", "px"),
        derive_variable_table(&tokens.spacing, "spacing", "px"),
        derive_variable_table(&tokens.duration, "duration", ""),
        derive_variable_table(&colors, "color", ""),
        derive_variable_table(&tokens.font_sizes, "font-size", ""),
        derive_variable_table(&tokens.shadows, "shadow", ""),
        base_constants(&tokens.font_sizes),
    ]);

    SharedVariables {
        css,
        colors,
        sizes: tokens.sizes.clone(),
        media_queries: tokens.media_queries.clone(),
        media: custom_media(&tokens.media_queries),
    }
}
