use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wasm_bindgen::prelude::*;

use swatch_core::{
    bundle, bundle_strict, load_from_json, BuildResult, SharedVariables, TokenError, TokenSet,
};
use swatch_pipeline::{generate_scoped_name, BundlerConfig, PipelineOptions, PostcssConfig};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsTokenOptions {
    /// 自定义设计值 JSON，缺省使用内置设计值
    #[serde(default)]
    tokens: Option<String>,
    /// 存在未解析的颜色别名时报错
    #[serde(default)]
    strict: bool,
}

/// `postcssConfig` 的选项：构建管线选项与设计值选项平铺在同一对象里
#[derive(Deserialize, Default)]
struct JsPostcssOptions {
    #[serde(flatten)]
    pipeline: PipelineOptions,
    #[serde(flatten)]
    tokens: JsTokenOptions,
}

fn parse_options<T>(options: JsValue) -> Result<T, JsError>
where
    T: DeserializeOwned + Default,
{
    if options.is_undefined() || options.is_null() {
        Ok(T::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// 按选项加载并派生设计值；strict 模式下未解析的别名直接报错
fn build_shared(opts: &JsTokenOptions) -> Result<BuildResult, TokenError> {
    let tokens = match &opts.tokens {
        Some(json) => load_from_json(json)?,
        None => TokenSet::default(),
    };

    if opts.strict {
        let variables = bundle_strict(&tokens)?;
        return Ok(BuildResult {
            variables,
            diagnostics: Vec::new(),
        });
    }

    Ok(bundle(&tokens))
}

fn shared_from_token_options(opts: &JsTokenOptions) -> Result<SharedVariables, JsError> {
    let result = build_shared(opts).map_err(|e| JsError::new(&e.to_string()))?;
    for diagnostic in &result.diagnostics {
        console_warn(&diagnostic.message);
    }
    Ok(result.variables)
}

fn shared_from_options(options: JsValue) -> Result<SharedVariables, JsError> {
    let opts: JsTokenOptions = parse_options(options)?;
    shared_from_token_options(&opts)
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(message: &str);
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 派生共享变量
///
/// @param options - `{ tokens?: string, strict?: boolean }`，可选
/// @returns `{ css, colors, sizes, mediaQueries, media }`
#[wasm_bindgen(js_name = "sharedVariables")]
pub fn shared_variables(options: JsValue) -> Result<JsValue, JsError> {
    let shared = shared_from_options(options)?;
    to_js(&shared)
}

/// 生成包含 `@custom-media` 与 `:root` 变量的样式表文本
#[wasm_bindgen(js_name = "stylesheet")]
pub fn stylesheet(options: JsValue) -> Result<String, JsError> {
    let shared = shared_from_options(options)?;
    swatch_css::render_stylesheet(&shared).map_err(|e| JsError::new(&e.to_string()))
}

/// PostCSS 配置对象
///
/// `postcss-modules` 不含 `generateScopedName`，调用方需挂上 [`scoped_name`]。
///
/// @param options - `{ tokens?: string, strict?: boolean }` 加构建管线选项，可选
/// @returns `{ ident, plugins }`
#[wasm_bindgen(js_name = "postcssConfig")]
pub fn postcss_config(options: JsValue) -> Result<JsValue, JsError> {
    let opts: JsPostcssOptions = parse_options(options)?;
    log::debug!("postcss config for {:?} mode", opts.pipeline.mode);
    let shared = shared_from_token_options(&opts.tokens)?;
    to_js(&PostcssConfig::new(&shared))
}

/// 打包配置对象（入口为 glob 列表，由 JS 侧展开）
#[wasm_bindgen(js_name = "bundlerConfig")]
pub fn bundler_config(options: JsValue) -> Result<JsValue, JsError> {
    let opts: PipelineOptions = parse_options(options)?;
    to_js(&BundlerConfig::new(&opts))
}

/// CSS Modules 的 `generateScopedName`
///
/// @param name     - 原始类名
/// @param filename - CSS 文件绝对路径
/// @param cwd      - 项目根目录（通常为 `process.cwd()`）
/// @param hashLength - hash 长度，缺省为 5
#[wasm_bindgen(js_name = "scopedName")]
pub fn scoped_name(name: &str, filename: &str, cwd: &str, hash_length: Option<usize>) -> String {
    let hash_len = hash_length.unwrap_or(PipelineOptions::default().scope_hash_length);
    generate_scoped_name(name, Path::new(filename), Path::new(cwd), hash_len)
}
