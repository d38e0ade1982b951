//! PostCSS 插件链配置
//!
//! 插件按顺序执行，设计值通过 `postcss-css-variables` 与
//! `postcss-custom-media` 注入。
//!
//! `postcss-modules` 的 `generateScopedName` 是函数，无法序列化；
//! JS 侧需将 wasm 导出的 `scopedName` 挂到该插件选项上。

use crate::error::PipelineError;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};
use swatch_core::SharedVariables;

pub const CSS_VARIABLES_PLUGIN: &str = "postcss-css-variables";
pub const CUSTOM_MEDIA_PLUGIN: &str = "postcss-custom-media";
pub const MODULES_PLUGIN: &str = "postcss-modules";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostcssConfig {
    pub ident: String,
    /// 插件名 → 插件选项（保持插件顺序）
    pub plugins: IndexMap<String, Value>,
}

impl PostcssConfig {
    pub fn new(shared: &SharedVariables) -> Self {
        let mut plugins = IndexMap::new();

        plugins.insert("postcss-preset-env".to_string(), json!({ "stage": 0 }));
        plugins.insert("postcss-nested".to_string(), json!({}));
        plugins.insert("postcss-import".to_string(), json!({}));
        plugins.insert("postcss-mixins".to_string(), json!({}));
        plugins.insert("postcss-color-function".to_string(), json!({}));
        plugins.insert(
            CSS_VARIABLES_PLUGIN.to_string(),
            json!({ "variables": shared.css }),
        );
        plugins.insert(
            CUSTOM_MEDIA_PLUGIN.to_string(),
            json!({ "importFrom": [{ "customMedia": shared.media }] }),
        );
        plugins.insert("postcss-calc".to_string(), json!({}));
        plugins.insert(MODULES_PLUGIN.to_string(), json!({}));
        plugins.insert("postcss-inline-svg".to_string(), json!({}));
        plugins.insert("postcss-svgo".to_string(), json!({}));

        log::debug!("postcss config with {} plugins", plugins.len());

        Self {
            ident: "postcss".to_string(),
            plugins,
        }
    }

    pub fn plugin(&self, name: &str) -> Option<&Value> {
        self.plugins.get(name)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
