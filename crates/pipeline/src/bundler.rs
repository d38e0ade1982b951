//! JS / CSS 打包配置
//!
//! 只描述入口、loader 链与插件，不依赖设计值。

use crate::error::PipelineError;
use crate::options::{Mode, PipelineOptions};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub mode: Mode,
    /// `app` 入口的 glob 列表，按顺序拼接
    pub entry: Vec<String>,
    pub output: OutputConfig,
    pub devtool: Option<String>,
    pub rules: Vec<LoaderRule>,
    pub plugins: Vec<PluginConfig>,
    pub minimizers: Vec<PluginConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub filename: String,
    pub path: String,
}

/// 一条模块规则：匹配的文件交给 `loaders`（从前到后列出）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderRule {
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(rename = "use")]
    pub loaders: Vec<Loader>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loader {
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Loader {
    fn plain(name: &str) -> Self {
        Self {
            loader: name.to_string(),
            options: None,
        }
    }

    fn with_options(name: &str, options: Value) -> Self {
        Self {
            loader: name.to_string(),
            options: Some(options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginConfig {
    pub name: String,
    pub options: Value,
}

impl PluginConfig {
    fn new(name: &str, options: Value) -> Self {
        Self {
            name: name.to_string(),
            options,
        }
    }
}

const NODE_MODULES: &str = "node_modules";
const MINI_CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

impl BundlerConfig {
    pub fn new(options: &PipelineOptions) -> Self {
        let dev = options.mode.is_dev();
        let web = options.web_dir.trim_end_matches('/');

        let entry = vec![
            "assets/js/**/*.js".to_string(),
            format!("{}/cells/**/*.js", web),
            format!("{}/views/**/*.js", web),
            "assets/css/app.css".to_string(),
            format!("{}/cells/**/*.css", web),
            format!("{}/views/**/*.css", web),
        ];

        let rules = vec![
            LoaderRule {
                test: r"\.js$".to_string(),
                include: None,
                exclude: Some(NODE_MODULES.to_string()),
                loaders: vec![Loader::plain("babel-loader")],
            },
            LoaderRule {
                test: r"\.css$".to_string(),
                include: None,
                exclude: Some(NODE_MODULES.to_string()),
                loaders: vec![
                    Loader::plain("style-loader"),
                    Loader::plain(MINI_CSS_EXTRACT_LOADER),
                    Loader::with_options(
                        "css-loader",
                        json!({ "importLoaders": 1, "sourceMap": dev }),
                    ),
                    Loader::plain("postcss-loader"),
                ],
            },
            // 第三方 CSS 不经过 postcss
            LoaderRule {
                test: r"\.css$".to_string(),
                include: Some(NODE_MODULES.to_string()),
                exclude: None,
                loaders: vec![Loader::plain("style-loader"), Loader::plain("css-loader")],
            },
        ];

        let mut plugins = vec![
            PluginConfig::new(
                "mini-css-extract-plugin",
                json!({ "filename": "css/[name].css" }),
            ),
            PluginConfig::new(
                "clean-webpack-plugin",
                json!({ "cleanStaleWebpackAssets": false }),
            ),
            PluginConfig::new(
                "copy-webpack-plugin",
                json!([{ "from": "./assets/static/", "to": "./" }]),
            ),
        ];
        if dev {
            plugins.push(PluginConfig::new("hard-source-webpack-plugin", json!({})));
        }

        let minimizers = vec![
            PluginConfig::new(
                "terser-webpack-plugin",
                json!({ "cache": true, "parallel": true, "sourceMap": dev }),
            ),
            PluginConfig::new("optimize-css-assets-webpack-plugin", json!({})),
        ];

        Self {
            mode: options.mode,
            entry,
            output: OutputConfig {
                filename: "js/[name].js".to_string(),
                path: options.output_path.clone(),
            },
            devtool: dev.then(|| "eval-cheap-module-source-map".to_string()),
            rules,
            plugins,
            minimizers,
        }
    }

    /// 展开入口 glob，返回相对 `root` 的文件路径
    ///
    /// 每个 pattern 内部按路径排序，pattern 之间保持声明顺序。
    pub fn resolve_entries(&self, root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let mut entries = Vec::new();

        for pattern in &self.entry {
            let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);

            let mut matched = Vec::new();
            for path in glob::glob(&full)? {
                let path = path?;
                if !path.is_file() {
                    continue;
                }
                let relative = match path.strip_prefix(root) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => path.clone(),
                };
                matched.push(relative);
            }
            matched.sort();

            log::debug!("entry pattern '{}' matched {} files", pattern, matched.len());
            entries.extend(matched);
        }

        Ok(entries)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
