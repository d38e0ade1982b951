use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// 构建模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn is_dev(self) -> bool {
        self != Mode::Production
    }
}

/// 构建管线选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineOptions {
    pub mode: Mode,
    /// 存放 cells / views 的 web 目录（相对项目根目录）
    pub web_dir: String,
    /// 构建产物目录（相对项目根目录）
    pub output_path: String,
    /// CSS Modules 作用域名中 hash 的长度
    pub scope_hash_length: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Development,
            web_dir: "lib/liveview_playground_web".to_string(),
            output_path: "priv/static".to_string(),
            scope_hash_length: 5,
        }
    }
}

impl PipelineOptions {
    pub fn from_json(json_str: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json_str)?)
    }
}
