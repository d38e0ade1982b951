use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    /// 颜色别名引用了基础色表中不存在的 key
    #[error("color alias '{alias}' references undefined color '{target}'")]
    UnresolvedAlias { alias: String, target: String },

    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}
