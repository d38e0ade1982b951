use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid entry pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to read entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("invalid pipeline JSON: {0}")]
    Json(#[from] serde_json::Error),
}
