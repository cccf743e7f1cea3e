/// Errors that can occur while rendering decoded fields.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to format output: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
