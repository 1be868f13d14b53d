use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input")]
    Invalid,

    #[error("Prompt is required")]
    MissingPrompt,

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Analysis failed")]
    AnalysisFailed,

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Errors the user only ever sees as the generic "analysis failed" alert.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            CoreError::AnalysisFailed
                | CoreError::MalformedReply(_)
                | CoreError::ExternalServiceError(_)
        )
    }
}
