/// Failure surfaced to the host framework
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// The caller's arguments were rejected before any request was made.
    /// Resubmitting with corrected input can succeed.
    #[error("{message}")]
    Retryable {
        message: String,
        developer_message: String,
        /// What the agent should ask the end user for
        additional_prompt_content: String,
    },

    /// The backend gave no usable result. The cause is not exposed.
    #[error("{message}")]
    Execution { message: String },
}

impl ToolError {
    pub fn retryable(
        message: impl Into<String>,
        developer_message: impl Into<String>,
        additional_prompt_content: impl Into<String>,
    ) -> Self {
        ToolError::Retryable {
            message: message.into(),
            developer_message: developer_message.into(),
            additional_prompt_content: additional_prompt_content.into(),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        ToolError::Execution {
            message: message.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ToolError::Retryable { .. })
    }

    pub fn developer_message(&self) -> Option<&str> {
        match self {
            ToolError::Retryable {
                developer_message, ..
            } => Some(developer_message),
            ToolError::Execution { .. } => None,
        }
    }

    pub fn additional_prompt_content(&self) -> Option<&str> {
        match self {
            ToolError::Retryable {
                additional_prompt_content,
                ..
            } => Some(additional_prompt_content),
            ToolError::Execution { .. } => None,
        }
    }
}
