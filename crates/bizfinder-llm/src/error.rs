use thiserror::Error;

/// Errors returned by the completion client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key was configured, so no request can be made.
    #[error("completion client is not configured: GROQ_API_KEY is missing")]
    ClientUnconfigured,

    /// The completion call failed. `message` carries the underlying cause.
    #[error("completion request failed: {message}")]
    Upstream { message: String },
}

impl LlmError {
    pub(crate) fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}
