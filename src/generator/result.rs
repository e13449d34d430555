use crate::chat::{FunctionCall, GroundingChunk, Usage};
use crate::error::ErrorKind;

/// Whether the text came from the model or from a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Ok,
    Failed(ErrorKind),
}

/// Normalized reply handed to the conversation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// Never absent; empty only when the model answered with function calls alone
    pub text: String,
    pub function_calls: Option<Vec<FunctionCall>>,
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
    pub usage: Option<Usage>,
    pub status: GenerationStatus,
}

impl GenerationResult {
    pub(crate) fn fallback(text: String, kind: ErrorKind) -> Self {
        Self {
            text,
            function_calls: None,
            grounding_chunks: None,
            usage: None,
            status: GenerationStatus::Failed(kind),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == GenerationStatus::Ok
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self.status {
            GenerationStatus::Ok => None,
            GenerationStatus::Failed(kind) => Some(kind),
        }
    }
}
