use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::{FunctionCall, GroundingChunk, HistoryEntry, HistoryRole};
use crate::generator::GenerationResult;
use crate::mode::GenerationMode;

use super::id::MessageId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Mode that produced an assistant reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<GenerationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
    /// Actions the model asked the host to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_calls: Option<Vec<FunctionCall>>,
    /// MIME types of files sent with a user message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

impl Message {
    pub fn user(content: impl Into<String>, attachments: Vec<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            model: None,
            grounding_chunks: None,
            function_calls: None,
            attachments,
        }
    }

    pub fn assistant(result: GenerationResult, mode: GenerationMode) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::Assistant,
            content: result.text,
            timestamp: Utc::now(),
            model: Some(mode),
            grounding_chunks: result.grounding_chunks,
            function_calls: result.function_calls,
            attachments: Vec::new(),
        }
    }

    pub fn to_history(&self) -> HistoryEntry {
        HistoryEntry {
            role: match self.role {
                MessageRole::User => HistoryRole::User,
                MessageRole::Assistant => HistoryRole::Assistant,
            },
            content: self.content.clone(),
        }
    }
}
