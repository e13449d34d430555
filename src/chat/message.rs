use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Role of a turn as the provider sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The user/human participant in the conversation
    User,
    /// The model participant in the conversation
    Model,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        };
        write!(f, "{name}")
    }
}

/// Role of a transcript entry as the application sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Assistant,
}

impl From<HistoryRole> for ChatRole {
    fn from(role: HistoryRole) -> Self {
        match role {
            HistoryRole::User => ChatRole::User,
            HistoryRole::Assistant => ChatRole::Model,
        }
    }
}

/// A prior transcript entry projected down to `{role, content}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: HistoryRole::Assistant,
            content: content.into(),
        }
    }
}

/// One content part of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Plain text
    Text(String),
    /// Inline binary payload, base64 encoded without any data-URI prefix
    InlineData { mime_type: String, data: String },
}

impl Part {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

/// A role-tagged unit of conversation content sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub role: ChatRole,
    pub parts: Vec<Part>,
}

impl ConversationTurn {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Concatenated text parts of this turn.
    pub fn text(&self) -> String {
        self.parts.iter().filter_map(Part::as_text).collect()
    }
}

impl From<&HistoryEntry> for ConversationTurn {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            role: entry.role.into(),
            parts: vec![Part::Text(entry.content.clone())],
        }
    }
}

/// Caller-supplied attachment. `data` may carry a `data:<mime>;base64,` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub data: String,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encodes raw bytes as a base64 attachment.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(bytes), mime_type)
    }

    /// The base64 payload with any data-URI scheme marker removed.
    pub fn payload(&self) -> &str {
        strip_data_uri(&self.data)
    }

    pub(crate) fn to_part(&self) -> Part {
        Part::InlineData {
            mime_type: self.mime_type.clone(),
            data: self.payload().to_string(),
        }
    }
}

fn strip_data_uri(data: &str) -> &str {
    if !data.starts_with("data:") {
        return data;
    }
    match data.find(',') {
        Some(idx) => &data[idx + 1..],
        None => data,
    }
}

/// Geographic point supplied by the caller for maps grounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
