use serde::{Deserialize, Serialize};

/// Token accounting reported alongside a generated reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    #[serde(default, rename = "promptTokenCount")]
    pub prompt_tokens: u32,
    /// Number of tokens in the visible reply
    #[serde(default, rename = "candidatesTokenCount")]
    pub completion_tokens: u32,
    /// Tokens spent on internal deliberation
    #[serde(default, rename = "thoughtsTokenCount")]
    pub thinking_tokens: u32,
    /// Total number of tokens used
    #[serde(default, rename = "totalTokenCount")]
    pub total_tokens: u32,
}
