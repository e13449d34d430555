use serde::{Deserialize, Serialize};

use crate::chat::FunctionTool;
use crate::mode::ModeTable;

use super::functions::default_functions;

const DEFAULT_ERROR_REPLY: &str =
    "Sorry, something went wrong while contacting the assistant. Please try again later.";
const DEFAULT_EMPTY_REPLY: &str = "Sorry, I couldn't generate a response.";

/// User-facing replies used in place of a model answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackText {
    /// Shown when the provider call fails
    pub error_reply: String,
    /// Shown when the provider answers with nothing
    pub empty_reply: String,
}

impl Default for FallbackText {
    fn default() -> Self {
        Self {
            error_reply: DEFAULT_ERROR_REPLY.to_string(),
            empty_reply: DEFAULT_EMPTY_REPLY.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub modes: ModeTable,
    /// Persona / tone instruction, opaque to the generator
    pub system_instruction: Option<String>,
    /// Functions offered to the model in every mode
    pub functions: Vec<FunctionTool>,
    pub fallback: FallbackText,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            modes: ModeTable::default(),
            system_instruction: None,
            functions: default_functions(),
            fallback: FallbackText::default(),
        }
    }
}
