use serde::{Deserialize, Serialize};

use dualchat::generator::FallbackText;
use dualchat::GenerationMode;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    pub system_instruction: Option<String>,
    pub default_mode: GenerationMode,
    pub fallback: FallbackText,
}
