use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Latency-versus-depth toggle for the next request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenerationMode {
    /// Terse, low-latency replies
    #[default]
    Fast,
    /// Deliberate replies with search and a thinking budget
    Thinker,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 2] = [GenerationMode::Fast, GenerationMode::Thinker];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Fast => "FAST",
            GenerationMode::Thinker => "THINKER",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown generation mode: {0}")]
pub struct ParseModeError(String);

impl FromStr for GenerationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "flash" => Ok(GenerationMode::Fast),
            "thinker" | "think" | "pro" => Ok(GenerationMode::Thinker),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Model family tier a mode resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Flash,
    Pro,
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelTier::Flash => "flash",
            ModelTier::Pro => "pro",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("THINKER".parse::<GenerationMode>(), Ok(GenerationMode::Thinker));
        assert_eq!(" fast ".parse::<GenerationMode>(), Ok(GenerationMode::Fast));
        assert!("slow".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn serializes_as_uppercase_tag() {
        let json = serde_json::to_string(&GenerationMode::Thinker).unwrap();
        assert_eq!(json, "\"THINKER\"");
    }
}
