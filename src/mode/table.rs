use serde::{Deserialize, Serialize};

use super::kind::{GenerationMode, ModelTier};

const FAST_MODEL: &str = "gemini-3-flash-preview";
const THINKER_MODEL: &str = "gemini-3-pro-preview";
const FAST_TEMPERATURE: f32 = 0.4;
const THINKER_TEMPERATURE: f32 = 0.9;
const THINKER_THINKING_BUDGET: u32 = 32_768;

/// Request parameters a mode resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Provider model identifier
    pub model: String,
    pub tier: ModelTier,
    pub temperature: f32,
    /// Tokens the provider may spend deliberating; zero disables thinking
    pub thinking_budget: u32,
    /// Enable provider-side web search
    #[serde(default)]
    pub web_search: bool,
    /// Enable maps grounding and forward caller coordinates
    #[serde(default)]
    pub maps_grounding: bool,
}

impl ModeProfile {
    pub fn fast_default() -> Self {
        Self {
            model: FAST_MODEL.to_string(),
            tier: ModelTier::Flash,
            temperature: FAST_TEMPERATURE,
            thinking_budget: 0,
            web_search: false,
            maps_grounding: false,
        }
    }

    pub fn thinker_default() -> Self {
        Self {
            model: THINKER_MODEL.to_string(),
            tier: ModelTier::Pro,
            temperature: THINKER_TEMPERATURE,
            thinking_budget: THINKER_THINKING_BUDGET,
            web_search: true,
            maps_grounding: true,
        }
    }
}

/// `mode -> profile` lookup; tuning a mode is a change to this data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeTable {
    #[serde(default = "ModeProfile::fast_default")]
    pub fast: ModeProfile,
    #[serde(default = "ModeProfile::thinker_default")]
    pub thinker: ModeProfile,
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            fast: ModeProfile::fast_default(),
            thinker: ModeProfile::thinker_default(),
        }
    }
}

impl ModeTable {
    pub fn profile(&self, mode: GenerationMode) -> &ModeProfile {
        match mode {
            GenerationMode::Fast => &self.fast,
            GenerationMode::Thinker => &self.thinker,
        }
    }

    pub fn profile_mut(&mut self, mode: GenerationMode) -> &mut ModeProfile {
        match mode {
            GenerationMode::Fast => &mut self.fast,
            GenerationMode::Thinker => &mut self.thinker,
        }
    }

    pub fn with_profile(mut self, mode: GenerationMode, profile: ModeProfile) -> Self {
        *self.profile_mut(mode) = profile;
        self
    }

    /// Tuning that departs from what the modes promise: FAST answers without
    /// thinking, THINKER thinks and searches the web.
    pub fn deviations(&self) -> Vec<String> {
        let mut found = Vec::new();
        if self.fast.thinking_budget > 0 {
            found.push(format!(
                "FAST has a thinking budget of {}",
                self.fast.thinking_budget
            ));
        }
        if self.fast.tier != ModelTier::Flash {
            found.push(format!("FAST uses the {} tier", self.fast.tier));
        }
        if self.thinker.thinking_budget == 0 {
            found.push("THINKER has no thinking budget".to_string());
        }
        if self.thinker.tier != ModelTier::Pro {
            found.push(format!("THINKER uses the {} tier", self.thinker.tier));
        }
        if !self.thinker.web_search {
            found.push("THINKER has web search disabled".to_string());
        }
        found
    }
}
