use serde::{Deserialize, Serialize};

use dualchat::mode::{ModeProfile, ModeTable};

/// Per-mode tuning; unset fields keep the built-in profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModeOverride {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub thinking_budget: Option<u32>,
    pub web_search: Option<bool>,
    pub maps_grounding: Option<bool>,
}

impl ModeOverride {
    pub fn apply(&self, profile: &mut ModeProfile) {
        if let Some(model) = &self.model {
            profile.model = model.clone();
        }
        if let Some(temperature) = self.temperature {
            profile.temperature = temperature;
        }
        if let Some(budget) = self.thinking_budget {
            profile.thinking_budget = budget;
        }
        if let Some(web_search) = self.web_search {
            profile.web_search = web_search;
        }
        if let Some(maps) = self.maps_grounding {
            profile.maps_grounding = maps;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ModesConfig {
    pub fast: ModeOverride,
    pub thinker: ModeOverride,
}

impl ModesConfig {
    pub fn to_table(&self) -> ModeTable {
        let mut table = ModeTable::default();
        self.fast.apply(&mut table.fast);
        self.thinker.apply(&mut table.thinker);
        table
    }
}
