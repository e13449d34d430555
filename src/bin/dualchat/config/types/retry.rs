use serde::{Deserialize, Serialize};

use dualchat::resilient::ResilienceConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub policy: ResilienceConfig,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy: ResilienceConfig::default(),
        }
    }
}
