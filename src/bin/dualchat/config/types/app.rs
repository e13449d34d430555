use serde::{Deserialize, Serialize};

use super::{ChatConfig, LoggingConfig, ModesConfig, ProviderConfig, RetryConfig};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub modes: ModesConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}
