use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    chat::{ChatProvider, FunctionTool},
    generator::FallbackText,
    mode::ModeTable,
};

#[derive(Default)]
pub(crate) struct BuilderState {
    pub(crate) api_key: Option<SecretString>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout_seconds: Option<u64>,
    pub(crate) system_instruction: Option<String>,
    pub(crate) modes: ModeTable,
    pub(crate) functions: Vec<FunctionTool>,
    pub(crate) default_functions: bool,
    pub(crate) fallback: FallbackText,
    pub(crate) provider: Option<Arc<dyn ChatProvider>>,
    pub(crate) resilient_enable: Option<bool>,
    pub(crate) resilient_attempts: Option<usize>,
    pub(crate) resilient_base_delay_ms: Option<u64>,
    pub(crate) resilient_max_delay_ms: Option<u64>,
    pub(crate) resilient_jitter: Option<bool>,
}

impl BuilderState {
    pub(crate) fn new() -> Self {
        Self {
            default_functions: true,
            ..Self::default()
        }
    }
}
