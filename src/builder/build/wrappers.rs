use std::sync::Arc;

use crate::{
    chat::ChatProvider,
    resilient::{ResilienceConfig, ResilientProvider},
};

use super::super::state::BuilderState;

pub(super) fn wrap_with_resilience(
    state: &BuilderState,
    provider: Arc<dyn ChatProvider>,
) -> Arc<dyn ChatProvider> {
    if !state.resilient_enable.unwrap_or(false) {
        return provider;
    }

    let mut cfg = ResilienceConfig::default();
    if let Some(attempts) = state.resilient_attempts {
        cfg.max_attempts = attempts;
    }
    if let Some(base) = state.resilient_base_delay_ms {
        cfg.base_delay_ms = base;
    }
    if let Some(maxd) = state.resilient_max_delay_ms {
        cfg.max_delay_ms = maxd;
    }
    if let Some(jitter) = state.resilient_jitter {
        cfg.jitter = jitter;
    }
    Arc::new(ResilientProvider::new(provider, cfg))
}
