use std::collections::HashSet;
use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::{
    backends::google::Google,
    chat::{ChatProvider, FunctionTool},
    error::LLMError,
    generator::default_functions,
    mode::{GenerationMode, ModeTable},
};

use super::super::state::BuilderState;

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const MAX_TEMPERATURE: f32 = 2.0;

pub(super) fn log_builder_state(state: &BuilderState) {
    log::debug!(
        "Building generator. fast={} thinker={} functions={} defaults={} custom_provider={} resilient={:?}",
        state.modes.fast.model,
        state.modes.thinker.model,
        state.functions.len(),
        state.default_functions,
        state.provider.is_some(),
        state.resilient_enable,
    );
}

pub(super) fn collect_functions(state: &mut BuilderState) -> Result<Vec<FunctionTool>, LLMError> {
    let mut functions = if state.default_functions {
        default_functions()
    } else {
        Vec::new()
    };
    functions.append(&mut state.functions);

    let mut seen = HashSet::new();
    for function in &functions {
        if function.name.trim().is_empty() {
            return Err(LLMError::ToolConfigError(
                "function declarations need a name".to_string(),
            ));
        }
        if !seen.insert(function.name.as_str()) {
            return Err(LLMError::ToolConfigError(format!(
                "function {} is declared more than once",
                function.name
            )));
        }
    }
    Ok(functions)
}

pub(super) fn validate_modes(modes: &ModeTable) -> Result<(), LLMError> {
    for deviation in modes.deviations() {
        log::warn!("mode table override: {deviation}");
    }
    for mode in GenerationMode::ALL {
        let profile = modes.profile(mode);
        if profile.model.trim().is_empty() {
            return Err(LLMError::InvalidRequest(format!(
                "no model configured for {mode}"
            )));
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&profile.temperature) {
            return Err(LLMError::InvalidRequest(format!(
                "temperature {} for {mode} is outside 0..={MAX_TEMPERATURE}",
                profile.temperature
            )));
        }
    }
    Ok(())
}

pub(super) fn build_google(state: &mut BuilderState) -> Result<Arc<dyn ChatProvider>, LLMError> {
    let api_key = require_api_key(state, "Google")?;
    let provider = Google::new(
        api_key,
        state.base_url.take(),
        Some(state.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
    )?;
    Ok(Arc::new(provider))
}

fn require_api_key(state: &mut BuilderState, provider: &str) -> Result<String, LLMError> {
    let Some(key) = state.api_key.take() else {
        return Err(LLMError::InvalidRequest(format!(
            "No API key provided for {provider}"
        )));
    };
    Ok(key.expose_secret().to_string())
}
