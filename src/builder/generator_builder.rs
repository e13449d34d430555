use std::sync::Arc;

use secrecy::SecretString;

use crate::chat::ChatProvider;
use crate::generator::FallbackText;
use crate::mode::{GenerationMode, ModeProfile, ModeTable};

use super::state::BuilderState;

/// Builder for configuring and instantiating a [`crate::ResponseGenerator`].
pub struct GeneratorBuilder {
    pub(super) state: BuilderState,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            state: BuilderState::new(),
        }
    }
}

impl GeneratorBuilder {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.state.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL for API requests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.state.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.state.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Sets the persona / tone instruction sent with every request.
    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.state.system_instruction = Some(instruction.into());
        self
    }

    /// Replaces the whole mode table.
    pub fn modes(mut self, modes: ModeTable) -> Self {
        self.state.modes = modes;
        self
    }

    /// Replaces the profile of a single mode.
    pub fn mode_profile(mut self, mode: GenerationMode, profile: ModeProfile) -> Self {
        *self.state.modes.profile_mut(mode) = profile;
        self
    }

    /// Overrides the model identifier used by a mode.
    pub fn model(mut self, mode: GenerationMode, model: impl Into<String>) -> Self {
        self.state.modes.profile_mut(mode).model = model.into();
        self
    }

    /// Overrides the sampling temperature of a mode.
    pub fn temperature(mut self, mode: GenerationMode, temperature: f32) -> Self {
        self.state.modes.profile_mut(mode).temperature = temperature;
        self
    }

    /// Overrides the thinking budget of a mode.
    pub fn thinking_budget(mut self, mode: GenerationMode, budget: u32) -> Self {
        self.state.modes.profile_mut(mode).thinking_budget = budget;
        self
    }

    /// Sets the replies used when generation fails.
    pub fn fallback(mut self, fallback: FallbackText) -> Self {
        self.state.fallback = fallback;
        self
    }

    /// Uses a custom provider instead of the Gemini client.
    pub fn provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.state.provider = Some(provider);
        self
    }
}
