use crate::{
    error::LLMError,
    generator::{GeneratorConfig, ResponseGenerator},
};

use super::super::generator_builder::GeneratorBuilder;
use super::super::state::BuilderState;
use super::{helpers, wrappers};

impl GeneratorBuilder {
    pub fn build(self) -> Result<ResponseGenerator, LLMError> {
        self.state.build()
    }
}

impl BuilderState {
    pub(super) fn build(mut self) -> Result<ResponseGenerator, LLMError> {
        helpers::log_builder_state(&self);
        let functions = helpers::collect_functions(&mut self)?;
        helpers::validate_modes(&self.modes)?;

        let provider = match self.provider.take() {
            Some(provider) => provider,
            None => helpers::build_google(&mut self)?,
        };
        let provider = wrappers::wrap_with_resilience(&self, provider);

        Ok(ResponseGenerator::new(
            provider,
            GeneratorConfig {
                modes: self.modes,
                system_instruction: self.system_instruction,
                functions,
                fallback: self.fallback,
            },
        ))
    }
}
