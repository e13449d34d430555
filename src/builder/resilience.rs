use crate::resilient::ResilienceConfig;

use super::generator_builder::GeneratorBuilder;

impl GeneratorBuilder {
    /// Enable the retry/backoff wrapper around the provider.
    pub fn resilient(mut self, enable: bool) -> Self {
        self.state.resilient_enable = Some(enable);
        self
    }

    /// Sets the number of attempts, including the first one.
    pub fn resilient_attempts(mut self, attempts: usize) -> Self {
        self.state.resilient_attempts = Some(attempts);
        self
    }

    /// Sets base and max backoff delays in milliseconds.
    pub fn resilient_backoff(mut self, base_delay_ms: u64, max_delay_ms: u64) -> Self {
        self.state.resilient_base_delay_ms = Some(base_delay_ms);
        self.state.resilient_max_delay_ms = Some(max_delay_ms);
        self
    }

    /// Sets jitter toggle for backoff.
    pub fn resilient_jitter(mut self, jitter: bool) -> Self {
        self.state.resilient_jitter = Some(jitter);
        self
    }

    /// Applies a whole retry configuration and enables the wrapper.
    pub fn resilience(self, cfg: ResilienceConfig) -> Self {
        self.resilient(true)
            .resilient_attempts(cfg.max_attempts)
            .resilient_backoff(cfg.base_delay_ms, cfg.max_delay_ms)
            .resilient_jitter(cfg.jitter)
    }
}
