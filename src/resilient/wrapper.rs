use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{
    chat::{ChatProvider, ChatResponse},
    error::LLMError,
    request::GenerationRequest,
};

use super::config::ResilienceConfig;

/// Provider wrapper that retries transient failures using exponential backoff.
pub struct ResilientProvider {
    inner: Arc<dyn ChatProvider>,
    cfg: ResilienceConfig,
}

impl ResilientProvider {
    pub fn new(inner: Arc<dyn ChatProvider>, cfg: ResilienceConfig) -> Self {
        Self { inner, cfg }
    }

    pub fn config(&self) -> &ResilienceConfig {
        &self.cfg
    }

    fn delay_for(&self, attempt_index: usize) -> Duration {
        let mut delay = self
            .cfg
            .base_delay_ms
            .saturating_mul(1u64 << attempt_index.min(16));
        delay = delay.min(self.cfg.max_delay_ms);
        if self.cfg.jitter {
            let span = (delay / 2).max(1);
            let jitter = ((attempt_index as u64)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1))
                % span;
            delay = delay.saturating_sub(jitter);
        }
        Duration::from_millis(delay)
    }
}

#[async_trait]
impl ChatProvider for ResilientProvider {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<Box<dyn ChatResponse>, LLMError> {
        let attempts = self.cfg.max_attempts.max(1);
        let mut last_err: Option<LLMError> = None;

        for idx in 0..attempts {
            match self.inner.generate_content(request).await {
                Ok(reply) => return Ok(reply),
                Err(err) if !err.is_transient() => return Err(err),
                Err(err) => {
                    log::warn!("attempt {} of {attempts} failed: {err}", idx + 1);
                    last_err = Some(err);
                    if idx + 1 < attempts {
                        sleep(self.delay_for(idx)).await;
                    }
                }
            }
        }

        let last_kind = last_err
            .as_ref()
            .map(LLMError::kind)
            .unwrap_or(crate::error::ErrorKind::Transport);
        Err(LLMError::RetryExceeded {
            attempts,
            last_error: last_err.map(|e| e.to_string()).unwrap_or_default(),
            last_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::chat::{FunctionCall, GroundingChunk};
    use crate::error::ErrorKind;
    use crate::mode::ModeTable;
    use crate::request::RequestContext;

    #[derive(Debug)]
    struct Pong;

    impl ChatResponse for Pong {
        fn text(&self) -> Option<String> {
            Some("pong".into())
        }
        fn function_calls(&self) -> Option<Vec<FunctionCall>> {
            None
        }
        fn grounding_chunks(&self) -> Option<Vec<GroundingChunk>> {
            None
        }
    }

    struct Flaky {
        calls: AtomicUsize,
        failures: usize,
        error: fn() -> LLMError,
    }

    #[async_trait]
    impl ChatProvider for Flaky {
        async fn generate_content(
            &self,
            _request: &GenerationRequest,
        ) -> Result<Box<dyn ChatResponse>, LLMError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err((self.error)())
            } else {
                Ok(Box::new(Pong))
            }
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest::build(
            &ModeTable::default().fast,
            RequestContext {
                system_instruction: None,
                functions: &[],
                history: &[],
                prompt: "ping",
                location: None,
                attachments: &[],
            },
        )
    }

    fn fast_cfg(max_attempts: usize) -> ResilienceConfig {
        ResilienceConfig {
            max_attempts,
            base_delay_ms: 1,
            max_delay_ms: 2,
            jitter: false,
        }
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let inner = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            failures: 2,
            error: || LLMError::HttpError("reset".into()),
        });
        let wrapper = ResilientProvider::new(inner.clone(), fast_cfg(3));
        let reply = wrapper.generate_content(&request()).await.unwrap();
        assert_eq!(reply.text().as_deref(), Some("pong"));
        assert_eq!(inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn auth_errors_are_not_retried() {
        let inner = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            failures: 5,
            error: || LLMError::AuthError("bad key".into()),
        });
        let wrapper = ResilientProvider::new(inner.clone(), fast_cfg(3));
        let err = wrapper.generate_content(&request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhaustion_keeps_last_kind() {
        let inner = Arc::new(Flaky {
            calls: AtomicUsize::new(0),
            failures: 10,
            error: || LLMError::RateLimited("slow down".into()),
        });
        let wrapper = ResilientProvider::new(inner.clone(), fast_cfg(2));
        let err = wrapper.generate_content(&request()).await.unwrap_err();
        assert!(matches!(err, LLMError::RetryExceeded { attempts: 2, .. }));
        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn backoff_is_capped() {
        let wrapper = ResilientProvider::new(
            Arc::new(Flaky {
                calls: AtomicUsize::new(0),
                failures: 0,
                error: || LLMError::HttpError(String::new()),
            }),
            ResilienceConfig {
                max_attempts: 5,
                base_delay_ms: 100,
                max_delay_ms: 250,
                jitter: false,
            },
        );
        assert_eq!(wrapper.delay_for(0), Duration::from_millis(100));
        assert_eq!(wrapper.delay_for(1), Duration::from_millis(200));
        assert_eq!(wrapper.delay_for(4), Duration::from_millis(250));
    }
}
