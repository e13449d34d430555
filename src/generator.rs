//! Fail-soft response generation.
//!
//! [`ResponseGenerator::generate`] never returns an error: provider failures
//! become a user-facing fallback reply, and the failure kind is kept on
//! [`GenerationResult::status`] for logging and tests.

#[path = "generator/config.rs"]
mod config;

#[path = "generator/functions.rs"]
mod functions;

#[path = "generator/result.rs"]
mod result;

use std::sync::Arc;

use crate::chat::{Attachment, ChatProvider, ChatResponse, Coordinates, HistoryEntry};
use crate::error::ErrorKind;
use crate::mode::GenerationMode;
use crate::request::{GenerationRequest, RequestContext};

pub use config::{FallbackText, GeneratorConfig};
pub use functions::default_functions;
pub use result::{GenerationResult, GenerationStatus};

/// Builds provider requests for a mode and normalizes the replies.
///
/// The provider is created once and shared; cloning the generator is cheap.
#[derive(Clone)]
pub struct ResponseGenerator {
    provider: Arc<dyn ChatProvider>,
    config: Arc<GeneratorConfig>,
}

impl std::fmt::Debug for ResponseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn ChatProvider>, config: GeneratorConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The request `generate` would send, without sending it.
    pub fn request_for(
        &self,
        prompt: &str,
        mode: GenerationMode,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
        attachments: &[Attachment],
    ) -> GenerationRequest {
        GenerationRequest::build(
            self.config.modes.profile(mode),
            RequestContext {
                system_instruction: self.config.system_instruction.as_deref(),
                functions: &self.config.functions,
                history,
                prompt,
                location,
                attachments,
            },
        )
    }

    pub async fn generate(
        &self,
        prompt: &str,
        mode: GenerationMode,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
        attachments: &[Attachment],
    ) -> GenerationResult {
        let request = self.request_for(prompt, mode, history, location, attachments);
        log::debug!(
            "generating mode={mode} model={} turns={} attachments={} budget={}",
            request.model(),
            request.contents().len(),
            attachments.len(),
            request.thinking_budget(),
        );

        match self.provider.generate_content(&request).await {
            Ok(reply) => self.normalize(reply.as_ref()),
            Err(err) => {
                log::error!("generation failed ({}): {err}", err.kind());
                GenerationResult::fallback(self.config.fallback.error_reply.clone(), err.kind())
            }
        }
    }

    fn normalize(&self, reply: &dyn ChatResponse) -> GenerationResult {
        let text = reply.text().unwrap_or_default();
        let function_calls = reply.function_calls().filter(|calls| !calls.is_empty());
        if text.trim().is_empty() && function_calls.is_none() {
            log::warn!("provider returned no text and no function calls");
            return GenerationResult::fallback(
                self.config.fallback.empty_reply.clone(),
                ErrorKind::EmptyResponse,
            );
        }
        if let Some(thinking) = reply.thinking() {
            log::trace!("thought summary: {thinking}");
        }

        GenerationResult {
            text,
            function_calls,
            grounding_chunks: reply.grounding_chunks().filter(|chunks| !chunks.is_empty()),
            usage: reply.usage(),
            status: GenerationStatus::Ok,
        }
    }
}
