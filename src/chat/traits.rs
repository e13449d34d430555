use async_trait::async_trait;

use crate::error::LLMError;
use crate::request::GenerationRequest;

use super::grounding::GroundingChunk;
use super::tool::FunctionCall;
use super::usage::Usage;

/// A raw provider reply before normalization.
pub trait ChatResponse: std::fmt::Debug + Send + Sync {
    fn text(&self) -> Option<String>;
    fn function_calls(&self) -> Option<Vec<FunctionCall>>;
    fn grounding_chunks(&self) -> Option<Vec<GroundingChunk>> {
        None
    }
    fn thinking(&self) -> Option<String> {
        None
    }
    fn usage(&self) -> Option<Usage> {
        None
    }
}

/// Trait for providers that can answer a generate-content request.
#[async_trait]
pub trait ChatProvider: Sync + Send {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<Box<dyn ChatResponse>, LLMError>;
}
