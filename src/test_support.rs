//! Scripted provider shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Notify, Semaphore};

use crate::chat::{ChatProvider, ChatResponse, FunctionCall, GroundingChunk};
use crate::error::LLMError;
use crate::request::GenerationRequest;

#[derive(Debug, Clone, Default)]
pub(crate) struct StaticReply {
    pub text: Option<String>,
    pub calls: Option<Vec<FunctionCall>>,
    pub chunks: Option<Vec<GroundingChunk>>,
}

impl StaticReply {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

impl ChatResponse for StaticReply {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }
    fn function_calls(&self) -> Option<Vec<FunctionCall>> {
        self.calls.clone()
    }
    fn grounding_chunks(&self) -> Option<Vec<GroundingChunk>> {
        self.chunks.clone()
    }
}

pub(crate) enum Step {
    Reply(StaticReply),
    Fail(LLMError),
}

#[derive(Default)]
pub(crate) struct ScriptedProvider {
    steps: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<GenerationRequest>>,
    gate: Option<Arc<Semaphore>>,
    pub entered: Notify,
}

impl ScriptedProvider {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            ..Self::default()
        }
    }

    /// Every call waits for a permit on `gate` before answering.
    pub fn gated(steps: Vec<Step>, gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(steps)
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<Box<dyn ChatResponse>, LLMError> {
        self.requests.lock().unwrap().push(request.clone());
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(reply)) => Ok(Box::new(reply)),
            Some(Step::Fail(err)) => Err(err),
            None => Ok(Box::new(StaticReply::text("ok"))),
        }
    }
}
