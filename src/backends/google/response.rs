use serde::Deserialize;

use crate::chat::{ChatResponse, FunctionCall, GroundingChunk, Usage};

/// Raw generate-content reply.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoogleGenerateResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
    usage_metadata: Option<Usage>,
    prompt_feedback: Option<GooglePromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleCandidate {
    content: Option<GoogleResponseContent>,
    grounding_metadata: Option<GoogleGroundingMetadata>,
}

#[derive(Deserialize, Debug)]
struct GoogleResponseContent {
    #[serde(default)]
    parts: Vec<GoogleResponsePart>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
    function_call: Option<FunctionCall>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleGroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GoogleGroundingChunk>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleGroundingChunk {
    web: Option<GoogleSource>,
    maps: Option<GoogleSource>,
    retrieved_context: Option<GoogleSource>,
}

#[derive(Deserialize, Debug)]
struct GoogleSource {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GooglePromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: String,
}

pub(super) fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<GoogleErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
}

impl GoogleGenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &GoogleResponsePart> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|content| content.parts.iter())
    }

    fn joined_text(&self, thought: bool) -> Option<String> {
        let texts: Vec<&str> = self
            .parts()
            .filter(|part| part.thought == thought)
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    pub(super) fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

impl GoogleGroundingChunk {
    fn to_chunk(&self) -> Option<GroundingChunk> {
        let source = self
            .web
            .as_ref()
            .or(self.maps.as_ref())
            .or(self.retrieved_context.as_ref())?;
        let uri = source.uri.clone()?;
        Some(GroundingChunk::new(uri, source.title.clone().unwrap_or_default()))
    }
}

impl ChatResponse for GoogleGenerateResponse {
    fn text(&self) -> Option<String> {
        self.joined_text(false)
    }

    fn function_calls(&self) -> Option<Vec<FunctionCall>> {
        let calls: Vec<FunctionCall> = self
            .parts()
            .filter_map(|part| part.function_call.clone())
            .collect();
        if calls.is_empty() {
            None
        } else {
            Some(calls)
        }
    }

    fn grounding_chunks(&self) -> Option<Vec<GroundingChunk>> {
        let chunks: Vec<GroundingChunk> = self
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(GoogleGroundingChunk::to_chunk)
                    .collect()
            })
            .unwrap_or_default();
        if chunks.is_empty() {
            None
        } else {
            Some(chunks)
        }
    }

    fn thinking(&self) -> Option<String> {
        self.joined_text(true)
    }

    fn usage(&self) -> Option<Usage> {
        self.usage_metadata.clone()
    }
}

impl std::fmt::Display for GoogleGenerateResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "No response content"),
        }
    }
}
