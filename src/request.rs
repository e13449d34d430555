//! One-pass construction of the provider request for a single generation.

use crate::chat::{
    Attachment, ConversationTurn, Coordinates, FunctionTool, HistoryEntry, Part, Tool,
};
use crate::mode::ModeProfile;

/// Inputs that vary per call, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub system_instruction: Option<&'a str>,
    pub functions: &'a [FunctionTool],
    pub history: &'a [HistoryEntry],
    pub prompt: &'a str,
    pub location: Option<Coordinates>,
    pub attachments: &'a [Attachment],
}

/// Immutable generate-content request derived from a mode profile.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    model: String,
    temperature: f32,
    thinking_budget: u32,
    system_instruction: Option<String>,
    tools: Vec<Tool>,
    location: Option<Coordinates>,
    contents: Vec<ConversationTurn>,
}

impl GenerationRequest {
    pub fn build(profile: &ModeProfile, ctx: RequestContext<'_>) -> Self {
        let mut tools = Vec::with_capacity(3);
        if !ctx.functions.is_empty() {
            tools.push(Tool::Functions(ctx.functions.to_vec()));
        }
        if profile.web_search {
            tools.push(Tool::WebSearch);
        }
        if profile.maps_grounding {
            tools.push(Tool::Maps);
        }

        Self {
            model: profile.model.clone(),
            temperature: profile.temperature,
            thinking_budget: profile.thinking_budget,
            system_instruction: ctx
                .system_instruction
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
            tools,
            location: ctx.location.filter(|_| profile.maps_grounding),
            contents: build_contents(ctx.history, ctx.prompt, ctx.attachments),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn thinking_budget(&self) -> u32 {
        self.thinking_budget
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn functions(&self) -> &[FunctionTool] {
        self.tools
            .iter()
            .find_map(|tool| match tool {
                Tool::Functions(functions) => Some(functions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn has_web_search(&self) -> bool {
        self.tools.contains(&Tool::WebSearch)
    }

    pub fn has_maps(&self) -> bool {
        self.tools.contains(&Tool::Maps)
    }

    /// Retrieval location; only present when maps grounding is enabled.
    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    pub fn contents(&self) -> &[ConversationTurn] {
        &self.contents
    }
}

fn build_contents(
    history: &[HistoryEntry],
    prompt: &str,
    attachments: &[Attachment],
) -> Vec<ConversationTurn> {
    // Turns that were function calls only have no text; providers reject empty parts.
    let mut contents: Vec<ConversationTurn> = history
        .iter()
        .filter(|entry| !entry.content.trim().is_empty())
        .map(ConversationTurn::from)
        .collect();

    let mut parts: Vec<Part> = attachments.iter().map(Attachment::to_part).collect();
    parts.push(Part::Text(prompt.to_string()));
    contents.push(ConversationTurn {
        role: crate::chat::ChatRole::User,
        parts,
    });
    contents
}

#[cfg(test)]
#[path = "request/tests.rs"]
mod tests;
