use serde::Serialize;

use crate::chat::{ChatRole, ConversationTurn, Coordinates, FunctionTool, Part, Tool};
use crate::request::GenerationRequest;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(super) struct GoogleGenerateRequest<'a> {
    contents: Vec<GoogleContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GoogleSystemInstruction<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GoogleTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<GoogleToolConfig>,
    generation_config: GoogleGenerationConfig,
}

#[derive(Serialize, Debug)]
struct GoogleContent<'a> {
    role: &'static str,
    parts: Vec<GooglePart<'a>>,
}

#[derive(Serialize, Debug)]
struct GoogleSystemInstruction<'a> {
    parts: Vec<GooglePart<'a>>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum GooglePart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GoogleInlineData<'a>,
    },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleInlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize, Debug, Default)]
struct EmptyObject {}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
enum GoogleTool<'a> {
    FunctionDeclarations(&'a [FunctionTool]),
    GoogleSearch(EmptyObject),
    GoogleMaps(EmptyObject),
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleToolConfig {
    retrieval_config: GoogleRetrievalConfig,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleRetrievalConfig {
    lat_lng: Coordinates,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleGenerationConfig {
    temperature: f32,
    thinking_config: GoogleThinkingConfig,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GoogleThinkingConfig {
    thinking_budget: u32,
}

impl<'a> GoogleGenerateRequest<'a> {
    pub(super) fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: request.contents().iter().map(content_from_turn).collect(),
            system_instruction: request
                .system_instruction()
                .map(|text| GoogleSystemInstruction {
                    parts: vec![GooglePart::Text { text }],
                }),
            tools: request.tools().iter().map(tool_from).collect(),
            tool_config: request.location().map(|lat_lng| GoogleToolConfig {
                retrieval_config: GoogleRetrievalConfig { lat_lng },
            }),
            generation_config: GoogleGenerationConfig {
                temperature: request.temperature(),
                thinking_config: GoogleThinkingConfig {
                    thinking_budget: request.thinking_budget(),
                },
            },
        }
    }
}

fn content_from_turn(turn: &ConversationTurn) -> GoogleContent<'_> {
    GoogleContent {
        role: match turn.role {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        },
        parts: turn.parts.iter().map(part_from).collect(),
    }
}

fn part_from(part: &Part) -> GooglePart<'_> {
    match part {
        Part::Text(text) => GooglePart::Text { text },
        Part::InlineData { mime_type, data } => GooglePart::InlineData {
            inline_data: GoogleInlineData { mime_type, data },
        },
    }
}

fn tool_from(tool: &Tool) -> GoogleTool<'_> {
    match tool {
        Tool::Functions(functions) => GoogleTool::FunctionDeclarations(functions),
        Tool::WebSearch => GoogleTool::GoogleSearch(EmptyObject::default()),
        Tool::Maps => GoogleTool::GoogleMaps(EmptyObject::default()),
    }
}
