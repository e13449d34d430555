use super::*;
use crate::chat::ChatRole;
use crate::mode::{GenerationMode, ModeTable, ModelTier};
use serde_json::json;

fn sample_function() -> FunctionTool {
    FunctionTool {
        name: "open_external_url".to_string(),
        description: "Open a link".to_string(),
        parameters: json!({"type": "object"}),
    }
}

fn build(mode: GenerationMode, ctx: RequestContext<'_>) -> GenerationRequest {
    let table = ModeTable::default();
    GenerationRequest::build(table.profile(mode), ctx)
}

fn ctx<'a>(
    functions: &'a [FunctionTool],
    history: &'a [HistoryEntry],
    attachments: &'a [Attachment],
) -> RequestContext<'a> {
    RequestContext {
        system_instruction: Some("be brief"),
        functions,
        history,
        prompt: "next question",
        location: Some(Coordinates::new(48.85, 2.35)),
        attachments,
    }
}

#[test]
fn fast_mode_has_no_thinking_and_no_search() {
    let functions = [sample_function()];
    let request = build(GenerationMode::Fast, ctx(&functions, &[], &[]));
    let table = ModeTable::default();
    assert_eq!(request.thinking_budget(), 0);
    assert_eq!(table.fast.tier, ModelTier::Flash);
    assert_eq!(request.model(), table.fast.model);
    assert!(!request.has_web_search());
    assert!(!request.has_maps());
    assert_eq!(request.location(), None);
    assert_eq!(request.functions().len(), 1);
}

#[test]
fn thinker_mode_enables_search_maps_and_budget() {
    let functions = [sample_function()];
    let request = build(GenerationMode::Thinker, ctx(&functions, &[], &[]));
    let table = ModeTable::default();
    assert!(request.thinking_budget() > 0);
    assert_eq!(request.model(), table.thinker.model);
    assert!(request.has_web_search());
    assert!(request.has_maps());
    assert_eq!(request.location(), Some(Coordinates::new(48.85, 2.35)));
    assert_eq!(request.functions().len(), 1);
}

#[test]
fn location_dropped_when_tier_lacks_maps() {
    let mut table = ModeTable::default();
    table.thinker.maps_grounding = false;
    let request = GenerationRequest::build(&table.thinker, ctx(&[], &[], &[]));
    assert!(request.has_web_search());
    assert!(!request.has_maps());
    assert_eq!(request.location(), None);
}

#[test]
fn history_order_is_preserved_and_prompt_is_last() {
    let history = [
        HistoryEntry::user("u1"),
        HistoryEntry::assistant("a1"),
        HistoryEntry::user("u2"),
        HistoryEntry::assistant("a2"),
    ];
    let request = build(GenerationMode::Fast, ctx(&[], &history, &[]));
    let turns: Vec<(ChatRole, String)> = request
        .contents()
        .iter()
        .map(|turn| (turn.role, turn.text()))
        .collect();
    assert_eq!(
        turns,
        vec![
            (ChatRole::User, "u1".to_string()),
            (ChatRole::Model, "a1".to_string()),
            (ChatRole::User, "u2".to_string()),
            (ChatRole::Model, "a2".to_string()),
            (ChatRole::User, "next question".to_string()),
        ]
    );
}

#[test]
fn empty_history_turns_are_skipped() {
    let history = [
        HistoryEntry::user("turn the flashlight on"),
        HistoryEntry::assistant(""),
        HistoryEntry::user("  "),
    ];
    let request = build(GenerationMode::Fast, ctx(&[], &history, &[]));
    let contents = request.contents();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].text(), "turn the flashlight on");
    assert_eq!(contents[1].text(), "next question");
    assert!(contents
        .iter()
        .flat_map(|turn| &turn.parts)
        .all(|part| part.as_text().map_or(true, |t| !t.is_empty())));
}

#[test]
fn attachments_precede_prompt_without_data_uri_prefix() {
    let attachments = [Attachment::new(
        "data:application/pdf;base64,JVBERi0xLjQ=",
        "application/pdf",
    )];
    let request = build(GenerationMode::Fast, ctx(&[], &[], &attachments));
    let last = request.contents().last().unwrap();
    assert_eq!(
        last.parts,
        vec![
            Part::InlineData {
                mime_type: "application/pdf".to_string(),
                data: "JVBERi0xLjQ=".to_string(),
            },
            Part::Text("next question".to_string()),
        ]
    );
}

#[test]
fn blank_system_instruction_is_omitted() {
    let mut context = ctx(&[], &[], &[]);
    context.system_instruction = Some("   ");
    let request = build(GenerationMode::Fast, context);
    assert_eq!(request.system_instruction(), None);
}

#[test]
fn no_function_tool_without_declarations() {
    let request = build(GenerationMode::Fast, ctx(&[], &[], &[]));
    assert!(request.tools().is_empty());
}
