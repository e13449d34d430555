use std::io::{self, Write};

use dualchat::chat::FunctionCall;
use dualchat::{Message, MessageRole};

/// Prints an assistant reply followed by its sources and requested actions.
pub fn render_reply(out: &mut impl Write, message: &Message) -> io::Result<()> {
    if !message.content.is_empty() {
        writeln!(out, "{}", message.content)?;
    }
    if let Some(chunks) = &message.grounding_chunks {
        writeln!(out)?;
        writeln!(out, "Sources:")?;
        for (idx, chunk) in chunks.iter().enumerate() {
            writeln!(out, "  [{}] {} <{}>", idx + 1, chunk.label(), chunk.uri)?;
        }
    }
    if let Some(calls) = &message.function_calls {
        writeln!(out)?;
        writeln!(out, "Requested actions (not executed):")?;
        for call in calls {
            writeln!(out, "  - {}", describe_call(call))?;
        }
    }
    Ok(())
}

pub fn render_history(out: &mut impl Write, messages: &[Message]) -> io::Result<()> {
    if messages.is_empty() {
        return writeln!(out, "(no messages)");
    }
    for message in messages {
        let who = match (message.role, message.model) {
            (MessageRole::User, _) => "you".to_string(),
            (MessageRole::Assistant, Some(mode)) => format!("assistant/{mode}"),
            (MessageRole::Assistant, None) => "assistant".to_string(),
        };
        writeln!(
            out,
            "{} {who}: {}",
            message.timestamp.format("%H:%M:%S"),
            message.content
        )?;
        if !message.attachments.is_empty() {
            writeln!(out, "    attachments: {}", message.attachments.join(", "))?;
        }
    }
    Ok(())
}

fn describe_call(call: &FunctionCall) -> String {
    match call.name.as_str() {
        "open_external_url" => format!("open {}", arg(call, "url")),
        "notify_user" => format!("notify: {}", arg(call, "message")),
        "device_control" => match call.arg_str("value") {
            Some(value) => format!("device {} = {value}", arg(call, "capability")),
            None => format!("device {}", arg(call, "capability")),
        },
        "file_processor" => format!("{} {}", arg(call, "operation"), arg(call, "file_name")),
        other => format!("{other}({})", call.args),
    }
}

fn arg<'a>(call: &'a FunctionCall, key: &str) -> &'a str {
    call.arg_str(key).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualchat::chat::GroundingChunk;
    use dualchat::generator::{GenerationResult, GenerationStatus};
    use dualchat::GenerationMode;
    use serde_json::json;

    fn assistant(
        text: &str,
        chunks: Option<Vec<GroundingChunk>>,
        calls: Option<Vec<FunctionCall>>,
    ) -> Message {
        Message::assistant(
            GenerationResult {
                text: text.to_string(),
                function_calls: calls,
                grounding_chunks: chunks,
                usage: None,
                status: GenerationStatus::Ok,
            },
            GenerationMode::Thinker,
        )
    }

    fn rendered(message: &Message) -> String {
        let mut out = Vec::new();
        render_reply(&mut out, message).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_sources_in_order() {
        let text = rendered(&assistant(
            "Answer",
            Some(vec![
                GroundingChunk::new("https://a", "A"),
                GroundingChunk::new("https://b", ""),
            ]),
            None,
        ));
        assert!(text.starts_with("Answer\n"));
        assert!(text.contains("[1] A <https://a>"));
        assert!(text.contains("[2] https://b <https://b>"));
    }

    #[test]
    fn describes_known_actions() {
        let text = rendered(&assistant(
            "",
            None,
            Some(vec![
                FunctionCall::new("open_external_url", json!({"url": "https://x"})),
                FunctionCall::new("device_control", json!({"capability": "vibrate"})),
                FunctionCall::new("custom", json!({"a": 1})),
            ]),
        ));
        assert!(text.contains("- open https://x"));
        assert!(text.contains("- device vibrate"));
        assert!(text.contains(r#"- custom({"a":1})"#));
    }

    #[test]
    fn history_tags_assistant_mode() {
        let messages = vec![
            Message::user("hi", vec!["image/png".into()]),
            assistant("hello", None, None),
        ];
        let mut out = Vec::new();
        render_history(&mut out, &messages).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("you: hi"));
        assert!(text.contains("attachments: image/png"));
        assert!(text.contains("assistant/THINKER: hello"));
    }
}
