use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use dualchat::{ConversationClient, GenerationMode};

use crate::attachments::load_attachment;
use crate::render::{render_history, render_reply};

const HELP: &str = "commands: /fast /thinker /mode /new /attach <file> /history /help /quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Prompt(String),
    SetMode(GenerationMode),
    ShowMode,
    New,
    Attach(PathBuf),
    History,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplCommand::Prompt(line.to_string());
    };
    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));
    match name.to_ascii_lowercase().as_str() {
        "fast" => ReplCommand::SetMode(GenerationMode::Fast),
        "thinker" | "think" => ReplCommand::SetMode(GenerationMode::Thinker),
        "mode" if rest.is_empty() => ReplCommand::ShowMode,
        "mode" => match rest.parse() {
            Ok(mode) => ReplCommand::SetMode(mode),
            Err(_) => ReplCommand::Unknown(trimmed.to_string()),
        },
        "new" | "reset" => ReplCommand::New,
        "attach" if !rest.is_empty() => ReplCommand::Attach(PathBuf::from(rest)),
        "history" => ReplCommand::History,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

/// Line-oriented chat loop. Returns when input ends or on `/quit`.
pub async fn run_repl<R, W>(
    client: &ConversationClient,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "dualchat ({}) - {HELP}", client.mode())?;
    let mut lines = input.lines();
    loop {
        write!(out, "[{}] > ", client.mode())?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_line(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Prompt(prompt) => {
                client.set_input(prompt);
                if let Some(reply) = client.submit().await {
                    render_reply(out, &reply)?;
                }
            }
            ReplCommand::SetMode(mode) => {
                client.set_mode(mode);
                writeln!(out, "mode: {mode}")?;
            }
            ReplCommand::ShowMode => writeln!(out, "mode: {}", client.mode())?,
            ReplCommand::New => {
                client.reset();
                writeln!(out, "started a new conversation")?;
            }
            ReplCommand::Attach(path) => match load_attachment(&path) {
                Ok(attachment) => {
                    let mime = attachment.mime_type.clone();
                    client.attach(attachment);
                    writeln!(out, "attached {} ({mime})", path.display())?;
                }
                Err(err) => writeln!(out, "error: {err:#}")?,
            },
            ReplCommand::History => render_history(out, &client.messages())?,
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Quit => break,
            ReplCommand::Unknown(raw) => writeln!(out, "unknown command {raw}; {HELP}")?,
        }
    }
    Ok(())
}
