use std::io::{self, IsTerminal, Read};

use crate::args::CliArgs;

pub(super) fn resolve_prompt(args: &CliArgs) -> anyhow::Result<String> {
    if let Some(prompt) = args.prompt_arg() {
        return Ok(prompt);
    }
    if let Some(prompt) = prompt_from_stdin()? {
        return Ok(prompt);
    }
    Err(anyhow::anyhow!(
        "no prompt provided; use --prompt or pipe input"
    ))
}

fn prompt_from_stdin() -> anyhow::Result<Option<String>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let trimmed = input.trim_end();
    if trimmed.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
