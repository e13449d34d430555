mod commands;
mod prompt;
mod session;

use clap::Parser;
use std::io::{self, IsTerminal, Write};

use dualchat::chat::Coordinates;
use dualchat::ConversationClient;

use crate::args::{CliArgs, Command};
use crate::attachments::load_attachment;
use crate::config::load_config;
use crate::logging::init_logging;
use crate::render::render_reply;
use crate::repl::run_repl;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    log::info!(
        "dualchat starting (config {}, exists={})",
        loaded.paths.config_file.display(),
        loaded.config_exists
    );

    if let Some(Command::Key { action }) = &args.command {
        return commands::handle_key(action);
    }

    let generator = session::build_generator(&args, &loaded.config)?;
    let mode = args.mode.unwrap_or(loaded.config.chat.default_mode);
    let client = ConversationClient::new(generator).with_mode(mode);
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        client.set_location(Some(Coordinates::new(lat, lon)));
    }
    for path in &args.attach {
        client.attach(load_attachment(path)?);
    }

    let mut stdout = io::stdout();
    if args.has_non_interactive_prompt() || !io::stdin().is_terminal() {
        let prompt = prompt::resolve_prompt(&args)?;
        client.set_input(prompt);
        if let Some(reply) = client.submit().await {
            render_reply(&mut stdout, &reply)?;
        }
        stdout.flush()?;
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_repl(&client, stdin, &mut stdout).await
}
