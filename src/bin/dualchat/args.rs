use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dualchat::secret_store::API_KEY_NAME;
use dualchat::GenerationMode;

#[derive(Parser, Debug)]
#[command(
    name = "dualchat",
    version,
    about = "Chat with Gemini in FAST or THINKER mode",
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Prompt to send once; omit for the interactive shell
    #[arg(index = 1)]
    pub positional_prompt: Option<String>,
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
    /// fast | thinker
    #[arg(long, short = 'm')]
    pub mode: Option<GenerationMode>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Model override for the selected mode
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub system: Option<String>,
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// File to send with the first prompt (repeatable)
    #[arg(long = "attach", value_name = "FILE")]
    pub attach: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Set {
        value: String,
        #[arg(long, default_value = API_KEY_NAME)]
        name: String,
    },
    Get {
        #[arg(long, default_value = API_KEY_NAME)]
        name: String,
    },
    Delete {
        #[arg(long, default_value = API_KEY_NAME)]
        name: String,
    },
}

impl CliArgs {
    pub fn prompt_arg(&self) -> Option<String> {
        self.prompt.clone().or_else(|| self.positional_prompt.clone())
    }

    pub fn has_non_interactive_prompt(&self) -> bool {
        self.prompt_arg().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prompt_and_mode() {
        let args = CliArgs::try_parse_from(["dualchat", "-m", "thinker", "why is the sky blue"])
            .unwrap();
        assert_eq!(args.mode, Some(GenerationMode::Thinker));
        assert_eq!(args.prompt_arg().as_deref(), Some("why is the sky blue"));
    }

    #[test]
    fn flag_prompt_wins_over_positional() {
        let args = CliArgs::try_parse_from(["dualchat", "-p", "flag", "positional"]).unwrap();
        assert_eq!(args.prompt_arg().as_deref(), Some("flag"));
    }

    #[test]
    fn negative_coordinates_parse() {
        let args =
            CliArgs::try_parse_from(["dualchat", "--lat", "-33.86", "--lon", "151.2"]).unwrap();
        assert_eq!(args.lat, Some(-33.86));
        assert_eq!(args.lon, Some(151.2));
    }

    #[test]
    fn lat_requires_lon() {
        assert!(CliArgs::try_parse_from(["dualchat", "--lat", "1.0"]).is_err());
    }

    #[test]
    fn key_subcommand_defaults_name() {
        let args = CliArgs::try_parse_from(["dualchat", "key", "set", "abc"]).unwrap();
        match args.command {
            Some(Command::Key { action }) => assert_eq!(
                action,
                KeyAction::Set {
                    value: "abc".into(),
                    name: API_KEY_NAME.into()
                }
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn attach_is_repeatable() {
        let args =
            CliArgs::try_parse_from(["dualchat", "--attach", "a.png", "--attach", "b.pdf", "hi"])
                .unwrap();
        assert_eq!(args.attach.len(), 2);
    }
}
