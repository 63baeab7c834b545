//! Command-line argument parsing.

use clap::Parser;

const CLI_AFTER_HELP: &str = r#"Without MESSAGE, chatty starts an interactive session (type /quit to leave).

Environment:
  OPENAI_API_BASE   Provider base URL (default https://api.openai.com/v1)
  OPENAI_API_KEY    API key; GROQ_API_KEY, MISTRAL_API_KEY, DEEPSEEK_API_KEY,
                    MOONSHOT_API_KEY, ... are used for those providers' URLs
  CHATTY_HOME       Directory holding config.toml (default ~/.chatty)
  RUST_LOG          Log filter, overrides -v

Examples:
  chatty gpt-4o "Hello, world!"             Single message
  chatty --stream gpt-4o "Tell me a story"  Single message with streaming
  chatty gpt-4o                             Interactive mode
  chatty                                    Interactive mode with default model
  chatty -i gpt-4o "Hello"                  Initial message then interactive"#;

/// chatty - Chat with OpenAI-compatible LLM APIs from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "chatty",
    version,
    about = "Chat with OpenAI-compatible LLM APIs from the terminal",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    /// Display tokens as they are generated
    #[arg(short = 's', long = "stream")]
    pub stream: bool,

    /// Send the initial message, then continue interactively
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(long = "temperature", value_name = "TEMP")]
    pub temperature: Option<f64>,

    /// Nucleus sampling parameter (0.0 to 1.0)
    #[arg(long = "top-p", value_name = "P")]
    pub top_p: Option<f64>,

    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Model to use (default from config.toml, else gpt-4o)
    pub model: Option<String>,

    /// Message to send
    pub message: Option<String>,
}

/// What the invocation asks chatty to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Send one message, print the reply, exit.
    SingleShot(&'a str),
    /// Line-based session, optionally opened with a first message.
    Interactive(Option<&'a str>),
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        match (self.message.as_deref(), self.interactive) {
            (Some(message), false) => Mode::SingleShot(message),
            (first, _) => Mode::Interactive(first),
        }
    }
}
