// chatty-cli: CLI frontend for chatty
// Argument parsing, logging setup, single-shot and interactive modes

mod cli;
mod session;
mod sink;

use chatty_core::{ChatClient, ChatOptions, Config, Message};
use clap::Parser;
use cli::{Cli, Mode};
use session::Session;
use sink::TerminalSink;
use std::error::Error;
use std::io;
use std::process::ExitCode;

/// `RUST_LOG` wins; otherwise `-v` selects debug output for chatty's crates.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,chatty_core=debug,chatty=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Send one message and print the reply. Returns the process exit code.
async fn single_shot(
    client: &ChatClient,
    options: &ChatOptions,
    message: &str,
    stream: bool,
) -> ExitCode {
    let messages = [Message::user(message)];

    if stream {
        println!("LLM Response (streaming):");
        let mut sink = TerminalSink::stdout(None);
        let result = client.chat_stream(&messages, options, &mut sink).await;
        let _ = sink.end_line();
        if let Err(e) = result {
            eprintln!("Streaming error: {}", e);
            return ExitCode::FAILURE;
        }
    } else {
        match client.chat(&messages, options).await {
            Ok(reply) => println!("LLM Response:\n{}", reply.content),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let config = Config::load(None)?;
    log::debug!("loaded config: {:?}", config);

    let client = ChatClient::from_config(&config)?;
    let options = config.chat_options(cli.model.clone(), cli.temperature, cli.top_p);
    let stream = cli.stream || config.stream;
    log::debug!(
        "model {} via {} (stream={})",
        options.model,
        client.provider().base_url(),
        stream
    );

    match cli.mode() {
        Mode::SingleShot(message) => Ok(single_shot(&client, &options, message, stream).await),
        Mode::Interactive(first) => {
            let mut session = Session::new(&client, &options, stream);
            session.run(io::stdin().lock(), first).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
