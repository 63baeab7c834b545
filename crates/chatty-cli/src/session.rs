//! Interactive line-mode session.
//!
//! Reads user lines from stdin, keeps the whole conversation in memory and
//! resends it on every turn. A failed request does not end the session: the
//! error is reported and a placeholder reply is recorded so the history keeps
//! alternating between user and assistant.

use crate::sink::TerminalSink;
use chatty_core::{ChatClient, ChatOptions, Message};
use std::io::{self, BufRead, Write};

pub const QUIT_COMMAND: &str = "/quit";
pub const ERROR_REPLY: &str = "Sorry, I encountered an error processing your request.";

const PROMPT: &str = "You: ";
const REPLY_PREFIX: &str = "Assistant: ";

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Quit,
    Empty,
    Message(&'a str),
}

pub fn classify_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Input::Empty
    } else if trimmed == QUIT_COMMAND {
        Input::Quit
    } else {
        Input::Message(trimmed)
    }
}

pub struct Session<'a> {
    client: &'a ChatClient,
    options: &'a ChatOptions,
    stream: bool,
    history: Vec<Message>,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a ChatClient, options: &'a ChatOptions, stream: bool) -> Self {
        Self {
            client,
            options,
            stream,
            history: Vec::new(),
        }
    }

    /// Run until `/quit` or end of input.
    pub async fn run<R: BufRead>(&mut self, mut input: R, first: Option<&str>) -> io::Result<()> {
        if let Some(message) = first {
            println!("{}{}", PROMPT, message);
            self.turn(message).await;
        }

        let mut line = String::new();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                println!();
                return Ok(());
            }

            match classify_input(&line) {
                Input::Quit => return Ok(()),
                Input::Empty => continue,
                Input::Message(message) => self.turn(message).await,
            }
        }
    }

    async fn turn(&mut self, message: &str) {
        self.history.push(Message::user(message));
        let reply = self.request().await;
        if let Err(e) = &reply {
            eprintln!("Error: {}", e);
        }
        self.record_reply(reply);
    }

    async fn request(&self) -> chatty_core::Result<String> {
        if self.stream {
            let mut sink = TerminalSink::stdout(Some(REPLY_PREFIX));
            let result = self
                .client
                .chat_stream(&self.history, self.options, &mut sink)
                .await;
            // Best effort: stdout trouble must not mask the request outcome.
            let _ = sink.end_line();
            result.map(|()| sink.into_text())
        } else {
            let reply = self.client.chat(&self.history, self.options).await?;
            println!("{}{}", REPLY_PREFIX, reply.content);
            Ok(reply.content)
        }
    }

    fn record_reply(&mut self, reply: chatty_core::Result<String>) {
        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                log::debug!("recording placeholder reply after error: {:?}", e);
                ERROR_REPLY.to_string()
            }
        };
        self.history.push(Message::assistant(content));
    }
}
