//! chatty-core: Client library for OpenAI-compatible chat-completion APIs
//!
//! Provides conversation messages, request options, provider resolution, a
//! request driver, and an incremental decoder for streamed (server-sent
//! event) responses that works with a fixed-size line buffer.
//!
//! # Quick Start
//!
//! ```no_run
//! // Requires OPENAI_API_KEY (or the provider-specific key) in the environment.
//! use chatty_core::{ChatClient, ChatOptions, CollectingSink, Message, Provider};
//!
//! #[tokio::main]
//! async fn main() -> chatty_core::Result<()> {
//!     let client = ChatClient::new(Provider::from_env(None)?)?;
//!     let messages = vec![Message::user("Hello!")];
//!     let mut sink = CollectingSink::new();
//!
//!     client
//!         .chat_stream(&messages, &ChatOptions::default(), &mut sink)
//!         .await?;
//!     println!("Response: {}", sink.text);
//!     Ok(())
//! }
//! ```
//!
//! The decoder can also be driven by hand, for transports other than
//! reqwest:
//!
//! ```
//! use chatty_core::api::sink::StreamEvent;
//! use chatty_core::api::stream::StreamDecoder;
//! use std::io;
//!
//! let mut text = String::new();
//! let mut sink = |event: StreamEvent<'_>| -> io::Result<()> {
//!     if let StreamEvent::TextChunk(chunk) = event {
//!         text.push_str(chunk);
//!     }
//!     Ok(())
//! };
//!
//! let mut decoder = StreamDecoder::new();
//! decoder.on_bytes(b"data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\n", &mut sink);
//! decoder.on_bytes(b"data: [DONE]\n", &mut sink);
//! assert!(decoder.saw_done());
//! assert_eq!(text, "Hi");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod message;
pub mod options;
pub mod provider;

// Re-export commonly used types
pub use api::{ChatClient, CollectingSink, ResponseSink, StreamDecoder, StreamEvent};
pub use config::Config;
pub use error::{ChatError, Result};
pub use message::{Message, Role};
pub use options::{ChatOptions, DEFAULT_MODEL};
pub use provider::Provider;
