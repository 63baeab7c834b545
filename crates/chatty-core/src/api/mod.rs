//! API module for chatty-core.
//!
//! This module provides the request driver and everything it needs to talk
//! to a chat-completions endpoint, decoupled from presentation concerns
//! through the `ResponseSink` trait.

pub mod client;
pub mod request;
pub mod response;
pub mod sink;
pub mod stream;

pub use client::ChatClient;
pub use request::build_request_body;
pub use response::parse_chat_response;
pub use sink::{CollectingSink, ResponseSink, StreamEvent};
pub use stream::{DecoderState, StreamDecoder, TerminationReason};
