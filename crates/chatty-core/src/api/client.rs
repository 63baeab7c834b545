//! HTTP request driver for chat completions.
//!
//! [`ChatClient`] owns the HTTP client and the resolved [`Provider`]. It
//! validates input, builds the payload, performs the POST and either parses
//! the whole JSON response or feeds the event stream through a fresh
//! [`StreamDecoder`] per request.

use crate::api::request::build_request_body;
use crate::api::response::parse_chat_response;
use crate::api::sink::{ResponseSink, StreamEvent};
use crate::api::stream::{DEFAULT_LINE_CAPACITY, StreamDecoder};
use crate::config::Config;
use crate::error::{ChatError, Result};
use crate::message::Message;
use crate::options::ChatOptions;
use crate::provider::Provider;
use futures_util::stream::StreamExt;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};

const USER_AGENT: &str = concat!("chatty/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    provider: Provider,
    line_capacity: usize,
}

impl ChatClient {
    pub fn new(provider: Provider) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ChatError::ClientInit)?;

        Ok(Self {
            http,
            provider,
            line_capacity: DEFAULT_LINE_CAPACITY,
        })
    }

    /// Resolve the provider from the environment and apply config.toml settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = Provider::from_env(config.base_url.as_deref())?;
        Self::new(provider)?.with_line_capacity(config.line_capacity)
    }

    /// Set the maximum size of a single event-stream line (see [`StreamDecoder::with_capacity`]).
    pub fn with_line_capacity(mut self, capacity: usize) -> Result<Self> {
        if capacity < 2 {
            return Err(ChatError::InvalidOptions(format!(
                "line capacity must be at least 2, got {}",
                capacity
            )));
        }
        self.line_capacity = capacity;
        Ok(self)
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn line_capacity(&self) -> usize {
        self.line_capacity
    }

    /// Send the conversation and wait for the complete reply.
    pub async fn chat(&self, messages: &[Message], options: &ChatOptions) -> Result<Message> {
        let response = self.post(messages, options, false).await?;
        let body = response.bytes().await.map_err(ChatError::Network)?;
        parse_chat_response(&body)
    }

    /// Send the conversation and stream the reply into `sink`.
    ///
    /// Returns `Ok(())` once `[DONE]` arrives, or once the body has been fully
    /// consumed without the decoder failing. Nothing after `[DONE]` is read,
    /// so a connection dropped after it does not fail the call. When the
    /// sink stops the stream or a line overflows, the response is dropped
    /// (closing the connection) and the matching stream error is returned.
    pub async fn chat_stream<S>(
        &self,
        messages: &[Message],
        options: &ChatOptions,
        sink: &mut S,
    ) -> Result<()>
    where
        S: ResponseSink + ?Sized,
    {
        let response = self.post(messages, options, true).await?;
        let mut decoder = StreamDecoder::with_capacity(self.line_capacity);
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = match chunk_result {
                Ok(chunk) => chunk,
                Err(e) => {
                    let err = ChatError::Network(e);
                    // The stream is over either way; the sink's answer does not matter.
                    let _ = sink.handle(StreamEvent::Error(&err));
                    return Err(err);
                }
            };

            decoder.on_bytes(&chunk, sink);
            // Stop reading once the decoder is done with this response,
            // whether it completed or failed.
            if decoder.is_terminated() {
                break;
            }
        }
        drop(stream);

        match decoder.termination() {
            Some(reason) => match ChatError::from_termination(reason, decoder.capacity()) {
                Some(err) => Err(err),
                None => Ok(()),
            },
            None => {
                log::debug!("stream ended without [DONE]");
                Ok(())
            }
        }
    }

    async fn post(
        &self,
        messages: &[Message],
        options: &ChatOptions,
        stream: bool,
    ) -> Result<Response> {
        options.validate(messages)?;

        let body = build_request_body(messages, options, stream);
        let accept = if stream {
            "text/event-stream"
        } else {
            "application/json"
        };

        log::debug!(
            "POST {} (model {}, {} messages, stream={})",
            self.provider.chat_url(),
            options.model,
            messages.len(),
            stream
        );

        let response = self
            .http
            .post(self.provider.chat_url())
            .header(AUTHORIZATION, self.provider.bearer())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, accept)
            .body(body.to_string())
            .send()
            .await
            .map_err(ChatError::Network)?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChatError::Status { status, body });
        }

        Ok(response)
    }
}
