//! Response sink abstraction for decoupling the stream decoder from presentation.
//!
//! The decoder emits [`StreamEvent`]s into a [`ResponseSink`] without knowing
//! whether they end up on a terminal, in a buffer, or in a test assertion.
//! The sink's return value is the only cancellation channel: returning `Err`
//! tells the decoder the consumer cannot accept more data, and the stream is
//! aborted.

use crate::error::ChatError;
use std::io;

/// Events emitted while a streamed response is decoded.
#[derive(Debug, Clone, Copy)]
pub enum StreamEvent<'a> {
    /// A non-empty fragment of assistant content.
    TextChunk(&'a str),

    /// The server sent its completion sentinel.
    Finished,

    /// The request driver hit a failure after streaming had started.
    ///
    /// Never produced by the decoder itself. The driver ignores the sink's
    /// answer to this event since the stream is already over.
    Error(&'a ChatError),
}

/// Trait for handling stream events.
///
/// # Example
///
/// ```
/// use chatty_core::api::sink::{ResponseSink, StreamEvent};
/// use std::io;
///
/// struct MySink {
///     text: String,
/// }
///
/// impl ResponseSink for MySink {
///     fn handle(&mut self, event: StreamEvent<'_>) -> io::Result<()> {
///         if let StreamEvent::TextChunk(chunk) = event {
///             self.text.push_str(chunk);
///         }
///         Ok(())
///     }
/// }
///
/// let mut sink = MySink { text: String::new() };
/// sink.handle(StreamEvent::TextChunk("Hello")).unwrap();
/// assert_eq!(sink.text, "Hello");
/// ```
pub trait ResponseSink {
    /// Handle a stream event.
    ///
    /// `Ok(())` means "continue"; any `Err` means "stop, abort the stream".
    fn handle(&mut self, event: StreamEvent<'_>) -> io::Result<()>;
}

impl<F> ResponseSink for F
where
    F: FnMut(StreamEvent<'_>) -> io::Result<()>,
{
    fn handle(&mut self, event: StreamEvent<'_>) -> io::Result<()> {
        self(event)
    }
}

/// A sink that collects the streamed response for programmatic use.
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// Accumulated text content from the response.
    pub text: String,
    /// Number of text chunks received.
    pub chunks: usize,
    /// Whether the completion sentinel was seen.
    pub finished: bool,
    /// Display form of an error reported by the driver, if any.
    pub error: Option<String>,
}

impl CollectingSink {
    /// Create a new collecting sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSink for CollectingSink {
    fn handle(&mut self, event: StreamEvent<'_>) -> io::Result<()> {
        match event {
            StreamEvent::TextChunk(chunk) => {
                self.text.push_str(chunk);
                self.chunks += 1;
            }
            StreamEvent::Finished => {
                self.finished = true;
            }
            StreamEvent::Error(err) => {
                self.error = Some(err.to_string());
            }
        }
        Ok(())
    }
}
