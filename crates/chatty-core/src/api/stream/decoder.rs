//! Incremental decoder for streamed chat-completion bodies.
//!
//! [`StreamDecoder`] sits between the transport and a [`ResponseSink`]. The
//! transport hands it body bytes in whatever chunks the network produced;
//! the decoder reassembles lines, classifies them, extracts content deltas
//! and forwards them to the sink inline, in arrival order.
//!
//! The return value of [`StreamDecoder::on_bytes`] follows the write-callback
//! convention of streaming HTTP clients: the full chunk length means "keep
//! going", anything shorter means "abort the transfer".

use super::delta::extract_delta_content;
use super::frame::Frame;
use super::line::{DEFAULT_LINE_CAPACITY, LineBuffer};
use crate::api::sink::{ResponseSink, StreamEvent};
use std::io;

/// Why a decoder stopped accepting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The `[DONE]` sentinel was delivered and accepted.
    Completed,
    /// The sink returned an error.
    CallbackRequestedStop,
    /// A line exceeded the line buffer's capacity.
    BufferOverflow,
}

/// Lifecycle of a decoder: accepting input, or stopped for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    Active,
    Terminated(TerminationReason),
}

/// Decoder for one streamed response. Build a fresh one per request.
#[derive(Debug)]
pub struct StreamDecoder {
    lines: LineBuffer,
    state: DecoderState,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }

    /// Decoder whose lines may hold at most `capacity - 1` bytes,
    /// trailing newline included.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: LineBuffer::with_capacity(capacity),
            state: DecoderState::Active,
        }
    }

    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, DecoderState::Terminated(_))
    }

    pub fn termination(&self) -> Option<TerminationReason> {
        match self.state {
            DecoderState::Active => None,
            DecoderState::Terminated(reason) => Some(reason),
        }
    }

    /// Whether the completion sentinel has been delivered.
    pub fn saw_done(&self) -> bool {
        self.state == DecoderState::Terminated(TerminationReason::Completed)
    }

    /// Feed one chunk of body bytes.
    ///
    /// Returns `chunk.len()` when the transfer may continue and 0 when it
    /// must be aborted (line overflow, or the sink asked to stop). Once the
    /// decoder has failed every later call returns 0 without looking at its
    /// input. After a completed stream, input is discarded but reported as
    /// consumed.
    pub fn on_bytes<S>(&mut self, chunk: &[u8], sink: &mut S) -> usize
    where
        S: ResponseSink + ?Sized,
    {
        match self.state {
            DecoderState::Active => {}
            DecoderState::Terminated(TerminationReason::Completed) => {
                if !chunk.is_empty() {
                    log::trace!("discarding {} bytes after [DONE]", chunk.len());
                }
                return chunk.len();
            }
            DecoderState::Terminated(_) => return 0,
        }

        for &byte in chunk {
            let line = match self.lines.push(byte) {
                Ok(Some(line)) => line,
                Ok(None) => continue,
                Err(overflow) => {
                    log::debug!("aborting stream: {}", overflow);
                    self.state = DecoderState::Terminated(TerminationReason::BufferOverflow);
                    return 0;
                }
            };

            let outcome = dispatch_line(line, sink);
            self.lines.clear();

            match outcome {
                LineOutcome::Continue => {}
                LineOutcome::Done => {
                    self.state = DecoderState::Terminated(TerminationReason::Completed);
                    return chunk.len();
                }
                LineOutcome::Stop(err) => {
                    log::debug!("stream consumer requested stop: {}", err);
                    self.state =
                        DecoderState::Terminated(TerminationReason::CallbackRequestedStop);
                    return 0;
                }
            }
        }

        chunk.len()
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

enum LineOutcome {
    Continue,
    Done,
    Stop(io::Error),
}

fn dispatch_line<S>(line: &[u8], sink: &mut S) -> LineOutcome
where
    S: ResponseSink + ?Sized,
{
    match Frame::classify(line) {
        Frame::Ignorable => LineOutcome::Continue,
        Frame::Done => match sink.handle(StreamEvent::Finished) {
            Ok(()) => LineOutcome::Done,
            Err(e) => LineOutcome::Stop(e),
        },
        Frame::Data(payload) => match extract_delta_content(payload) {
            Some(content) if !content.is_empty() => {
                match sink.handle(StreamEvent::TextChunk(&content)) {
                    Ok(()) => LineOutcome::Continue,
                    Err(e) => LineOutcome::Stop(e),
                }
            }
            _ => LineOutcome::Continue,
        },
    }
}
