//! CLI-specific response sink for terminal output.
//!
//! This module implements `ResponseSink` for the CLI: text chunks are written
//! and flushed as they arrive so tokens appear in real time, and the full
//! reply is kept for the conversation history.

use chatty_core::api::sink::{ResponseSink, StreamEvent};
use std::io::{self, Write};

/// Writes streamed text to `out` (stdout in the binary) and remembers it.
///
/// A failed write (e.g. a closed pipe) is returned to the decoder, which
/// aborts the stream.
pub struct TerminalSink<W: Write> {
    out: W,
    /// Written in front of the first chunk only.
    prefix: Option<&'static str>,
    text: String,
    line_open: bool,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout(prefix: Option<&'static str>) -> Self {
        Self::new(io::stdout(), prefix)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, prefix: Option<&'static str>) -> Self {
        Self {
            out,
            prefix,
            text: String::new(),
            line_open: false,
        }
    }

    /// Terminate the output line if any text was written to it.
    pub fn end_line(&mut self) -> io::Result<()> {
        if self.line_open {
            writeln!(self.out)?;
            self.out.flush()?;
            self.line_open = false;
        }
        Ok(())
    }

    /// Everything received so far.
    pub fn into_text(self) -> String {
        self.text
    }

    fn write_chunk(&mut self, chunk: &str) -> io::Result<()> {
        if !self.line_open {
            if let Some(prefix) = self.prefix {
                self.out.write_all(prefix.as_bytes())?;
            }
            self.line_open = true;
        }
        self.out.write_all(chunk.as_bytes())?;
        self.out.flush()?;
        self.text.push_str(chunk);
        Ok(())
    }
}

impl<W: Write> ResponseSink for TerminalSink<W> {
    fn handle(&mut self, event: StreamEvent<'_>) -> io::Result<()> {
        match event {
            StreamEvent::TextChunk(chunk) => self.write_chunk(chunk),
            StreamEvent::Finished => self.end_line(),
            StreamEvent::Error(err) => {
                log::debug!("stream interrupted: {}", err);
                self.end_line()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatty_core::ChatError;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_chunks_written_and_collected() {
        let mut sink = TerminalSink::new(Vec::new(), None);
        sink.handle(StreamEvent::TextChunk("Hello")).unwrap();
        sink.handle(StreamEvent::TextChunk(", world")).unwrap();
        sink.handle(StreamEvent::Finished).unwrap();

        assert_eq!(sink.text, "Hello, world");
        assert_eq!(sink.out, b"Hello, world\n");
        assert_eq!(sink.into_text(), "Hello, world");
    }

    #[test]
    fn test_prefix_written_once_before_text() {
        let mut sink = TerminalSink::new(Vec::new(), Some("Assistant: "));
        sink.handle(StreamEvent::TextChunk("a")).unwrap();
        sink.handle(StreamEvent::TextChunk("b")).unwrap();
        sink.handle(StreamEvent::Finished).unwrap();
        assert_eq!(sink.out, b"Assistant: ab\n");
        assert_eq!(sink.text, "ab");
    }

    #[test]
    fn test_no_text_means_no_output() {
        let mut sink = TerminalSink::new(Vec::new(), Some("Assistant: "));
        sink.handle(StreamEvent::Finished).unwrap();
        sink.end_line().unwrap();
        assert!(sink.out.is_empty());
    }

    #[test]
    fn test_error_after_text_ends_line_once() {
        let mut sink = TerminalSink::new(Vec::new(), None);
        sink.handle(StreamEvent::TextChunk("partial")).unwrap();
        sink.handle(StreamEvent::Error(&ChatError::StreamCallback))
            .unwrap();
        sink.end_line().unwrap();
        assert_eq!(sink.out, b"partial\n");
    }

    #[test]
    fn test_write_failure_stops_stream() {
        let mut sink = TerminalSink::new(ClosedPipe, None);
        let err = sink.handle(StreamEvent::TextChunk("x")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.text.is_empty());
    }
}
