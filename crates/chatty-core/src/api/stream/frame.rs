//! Classification of complete event-stream lines.
//!
//! Only the `data: ` subset of the SSE format matters here:
//!
//! ```text
//! data: {"choices":[{"delta":{"content":"Hi"}}]}
//!
//! data: [DONE]
//! ```
//!
//! Everything else (blank keep-alives, `event:`/`id:` fields, `:` comments)
//! is ignorable. Classification is purely textual.

const DATA_PREFIX: &[u8] = b"data: ";
const DONE_SENTINEL: &[u8] = b"[DONE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame<'a> {
    /// Not a `data: ` line.
    Ignorable,
    /// The `[DONE]` completion sentinel.
    Done,
    /// Payload following `data: `, possibly still ending in `\n`.
    Data(&'a [u8]),
}

impl<'a> Frame<'a> {
    pub fn classify(line: &'a [u8]) -> Self {
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            return Frame::Ignorable;
        };

        let sentinel = payload.strip_suffix(b"\n").unwrap_or(payload);
        if sentinel == DONE_SENTINEL {
            Frame::Done
        } else {
            Frame::Data(payload)
        }
    }
}
