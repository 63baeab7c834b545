//! Streaming response decoding.
//!
//! - `line` - bounded line assembly ([`LineBuffer`])
//! - `frame` - `data: ` line classification ([`Frame`])
//! - `delta` - content extraction from chunk JSON
//! - `decoder` - the per-request state machine ([`StreamDecoder`])

mod decoder;
mod delta;
mod frame;
mod line;

pub use decoder::{DecoderState, StreamDecoder, TerminationReason};
pub use delta::extract_delta_content;
pub use frame::Frame;
pub use line::{DEFAULT_LINE_CAPACITY, LineBuffer, LineOverflow};
