//! Bounded line assembly for event-stream bodies.

use std::fmt;

/// Default line capacity in bytes.
///
/// One slot is reserved, so the longest accepted line is 4095 bytes
/// including its trailing newline.
pub const DEFAULT_LINE_CAPACITY: usize = 4096;

/// A line grew past the buffer's capacity before its newline arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOverflow {
    pub capacity: usize,
}

impl fmt::Display for LineOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line exceeded {} bytes without a newline", self.capacity)
    }
}

impl std::error::Error for LineOverflow {}

/// Accumulates bytes until a `\n` completes a line.
///
/// Holds at most `capacity - 1` bytes. The buffer never contains a newline
/// except as the final byte of a line returned by [`push`](Self::push), and
/// the caller is expected to [`clear`](Self::clear) it once that line has
/// been handled.
#[derive(Debug)]
pub struct LineBuffer {
    buf: Vec<u8>,
    capacity: usize,
}

impl LineBuffer {
    /// # Panics
    ///
    /// Panics if `capacity < 2`; such a buffer could never hold a newline.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity >= 2, "line capacity must be at least 2");
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes held for the current, unterminated line.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append one byte.
    ///
    /// Returns the complete line (newline included) when `byte` is `\n`.
    /// On overflow the buffer is left as it was.
    pub fn push(&mut self, byte: u8) -> Result<Option<&[u8]>, LineOverflow> {
        if self.buf.len() >= self.capacity - 1 {
            return Err(LineOverflow {
                capacity: self.capacity,
            });
        }

        self.buf.push(byte);
        if byte == b'\n' {
            Ok(Some(&self.buf))
        } else {
            Ok(None)
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LINE_CAPACITY)
    }
}
