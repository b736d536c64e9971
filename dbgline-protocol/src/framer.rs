//! RX line framer
//!
//! Segments a raw incoming byte stream into discrete lines. Fed one byte at
//! a time from whatever context services the receive interrupt; returns a
//! completed line to the caller and immediately re-arms for the next one.

use heapless::Vec;

/// Default line buffer capacity in bytes
pub const DEFAULT_LINE_CAPACITY: usize = 80;

/// A completed line, terminator stripped
pub type Line<const N: usize> = Vec<u8, N>;

/// Byte-at-a-time line accumulator
///
/// A line completes when a terminator byte arrives (the terminator is
/// dropped) or when the cursor reaches `N - 2` without one. Buffer-full is
/// unconditionally treated as line-complete: over-long input is silently
/// truncated rather than rejected, which is the right trade for a debug
/// transport.
#[derive(Debug, Clone)]
pub struct LineFramer<const N: usize = DEFAULT_LINE_CAPACITY> {
    buf: Vec<u8, N>,
}

impl<const N: usize> Default for LineFramer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineFramer<N> {
    /// Create an empty framer
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Discard any partially accumulated line
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Number of bytes accumulated toward the current line
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no bytes are accumulated
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Feed one received byte
    ///
    /// Returns `Some(line)` when this byte completed a line (by terminator
    /// or by filling the buffer), leaving the framer ready for the next
    /// line. A terminator with nothing accumulated yields an empty line.
    pub fn push(&mut self, byte: u8) -> Option<Line<N>> {
        if crate::term::is_line_terminator(byte) {
            return Some(core::mem::take(&mut self.buf));
        }

        // Cannot fail: the overflow check below keeps len < N - 2
        let _ = self.buf.push(byte);

        if self.buf.len() >= N.saturating_sub(2) {
            // Force-complete: one slot stays reserved for the terminator a
            // cooperating sender would have appended, one trails it
            return Some(core::mem::take(&mut self.buf));
        }
        None
    }

    /// Feed a run of received bytes, returning the first completed line
    ///
    /// Bytes after a completed line are not consumed; callers that expect
    /// multiple lines per burst should loop over [`push`](Self::push).
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Option<Line<N>> {
        for &byte in bytes {
            if let Some(line) = self.push(byte) {
                return Some(line);
            }
        }
        None
    }
}
