//! Wire control bytes
//!
//! The transport speaks plain ASCII; these are the few control characters
//! it assigns meaning to.

/// Carriage return, the primary line terminator
pub const CR: u8 = b'\r';

/// Line feed, emitted after CR on outgoing lines but never required on input
pub const LF: u8 = b'\n';

/// Form feed, alternate line terminator and terminal-clear signal
pub const FORM_FEED: u8 = 0x0C;

/// Bell, attention signal
pub const BELL: u8 = 0x07;

/// Null, sentinel marking the logical end of buffered content
pub const NUL: u8 = 0;

/// True for bytes that complete an incoming line
pub fn is_line_terminator(byte: u8) -> bool {
    byte == CR || byte == FORM_FEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators() {
        assert!(is_line_terminator(b'\r'));
        assert!(is_line_terminator(0x0C));
        assert!(!is_line_terminator(b'\n'));
        assert!(!is_line_terminator(b'A'));
    }
}
