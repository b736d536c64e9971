//! TX drainer
//!
//! Holds one queued payload and hands it out a byte at a time, driven by
//! transmit-complete events. The drainer never touches the peripheral: the
//! caller transmits whatever [`TxDrainer::next_byte`] yields.

use heapless::Vec;

use crate::term::NUL;

/// Errors from queuing a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrainError {
    /// Payload larger than the TX buffer
    PayloadTooLarge,
    /// A previous payload is still draining
    Busy,
}

/// One-payload transmit queue drained byte-by-byte
///
/// States: idle (send index 0, nothing queued) and draining. Each
/// transmit-complete event advances the index by one byte; the drain ends
/// and the index resets when a NUL sentinel or the end of the payload is
/// reached. The sentinel itself is never transmitted.
#[derive(Debug, Clone)]
pub struct TxDrainer<const N: usize> {
    buf: Vec<u8, N>,
    index: usize,
}

impl<const N: usize> Default for TxDrainer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TxDrainer<N> {
    /// Create an idle drainer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            index: 0,
        }
    }

    /// Queue a payload for drainage
    ///
    /// Fails with [`DrainError::Busy`] while a previous payload is still
    /// going out; the in-flight buffer is never clobbered.
    pub fn load(&mut self, payload: &[u8]) -> Result<(), DrainError> {
        if !self.is_idle() {
            return Err(DrainError::Busy);
        }
        self.buf.clear();
        self.buf
            .extend_from_slice(payload)
            .map_err(|_| DrainError::PayloadTooLarge)?;
        self.index = 0;
        Ok(())
    }

    /// Advance the drain by one transmit-complete event
    ///
    /// Returns the next byte to put on the wire, or `None` when the drain
    /// is complete (index reset, drainer idle again).
    pub fn next_byte(&mut self) -> Option<u8> {
        match self.buf.get(self.index) {
            Some(&byte) if byte != NUL => {
                self.index += 1;
                Some(byte)
            }
            _ => {
                // Sentinel or buffer bound: drain complete
                self.buf.clear();
                self.index = 0;
                None
            }
        }
    }

    /// True when nothing is queued or the queued payload has fully drained
    pub fn is_idle(&self) -> bool {
        self.index >= self.buf.len() || self.buf.get(self.index) == Some(&NUL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_yields_bytes_then_idles() {
        let mut drainer: TxDrainer<80> = TxDrainer::new();
        drainer.load(b"hi").unwrap();
        assert_eq!(drainer.next_byte(), Some(b'h'));
        assert_eq!(drainer.next_byte(), Some(b'i'));
        assert_eq!(drainer.next_byte(), None);
        assert!(drainer.is_idle());
    }

    #[test]
    fn test_nul_sentinel_ends_drain_early() {
        let mut drainer: TxDrainer<80> = TxDrainer::new();
        drainer.load(b"ab\0cd").unwrap();
        assert_eq!(drainer.next_byte(), Some(b'a'));
        assert_eq!(drainer.next_byte(), Some(b'b'));
        // Sentinel is never transmitted
        assert_eq!(drainer.next_byte(), None);
        assert!(drainer.is_idle());
    }

    #[test]
    fn test_load_while_draining_is_busy() {
        let mut drainer: TxDrainer<80> = TxDrainer::new();
        drainer.load(b"abc").unwrap();
        drainer.next_byte();
        assert_eq!(drainer.load(b"xyz"), Err(DrainError::Busy));
        // Finish the drain, then reload succeeds
        while drainer.next_byte().is_some() {}
        drainer.load(b"xyz").unwrap();
        assert_eq!(drainer.next_byte(), Some(b'x'));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let mut drainer: TxDrainer<4> = TxDrainer::new();
        assert_eq!(drainer.load(b"abcde"), Err(DrainError::PayloadTooLarge));
        // Drainer stays idle and usable
        drainer.load(b"ab").unwrap();
        assert_eq!(drainer.next_byte(), Some(b'a'));
    }

    #[test]
    fn test_idle_drainer_yields_nothing() {
        let mut drainer: TxDrainer<80> = TxDrainer::new();
        assert_eq!(drainer.next_byte(), None);
    }

    #[test]
    fn test_reload_after_complete_drain() {
        let mut drainer: TxDrainer<80> = TxDrainer::new();
        drainer.load(b"one").unwrap();
        while drainer.next_byte().is_some() {}
        drainer.load(b"two").unwrap();
        assert_eq!(drainer.next_byte(), Some(b't'));
        assert_eq!(drainer.next_byte(), Some(b'w'));
        assert_eq!(drainer.next_byte(), Some(b'o'));
        assert_eq!(drainer.next_byte(), None);
    }
}
