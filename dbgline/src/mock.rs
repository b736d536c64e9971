//! In-memory UART test double
//!
//! Scripted receive bytes, captured transmit bytes, and a manually pended
//! transmit-complete flag so tests can step the interrupt-driven drain.

use dbgline_hal::{DebugUart, UartConfig, UartIrq};
use heapless::{Deque, Vec};

const MOCK_CAPACITY: usize = 256;

pub struct MockUart {
    /// Bytes the "wire" will deliver, front first
    rx: Deque<u8, MOCK_CAPACITY>,
    /// Everything transmitted so far
    pub tx: Vec<u8, MOCK_CAPACITY>,
    /// Transmit-ready flag, true unless a test wedges it
    pub tx_ready: bool,
    /// Count of software-pended transmit-complete events
    pub pended_tx_irqs: u32,
    pub rx_irq_enabled: bool,
    pub tx_irq_enabled: bool,
}

impl MockUart {
    pub fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Vec::new(),
            tx_ready: true,
            pended_tx_irqs: 0,
            rx_irq_enabled: false,
            tx_irq_enabled: false,
        }
    }

    /// Script bytes for the console to receive
    pub fn queue_rx(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.rx.push_back(byte).unwrap();
        }
    }
}

impl DebugUart for MockUart {
    type Error = core::convert::Infallible;

    fn configure(&mut self, _config: &UartConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transmit(&mut self, byte: u8) {
        self.tx.push(byte).unwrap();
    }

    fn receive(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn transmit_ready(&self) -> bool {
        self.tx_ready
    }

    fn receive_ready(&self) -> bool {
        !self.rx.is_empty()
    }
}

impl UartIrq for MockUart {
    fn enable_rx_interrupt(&mut self) {
        self.rx_irq_enabled = true;
    }

    fn enable_tx_interrupt(&mut self) {
        self.tx_irq_enabled = true;
    }

    fn pend_tx_interrupt(&mut self) {
        self.pended_tx_irqs += 1;
    }

    fn clear_irq_flags(&mut self) {}
}
