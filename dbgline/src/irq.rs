//! Interrupt-driven transport
//!
//! Per-UART-instance context shared between foreground code and interrupt
//! handlers. The split is strict single-writer/single-reader per field: the
//! RX framer is fed only from the receive interrupt, the TX drainer is
//! stepped only from the transmit-complete interrupt, and the foreground
//! only queues payloads and takes completed lines. The line-ready flag is
//! the one hand-off point between the two contexts; composite state is
//! guarded by a critical section so a preempting handler never observes it
//! half-updated.
//!
//! # Usage
//!
//! ```ignore
//! static TRANSPORT: IrqTransport = IrqTransport::new();
//!
//! // In the RX interrupt handler:
//! TRANSPORT.on_rx_byte(uart.receive());
//!
//! // In the TX-complete interrupt handler:
//! if let Some(byte) = TRANSPORT.on_tx_complete() {
//!     uart.transmit(byte);
//! }
//! ```

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;
use dbgline_hal::UartIrq;
use dbgline_protocol::drain::{DrainError, TxDrainer};
use dbgline_protocol::framer::{Line, LineFramer, DEFAULT_LINE_CAPACITY};
use dbgline_protocol::term;

struct IrqState<const N: usize> {
    framer: LineFramer<N>,
    /// Completed line awaiting foreground pickup; one-deep, newest wins
    pending: Option<Line<N>>,
    drainer: TxDrainer<N>,
}

/// Shared RX/TX state for one interrupt-driven UART
///
/// Designed to live in a `static`; one instance per UART peripheral.
/// Multiple instances each get their own buffers, so a single pair of
/// generic handlers serves any number of ports.
pub struct IrqTransport<const N: usize = DEFAULT_LINE_CAPACITY> {
    state: Mutex<RefCell<IrqState<N>>>,
    line_ready: AtomicBool,
}

impl<const N: usize> Default for IrqTransport<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> IrqTransport<N> {
    /// Create an idle transport
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(IrqState {
                framer: LineFramer::new(),
                pending: None,
                drainer: TxDrainer::new(),
            })),
            line_ready: AtomicBool::new(false),
        }
    }

    /// Feed one received byte (receive-interrupt side)
    ///
    /// When the byte completes a line it is published for the foreground
    /// and the ready flag is set. An unconsumed previous line is replaced.
    pub fn on_rx_byte(&self, byte: u8) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            if let Some(line) = state.framer.push(byte) {
                state.pending = Some(line);
                self.line_ready.store(true, Ordering::Release);
            }
        });
    }

    /// Advance the TX drain by one step (transmit-complete interrupt side)
    ///
    /// Returns the next byte the handler should transmit, or `None` when
    /// the drain is finished.
    pub fn on_tx_complete(&self) -> Option<u8> {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).drainer.next_byte())
    }

    /// Non-blocking foreground poll of the ready flag
    pub fn line_ready(&self) -> bool {
        self.line_ready.load(Ordering::Acquire)
    }

    /// Take the completed line, clearing the ready flag
    ///
    /// Copies the line into `buf` (truncating if `buf` is smaller) and
    /// returns the number of bytes copied, or `None` if no line is ready.
    pub fn take_line(&self, buf: &mut [u8]) -> Option<usize> {
        if !self.line_ready() {
            return None;
        }
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            let line = state.pending.take()?;
            self.line_ready.store(false, Ordering::Release);
            let len = line.len().min(buf.len());
            buf[..len].copy_from_slice(&line[..len]);
            Some(len)
        })
    }

    /// Drop a completed line without reading it, clearing the ready flag
    pub fn discard_line(&self) {
        critical_section::with(|cs| {
            self.state.borrow_ref_mut(cs).pending = None;
            self.line_ready.store(false, Ordering::Release);
        });
    }

    /// Queue a payload for interrupt-driven transmission
    ///
    /// On success the drain is armed but nothing is in flight yet; the
    /// caller must pend one transmit-complete interrupt to bootstrap it
    /// (see [`UartIrq::pend_tx_interrupt`]). Fails with
    /// [`DrainError::Busy`] while a previous payload is still draining.
    pub fn queue(&self, payload: &[u8]) -> Result<(), DrainError> {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).drainer.load(payload))
    }
}

/// Foreground handle pairing an [`IrqTransport`] with its peripheral
///
/// Covers the prime step so callers cannot queue a payload and forget to
/// kick the drain.
pub struct IrqConsole<'a, U, const N: usize = DEFAULT_LINE_CAPACITY> {
    uart: U,
    transport: &'a IrqTransport<N>,
}

impl<'a, U: UartIrq, const N: usize> IrqConsole<'a, U, N> {
    /// Wrap a peripheral and its transport, enabling RX and TX interrupts
    pub fn new(mut uart: U, transport: &'a IrqTransport<N>) -> Self {
        uart.enable_rx_interrupt();
        uart.enable_tx_interrupt();
        Self { uart, transport }
    }

    /// Queue raw bytes and prime the drain
    pub fn send(&mut self, payload: &[u8]) -> Result<(), DrainError> {
        self.transport.queue(payload)?;
        self.uart.pend_tx_interrupt();
        Ok(())
    }

    /// Queue a string followed by CR + LF and prime the drain
    ///
    /// The terminated payload must fit the TX buffer.
    pub fn send_line(&mut self, text: &str) -> Result<(), DrainError> {
        let mut payload: heapless::Vec<u8, N> = heapless::Vec::new();
        payload
            .extend_from_slice(text.as_bytes())
            .map_err(|_| DrainError::PayloadTooLarge)?;
        payload
            .extend_from_slice(&[term::CR, term::LF])
            .map_err(|_| DrainError::PayloadTooLarge)?;
        self.send(&payload)
    }

    /// Non-blocking poll for a completed incoming line
    pub fn poll_line(&mut self, buf: &mut [u8]) -> Option<usize> {
        self.transport.take_line(buf)
    }

    /// True when a completed line is waiting
    pub fn line_ready(&self) -> bool {
        self.transport.line_ready()
    }

    /// Give the peripheral back
    pub fn release(self) -> U {
        self.uart
    }
}
