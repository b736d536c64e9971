//! UART peripheral abstractions
//!
//! Provides traits for a register-level UART that can be implemented by
//! chip-specific HALs. The transmit/receive operations here are deliberately
//! non-blocking register accesses; all waiting policy (spin, spin with a
//! bound, interrupt-driven) lives in the transport layer above.

/// Register-level UART peripheral
///
/// The contract matches a conventional MCU USART: a one-byte transmit
/// holding register guarded by a ready flag, and a one-byte receive
/// register guarded by a data-valid flag.
pub trait DebugUart {
    /// Error type for configuration
    type Error;

    /// Apply baud rate and frame settings
    fn configure(&mut self, config: &UartConfig) -> Result<(), Self::Error>;

    /// Write one byte to the transmit register
    ///
    /// Callers must only invoke this when [`transmit_ready`](Self::transmit_ready)
    /// returns true; the byte is otherwise lost or overwrites a pending one.
    fn transmit(&mut self, byte: u8);

    /// Read one byte from the receive register
    ///
    /// Callers must only invoke this when [`receive_ready`](Self::receive_ready)
    /// returns true.
    fn receive(&mut self) -> u8;

    /// True when the transmit register can accept a byte
    fn transmit_ready(&self) -> bool;

    /// True when a received byte is waiting in the receive register
    fn receive_ready(&self) -> bool;
}

/// Interrupt control for a [`DebugUart`]
///
/// Implemented by peripherals that can deliver receive-data-valid and
/// transmit-complete events to interrupt handlers.
pub trait UartIrq: DebugUart {
    /// Enable the receive-data-valid interrupt
    fn enable_rx_interrupt(&mut self);

    /// Enable the transmit-complete interrupt
    fn enable_tx_interrupt(&mut self);

    /// Software-set the transmit-complete flag
    ///
    /// Used to bootstrap a drain: after queuing the first payload there is
    /// no in-flight byte whose completion would fire the interrupt, so the
    /// flag is pended manually and the handler takes over from there.
    fn pend_tx_interrupt(&mut self);

    /// Clear all pending interrupt flags for this peripheral
    fn clear_irq_flags(&mut self);
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
