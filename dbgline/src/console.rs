//! Polled debug console
//!
//! Foreground-facing line API over a [`DebugUart`]. Every transmit and
//! receive spins on the peripheral ready flag; an optional spin limit turns
//! the historical spin-forever behavior into a bounded wait with a
//! [`ConsoleError::Timeout`].

use dbgline_hal::{DebugUart, UartConfig};
use dbgline_protocol::codec::{self, DecodeError};
use dbgline_protocol::term;

/// Errors from console operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError<E> {
    /// The peripheral did not become ready within the spin limit
    Timeout,
    /// Received text did not decode as a number
    Decode(DecodeError),
    /// Peripheral configuration error
    Uart(E),
}

/// Polled line console over a UART peripheral
///
/// Owns the peripheral; one console per UART instance. All waiting is a
/// busy-spin on the hardware ready flags, never a scheduler yield.
pub struct Console<U> {
    uart: U,
    spin_limit: Option<u32>,
}

impl<U: DebugUart> Console<U> {
    /// Create a console that spins indefinitely on a not-ready peripheral
    ///
    /// This preserves the classic debug-transport behavior: if the wire is
    /// wedged, so is the caller. Use [`with_spin_limit`](Self::with_spin_limit)
    /// for a bounded wait.
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            spin_limit: None,
        }
    }

    /// Create a console whose busy-spins give up after `limit` polls
    pub fn with_spin_limit(uart: U, limit: u32) -> Self {
        Self {
            uart,
            spin_limit: Some(limit),
        }
    }

    /// Apply baud rate and frame settings to the peripheral
    pub fn configure(&mut self, config: &UartConfig) -> Result<(), ConsoleError<U::Error>> {
        self.uart.configure(config).map_err(ConsoleError::Uart)
    }

    /// Give the peripheral back
    pub fn release(self) -> U {
        self.uart
    }

    /// Write a string, byte by byte
    pub fn write_str(&mut self, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.write_bytes(text.as_bytes())
    }

    /// Write a string followed by CR + LF
    pub fn write_line(&mut self, text: &str) -> Result<(), ConsoleError<U::Error>> {
        self.write_str(text)?;
        self.write_byte(term::CR)?;
        self.write_byte(term::LF)
    }

    /// Write a u32 in decimal
    pub fn write_u32(&mut self, value: u32) -> Result<(), ConsoleError<U::Error>> {
        self.write_str(codec::encode_decimal(value).as_str())
    }

    /// Write a u32 in hex, `0x`-prefixed
    ///
    /// 4 digits for values up to `0xFFFF`, 8 above; `grouped` puts a space
    /// between the halves of an 8-digit render.
    pub fn write_u32_hex(&mut self, value: u32, grouped: bool) -> Result<(), ConsoleError<U::Error>> {
        self.write_str("0x")?;
        self.write_str(codec::encode_hex(value, grouped).as_str())
    }

    /// Write an i32 in decimal, `-`-prefixed when negative
    pub fn write_i32(&mut self, value: i32) -> Result<(), ConsoleError<U::Error>> {
        if value < 0 {
            self.write_byte(b'-')?;
        }
        self.write_u32(value.unsigned_abs())
    }

    /// Write an i32 as the hex of its two's-complement bit pattern
    pub fn write_i32_hex(&mut self, value: i32, grouped: bool) -> Result<(), ConsoleError<U::Error>> {
        self.write_u32_hex(value as u32, grouped)
    }

    /// Sound the terminal bell
    pub fn alert(&mut self) -> Result<(), ConsoleError<U::Error>> {
        self.write_byte(term::BELL)
    }

    /// Clear the terminal with a form feed
    ///
    /// Old content stays reachable by scrolling up, unlike a full ANSI
    /// erase.
    pub fn clear_screen(&mut self) -> Result<(), ConsoleError<U::Error>> {
        self.write_byte(term::FORM_FEED)
    }

    /// Blocking read of exactly one byte
    pub fn read_char(&mut self) -> Result<u8, ConsoleError<U::Error>> {
        self.wait_receive_ready()?;
        Ok(self.uart.receive())
    }

    /// Blocking read of one line into `buf`
    ///
    /// Reads until a carriage return (not stored) or until `buf` is full;
    /// over-long input is silently truncated, matching the RX framer
    /// policy. Returns the number of bytes stored.
    pub fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ConsoleError<U::Error>> {
        let mut len = 0;
        while len < buf.len() {
            let byte = self.read_char()?;
            if byte == term::CR {
                break;
            }
            buf[len] = byte;
            len += 1;
        }
        Ok(len)
    }

    /// Blocking read of a single decimal digit
    pub fn read_u8(&mut self) -> Result<u8, ConsoleError<U::Error>> {
        let byte = self.read_char()?;
        let value = codec::decode_decimal(&[byte]).map_err(ConsoleError::Decode)?;
        Ok(value as u8)
    }

    /// Write raw bytes, byte by byte
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConsoleError<U::Error>> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), ConsoleError<U::Error>> {
        self.wait_transmit_ready()?;
        self.uart.transmit(byte);
        Ok(())
    }

    fn wait_transmit_ready(&mut self) -> Result<(), ConsoleError<U::Error>> {
        let mut spins: u32 = 0;
        while !self.uart.transmit_ready() {
            if let Some(limit) = self.spin_limit {
                spins += 1;
                if spins >= limit {
                    return Err(ConsoleError::Timeout);
                }
            }
            core::hint::spin_loop();
        }
        Ok(())
    }

    fn wait_receive_ready(&mut self) -> Result<(), ConsoleError<U::Error>> {
        let mut spins: u32 = 0;
        while !self.uart.receive_ready() {
            if let Some(limit) = self.spin_limit {
                spins += 1;
                if spins >= limit {
                    return Err(ConsoleError::Timeout);
                }
            }
            core::hint::spin_loop();
        }
        Ok(())
    }
}
