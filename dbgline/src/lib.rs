//! UART debug console for microcontroller bring-up
//!
//! A small println-over-UART stack in two flavors:
//!
//! - [`Console`] - polled: every byte spins on the peripheral ready flags,
//!   optionally bounded by a spin limit
//! - [`IrqTransport`] / [`IrqConsole`] - interrupt-driven: the foreground
//!   queues whole lines and interrupt handlers move the bytes
//!
//! Line framing and the numeric codec live in `dbgline-protocol`; the
//! peripheral contract lives in `dbgline-hal`. This crate wires both to a
//! concrete UART.

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod irq;
pub mod style;

#[cfg(test)]
pub(crate) mod mock;

pub use console::{Console, ConsoleError};
pub use irq::{IrqConsole, IrqTransport};
pub use style::Color;
