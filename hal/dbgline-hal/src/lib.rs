//! dbgline Hardware Abstraction Layer
//!
//! This crate defines the UART peripheral traits the dbgline transport is
//! written against. Chip-specific HALs (EFM32, STM32, test doubles)
//! implement these traits; the transport itself never touches registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (bring-up code, firmware)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dbgline (console + irq transport)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dbgline-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Chip HAL (register-level UART driver)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

// Re-export key traits at crate root for convenience
pub use uart::{DataBits, DebugUart, Parity, StopBits, UartConfig, UartIrq};
