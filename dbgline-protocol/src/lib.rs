//! Line-framing protocol for the dbgline UART debug transport
//!
//! This crate contains the board-agnostic, host-testable half of the
//! transport:
//!
//! - Numeric codec (u32 ⇄ decimal/hex ASCII)
//! - RX line framer (raw byte stream → terminated lines)
//! - TX drainer (queued payload → one byte per transmit-complete event)
//! - Wire control-byte constants
//!
//! # Wire format
//!
//! Plain ASCII text. Lines end with carriage-return (`\r`), optionally
//! followed by line-feed (`\n`); form-feed (`\f`) doubles as an alternate
//! terminator and terminal-clear signal, and bell (`\a`) is an attention
//! signal. No binary framing, checksums, or escaping.

#![no_std]
#![deny(unsafe_code)]

pub mod codec;
pub mod drain;
pub mod framer;
pub mod term;

pub use codec::{
    decode_decimal, decode_hex, encode_decimal, encode_hex, encode_hex_width, DecodeError,
    HexWidth,
};
pub use drain::{DrainError, TxDrainer};
pub use framer::{Line, LineFramer, DEFAULT_LINE_CAPACITY};
