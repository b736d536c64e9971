//! Numeric codec: u32 ⇄ decimal/hex ASCII
//!
//! Pure conversion functions with no shared state, safe to call from any
//! context. Encoding is infallible; decoding reports malformed digits and
//! 32-bit overflow instead of wrapping or producing a sentinel value.

use heapless::String;

use crate::term::NUL;

/// Maximum encoded length: 10 decimal digits, or 8 hex digits plus one
/// group separator.
pub const MAX_ENCODED_LEN: usize = 10;

/// Hex rendering width
///
/// The transport historically emitted 4 digits for values that fit in 16
/// bits and 8 digits otherwise. That width-variant behavior is kept as the
/// [`Natural`](HexWidth::Natural) choice; callers that need a constant
/// output length pick [`Wide`](HexWidth::Wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexWidth {
    /// 4 digits when the value fits in 16 bits, 8 otherwise
    Natural,
    /// Always 8 digits
    Wide,
}

/// Errors from decoding numeric text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// No digits before the terminator
    Empty,
    /// A byte outside the accepted digit set
    InvalidDigit {
        /// Offset of the offending byte within the input
        position: usize,
        /// The offending byte
        byte: u8,
    },
    /// The value does not fit in 32 bits
    Overflow,
}

/// Encode a u32 as its shortest decimal representation
///
/// No leading zeros except the single digit `"0"`.
pub fn encode_decimal(value: u32) -> String<MAX_ENCODED_LEN> {
    let mut out = String::new();

    if value == 0 {
        // push cannot fail: capacity is 10
        let _ = out.push('0');
        return out;
    }

    // Peel off digits least-significant first, then reverse
    let mut digits = [0u8; MAX_ENCODED_LEN];
    let mut len = 0;
    let mut rest = value;
    while rest != 0 {
        digits[len] = b'0' + (rest % 10) as u8;
        len += 1;
        rest /= 10;
    }

    for i in (0..len).rev() {
        let _ = out.push(digits[i] as char);
    }
    out
}

/// Encode a u32 as uppercase hex with the historical width-variant rule
///
/// Equivalent to [`encode_hex_width`] with [`HexWidth::Natural`]: 4 digits
/// for values up to `0xFFFF`, 8 digits above. When `grouped` is true an
/// 8-digit render gets one space between its 4-digit halves; a 4-digit
/// render is never grouped. Callers must not assume a constant length.
pub fn encode_hex(value: u32, grouped: bool) -> String<MAX_ENCODED_LEN> {
    encode_hex_width(value, HexWidth::Natural, grouped)
}

/// Encode a u32 as uppercase hex with an explicit width choice
pub fn encode_hex_width(value: u32, width: HexWidth, grouped: bool) -> String<MAX_ENCODED_LEN> {
    let nibbles = match width {
        HexWidth::Natural if value <= 0xFFFF => 4,
        _ => 8,
    };

    let mut out = String::new();
    for i in (0..nibbles).rev() {
        let digit = ((value >> (i * 4)) & 0xF) as u8;
        let _ = out.push(hex_char(digit));
        if grouped && nibbles == 8 && i == 4 {
            let _ = out.push(' ');
        }
    }
    out
}

fn hex_char(nibble: u8) -> char {
    if nibble <= 9 {
        (b'0' + nibble) as char
    } else {
        (b'A' + nibble - 10) as char
    }
}

/// Decode ASCII decimal text into a u32
///
/// Accepts `'0'..='9'` up to a NUL terminator or the end of the slice.
/// Overflow detection is exact: `4294967295` decodes, `4294967296` is
/// [`DecodeError::Overflow`].
pub fn decode_decimal(text: &[u8]) -> Result<u32, DecodeError> {
    let mut value: u32 = 0;
    let mut digits = 0;

    for (position, &byte) in text.iter().enumerate() {
        if byte == NUL {
            break;
        }
        if !byte.is_ascii_digit() {
            return Err(DecodeError::InvalidDigit { position, byte });
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as u32))
            .ok_or(DecodeError::Overflow)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(DecodeError::Empty);
    }
    Ok(value)
}

/// Decode ASCII hex text into a u32
///
/// Accepts `'0'..='9'`, `'a'..='f'`, `'A'..='F'` up to a NUL terminator or
/// the end of the slice. Group spaces (as produced by [`encode_hex`]) are
/// skipped; no `0x` prefix is accepted.
pub fn decode_hex(text: &[u8]) -> Result<u32, DecodeError> {
    let mut value: u32 = 0;
    let mut digits = 0;

    for (position, &byte) in text.iter().enumerate() {
        if byte == NUL {
            break;
        }
        if byte == b' ' {
            continue;
        }
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(DecodeError::InvalidDigit { position, byte }),
        };
        // A set high nibble would be shifted out: exact overflow check
        if value & 0xF000_0000 != 0 {
            return Err(DecodeError::Overflow);
        }
        value = (value << 4) | nibble as u32;
        digits += 1;
    }

    if digits == 0 {
        return Err(DecodeError::Empty);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_decimal_zero() {
        assert_eq!(encode_decimal(0).as_str(), "0");
    }

    #[test]
    fn test_encode_decimal_basic() {
        assert_eq!(encode_decimal(7).as_str(), "7");
        assert_eq!(encode_decimal(42).as_str(), "42");
        assert_eq!(encode_decimal(1000).as_str(), "1000");
        assert_eq!(encode_decimal(u32::MAX).as_str(), "4294967295");
    }

    #[test]
    fn test_encode_hex_width_rule() {
        assert_eq!(encode_hex(0, false).as_str(), "0000");
        assert_eq!(encode_hex(0x1234, false).as_str(), "1234");
        assert_eq!(encode_hex(0xFFFF, false).as_str(), "FFFF");
        assert_eq!(encode_hex(0x10000, false).as_str(), "00010000");
        assert_eq!(encode_hex(0x12345678, false).as_str(), "12345678");
    }

    #[test]
    fn test_encode_hex_grouping() {
        assert_eq!(encode_hex(0x12345678, true).as_str(), "1234 5678");
        // A 4-digit render is never grouped
        assert_eq!(encode_hex(0x1234, true).as_str(), "1234");
    }

    #[test]
    fn test_encode_hex_wide() {
        assert_eq!(
            encode_hex_width(0x1234, HexWidth::Wide, false).as_str(),
            "00001234"
        );
        assert_eq!(
            encode_hex_width(0xAB, HexWidth::Wide, true).as_str(),
            "0000 00AB"
        );
    }

    #[test]
    fn test_decode_decimal_basic() {
        assert_eq!(decode_decimal(b"0"), Ok(0));
        assert_eq!(decode_decimal(b"42"), Ok(42));
        assert_eq!(decode_decimal(b"4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_decode_decimal_stops_at_nul() {
        assert_eq!(decode_decimal(b"42\0junk"), Ok(42));
    }

    #[test]
    fn test_decode_decimal_overflow_is_reported() {
        // One above u32::MAX must not wrap to 0
        assert_eq!(decode_decimal(b"4294967296"), Err(DecodeError::Overflow));
        assert_eq!(decode_decimal(b"99999999999"), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_decode_decimal_invalid_digit() {
        assert_eq!(
            decode_decimal(b"12x4"),
            Err(DecodeError::InvalidDigit {
                position: 2,
                byte: b'x'
            })
        );
    }

    #[test]
    fn test_decode_decimal_empty() {
        assert_eq!(decode_decimal(b""), Err(DecodeError::Empty));
        assert_eq!(decode_decimal(b"\0"), Err(DecodeError::Empty));
    }

    #[test]
    fn test_decode_hex_basic() {
        assert_eq!(decode_hex(b"0000"), Ok(0));
        assert_eq!(decode_hex(b"1234"), Ok(0x1234));
        assert_eq!(decode_hex(b"dead"), Ok(0xDEAD));
        assert_eq!(decode_hex(b"DeAd"), Ok(0xDEAD));
        assert_eq!(decode_hex(b"FFFFFFFF"), Ok(u32::MAX));
    }

    #[test]
    fn test_decode_hex_group_space() {
        assert_eq!(decode_hex(b"1234 5678"), Ok(0x12345678));
    }

    #[test]
    fn test_decode_hex_overflow() {
        assert_eq!(decode_hex(b"100000000"), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_decode_hex_rejects_prefix() {
        assert_eq!(
            decode_hex(b"0x12"),
            Err(DecodeError::InvalidDigit {
                position: 1,
                byte: b'x'
            })
        );
    }

    proptest! {
        #[test]
        fn prop_decimal_roundtrip(v in any::<u32>()) {
            let text = encode_decimal(v);
            prop_assert_eq!(decode_decimal(text.as_bytes()), Ok(v));
        }

        #[test]
        fn prop_hex_roundtrip(v in any::<u32>(), grouped in any::<bool>()) {
            let text = encode_hex(v, grouped);
            prop_assert_eq!(decode_hex(text.as_bytes()), Ok(v));
        }

        #[test]
        fn prop_hex_wide_roundtrip(v in any::<u32>(), grouped in any::<bool>()) {
            let text = encode_hex_width(v, HexWidth::Wide, grouped);
            prop_assert_eq!(decode_hex(text.as_bytes()), Ok(v));
        }
    }
}
