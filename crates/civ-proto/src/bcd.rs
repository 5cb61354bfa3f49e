//! Packed-BCD codecs for CI-V payload fields
//!
//! CI-V numeric payloads are packed BCD, two decimal digits per byte, but the
//! byte order depends on the field. Level fields (power, keyer speed, ref
//! level) put the most significant pair first; frequency and RIT fields put
//! the least significant pair first. Both are provided here.
//!
//! Encoding silently truncates to the requested digit count, matching what
//! the radios do on the wire: a value wider than the field keeps only its low
//! digits. Callers that care must range-check before encoding.

use tracing::debug;

use crate::error::ParseError;

/// Split a value into `digits` decimal digits, least significant first.
///
/// High-order digits beyond `digits` are dropped.
fn split_digits(mut value: u64, digits: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits);
    for _ in 0..digits {
        out.push((value % 10) as u8);
        value /= 10;
    }
    if value != 0 {
        debug!(remainder = value, digits, "value truncated to BCD field width");
    }
    out
}

/// Encode into packed BCD with the most significant digit pair first.
///
/// Used for level-style fields such as output power (cmd `14 0A`) and keyer
/// speed (cmd `14 0C`). `digits` must be even.
pub fn encode_be(value: u64, digits: usize) -> Vec<u8> {
    debug_assert!(digits % 2 == 0, "BCD fields hold two digits per byte");
    let ds = split_digits(value, digits);
    let mut out = Vec::with_capacity(digits / 2);
    let mut i = digits;
    while i >= 2 {
        out.push((ds[i - 1] << 4) | ds[i - 2]);
        i -= 2;
    }
    out
}

/// Encode into packed BCD with the least significant digit pair first.
///
/// Used for frequency fields (10 digits covering 1 Hz through 1 GHz) and the
/// RIT offset magnitude (4 digits). `digits` must be even.
pub fn encode_le(value: u64, digits: usize) -> Vec<u8> {
    debug_assert!(digits % 2 == 0, "BCD fields hold two digits per byte");
    let ds = split_digits(value, digits);
    let mut out = Vec::with_capacity(digits / 2);
    let mut i = 0;
    while i < digits {
        out.push((ds[i + 1] << 4) | ds[i]);
        i += 2;
    }
    out
}

/// Decode packed BCD with the most significant digit pair first.
pub fn decode_be(bytes: &[u8]) -> Result<u64, ParseError> {
    let mut value: u64 = 0;
    for &byte in bytes {
        let high = byte >> 4;
        let low = byte & 0x0F;
        if high > 9 || low > 9 {
            return Err(ParseError::InvalidBcd(byte));
        }
        value = value * 100 + u64::from(high) * 10 + u64::from(low);
    }
    Ok(value)
}

/// Decode packed BCD with the least significant digit pair first.
pub fn decode_le(bytes: &[u8]) -> Result<u64, ParseError> {
    let mut value: u64 = 0;
    for &byte in bytes.iter().rev() {
        let high = byte >> 4;
        let low = byte & 0x0F;
        if high > 9 || low > 9 {
            return Err(ParseError::InvalidBcd(byte));
        }
        value = value * 100 + u64::from(high) * 10 + u64::from(low);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_be_level_field() {
        // Power level 255 in a four digit field: 02 55
        assert_eq!(encode_be(255, 4), vec![0x02, 0x55]);
        assert_eq!(encode_be(59, 4), vec![0x00, 0x59]);
        assert_eq!(encode_be(0, 4), vec![0x00, 0x00]);
    }

    #[test]
    fn test_encode_be_two_digit_field() {
        // Ref level magnitude is a single BCD byte
        assert_eq!(encode_be(11, 2), vec![0x11]);
        assert_eq!(encode_be(6, 2), vec![0x06]);
    }

    #[test]
    fn test_encode_le_rit_magnitude() {
        // 20 Hz RIT offset: low pair first
        assert_eq!(encode_le(20, 4), vec![0x20, 0x00]);
        assert_eq!(encode_le(1234, 4), vec![0x34, 0x12]);
        assert_eq!(encode_le(9999, 4), vec![0x99, 0x99]);
    }

    #[test]
    fn test_encode_le_frequency_field() {
        // 14.195 MHz as a ten digit frequency field
        assert_eq!(
            encode_le(14_195_000, 10),
            vec![0x00, 0x50, 0x19, 0x14, 0x00]
        );
        // 7.000 MHz
        assert_eq!(encode_le(7_000_000, 10), vec![0x00, 0x00, 0x00, 0x07, 0x00]);
    }

    #[test]
    fn test_encode_truncates_high_digits() {
        // A five digit value in a four digit field keeps the low four digits
        assert_eq!(encode_le(12345, 4), vec![0x45, 0x23]);
        assert_eq!(encode_be(10255, 4), vec![0x02, 0x55]);
    }

    #[test]
    fn test_decode_be() {
        assert_eq!(decode_be(&[0x02, 0x55]), Ok(255));
        assert_eq!(decode_be(&[0x00, 0x00]), Ok(0));
    }

    #[test]
    fn test_decode_le() {
        assert_eq!(decode_le(&[0x00, 0x50, 0x19, 0x14, 0x00]), Ok(14_195_000));
        assert_eq!(decode_le(&[0x20, 0x00]), Ok(20));
    }

    #[test]
    fn test_decode_rejects_non_decimal_nibble() {
        assert_eq!(decode_le(&[0xA0]), Err(ParseError::InvalidBcd(0xA0)));
        assert_eq!(decode_be(&[0x1F]), Err(ParseError::InvalidBcd(0x1F)));
    }

    proptest! {
        #[test]
        fn prop_be_round_trip(value in 0u64..10_000) {
            let encoded = encode_be(value, 4);
            prop_assert_eq!(decode_be(&encoded), Ok(value));
        }

        #[test]
        fn prop_le_round_trip(value in 0u64..10_000_000_000) {
            let encoded = encode_le(value, 10);
            prop_assert_eq!(decode_le(&encoded), Ok(value));
        }

        #[test]
        fn prop_truncation_keeps_low_digits(value in 0u64..100_000_000) {
            let encoded = encode_le(value, 4);
            prop_assert_eq!(decode_le(&encoded), Ok(value % 10_000));
        }
    }
}
