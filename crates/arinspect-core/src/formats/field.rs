//! Decoding of fixed-width ASCII header fields.
//!
//! Header fields are space padded and carry no terminator, so every decoder
//! here works on a bounded slice and never looks past its end.

use crate::InspectionError;
use crate::Result;

/// Width of the member name field in bytes.
pub const NAME_LEN: usize = 16;

/// Decodes a decimal field such as `mtime` or `size`.
///
/// Leading spaces are skipped and decoding stops at the first non-digit
/// byte. A field without any digits decodes to zero.
///
/// # Errors
///
/// Returns `InvalidHeader` if the value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use arinspect_core::formats::field::decode_decimal;
///
/// assert_eq!(decode_decimal("size", b"1234      ").unwrap(), 1234);
/// assert_eq!(decode_decimal("uid", b"      ").unwrap(), 0);
/// ```
pub fn decode_decimal(field: &str, bytes: &[u8]) -> Result<u64> {
    decode_number(field, bytes, 10)
}

/// Decodes an octal field such as `mode`.
///
/// # Errors
///
/// Returns `InvalidHeader` if the value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use arinspect_core::formats::field::decode_octal;
///
/// assert_eq!(decode_octal("mode", b"100644  ").unwrap(), 0o100_644);
/// ```
pub fn decode_octal(field: &str, bytes: &[u8]) -> Result<u64> {
    decode_number(field, bytes, 8)
}

/// Narrows a decoded value to `u32`.
///
/// # Errors
///
/// Returns `InvalidHeader` if the value is larger than `u32::MAX`.
pub fn narrow_u32(field: &str, value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        InspectionError::InvalidHeader(format!("{field} value {value} does not fit in 32 bits"))
    })
}

fn decode_number(field: &str, bytes: &[u8], radix: u32) -> Result<u64> {
    let digits = bytes
        .iter()
        .skip_while(|&&b| b == b' ')
        .map_while(|&b| char::from(b).to_digit(radix));

    let mut value: u64 = 0;
    for digit in digits {
        value = value
            .checked_mul(u64::from(radix))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| {
                InspectionError::InvalidHeader(format!(
                    "{field} field overflows ({:?})",
                    String::from_utf8_lossy(bytes)
                ))
            })?;
    }
    Ok(value)
}

/// Converts a raw name field into a CSV-safe display string.
///
/// At most [`NAME_LEN`] bytes are considered. The name ends at the first
/// NUL or non-printable byte, trailing spaces are dropped, and commas are
/// replaced with `?`.
///
/// # Examples
///
/// ```
/// use arinspect_core::formats::field::sanitize_name;
///
/// assert_eq!(sanitize_name(b"a,b.o/          "), "a?b.o/");
/// assert_eq!(sanitize_name(b"ok\x07junk       "), "ok");
/// ```
#[must_use]
pub fn sanitize_name(bytes: &[u8]) -> String {
    let field = &bytes[..bytes.len().min(NAME_LEN)];
    let printable = field
        .iter()
        .position(|&b| !is_printable(b))
        .map_or(field, |end| &field[..end]);

    let mut name: String = printable
        .iter()
        .map(|&b| if b == b',' { '?' } else { char::from(b) })
        .collect();
    name.truncate(name.trim_end_matches(' ').len());
    name
}

const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_decimal_padded() {
        assert_eq!(decode_decimal("mtime", b"1700000000  ").unwrap(), 1_700_000_000);
        assert_eq!(decode_decimal("size", b"8         ").unwrap(), 8);
    }

    #[test]
    fn test_decode_decimal_leading_spaces() {
        assert_eq!(decode_decimal("uid", b"  42  ").unwrap(), 42);
    }

    #[test]
    fn test_decode_stops_at_first_non_digit() {
        assert_eq!(decode_decimal("size", b"12x4      ").unwrap(), 12);
        assert_eq!(decode_decimal("size", b"12\x004      ").unwrap(), 12);
    }

    #[test]
    fn test_decode_without_digits_is_zero() {
        assert_eq!(decode_decimal("gid", b"      ").unwrap(), 0);
        assert_eq!(decode_decimal("gid", b"abc   ").unwrap(), 0);
        assert_eq!(decode_decimal("gid", b"").unwrap(), 0);
    }

    #[test]
    fn test_decode_full_width_without_terminator() {
        assert_eq!(decode_decimal("size", b"9999999999").unwrap(), 9_999_999_999);
    }

    #[test]
    fn test_decode_octal_mode() {
        assert_eq!(decode_octal("mode", b"0755    ").unwrap(), 493);
        assert_eq!(decode_octal("mode", b"100644  ").unwrap(), 0o100_644);
    }

    #[test]
    fn test_decode_octal_rejects_eight_and_nine() {
        assert_eq!(decode_octal("mode", b"6489    ").unwrap(), 0o64);
    }

    #[test]
    fn test_decode_overflow_is_error() {
        let result = decode_decimal("size", b"99999999999999999999999");
        assert!(matches!(result, Err(InspectionError::InvalidHeader(_))));
    }

    #[test]
    fn test_narrow_u32() {
        assert_eq!(narrow_u32("uid", 1000).unwrap(), 1000);
        assert!(narrow_u32("uid", u64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_name(b"hello.o/        "), "hello.o/");
    }

    #[test]
    fn test_sanitize_replaces_commas() {
        assert_eq!(sanitize_name(b",,x             "), "??x");
    }

    #[test]
    fn test_sanitize_truncates_at_non_printable() {
        assert_eq!(sanitize_name(b"abc\x01def        "), "abc");
        assert_eq!(sanitize_name(b"abc\xffdef        "), "abc");
        assert_eq!(sanitize_name(b"\x00bcdefghijklmnop"), "");
    }

    #[test]
    fn test_sanitize_comma_and_truncation_together() {
        assert_eq!(sanitize_name(b"a,b\nc,d         "), "a?b");
    }

    #[test]
    fn test_sanitize_bounded_to_field_width() {
        assert_eq!(
            sanitize_name(b"0123456789abcdefOVERFLOW"),
            "0123456789abcdef"
        );
    }
}
