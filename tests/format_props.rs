//! Property-based tests for the formatting cores.
//!
//! The round-trip law: formatting any value in any radix, then re-parsing
//! the emitted text (sign + prefix + digits) in that base, yields the
//! original value. Decimal output must agree with the standard library's
//! rendering digit for digit.

use proptest::prelude::*;
use stackfmt::{
    Buf64, Buf128, Radix, buffer, format_decimal, format_int, write_i8_decimal, write_i64_decimal,
    write_u64_decimal,
};

const RADICES: [(Radix, u32); 4] = [
    (Radix::Binary, 2),
    (Radix::Octal, 8),
    (Radix::LowerHex, 16),
    (Radix::UpperHex, 16),
];

/// Re-parse formatter output: optional `-`, 2-byte prefix, digits.
fn reparse(text: &str, base: u32) -> i128 {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = i128::from_str_radix(&rest[2..], base).expect("digits parse in their base");
    if negative { -magnitude } else { magnitude }
}

proptest! {
    #[test]
    fn radix_round_trip_i64(v in any::<i64>()) {
        let mut buf: Buf128 = [0; 128];
        for (radix, base) in RADICES {
            let n = format_int(&mut buf, v, radix);
            prop_assert!(n > 0);
            prop_assert_eq!(reparse(buffer::tail_str(&buf, n), base), v as i128);
        }
    }

    #[test]
    fn radix_round_trip_u64(v in any::<u64>()) {
        let mut buf: Buf128 = [0; 128];
        for (radix, base) in RADICES {
            let n = format_int(&mut buf, v, radix);
            prop_assert_eq!(reparse(buffer::tail_str(&buf, n), base), v as i128);
        }
    }

    #[test]
    fn narrow_widths_agree_with_i64(v in any::<i8>()) {
        let mut narrow: Buf128 = [0; 128];
        let mut wide: Buf128 = [0; 128];
        for (radix, _) in RADICES {
            let n = format_int(&mut narrow, v, radix);
            let m = format_int(&mut wide, v as i64, radix);
            prop_assert_eq!(buffer::tail(&narrow, n), buffer::tail(&wide, m));
        }
    }

    #[test]
    fn decimal_matches_std_i64(v in any::<i64>()) {
        let mut buf: Buf64 = [0; 64];
        let n = write_i64_decimal(&mut buf, v);
        prop_assert_eq!(buffer::tail_str(&buf, n), v.to_string());
    }

    #[test]
    fn decimal_matches_std_u64(v in any::<u64>()) {
        let mut buf: Buf64 = [0; 64];
        let n = write_u64_decimal(&mut buf, v);
        prop_assert_eq!(buffer::tail_str(&buf, n), v.to_string());
    }

    #[test]
    fn decimal_magnitude_entry_matches_std(magnitude in any::<u64>(), is_negative: bool) {
        let mut buf: Buf64 = [0; 64];
        let n = format_decimal(&mut buf, magnitude, is_negative);
        let sign = if is_negative && magnitude > 0 { "-" } else { "" };
        // Negative zero is not representable; the sign flag still prints.
        if magnitude == 0 && is_negative {
            prop_assert_eq!(buffer::tail_str(&buf, n), "-0");
        } else {
            prop_assert_eq!(buffer::tail_str(&buf, n), format!("{sign}{magnitude}"));
        }
    }

    #[test]
    fn narrow_decimal_agrees_with_std(v in any::<i8>()) {
        let mut buf: Buf64 = [0; 64];
        let n = write_i8_decimal(&mut buf, v);
        prop_assert_eq!(buffer::tail_str(&buf, n), v.to_string());
    }
}
