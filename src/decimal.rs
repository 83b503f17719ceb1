//! Decimal fast path: chunked table-driven formatting of a 64-bit magnitude.
//!
//! Decimal is the overwhelmingly common case, so instead of the generic
//! one-digit-per-division loop it consumes four digits per iteration: split
//! off `magnitude % 10_000`, break that into two 2-digit groups, and copy
//! each group's pre-rendered pair out of a 200-byte lookup table. Sign
//! handling is the caller's problem; this layer takes a magnitude plus a
//! flag so the most negative signed values never need negating here.

use crate::buffer::{Buf64, DECIMAL_CAPACITY};

/// Two-character decimal representation of every value 0..=99.
const DEC_DIGITS_LUT: &[u8; 200] = b"0001020304050607080910111213141516171819\
      2021222324252627282930313233343536373839\
      4041424344454647484950515253545556575859\
      6061626364656667686970717273747576777879\
      8081828384858687888990919293949596979899";

#[inline]
fn copy_pair(buf: &mut Buf64, at: usize, group: usize) {
    let lut = group << 1;
    buf[at] = DEC_DIGITS_LUT[lut];
    buf[at + 1] = DEC_DIGITS_LUT[lut + 1];
}

/// Format `magnitude` as decimal text into the tail of `buf`, with a leading
/// `-` when `is_negative` is set.
///
/// Returns the byte count of the formatted text (sign + digits), excluding
/// the NUL terminator written to the final slot; read it back with
/// [`crate::buffer::tail`]. A magnitude of zero still emits `"0"`.
///
/// Callers with a signed value must derive `is_negative` and the magnitude
/// from it before the call (`unsigned_abs`), since negative zero is not
/// representable by this contract.
pub fn format_decimal(buf: &mut Buf64, magnitude: u64, is_negative: bool) -> usize {
    let mut cursor = DECIMAL_CAPACITY - 1;
    buf[cursor] = 0;

    let mut magnitude = magnitude;
    while magnitude >= 10_000 {
        let rem = (magnitude % 10_000) as usize;
        magnitude /= 10_000;

        cursor -= 4;
        copy_pair(buf, cursor, rem / 100);
        copy_pair(buf, cursor + 2, rem % 100);
    }

    // At most 4 digits remain; drop to native-width math.
    let mut n = magnitude as usize;

    if n >= 100 {
        let group = n % 100;
        n /= 100;
        cursor -= 2;
        copy_pair(buf, cursor, group);
    }

    if n < 10 {
        cursor -= 1;
        buf[cursor] = b'0' + n as u8;
    } else {
        cursor -= 2;
        copy_pair(buf, cursor, n);
    }

    if is_negative {
        cursor -= 1;
        buf[cursor] = b'-';
    }

    DECIMAL_CAPACITY - 1 - cursor
}
