//! Fixed-capacity byte buffers and result readback helpers.
//!
//! The buffer "pool" is purely a naming convention: each alias is a plain
//! caller-owned `[u8; N]` with no length field and no ownership semantics.
//! Formatters communicate the output length out-of-band as a return value,
//! and the formatted text always sits at the tail of the buffer, immediately
//! before a NUL terminator in the final slot.

/// Capacity contract for the radix formatter ([`crate::format_int`]).
///
/// Worst case is `i64::MIN` in binary: 64 digits + 2-byte prefix + sign +
/// NUL = 68 bytes, comfortably inside 128.
pub const RADIX_CAPACITY: usize = 128;

/// Capacity contract for the decimal formatter ([`crate::format_decimal`]).
///
/// Worst case is `u64::MAX`: 20 digits + sign + NUL = 22 bytes.
pub const DECIMAL_CAPACITY: usize = 64;

pub type Buf32 = [u8; 32];
pub type Buf64 = [u8; DECIMAL_CAPACITY];
pub type Buf128 = [u8; RADIX_CAPACITY];
pub type Buf256 = [u8; 256];
pub type Buf384 = [u8; 384];
pub type Buf512 = [u8; 512];
pub type Buf1024 = [u8; 1024];
pub type Buf2048 = [u8; 2048];
pub type Buf4096 = [u8; 4096];

/// Extract the `len` formatted bytes from the tail of `buf`.
///
/// The returned slice excludes the NUL terminator in the final slot. `len`
/// must be the count returned by the formatting call that filled `buf`.
#[inline]
pub fn tail(buf: &[u8], len: usize) -> &[u8] {
    let end = buf.len() - 1;
    &buf[end - len..end]
}

/// [`tail`], decoded as a `&str`.
///
/// Formatter output is pure ASCII, so decoding cannot fail for buffers
/// filled by this crate; anything else yields `""`.
#[inline]
pub fn tail_str(buf: &[u8], len: usize) -> &str {
    core::str::from_utf8(tail(buf, len)).unwrap_or("")
}
