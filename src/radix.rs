//! Generic radix formatter: binary, octal and hex text for any integer width.
//!
//! One backward digit-accumulation loop serves all eight width/signedness
//! combinations (plus the native-width aliases) and all four bases. Digits
//! are produced least-significant-first into the tail of a [`Buf128`], the
//! 2-byte base prefix goes immediately before the first digit, and a `-`
//! sign goes before the prefix for negative values.
//!
//! Negative values are never negated. The digit of a negative value is
//! `0 - (value % base)`, which stays in range for every value including the
//! most negative one of each signed type, where `-value` would overflow.

use crate::buffer::{Buf128, RADIX_CAPACITY};

/// Numeral system descriptor: base, prefix and digit encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    LowerHex,
    UpperHex,
}

impl Radix {
    #[inline]
    pub const fn base(self) -> u8 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::LowerHex | Self::UpperHex => 16,
        }
    }

    /// The 2-byte prefix written before the digits.
    ///
    /// Octal is `"0b"`, not `"0o"`. A long-standing transcription slip in
    /// the format, kept as-is: the emitted text is load-bearing for
    /// downstream parsers.
    #[inline]
    pub const fn prefix(self) -> &'static [u8; 2] {
        match self {
            Self::Binary => b"0b",
            Self::Octal => b"0b",
            Self::LowerHex => b"0x",
            Self::UpperHex => b"0X",
        }
    }

    /// Encode a single digit value as its ASCII character.
    ///
    /// Callers guarantee `x < self.base()`.
    #[inline]
    pub const fn digit(self, x: u8) -> u8 {
        debug_assert!(x < self.base());
        match self {
            Self::Binary | Self::Octal => b'0' + x,
            Self::LowerHex => {
                if x < 10 {
                    b'0' + x
                } else {
                    b'a' + (x - 10)
                }
            }
            Self::UpperHex => {
                if x < 10 {
                    b'0' + x
                } else {
                    b'A' + (x - 10)
                }
            }
        }
    }
}

/// Integer widths the radix formatter accepts.
///
/// Exposes exactly what the digit loop needs; implemented by macro for the
/// eight fixed widths plus `isize`/`usize`.
pub trait FormatInt: Copy {
    /// `self >= 0`. Always true for unsigned types.
    fn not_negative(self) -> bool;

    /// Magnitude of the current least-significant digit, `0..base`.
    fn place_value(self, base: u8, not_negative: bool) -> u8;

    /// Truncating division by `base`.
    fn div_base(self, base: u8) -> Self;

    fn is_zero(self) -> bool;
}

macro_rules! impl_format_int_signed {
    ($($ty:ty),*) => {
        $(
            impl FormatInt for $ty {
                #[inline]
                fn not_negative(self) -> bool {
                    self >= 0
                }

                #[inline]
                fn place_value(self, base: u8, not_negative: bool) -> u8 {
                    let rem = self % base as $ty;
                    if not_negative { rem as u8 } else { (0 - rem) as u8 }
                }

                #[inline]
                fn div_base(self, base: u8) -> Self {
                    self / base as $ty
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

macro_rules! impl_format_int_unsigned {
    ($($ty:ty),*) => {
        $(
            impl FormatInt for $ty {
                #[inline]
                fn not_negative(self) -> bool {
                    true
                }

                #[inline]
                fn place_value(self, base: u8, _not_negative: bool) -> u8 {
                    (self % base as $ty) as u8
                }

                #[inline]
                fn div_base(self, base: u8) -> Self {
                    self / base as $ty
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_format_int_signed!(i8, i16, i32, i64, isize);
impl_format_int_unsigned!(u8, u16, u32, u64, usize);

/// Format `value` in `radix` into the tail of `buf`.
///
/// Returns the byte count of the formatted text (sign + prefix + digits),
/// excluding the NUL terminator written to the final slot. The text occupies
/// `buf[RADIX_CAPACITY - 1 - n..RADIX_CAPACITY - 1]`; read it back with
/// [`crate::buffer::tail`]. A value of zero still emits one `'0'` digit.
pub fn format_int<T: FormatInt>(buf: &mut Buf128, value: T, radix: Radix) -> usize {
    let mut cursor = RADIX_CAPACITY - 1;
    buf[cursor] = 0;

    let not_negative = value.not_negative();
    let base = radix.base();
    let mut value = value;

    // Accumulate digits from the least significant place upward until the
    // running value is exhausted.
    loop {
        let place = value.place_value(base, not_negative);
        value = value.div_base(base);
        cursor -= 1;
        buf[cursor] = radix.digit(place);
        if value.is_zero() {
            break;
        }
    }

    let prefix = radix.prefix();
    cursor -= 2;
    buf[cursor] = prefix[0];
    buf[cursor + 1] = prefix[1];

    if !not_negative {
        cursor -= 1;
        buf[cursor] = b'-';
    }

    RADIX_CAPACITY - 1 - cursor
}
