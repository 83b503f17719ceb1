//! Flat per-width, per-base entry points over the two formatting cores.
//!
//! Fifty functions, all mechanically generated: each of the ten integer
//! types gets four radix writers over a [`Buf128`] and one decimal writer
//! over a [`Buf64`]. Every one is a thin `#[inline]` shim; the control flow
//! lives entirely in [`format_int`] and [`format_decimal`].

use crate::buffer::{Buf64, Buf128};
use crate::decimal::format_decimal;
use crate::radix::{Radix, format_int};

/// Generate the four radix writers for a given integer type.
macro_rules! impl_radix_writers {
    ($ty:ty, $suffix:ident) => {
        paste::paste! {
            #[doc = concat!("Format a `", stringify!($ty), "` as binary (`0b` prefix) into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            #[inline]
            pub fn [<write_ $suffix _binary>](buf: &mut Buf128, value: $ty) -> usize {
                format_int(buf, value, Radix::Binary)
            }

            #[doc = concat!("Format a `", stringify!($ty), "` as octal into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            /// Note the historical `0b` prefix ([`Radix::prefix`]).
            #[inline]
            pub fn [<write_ $suffix _octal>](buf: &mut Buf128, value: $ty) -> usize {
                format_int(buf, value, Radix::Octal)
            }

            #[doc = concat!("Format a `", stringify!($ty), "` as lowercase hex (`0x` prefix) into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            #[inline]
            pub fn [<write_ $suffix _lower_hex>](buf: &mut Buf128, value: $ty) -> usize {
                format_int(buf, value, Radix::LowerHex)
            }

            #[doc = concat!("Format a `", stringify!($ty), "` as uppercase hex (`0X` prefix) into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            #[inline]
            pub fn [<write_ $suffix _upper_hex>](buf: &mut Buf128, value: $ty) -> usize {
                format_int(buf, value, Radix::UpperHex)
            }
        }
    };
}

/// Generate all five writers for a signed integer type.
///
/// The decimal writer derives the sign flag and magnitude here, with
/// `unsigned_abs` so the most negative value needs no in-type negation.
macro_rules! impl_signed_writers {
    ($ty:ty, $suffix:ident) => {
        impl_radix_writers!($ty, $suffix);

        paste::paste! {
            #[doc = concat!("Format a `", stringify!($ty), "` as decimal into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            #[inline]
            pub fn [<write_ $suffix _decimal>](buf: &mut Buf64, value: $ty) -> usize {
                format_decimal(buf, value.unsigned_abs() as u64, value < 0)
            }
        }
    };
}

/// Generate all five writers for an unsigned integer type.
macro_rules! impl_unsigned_writers {
    ($ty:ty, $suffix:ident) => {
        impl_radix_writers!($ty, $suffix);

        paste::paste! {
            #[doc = concat!("Format a `", stringify!($ty), "` as decimal into the tail of `buf`.")]
            ///
            /// Returns the byte count written, excluding the NUL terminator.
            #[inline]
            pub fn [<write_ $suffix _decimal>](buf: &mut Buf64, value: $ty) -> usize {
                format_decimal(buf, value as u64, false)
            }
        }
    };
}

impl_signed_writers!(i8, i8);
impl_signed_writers!(i16, i16);
impl_signed_writers!(i32, i32);
impl_signed_writers!(i64, i64);
impl_signed_writers!(isize, isize);

impl_unsigned_writers!(u8, u8);
impl_unsigned_writers!(u16, u16);
impl_unsigned_writers!(u32, u32);
impl_unsigned_writers!(u64, u64);
impl_unsigned_writers!(usize, usize);
