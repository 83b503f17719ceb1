//! Stack-only integer formatting and byte scanning for `no_std` contexts.
//!
//! Every routine in this crate writes into a caller-provided fixed-size byte
//! buffer and returns the number of bytes produced. No heap, no allocator,
//! no error types: output sizes are statically bounded by the integer width
//! and the base, so the contractual buffer capacities
//! ([`RADIX_CAPACITY`] / [`DECIMAL_CAPACITY`]) can never overflow.
//!
//! Formatted text is assembled backwards and lands at the *tail* of the
//! buffer, just before a NUL terminator in the last slot. Use
//! [`buffer::tail`] (or [`buffer::tail_str`]) to read it back:
//!
//! ```
//! use stackfmt::{Buf128, buffer, write_u8_lower_hex};
//!
//! let mut buf: Buf128 = [0; 128];
//! let n = write_u8_lower_hex(&mut buf, 255);
//! assert_eq!(buffer::tail(&buf, n), b"0xff");
//! ```
//!
//! All operations are pure and touch only their own arguments plus read-only
//! `const` tables, so they are safe to call from any number of threads with
//! no synchronization.

#![no_std]

pub mod buffer;
pub mod decimal;
pub mod radix;
pub mod scan;
pub mod writers;

pub use buffer::{
    Buf32, Buf64, Buf128, Buf256, Buf384, Buf512, Buf1024, Buf2048, Buf4096, DECIMAL_CAPACITY,
    RADIX_CAPACITY,
};
pub use decimal::format_decimal;
pub use radix::{FormatInt, Radix, format_int};
pub use scan::{contains_byte, contains_byte_unrolled};
pub use writers::*;
