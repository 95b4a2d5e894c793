//! Arbitrary-precision signed integers on a copy-on-write limb buffer.
//!
//! A [`BigInt`] is a sign flag plus a normalized little-endian magnitude of
//! 32-bit [`Digit`]s. The magnitude lives in a [`LimbBuffer`], which keeps up
//! to [`INLINE_CAPACITY`] digits inline and otherwise shares a reference-counted
//! heap block between clones, copying it only when one of them is written to.
//!
//! ```
//! use cow_bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = &a + &BigInt::one();
//! assert_eq!(b.to_string(), "123456789012345678901234567891");
//!
//! assert_eq!(BigInt::from(7) / BigInt::from(-2), BigInt::from(-3));
//! assert_eq!(BigInt::from(7) % BigInt::from(-2), BigInt::from(1));
//! assert_eq!(BigInt::from(-8) >> 2, BigInt::from(-2));
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

delog::generate_macros!();

mod buffer;
pub use buffer::{LimbBuffer, INLINE_CAPACITY};
mod arithmetic;
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{BigInt, Digit, DoubleDigit, Magnitude, SignedDoubleDigit};
mod random;
