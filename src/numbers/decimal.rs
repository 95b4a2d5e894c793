//! Text conversions: decimal `Display`/`FromStr`, hexadecimal formatting.

use core::{fmt::{self, Write}, str::FromStr};

use alloc::{string::String, vec::Vec};

use super::{trim, BigInt, Digit};
use crate::arithmetic::{add::add_magnitude_assign, divide::div_rem_assign_digit, multiply::mul_digit_assign};
use crate::{Error, LimbBuffer, Result};

/// Largest power of ten that fits a digit.
const CHUNK: Digit = 1_000_000_000;
const CHUNK_DECIMALS: usize = 9;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // shares the digits until the first division writes to them
        let mut remaining = self.magnitude.clone();
        let mut chunks = Vec::new();
        loop {
            chunks.push(div_rem_assign_digit(&mut remaining, CHUNK));
            trim(&mut remaining);
            if remaining[..] == [0] {
                break;
            }
        }

        let mut decimal = String::with_capacity(chunks.len() * CHUNK_DECIMALS);
        let mut chunks = chunks.iter().rev();
        if let Some(leading) = chunks.next() {
            write!(decimal, "{}", leading)?;
        }
        for chunk in chunks {
            write!(decimal, "{:09}", chunk)?;
        }
        f.pad_integral(!self.negative, "", &decimal)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Optional `+` or `-`, then at least one of `0`-`9`. `"-0"` is zero.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        let (negative, decimals) = match s.as_bytes()[0] {
            b'-' => (true, &s.as_bytes()[1..]),
            b'+' => (false, &s.as_bytes()[1..]),
            _ => (false, s.as_bytes()),
        };
        if decimals.is_empty() || !decimals.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidDigit);
        }

        let mut magnitude = LimbBuffer::from_slice(&[0]);
        // leading partial chunk first, so all others are full
        let (head, tail) = decimals.split_at(decimals.len() % CHUNK_DECIMALS);
        for chunk in core::iter::once(head).filter(|head| !head.is_empty()).chain(tail.chunks(CHUNK_DECIMALS)) {
            let value = chunk.iter().fold(0, |acc: Digit, &byte| acc * 10 + (byte - b'0') as Digit);
            mul_digit_assign(&mut magnitude, (10 as Digit).pow(chunk.len() as u32));
            add_magnitude_assign(&mut magnitude, &[value]);
        }
        Ok(BigInt::from_buffer(magnitude, negative))
    }
}

impl BigInt {
    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let mut hex = String::with_capacity(self.magnitude.len() * 8);
        let mut digits = self.magnitude.iter().rev();
        if let Some(leading) = digits.next() {
            if upper { write!(hex, "{:X}", leading)? } else { write!(hex, "{:x}", leading)? }
        }
        for digit in digits {
            if upper { write!(hex, "{:08X}", digit)? } else { write!(hex, "{:08x}", digit)? }
        }
        f.pad_integral(!self.negative, "0x", &hex)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}
