use core::{cmp::Ordering, fmt};

#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::{BigInt, Digit};
use crate::LimbBuffer;

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

// Since we store sign and magnitude separately, comparison needs to look at
// the signs first, and reverse the magnitude order for negative numbers.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude().cmp(other.magnitude()),
            (true, true) => other.magnitude().cmp(self.magnitude()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn from_unsigned(mut value: u128, negative: bool) -> BigInt {
    let mut magnitude = LimbBuffer::new();
    loop {
        magnitude.push(value as Digit);
        value >>= Digit::BITS;
        if value == 0 {
            break;
        }
    }
    BigInt::from_buffer(magnitude, negative)
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                from_unsigned(value as u128, false)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                // `unsigned_abs` covers MIN without overflow
                from_unsigned((value as i128).unsigned_abs(), value < 0)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl From<&BigInt> for BigInt {
    fn from(integer: &BigInt) -> Self {
        integer.clone()
    }
}

impl fmt::Debug for BigInt {
    #[cfg(feature = "hex-debug")]
    /// Sign and big-endian hex bytes of the magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();
        let sign = if self.negative { "-" } else { "" };
        write!(f, "BigInt({}{})", sign, delog::hex_str!(bytes.as_slice()))
    }

    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.negative)
            .field("limbs", &self.limbs())
            .finish()
    }
}

impl Zeroize for BigInt {
    /// Wipes the digits (where exclusively owned) and leaves zero.
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.magnitude.push(0);
        self.negative = false;
    }
}

#[cfg(feature = "ct-maybe")]
impl ConstantTimeEq for BigInt {
    /// Runs in time depending only on the longer of the two lengths.
    fn ct_eq(&self, other: &Self) -> Choice {
        let l = self.magnitude.len().max(other.magnitude.len());
        let mut equal = (self.negative as u8).ct_eq(&(other.negative as u8));
        for i in 0..l {
            let a = self.magnitude.get(i).copied().unwrap_or(0);
            let b = other.magnitude.get(i).copied().unwrap_or(0);
            equal &= a.ct_eq(&b);
        }
        equal
    }
}
