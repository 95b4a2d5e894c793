use core::{cmp::Ordering, convert::TryFrom};

use alloc::vec::Vec;
use ref_cast::RefCast;

use crate::LimbBuffer;

mod decimal;
mod trait_implementations;

/// `u32`, fixed regardless of architecture.
pub type Digit = u32;
/// Unsigned type with twice as many bits as [`Digit`].
pub type DoubleDigit = u64;
/// Signed type with twice as many bits as [`Digit`].
pub type SignedDoubleDigit = i64;

pub(crate) const DIGIT_BITS: usize = Digit::BITS as usize;

/// Arbitrary-precision signed integer.
///
/// Sign-magnitude representation: little-endian base-$2^{32}$ digits plus a
/// sign flag. Every operation leaves the value normalized:
/// - the magnitude is never empty,
/// - there are no leading (most significant) zero digits, except for zero itself, `[0]`,
/// - zero is never negative.
///
/// Cloning is cheap, see [`LimbBuffer`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BigInt {
    pub(crate) magnitude: LimbBuffer,
    pub(crate) negative: bool,
}

/// Unsigned view of normalized little-endian digits.
///
/// This is *little endian* ordering, as opposed to the default
/// ordering on slices: more digits means larger, otherwise compare from
/// the most significant digit down.
#[repr(transparent)]
#[derive(Debug, Eq, PartialEq, RefCast)]
pub struct Magnitude([Digit]);

impl Magnitude {
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// Position of the highest set bit plus one; 0 for zero.
    pub fn bits(&self) -> usize {
        match self.0.iter().rposition(|&d| d != 0) {
            Some(i) => i * DIGIT_BITS + (DIGIT_BITS - self.0[i].leading_zeros() as usize),
            None => 0,
        }
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        let (m, n) = (&self.0, &other.0);
        match m.len().cmp(&n.len()) {
            Ordering::Equal => {}
            not_equal => return not_equal,
        }

        for i in (0..m.len()).rev() {
            match m[i].cmp(&n[i]) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Drops leading zero digits, keeping at least one digit.
///
/// Goes through [`LimbBuffer::resize`], so short results move back inline.
pub(crate) fn trim(digits: &mut LimbBuffer) {
    let significant = digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
    if significant != digits.len() {
        digits.resize(significant);
    }
}

// c'tors and such
impl BigInt {
    pub fn zero() -> Self {
        Self { magnitude: LimbBuffer::from_slice(&[0]), negative: false }
    }

    pub fn one() -> Self {
        Self { magnitude: LimbBuffer::from_slice(&[1]), negative: false }
    }

    /// Integer from little-endian digits and a sign; normalizes.
    pub fn from_limbs(digits: &[Digit], negative: bool) -> Self {
        Self::from_buffer(LimbBuffer::from_slice(digits), negative)
    }

    /// Like [`from_limbs`][Self::from_limbs], taking the buffer as is (shared or not).
    pub fn from_buffer(magnitude: LimbBuffer, negative: bool) -> Self {
        let mut integer = Self { magnitude, negative };
        integer.normalize();
        integer
    }

    /// Non-negative integer from big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut magnitude = LimbBuffer::with_len((bytes.len() + 3) / 4);
        for (digit, chunk) in magnitude.iter_mut().zip(bytes.rchunks(4)) {
            *digit = chunk.iter().fold(0, |acc, &byte| (acc << 8) | byte as Digit);
        }
        Self::from_buffer(magnitude, false)
    }

    /// Big-endian bytes of the magnitude, without leading zero bytes.
    ///
    /// Zero is a single `0` byte. The sign is not encoded.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.magnitude.iter().rev()
            .flat_map(|digit| digit.to_be_bytes())
            .skip_while(|&byte| byte == 0)
            .collect();
        if bytes.is_empty() {
            bytes.push(0);
        }
        bytes
    }

    /// Restore the invariants after a raw edit of the digits.
    pub(crate) fn normalize(&mut self) {
        trim(&mut self.magnitude);
        if self.magnitude[..] == [0] {
            self.negative = false;
        }
    }

    /// Little-endian digits of the magnitude.
    pub fn limbs(&self) -> &[Digit] {
        &self.magnitude
    }

    pub fn magnitude(&self) -> &Magnitude {
        Magnitude::ref_cast(&self.magnitude)
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude[..] == [0]
    }

    pub fn is_one(&self) -> bool {
        !self.negative && self.magnitude[..] == [1]
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> Self {
        Self { magnitude: self.magnitude.clone(), negative: false }
    }

    /// Bit length of the magnitude.
    pub fn bits(&self) -> usize {
        self.magnitude().bits()
    }

    /// The value as `i128`, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        if self.magnitude.len() > 4 {
            return None;
        }
        let magnitude = self.magnitude.iter().rev()
            .fold(0u128, |acc, &digit| (acc << Digit::BITS) | digit as u128);
        if !self.negative {
            i128::try_from(magnitude).ok()
        } else if magnitude <= i128::MIN.unsigned_abs() {
            Some((magnitude as i128).wrapping_neg())
        } else {
            None
        }
    }

    /// The value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match (self.negative, self.limbs()) {
            (false, &[lo]) => Some(lo as u64),
            (false, &[lo, hi]) => Some(((hi as DoubleDigit) << Digit::BITS) | lo as DoubleDigit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn zero_is_canonical() {
        let zero = BigInt::from_limbs(&[0, 0, 0], true);
        assert_eq!(zero.limbs(), &[0]);
        assert!(!zero.is_negative());
        assert_eq!(zero, BigInt::zero());

        let empty = BigInt::from_limbs(&[], true);
        assert_eq!(empty, BigInt::zero());
    }

    #[test]
    fn from_limbs_trims() {
        let x = BigInt::from_limbs(&[1, 2, 0, 0], true);
        assert_eq!(x.limbs(), &[1, 2]);
        assert!(x.is_negative());
        assert_eq!(x.signum(), -1);
        assert_eq!(x.abs().signum(), 1);
    }

    #[test]
    fn magnitude_order() {
        let cases: &[(&[Digit], &[Digit], Ordering)] = &[
            (&[0], &[0], Ordering::Equal),
            (&[1], &[0], Ordering::Greater),
            (&[0, 1], &[Digit::MAX], Ordering::Greater),
            (&[5, 1], &[4, 2], Ordering::Less),
            (&[1, 2, 3], &[1, 2, 3], Ordering::Equal),
        ];
        for &(m, n, expected) in cases {
            assert_eq!(Magnitude::ref_cast(m).cmp(Magnitude::ref_cast(n)), expected);
        }
    }

    #[test]
    fn bits() {
        assert_eq!(BigInt::zero().bits(), 0);
        assert_eq!(BigInt::one().bits(), 1);
        assert_eq!(BigInt::from_limbs(&[0, 0x8000_0000], false).bits(), 64);
        assert_eq!(BigInt::from_limbs(&[Digit::MAX, 1], true).bits(), 33);
    }

    #[cfg(feature = "sync")]
    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BigInt>();
        assert_send_sync::<LimbBuffer>();
    }

    #[test]
    fn bytes() {
        let x = BigInt::from_be_bytes(&hex!("0102030405060708090a"));
        assert_eq!(x.limbs(), &[0x0708090a, 0x03040506, 0x0102]);
        assert_eq!(x.to_be_bytes(), hex!("0102030405060708090a"));

        let padded = BigInt::from_be_bytes(&hex!("00000000ff"));
        assert_eq!(padded.limbs(), &[0xff]);
        assert_eq!(padded.to_be_bytes(), [0xff]);

        assert_eq!(BigInt::from_be_bytes(&[]), BigInt::zero());
        assert_eq!(BigInt::zero().to_be_bytes(), [0]);
    }
}
