use core::ops::MulAssign;

use crate::{BigInt, Digit, DoubleDigit, LimbBuffer};
use crate::numbers::{trim, DIGIT_BITS};

// Multiply-accumulate with carry: returns the low digit of `a + b*c + acc`,
// leaves the high digit in `acc`. Cannot overflow, as
// (2^32 - 1) + (2^32 - 1)^2 + (2^32 - 1) = 2^64 - 1.
#[inline]
pub fn mac_with_carry(a: Digit, b: Digit, c: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += (b as DoubleDigit) * (c as DoubleDigit);
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// In-place `a *= digit`, returning the digit that did not fit.
pub(crate) fn mul_digit_carry(a: &mut [Digit], digit: Digit) -> Digit {
    let mut carry = 0;
    for a in a.iter_mut() {
        *a = mac_with_carry(0, *a, digit, &mut carry);
    }
    carry as Digit
}

/// In-place `a *= digit`, growing `a` by the carry digit if there is one.
pub(crate) fn mul_digit_assign(a: &mut LimbBuffer, digit: Digit) {
    let carry = mul_digit_carry(a, digit);
    if carry != 0 {
        a.push(carry);
    }
    if digit == 0 {
        trim(a);
    }
}

/// Schoolbook product of two magnitudes, with `a.len() + b.len()` digits before trimming.
pub(crate) fn mul_magnitudes(a: &[Digit], b: &[Digit]) -> LimbBuffer {
    let mut buffer = LimbBuffer::with_len(a.len() + b.len());
    let product: &mut [Digit] = &mut buffer;

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = mac_with_carry(product[i + j], x, y, &mut carry);
        }
        product[i + b.len()] = carry as Digit;
    }

    trim(&mut buffer);
    buffer
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, factor: &BigInt) {
        if self.is_zero() || factor.is_zero() {
            *self = BigInt::zero();
            return;
        }
        if let [digit] = *factor.limbs() {
            mul_digit_assign(&mut self.magnitude, digit);
        } else {
            self.magnitude = mul_magnitudes(&self.magnitude, &factor.magnitude);
        }
        self.negative ^= factor.negative;
        self.normalize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    pub const N1: Digit = -1i64 as Digit;
    pub const N2: Digit = -2i64 as Digit;
    pub const M: Digit = Digit::MAX;

    pub const MUL_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[], &[], &[]),
        (&[], &[1], &[]),
        (&[2], &[], &[]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[1], &[1, 1, 1], &[1, 1, 1]),
        (&[1, 2, 3], &[3], &[3, 6, 9]),
        (&[1, 1, 1], &[N1], &[N1, N1, N1]),
        (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
        (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
        (&[N1], &[N1], &[1, N2]),
        (&[N1, N1], &[N1], &[1, N1, N2]),
        (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
        (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
        (&[M / 2 + 1], &[2], &[0, 1]),
        (&[0, M / 2 + 1], &[2], &[0, 0, 1]),
        (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
        (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
        (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
        (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
        (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
    ];

    #[test]
    fn triples() {
        for &(a, b, c) in MUL_TRIPLES {
            let a = BigInt::from_limbs(a, false);
            let b = BigInt::from_limbs(b, false);
            let c = BigInt::from_limbs(c, false);
            assert_op!(a * b == c);
            assert_op!(b * a == c);
        }
    }

    #[test]
    fn signs() {
        for &(a, b) in &[(3i128, 4i128), (-3, 4), (3, -4), (-3, -4), (0, -4), (-3, 0)] {
            let mut product = BigInt::from(a);
            product *= &BigInt::from(b);
            assert_eq!(product, BigInt::from(a * b));
        }
        assert!(!(BigInt::from(-3) * BigInt::zero()).is_negative());
    }

    #[test]
    fn square_of_ten_to_the_eighteen() {
        let x = BigInt::from(1_000_000_000_000_000_000u64);
        let square = &x * &x;
        assert_eq!(square.to_string(), "1000000000000000000000000000000000000");
        assert_eq!(square.limbs().len(), 4);
    }

    #[test]
    fn digit_carry() {
        let mut a = [M, M];
        assert_eq!(mul_digit_carry(&mut a, 2), 1);
        assert_eq!(a, [N2, M]);

        let mut b = LimbBuffer::from_slice(&[5, 6]);
        mul_digit_assign(&mut b, 0);
        assert_eq!(&*b, &[0]);
    }
}
