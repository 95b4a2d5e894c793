//! Bitwise operations with two's-complement semantics.
//!
//! Both operands are widened to one digit more than the longer magnitude,
//! which is always enough to hold the sign bit, then combined digit by digit.

use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign};

use crate::{BigInt, Digit, LimbBuffer};
use super::add::add_assign_carry;

/// Invert and increment; the carry out of the top digit is dropped.
fn negate_in_place(digits: &mut [Digit]) {
    for digit in digits.iter_mut() {
        *digit = !*digit;
    }
    add_assign_carry(digits, &[1]);
}

fn to_twos_complement(integer: &BigInt, width: usize) -> LimbBuffer {
    let mut digits = integer.magnitude.clone();
    digits.resize(width);
    if integer.negative {
        negate_in_place(&mut digits);
    }
    digits
}

impl BigInt {
    fn bitwise_assign(&mut self, other: &BigInt, op: impl Fn(Digit, Digit) -> Digit, sign: impl Fn(bool, bool) -> bool) {
        let width = self.magnitude.len().max(other.magnitude.len()) + 1;
        let mut digits = to_twos_complement(self, width);
        let rhs = to_twos_complement(other, width);
        for (a, b) in digits.iter_mut().zip(rhs.iter()) {
            *a = op(*a, *b);
        }

        let negative = sign(self.negative, other.negative);
        debug_assert_eq!(negative, digits[width - 1] >> (Digit::BITS - 1) == 1);
        if negative {
            negate_in_place(&mut digits);
        }
        *self = BigInt::from_buffer(digits, negative);
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a & b, |a, b| a && b);
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a | b, |a, b| a || b);
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, other: &BigInt) {
        self.bitwise_assign(other, |a, b| a ^ b, |a, b| a ^ b);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VALUES: &[i128] = &[
        0, 1, -1, 2, -2, 5, -5, 12, -12,
        0xffff_ffff, -0xffff_ffff, 1 << 32, -(1 << 32),
        0x1234_5678_9abc_def0_1357, -0x1234_5678_9abc_def0_1357,
        i64::MIN as i128, i64::MAX as i128,
    ];

    #[test]
    fn matches_primitive() {
        for &a in VALUES {
            for &b in VALUES {
                let (x, y) = (BigInt::from(a), BigInt::from(b));
                assert_op!(x & y == BigInt::from(a & b));
                assert_op!(x | y == BigInt::from(a | b));
                assert_op!(x ^ y == BigInt::from(a ^ b));
            }
        }
    }

    #[test]
    fn not() {
        for &a in VALUES {
            assert_eq!(!BigInt::from(a), BigInt::from(!a), "!{}", a);
            assert_eq!(!&BigInt::from(a), BigInt::from(!a), "!{}", a);
        }
        assert_eq!(!BigInt::zero(), BigInt::from(-1));
    }

    #[test]
    fn de_morgan() {
        let a: BigInt = "-98765432109876543210987654321".parse().unwrap();
        let b: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        assert_eq!(!(&a & &b), &!&a | &!&b);
        assert_eq!(!(&a | &b), &!&a & &!&b);
        assert_eq!(&(&a ^ &b) ^ &b, a);
    }

    #[test]
    fn and_with_minus_one_is_identity() {
        let x = BigInt::from_limbs(&[7; 12], true);
        assert_eq!(&x & &BigInt::from(-1), x);
        assert_eq!(&x | &BigInt::zero(), x);
        assert_eq!(&x ^ &x, BigInt::zero());
    }
}
