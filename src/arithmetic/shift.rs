use core::{convert::TryFrom, ops::{Shl, ShlAssign, Shr, ShrAssign}};

use crate::{BigInt, Digit, Error, LimbBuffer, Result};
use crate::numbers::DIGIT_BITS;
use super::add::add_magnitude_assign;

impl ShlAssign<usize> for BigInt {
    #[inline]
    /// Multiplication by $2^{bits}$; the sign is kept.
    ///
    /// Note that "left" means "higher number".
    fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }
        let l = self.magnitude.len();
        let n_digits = bits / DIGIT_BITS;
        let n_bits = bits % DIGIT_BITS;

        // one spare digit for the bits shifted out at the top
        self.magnitude.resize(l + n_digits + 1);
        let data: &mut [Digit] = &mut self.magnitude;

        // shift back by n_digits
        data.copy_within(..l, n_digits);
        data[..n_digits].fill(0);

        // shift back sub-digit amount of bits
        if n_bits > 0 {
            let mut carry = 0;
            for elem in data[n_digits..].iter_mut() {
                let new_carry = *elem >> (DIGIT_BITS - n_bits);
                *elem = (*elem << n_bits) | carry;
                carry = new_carry;
            }
        }
        self.normalize();
    }
}

impl ShrAssign<usize> for BigInt {
    #[inline]
    /// Division by $2^{bits}$, rounding toward negative infinity.
    ///
    /// For negative numbers, this rounds down whenever a discarded bit is set,
    /// e.g. `-1 >> 1 == -1` and `-8 >> 2 == -2` but `-9 >> 2 == -3`.
    fn shr_assign(&mut self, bits: usize) {
        let l = self.magnitude.len();
        let n_digits = bits / DIGIT_BITS;
        let n_bits = bits % DIGIT_BITS;

        let round_down = self.negative && {
            let low = &self.magnitude[..n_digits.min(l)];
            let partial = if n_digits < l && n_bits > 0 {
                self.magnitude[n_digits] & ((1 << n_bits) - 1)
            } else {
                0
            };
            partial != 0 || low.iter().any(|&d| d != 0)
        };

        if n_digits >= l {
            self.magnitude = LimbBuffer::from_slice(&[round_down as Digit]);
            self.negative = round_down;
            return;
        }

        let data: &mut [Digit] = &mut self.magnitude;

        // shift by n_digits
        data.copy_within(n_digits.., 0);

        if n_bits > 0 {
            let mut borrow = 0;
            for elem in data[..l - n_digits].iter_mut().rev() {
                let new_borrow = *elem << (DIGIT_BITS - n_bits);
                *elem = (*elem >> n_bits) | borrow;
                borrow = new_borrow;
            }
        }
        self.magnitude.truncate(l - n_digits);

        if round_down {
            add_magnitude_assign(&mut self.magnitude, &[1]);
        }
        self.normalize();
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shl(mut self, bits: usize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    #[inline]
    fn shr(mut self, bits: usize) -> Self::Output {
        self >>= bits;
        self
    }
}

impl BigInt {
    /// Left shift by a signed amount; negative amounts are an error.
    ///
    /// Amounts beyond `usize::MAX` (possible on 32-bit targets) are
    /// [`Error::ShiftOverflow`].
    pub fn checked_shl(&self, bits: i64) -> Result<BigInt> {
        if bits < 0 {
            return Err(Error::NegativeShift);
        }
        let bits = usize::try_from(bits).map_err(|_| Error::ShiftOverflow)?;
        Ok(self << bits)
    }

    /// Right shift by a signed amount; negative amounts are an error.
    ///
    /// Amounts beyond `usize::MAX` shift out every digit, like `usize::MAX` does.
    pub fn checked_shr(&self, bits: i64) -> Result<BigInt> {
        if bits < 0 {
            return Err(Error::NegativeShift);
        }
        let bits = usize::try_from(bits).unwrap_or(usize::MAX);
        Ok(self >> bits)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn left() {
        let cases: &[(i128, usize)] = &[(0, 5), (1, 0), (1, 31), (1, 32), (1, 33), (-3, 64), (0x1234_5678_9abc, 71)];
        for &(x, bits) in cases {
            assert_eq!(BigInt::from(x) << bits, BigInt::from(x << bits), "{} << {}", x, bits);
        }
        let one = BigInt::one();
        assert_eq!((&one << 200).bits(), 201);
        assert_eq!((&one << 200).limbs()[6], 1 << 8);
    }

    #[test]
    fn right_floors() {
        let cases: &[(i128, usize)] = &[
            (0, 3), (17, 0), (17, 1), (17, 40),
            (-1, 1), (-8, 2), (-9, 2), (-7, 1),
            (-(1 << 64), 64), (-(1 << 64) - 1, 64), (-(1 << 64), 63),
            (-(1 << 64), 65), (-(1 << 64), 200), (1 << 64, 200),
            (-0x1234_5678_9abc_def0_1234_5678, 37),
        ];
        for &(x, bits) in cases {
            // arithmetic shift on i128 floors, too
            let expected = if bits >= 128 { x >> 127 } else { x >> bits };
            assert_eq!(BigInt::from(x) >> bits, BigInt::from(expected), "{} >> {}", x, bits);
        }
    }

    #[test]
    fn round_trip() {
        let x: BigInt = "-123456789012345678901234567890123456789".parse().unwrap();
        for &bits in &[1usize, 31, 32, 33, 95, 300] {
            assert_eq!(&(&x << bits) >> bits, x);
        }
    }

    #[test]
    fn negative_amounts() {
        let x = BigInt::from(5);
        assert_eq!(x.checked_shl(-1), Err(Error::NegativeShift));
        assert_eq!(x.checked_shr(-1), Err(Error::NegativeShift));
        assert_eq!(x.checked_shl(3), Ok(BigInt::from(40)));
        assert_eq!(BigInt::from(-5).checked_shr(1), Ok(BigInt::from(-3)));
    }

    #[test]
    fn huge_right_amounts() {
        let x = BigInt::from_limbs(&[7; 9], false);
        assert_eq!(x.checked_shr(i64::MAX), Ok(BigInt::zero()));
        assert_eq!((-&x).checked_shr(i64::MAX), Ok(BigInt::from(-1)));
        assert_eq!(x.checked_shr(1 << 40), Ok(BigInt::zero()));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn left_amount_beyond_usize() {
        let x = BigInt::one();
        assert_eq!(x.checked_shl(1 << 32), Err(Error::ShiftOverflow));
        assert_eq!(x.checked_shr(1 << 32), Ok(BigInt::zero()));
    }
}
