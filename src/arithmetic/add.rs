use core::{cmp::Ordering, ops::AddAssign};

use ref_cast::RefCast;

use crate::{BigInt, Digit, DoubleDigit, LimbBuffer, Magnitude};
use crate::numbers::DIGIT_BITS;
use super::subtract::sub_assign_borrow;

//
// from num-bigint
//

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
/// Otherwise, the final carry is returned.
#[inline]
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

/// Magnitude addition, growing `a` as needed (by at most one digit past the longer operand).
pub(crate) fn add_magnitude_assign(a: &mut LimbBuffer, b: &[Digit]) {
    if a.len() < b.len() {
        a.resize(b.len());
    }
    let carry = add_assign_carry(a, b);
    if carry != 0 {
        a.push(carry);
    }
}

impl BigInt {
    /// `self += (-1)^negative * |digits|`.
    ///
    /// Equal signs add magnitudes. Otherwise the smaller magnitude is subtracted
    /// from the larger, which also decides the sign.
    pub(crate) fn add_signed_assign(&mut self, digits: &[Digit], negative: bool) {
        if self.negative == negative {
            add_magnitude_assign(&mut self.magnitude, digits);
        } else {
            match Magnitude::ref_cast(&self.magnitude).cmp(Magnitude::ref_cast(digits)) {
                Ordering::Less => {
                    let mut difference = LimbBuffer::from_slice(digits);
                    sub_assign_borrow(&mut difference, &self.magnitude);
                    self.magnitude = difference;
                    self.negative = negative;
                }
                _ => {
                    sub_assign_borrow(&mut self.magnitude, digits);
                }
            }
        }
        self.normalize();
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, summand: &BigInt) {
        self.add_signed_assign(&summand.magnitude, summand.negative);
    }
}
