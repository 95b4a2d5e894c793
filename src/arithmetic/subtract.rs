use core::ops::SubAssign;

use crate::{BigInt, Digit, SignedDoubleDigit};
use crate::numbers::DIGIT_BITS;

/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
pub fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

// Subtraction is addition of the negated subtrahend; the magnitude
// is borrowed, only the sign flips.
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, subtrahend: &BigInt) {
        // -0 is still 0, so the flipped sign of zero does no harm
        self.add_signed_assign(&subtrahend.magnitude, !subtrahend.negative);
    }
}
