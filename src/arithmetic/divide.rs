use core::ops::{DivAssign, RemAssign};

use ref_cast::RefCast;

use crate::{BigInt, Digit, DoubleDigit, Error, LimbBuffer, Magnitude, Result};
use crate::numbers::{trim, DIGIT_BITS};
use super::{add::add_assign_carry, multiply::{mac_with_carry, mul_digit_carry}, subtract::sbb};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << DIGIT_BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    debug_assert!(q <= Digit::MAX as _);
    let r = x % divisor;
    debug_assert!(r <= Digit::MAX as _);

    (q as Digit, r as Digit)
}

/// Divides `digits` in-place by a non-zero `divisor`, returning the remainder.
///
/// Leading zeros of the quotient are left in place.
pub fn div_rem_assign_digit(digits: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in digits.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// Quotient and remainder of two normalized magnitudes, both normalized.
///
/// Knuth, TAOCP vol 2 section 4.3.1, algorithm D(ivision), with the
/// multiplicative normalization $d = \lfloor 2^{32} / (v_{n-1} + 1) \rfloor$
/// from step D1.
pub(crate) fn div_rem_magnitudes(u: &LimbBuffer, v: &LimbBuffer) -> Result<(LimbBuffer, LimbBuffer)> {
    if Magnitude::ref_cast(v).is_zero() {
        return Err(Error::DivisionByZero);
    }
    if Magnitude::ref_cast(u) < Magnitude::ref_cast(v) {
        // shares the dividend's digits
        return Ok((LimbBuffer::from_slice(&[0]), u.clone()));
    }

    if let [divisor] = **v {
        let mut quotient = u.clone();
        let remainder = div_rem_assign_digit(&mut quotient, divisor);
        trim(&mut quotient);
        return Ok((quotient, LimbBuffer::from_slice(&[remainder])));
    }

    let n = v.len();
    let m = u.len() - n;
    trace!("long division of {} by {} digits", u.len(), n);

    // D1: scale so the divisor's leading digit is at least 2^31
    let d = ((1 << DIGIT_BITS) / (v[n - 1] as DoubleDigit + 1)) as Digit;
    let mut vn = LimbBuffer::from_slice(v);
    let overflow = mul_digit_carry(&mut vn, d);
    debug_assert_eq!(overflow, 0);
    let mut un = LimbBuffer::from_slice(u);
    let top = mul_digit_carry(&mut un, d);
    un.push(top);

    let mut q_buffer = LimbBuffer::with_len(m + 1);
    let q: &mut [Digit] = &mut q_buffer;
    let vn: &[Digit] = &vn;
    let un_digits: &mut [Digit] = &mut un;
    let v_top = vn[n - 1] as DoubleDigit;
    let v_next = vn[n - 2] as DoubleDigit;

    for j in (0..=m).rev() {
        // D3: estimate from the top two digits, refined with the third
        let numerator = ((un_digits[j + n] as DoubleDigit) << DIGIT_BITS) | un_digits[j + n - 1] as DoubleDigit;
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;
        while q_hat > Digit::MAX as DoubleDigit
            || q_hat * v_next > ((r_hat << DIGIT_BITS) | un_digits[j + n - 2] as DoubleDigit)
        {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat > Digit::MAX as DoubleDigit {
                break;
            }
        }

        // D4: multiply and subtract
        let mut carry = 0;
        let mut borrow = 0;
        for i in 0..n {
            let product = mac_with_carry(0, vn[i], q_hat as Digit, &mut carry);
            un_digits[j + i] = sbb(un_digits[j + i], product, &mut borrow);
        }
        un_digits[j + n] = sbb(un_digits[j + n], carry as Digit, &mut borrow);

        // D6: the estimate was one too large, add back
        if borrow != 0 {
            q_hat -= 1;
            // the carry out cancels the borrow
            add_assign_carry(&mut un_digits[j..=j + n], vn);
        }

        q[j] = q_hat as Digit;
    }

    // D8: unscale the remainder
    un.truncate(n);
    let rest = div_rem_assign_digit(&mut un, d);
    debug_assert_eq!(rest, 0);
    trim(&mut un);
    trim(&mut q_buffer);

    Ok((q_buffer, un))
}

/// ## Division
///
/// Quotients are truncated toward zero, remainders take the sign of the
/// dividend, so that `dividend == quotient * divisor + remainder` and
/// `|remainder| < |divisor|`.
impl BigInt {
    pub fn checked_div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (quotient, remainder) = div_rem_magnitudes(&self.magnitude, &divisor.magnitude)?;
        Ok((
            BigInt::from_buffer(quotient, self.negative ^ divisor.negative),
            BigInt::from_buffer(remainder, self.negative),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Like [`checked_div_rem`][Self::checked_div_rem].
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(divisor) {
            Ok(result) => result,
            Err(error) => panic!("{}", error),
        }
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, divisor: &BigInt) {
        *self = self.div_rem(divisor).0;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, divisor: &BigInt) {
        *self = self.div_rem(divisor).1;
    }
}
