//! Signed arithmetic on [`BigInt`].
//!
//! Each operation is implemented once, as `OpAssign<&BigInt>` in its own
//! module. The binary operators for all owned/borrowed combinations forward
//! to it. Borrowed left operands are cloned first, which only copies inline
//! digits; a shared heap block is copied when the assignment writes to it.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
    Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use crate::BigInt;

/// Assert that an op works for all val/ref combinations
#[cfg(test)]
macro_rules! assert_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {
        assert_eq!((&$left) $op (&$right), $expected);
        assert_eq!((&$left) $op $right.clone(), $expected);
        assert_eq!($left.clone() $op (&$right), $expected);
        assert_eq!($left.clone() $op $right.clone(), $expected);
    };
}

pub(crate) mod add;
pub(crate) mod bitwise;
pub(crate) mod divide;
pub(crate) mod multiply;
pub(crate) mod shift;
pub(crate) mod subtract;

macro_rules! forward_binop {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)*) => {$(
        impl $OpAssign<BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, other: BigInt) {
                $OpAssign::$op_assign(self, &other);
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;
            #[inline]
            fn $op(self, other: &BigInt) -> BigInt {
                let mut result = self.clone();
                $OpAssign::$op_assign(&mut result, other);
                result
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;
            #[inline]
            fn $op(self, other: BigInt) -> BigInt {
                $Op::$op(self, &other)
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;
            #[inline]
            fn $op(mut self, other: &BigInt) -> BigInt {
                $OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;
            #[inline]
            fn $op(mut self, other: BigInt) -> BigInt {
                $OpAssign::$op_assign(&mut self, &other);
                self
            }
        }
    )*};
}

forward_binop! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        // zero stays non-negative
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Two's-complement not, i.e. `-x - 1`.
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        let mut result = -self;
        result.add_signed_assign(&[1], true);
        result
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

/// ## Increment and decrement
impl BigInt {
    /// Adds one in place, returning the updated value.
    pub fn inc(&mut self) -> &mut Self {
        self.add_signed_assign(&[1], false);
        self
    }

    /// Subtracts one in place, returning the updated value.
    pub fn dec(&mut self) -> &mut Self {
        self.add_signed_assign(&[1], true);
        self
    }

    /// Adds one in place, returning the previous value.
    pub fn post_inc(&mut self) -> Self {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Subtracts one in place, returning the previous value.
    pub fn post_dec(&mut self) -> Self {
        let previous = self.clone();
        self.dec();
        previous
    }
}
