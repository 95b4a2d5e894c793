use core::fmt;

/// Everything that can go wrong with a [`BigInt`][crate::BigInt].
///
/// Arithmetic never overflows, so this is limited to malformed input and
/// operations without a defined result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Decimal input without any characters.
    Empty,
    /// Decimal input with a character outside `0`-`9` (or only a sign).
    InvalidDigit,
    /// Division or remainder by zero.
    DivisionByZero,
    /// Shift by a negative number of bits.
    NegativeShift,
    /// Left shift by more bits than `usize` can count.
    ShiftOverflow,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Empty => "cannot parse integer from empty string",
            Error::InvalidDigit => "invalid digit found in string",
            Error::DivisionByZero => "attempt to divide by zero",
            Error::NegativeShift => "attempt to shift by a negative amount",
            Error::ShiftOverflow => "attempt to shift left with overflow",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
