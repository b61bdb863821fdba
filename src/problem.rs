/// Problems when parsing calculator commands, building [`Divisor`](crate::Divisor)s
/// or doing arithmetic with [`Complex`](crate::Complex) numbers

#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Problem {
    /// Unspecified problem while parsing a command
    ParseError,
    /// Tried to divide by a complex number with zero modulus
    DivideByZero,
    /// The specified stored number does not exist
    NotFound,
    /// The command has too few parameters to evaluate
    InsufficientParameters,
    /// Tried to represent a floating point NaN
    NotANumber,
    /// Tried to represent a floating point Infinity
    Infinity,
    /// A numeric argument was not a decimal number
    BadDecimal,
    /// An index argument was not a non-negative integer
    BadInteger,
    /// A divisor was malformed, or its value was not finite and positive
    BadDivisor,
    /// No room left to store another result
    Exhausted,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Problem {}
