//! Error type shared by every fallible operation

use crate::*;

use bigdecimal::ParseBigDecimalError;


/// Reasons an operation on a [`Number`] can fail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Text could not be read as a decimal number
    MalformedNumber(String),

    /// An operand is outside the domain the operation accepts
    /// (negative exponent to powmod, zero modulus, fractional operand to
    /// an integer-only operation, base out of range, ...)
    InvalidArgument(String),

    /// Division, or a remainder, with a zero divisor
    DivisionByZero,

    /// The mathematical result is not a real number
    UndefinedResult(String),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(input: S) -> Self {
        Error::MalformedNumber(input.into())
    }

    pub(crate) fn invalid<S: Into<String>>(reason: S) -> Self {
        Error::InvalidArgument(reason.into())
    }

    pub(crate) fn undefined<S: Into<String>>(expression: S) -> Self {
        Error::UndefinedResult(expression.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            MalformedNumber(ref input) => write!(f, "malformed number {:?}", input),
            InvalidArgument(ref reason) => reason[..].fmt(f),
            DivisionByZero => "division by zero".fmt(f),
            UndefinedResult(ref expr) => write!(f, "cannot calculate the expression {}", expr),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseBigDecimalError> for Error {
    fn from(err: ParseBigDecimalError) -> Error {
        Error::MalformedNumber(err.to_string())
    }
}
