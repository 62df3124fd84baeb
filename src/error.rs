use alloc::string::String;

use thiserror::Error;

/// Broad category of a [`RangeError`].
///
/// | Kind       | Raised by                                         |
/// |------------|---------------------------------------------------|
/// | `Type`     | construction: bad argument category, arity, names |
/// | `Value`    | construction: zero step                           |
/// | `Index`    | [`get`](crate::IntegerRange::get)                  |
/// | `Overflow` | [`len`](crate::IntegerRange::len)                  |
/// | `Syntax`   | parsing the text form                             |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
    Index,
    Overflow,
    Syntax,
}

/// Error returned by fallible `IntegerRange` operations.
///
/// Every failure is local to the call that produced it; the range involved
/// (if any) is left untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    /// An argument is not one of the accepted integral representations.
    #[error("argument {position}: '{category}' object cannot be interpreted as an integer")]
    NotAnInteger {
        position: usize,
        category: &'static str,
    },
    #[error("expected 1 to 3 arguments, got {0}")]
    ArgumentCount(usize),
    #[error("arguments must be positional, got keyword '{0}'")]
    KeywordArgument(String),
    #[error("step must not be zero")]
    ZeroStep,
    #[error("index out of range")]
    IndexOutOfRange,
    #[error("range length does not fit in usize")]
    LengthOverflow,
    #[error("malformed range text: {0}")]
    Syntax(String),
}

impl RangeError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeError::NotAnInteger { .. }
            | RangeError::ArgumentCount(_)
            | RangeError::KeywordArgument(_) => ErrorKind::Type,
            RangeError::ZeroStep => ErrorKind::Value,
            RangeError::IndexOutOfRange => ErrorKind::Index,
            RangeError::LengthOverflow => ErrorKind::Overflow,
            RangeError::Syntax(_) => ErrorKind::Syntax,
        }
    }
}
