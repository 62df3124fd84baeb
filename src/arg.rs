use alloc::string::String;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

use crate::RangeError;

/// A loosely typed argument handed to [`IntegerRange::from_args`] or
/// [`IntegerRange::contains`].
///
/// Only `Bool`, `Int` and `Big` are integral. Everything else is rejected by
/// construction, including a `Float` that happens to hold a whole number.
///
/// [`IntegerRange::from_args`]: crate::IntegerRange::from_args
/// [`IntegerRange::contains`]: crate::IntegerRange::contains
#[derive(Clone, Debug, PartialEq)]
pub enum RangeArg {
    /// Counts as `0` or `1`.
    Bool(bool),
    /// Any native integer that fits in `i128`.
    Int(i128),
    Big(BigInt),
    Float(f64),
    Str(String),
    None,
}

impl RangeArg {
    /// Short name of the argument's category, as used in error messages.
    pub fn category(&self) -> &'static str {
        match self {
            RangeArg::Bool(_) => "bool",
            RangeArg::Int(_) | RangeArg::Big(_) => "int",
            RangeArg::Float(_) => "float",
            RangeArg::Str(_) => "str",
            RangeArg::None => "none",
        }
    }

    /// Returns `true` for the integral representations.
    #[inline]
    pub fn is_integral(&self) -> bool {
        matches!(self, RangeArg::Bool(_) | RangeArg::Int(_) | RangeArg::Big(_))
    }

    /// Converts an integral argument, `None` for anything else.
    pub fn to_integer(&self) -> Option<BigInt> {
        match self {
            RangeArg::Bool(b) => Some(BigInt::from(u8::from(*b))),
            RangeArg::Int(i) => Some(BigInt::from(*i)),
            RangeArg::Big(b) => Some(b.clone()),
            _ => None,
        }
    }

    /// Strict index conversion. `position` is 1-based and only used for the
    /// error.
    pub(crate) fn into_index(self, position: usize) -> Result<BigInt, RangeError> {
        match self {
            RangeArg::Bool(b) => Ok(BigInt::from(u8::from(b))),
            RangeArg::Int(i) => Ok(BigInt::from(i)),
            RangeArg::Big(b) => Ok(b),
            other => Err(RangeError::NotAnInteger {
                position,
                category: other.category(),
            }),
        }
    }

    /// The integer a non-integral argument compares equal to, if any.
    ///
    /// Only finite floats with no fractional part have one.
    pub(crate) fn equality_probe(&self) -> Option<BigInt> {
        match self {
            RangeArg::Float(f) => {
                let truncated = BigInt::from_f64(*f)?;
                (truncated.to_f64() == Some(*f)).then_some(truncated)
            }
            _ => self.to_integer(),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RangeArg {
                #[inline]
                fn from(value: $ty) -> Self {
                    RangeArg::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_native!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for RangeArg {
    #[inline]
    fn from(value: isize) -> Self {
        RangeArg::Int(value as i128)
    }
}

impl From<usize> for RangeArg {
    #[inline]
    fn from(value: usize) -> Self {
        RangeArg::Int(value as i128)
    }
}

impl From<u128> for RangeArg {
    fn from(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(small) => RangeArg::Int(small),
            Err(_) => RangeArg::Big(BigInt::from(value)),
        }
    }
}

impl From<bool> for RangeArg {
    #[inline]
    fn from(value: bool) -> Self {
        RangeArg::Bool(value)
    }
}

impl From<BigInt> for RangeArg {
    #[inline]
    fn from(value: BigInt) -> Self {
        RangeArg::Big(value)
    }
}

impl From<&BigInt> for RangeArg {
    #[inline]
    fn from(value: &BigInt) -> Self {
        RangeArg::Big(value.clone())
    }
}

impl From<f32> for RangeArg {
    #[inline]
    fn from(value: f32) -> Self {
        RangeArg::Float(f64::from(value))
    }
}

impl From<f64> for RangeArg {
    #[inline]
    fn from(value: f64) -> Self {
        RangeArg::Float(value)
    }
}

impl From<&str> for RangeArg {
    #[inline]
    fn from(value: &str) -> Self {
        RangeArg::Str(String::from(value))
    }
}

impl From<String> for RangeArg {
    #[inline]
    fn from(value: String) -> Self {
        RangeArg::Str(value)
    }
}

impl<T: Into<RangeArg>> From<Option<T>> for RangeArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(RangeArg::None, Into::into)
    }
}
