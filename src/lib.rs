#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use integer_range::IntegerRange;
//! use num_bigint::BigInt;
//!
//! // Elements 10, 13, 16, 19
//! let range = IntegerRange::new(10, 20, 3).unwrap();
//!
//! assert_eq!(range.len(), Ok(4));
//! assert_eq!(range.get(-1).unwrap(), BigInt::from(19));
//! assert!(range.contains(16));
//!
//! // Iterate over the range, as many times as you like
//! for i in &range {
//!     println!("{}", i);
//! }
//! let backwards: Vec<BigInt> = range.reversed().iter().collect();
//! assert_eq!(backwards, [19, 16, 13, 10].map(BigInt::from));
//! ```
//!
//! # Arbitrary Precision
//!
//! Bounds are [`BigInt`](num_bigint::BigInt)s, so nothing overflows.
//! [`length`](IntegerRange::length) always succeeds, while
//! [`len`](IntegerRange::len) reports lengths that do not fit in `usize`:
//!
//! ```rust
//! use integer_range::{ErrorKind, IntegerRange};
//! use num_bigint::{BigInt, BigUint};
//!
//! let huge = BigInt::from(2).pow(100);
//! let range = IntegerRange::from_stop(huge.clone());
//!
//! assert_eq!(range.length(), BigUint::from(2u32).pow(100));
//! assert_eq!(range.len().unwrap_err().kind(), ErrorKind::Overflow);
//! assert!(range.contains(huge - 1));
//! ```
//!
//! # Positional Arguments
//!
//! [`integer_range!`] mirrors the `(stop)`, `(start, stop)` and
//! `(start, stop, step)` overloads and accepts any [`RangeArg`]. Only
//! integers and booleans are accepted:
//!
//! ```rust
//! use integer_range::{integer_range, ErrorKind};
//!
//! assert_eq!(integer_range!(5).unwrap().to_string(), "IntegerRange(0, 5)");
//! assert_eq!(integer_range!(true, 9, 4).unwrap().to_string(), "IntegerRange(1, 9, 4)");
//!
//! assert_eq!(integer_range!(1.0).unwrap_err().kind(), ErrorKind::Type);
//! assert_eq!(integer_range!().unwrap_err().kind(), ErrorKind::Type);
//! assert_eq!(integer_range!(0, 5, 0).unwrap_err().kind(), ErrorKind::Value);
//! ```

extern crate alloc;

/// Passes an error through, logging it first when the `tracing` feature is on.
macro_rules! rejected {
    ($err:expr) => {{
        let err = $err;
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, kind = ?err.kind(), "integer range input rejected");
        err
    }};
}

mod arg;
mod error;
mod integer_range;
mod iter;
#[cfg(feature = "serde")]
mod serialize;
mod text;

pub use arg::RangeArg;
pub use error::{ErrorKind, RangeError};
pub use integer_range::{Canonical, IntegerRange, RangeName};
pub use iter::Iter;

/// Builds an [`IntegerRange`] from one to three positional arguments.
///
/// Expands to [`IntegerRange::from_args`], so it returns a `Result`.
#[macro_export]
macro_rules! integer_range {
    ($($arg:expr),* $(,)?) => {
        $crate::IntegerRange::from_args(::core::iter::empty::<$crate::RangeArg>()
            $(.chain(::core::iter::once($crate::RangeArg::from($arg))))*)
    };
}

#[cfg(test)]
#[path = "tests/integer_range_tests.rs"]
mod tests;
