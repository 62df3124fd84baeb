use core::fmt;
use core::marker::PhantomData;

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{Iter, RangeArg, RangeError};

/// Supplies the type name an `IntegerRange` uses in its text form.
///
/// Define your own marker to get a range type that prints and parses under a
/// different name:
///
/// ```
/// use integer_range::{IntegerRange, RangeName};
///
/// enum Span {}
/// impl RangeName for Span {
///     const NAME: &'static str = "Span";
/// }
///
/// let span = IntegerRange::from_bounds(3, 7).with_name::<Span>();
/// assert_eq!(span.to_string(), "Span(3, 7)");
/// assert!("Span(3, 7)".parse::<IntegerRange<Span>>().is_ok());
/// assert!("IntegerRange(3, 7)".parse::<IntegerRange<Span>>().is_err());
/// ```
pub trait RangeName: 'static {
    const NAME: &'static str;
}

/// The default name marker: `IntegerRange`.
#[derive(Debug)]
pub enum Canonical {}

impl RangeName for Canonical {
    const NAME: &'static str = "IntegerRange";
}

/// An arithmetic progression `start, start + step, ...` stopping before `stop`,
/// over arbitrary-precision integers.
///
/// Nothing is materialized: length, indexing and membership are computed
/// from the three bounds, and iteration produces one element at a time.
///
/// # Type Parameters
/// - `N`: The name marker used by `Display`, `FromStr` and `Debug`.
///   Defaults to [`Canonical`].
///
/// # Equality
/// `IntegerRange` deliberately implements neither `PartialEq` nor `Hash`.
/// Use [`eq_instance`](Self::eq_instance) to compare bounds.
///
/// # Constraints
/// - `step` is never zero
/// - The bounds never change after construction
pub struct IntegerRange<N: RangeName = Canonical> {
    start: BigInt,
    stop: BigInt,
    step: BigInt,
    name: PhantomData<fn() -> N>,
}

impl<N: RangeName> IntegerRange<N> {
    #[inline]
    fn from_parts_unchecked(start: BigInt, stop: BigInt, step: BigInt) -> Self {
        debug_assert!(!step.is_zero(), "step must not be zero");
        Self {
            start,
            stop,
            step,
            name: PhantomData,
        }
    }

    /// Zero-step check shared by every constructor.
    pub(crate) fn checked(start: BigInt, stop: BigInt, step: BigInt) -> Result<Self, RangeError> {
        if step.is_zero() {
            return Err(rejected!(RangeError::ZeroStep));
        }
        Ok(Self::from_parts_unchecked(start, stop, step))
    }

    /// Positional dispatch: `(stop)`, `(start, stop)` or `(start, stop, step)`.
    pub(crate) fn from_positional(args: Vec<RangeArg>) -> Result<Self, RangeError> {
        let count = args.len();
        if !(1..=3).contains(&count) {
            return Err(rejected!(RangeError::ArgumentCount(count)));
        }

        let mut bounds = Vec::with_capacity(count);
        for (position, arg) in args.into_iter().enumerate() {
            bounds.push(arg.into_index(position + 1).map_err(|err| rejected!(err))?);
        }

        let step = match count {
            3 => bounds.pop(),
            _ => None,
        }
        .unwrap_or_else(BigInt::one);
        let stop = bounds.pop().ok_or(RangeError::ArgumentCount(count))?;
        let start = bounds.pop().unwrap_or_default();
        Self::checked(start, stop, step)
    }

    /// Converts into the same range under another name marker.
    #[inline]
    pub fn with_name<M: RangeName>(self) -> IntegerRange<M> {
        IntegerRange::from_parts_unchecked(self.start, self.stop, self.step)
    }

    /// Returns the first bound.
    #[inline]
    pub fn start(&self) -> &BigInt {
        &self.start
    }

    /// Returns the exclusive bound.
    #[inline]
    pub fn stop(&self) -> &BigInt {
        &self.stop
    }

    /// Returns the step. Never zero.
    #[inline]
    pub fn step(&self) -> &BigInt {
        &self.step
    }

    /// Consumes the range, returning `(start, stop, step)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt, BigInt) {
        (self.start, self.stop, self.step)
    }

    /// Returns the number of elements. Never fails, whatever the magnitude.
    ///
    /// # Examples
    /// ```
    /// use integer_range::IntegerRange;
    /// use num_bigint::{BigInt, BigUint};
    ///
    /// let n = BigInt::from(10).pow(100);
    /// let r = IntegerRange::from_bounds(n.clone(), n + 10);
    /// assert_eq!(r.length(), BigUint::from(10u32));
    /// ```
    pub fn length(&self) -> BigUint {
        // For a negative step, walk from stop up to start instead.
        let (lo, hi) = if self.step.is_positive() {
            (&self.start, &self.stop)
        } else {
            (&self.stop, &self.start)
        };
        if lo >= hi {
            return BigUint::zero();
        }
        let span = hi - lo;
        (span.magnitude() - BigUint::one()) / self.step.magnitude() + BigUint::one()
    }

    /// Returns the number of elements as a `usize`.
    ///
    /// # Errors
    /// [`RangeError::LengthOverflow`] if the length exceeds `usize::MAX`;
    /// [`length`](Self::length) has no such limit.
    #[inline]
    pub fn len(&self) -> Result<usize, RangeError> {
        self.length().to_usize().ok_or(RangeError::LengthOverflow)
    }

    /// Returns `true` if the range has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        if self.step.is_positive() {
            self.start >= self.stop
        } else {
            self.start <= self.stop
        }
    }

    /// Returns the element at `index`. Negative indices count from the end.
    ///
    /// # Errors
    /// [`RangeError::IndexOutOfRange`] if the index falls outside the range.
    ///
    /// # Examples
    /// ```
    /// use integer_range::IntegerRange;
    /// use num_bigint::BigInt;
    ///
    /// let r = IntegerRange::new(10, 0, -3).unwrap();
    /// assert_eq!(r.get(0).unwrap(), BigInt::from(10));
    /// assert_eq!(r.get(-1).unwrap(), BigInt::from(1));
    /// assert!(r.get(4).is_err());
    /// ```
    pub fn get(&self, index: impl Into<BigInt>) -> Result<BigInt, RangeError> {
        let length = BigInt::from(self.length());
        let mut index = index.into();
        if index.is_negative() {
            index += &length;
        }
        if index.is_negative() || index >= length {
            return Err(RangeError::IndexOutOfRange);
        }
        Ok(&self.start + index * &self.step)
    }

    /// Returns the first element, or `None` if the range is empty.
    #[inline]
    pub fn first(&self) -> Option<BigInt> {
        (!self.is_empty()).then(|| self.start.clone())
    }

    /// Returns the last element, or `None` if the range is empty.
    #[inline]
    pub fn last(&self) -> Option<BigInt> {
        self.get(-1).ok()
    }

    /// Returns `true` if the range contains the given value.
    ///
    /// Integral values are checked in constant time. Any other value falls
    /// back to comparing it against every element, so a float such as `4.0`
    /// matches the element `4`.
    ///
    /// # Examples
    /// ```
    /// use integer_range::IntegerRange;
    ///
    /// let r = IntegerRange::new(0, 10, 2).unwrap();
    /// assert!(r.contains(4));
    /// assert!(!r.contains(5));
    /// assert!(!r.contains(10)); // stop is excluded
    /// assert!(r.contains(4.0));
    /// assert!(!r.contains("4"));
    /// ```
    pub fn contains(&self, value: impl Into<RangeArg>) -> bool {
        let value = value.into();
        if let Some(integer) = value.to_integer() {
            return self.contains_integer(&integer);
        }
        match value.equality_probe() {
            Some(probe) => self.iter().any(|element| element == probe),
            // Nothing else ever compares equal to an integer.
            None => false,
        }
    }

    /// Constant-time membership test for an integer.
    pub fn contains_integer(&self, value: &BigInt) -> bool {
        let in_bounds = if self.step.is_positive() {
            &self.start <= value && value < &self.stop
        } else {
            &self.stop < value && value <= &self.start
        };
        in_bounds && (value - &self.start).is_multiple_of(&self.step)
    }

    /// Returns a lazy iterator over the elements.
    ///
    /// Each call starts again from the first element.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter::new(self.start.clone(), self.step.clone(), self.length())
    }

    /// Returns the range holding the same elements in the opposite order.
    ///
    /// # Examples
    /// ```
    /// use integer_range::IntegerRange;
    ///
    /// let r = IntegerRange::new(1, 10, 4).unwrap();
    /// assert_eq!(r.reversed().to_string(), "IntegerRange(9, 0, -4)");
    /// ```
    pub fn reversed(&self) -> Self {
        let last_offset = BigInt::from(self.length()) - BigInt::one();
        let start = &self.start + last_offset * &self.step;
        let stop = if self.step.is_positive() {
            &self.start - BigInt::one()
        } else {
            &self.start + BigInt::one()
        };
        Self::from_parts_unchecked(start, stop, -&self.step)
    }

    /// Copies every element into a new `Vec`.
    ///
    /// # Errors
    /// [`RangeError::LengthOverflow`] if the length exceeds `usize::MAX`.
    ///
    /// # Panics
    /// If the allocation fails, as [`Vec::with_capacity`] does.
    pub fn to_vec(&self) -> Result<Vec<BigInt>, RangeError> {
        let mut elements = Vec::with_capacity(self.len()?);
        elements.extend(self.iter());
        Ok(elements)
    }

    /// Returns `true` if both ranges have the same start, stop and step.
    ///
    /// Ranges with different bounds but the same (e.g. empty) elements are
    /// not considered equal.
    #[inline]
    pub fn eq_instance(&self, other: &Self) -> bool {
        self.start == other.start && self.stop == other.stop && self.step == other.step
    }
}

impl IntegerRange {
    /// Creates the range `start, start + step, ...` up to (excluding) `stop`.
    ///
    /// # Errors
    /// [`RangeError::ZeroStep`] if `step` is zero.
    ///
    /// # Examples
    /// ```
    /// use integer_range::IntegerRange;
    ///
    /// let evens = IntegerRange::new(0, 10, 2).unwrap();
    /// assert_eq!(evens.to_string(), "IntegerRange(0, 10, 2)");
    ///
    /// assert!(IntegerRange::new(0, 10, 0).is_err());
    /// ```
    pub fn new(
        start: impl Into<BigInt>,
        stop: impl Into<BigInt>,
        step: impl Into<BigInt>,
    ) -> Result<Self, RangeError> {
        Self::checked(start.into(), stop.into(), step.into())
    }

    /// Creates `0, 1, ..., stop - 1`.
    #[inline]
    pub fn from_stop(stop: impl Into<BigInt>) -> Self {
        Self::from_parts_unchecked(BigInt::zero(), stop.into(), BigInt::one())
    }

    /// Creates `start, start + 1, ..., stop - 1`.
    #[inline]
    pub fn from_bounds(start: impl Into<BigInt>, stop: impl Into<BigInt>) -> Self {
        Self::from_parts_unchecked(start.into(), stop.into(), BigInt::one())
    }

    /// Builds a range from one, two or three positional arguments:
    /// `(stop)`, `(start, stop)` or `(start, stop, step)`.
    ///
    /// Every argument must be integral (see [`RangeArg`]). Floats are
    /// rejected even when they hold a whole number.
    ///
    /// # Errors
    /// - [`RangeError::ArgumentCount`] for zero or more than three arguments
    /// - [`RangeError::NotAnInteger`] for a non-integral argument
    /// - [`RangeError::ZeroStep`] if the step is zero
    ///
    /// # Examples
    /// ```
    /// use integer_range::{ErrorKind, IntegerRange, RangeArg};
    ///
    /// let r = IntegerRange::from_args([RangeArg::from(1), RangeArg::from(7), RangeArg::from(3)]).unwrap();
    /// assert_eq!(r.to_string(), "IntegerRange(1, 7, 3)");
    ///
    /// let err = IntegerRange::from_args([1.0]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn from_args<I>(args: I) -> Result<Self, RangeError>
    where
        I: IntoIterator,
        I::Item: Into<RangeArg>,
    {
        Self::from_positional(args.into_iter().map(Into::into).collect())
    }
}

impl<N: RangeName> Clone for IntegerRange<N> {
    fn clone(&self) -> Self {
        Self::from_parts_unchecked(self.start.clone(), self.stop.clone(), self.step.clone())
    }
}

impl<N: RangeName> Default for IntegerRange<N> {
    fn default() -> Self {
        Self::from_parts_unchecked(BigInt::zero(), BigInt::zero(), BigInt::one())
    }
}

impl<N: RangeName> fmt::Debug for IntegerRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(N::NAME)
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish()
    }
}

impl<N: RangeName> IntoIterator for IntegerRange<N> {
    type Item = BigInt;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        let length = self.length();
        Iter::new(self.start, self.step, length)
    }
}

impl<N: RangeName> IntoIterator for &IntegerRange<N> {
    type Item = BigInt;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
