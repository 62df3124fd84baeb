use core::iter::FusedIterator;
use core::mem;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

/// Lazy iterator over the elements of an [`IntegerRange`].
///
/// Holds only the next element, the step and the count of elements left, so
/// memory use does not depend on the length of the range.
///
/// [`IntegerRange`]: crate::IntegerRange
#[derive(Clone, Debug)]
pub struct Iter {
    next: BigInt,
    step: BigInt,
    remaining: BigUint,
}

impl Iter {
    #[inline]
    pub(crate) fn new(start: BigInt, step: BigInt, length: BigUint) -> Self {
        Self {
            next: start,
            step,
            remaining: length,
        }
    }

    /// Number of elements not yet produced from either end.
    #[inline]
    pub fn remaining(&self) -> &BigUint {
        &self.remaining
    }
}

impl Iterator for Iter {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        if self.remaining.is_zero() {
            return None;
        }
        self.remaining -= BigUint::one();
        let following = &self.next + &self.step;
        Some(mem::replace(&mut self.next, following))
    }

    fn nth(&mut self, n: usize) -> Option<BigInt> {
        let skip = BigUint::from(n);
        if skip >= self.remaining {
            self.remaining = BigUint::zero();
            return None;
        }
        self.next += &self.step * BigInt::from(n);
        self.remaining -= skip;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<BigInt> {
        if self.remaining.is_zero() {
            return None;
        }
        self.remaining -= BigUint::one();
        let offset = BigInt::from(self.remaining.clone()) * &self.step;
        Some(&self.next + offset)
    }
}

impl FusedIterator for Iter {}
