//! The comparison capability consumed by every algorithm.
//!
//! A comparison answers one question, `compare(a, b) -> Ordering`, and may fail instead. The five
//! predicates the algorithms actually branch on are all derived from that single answer, so a
//! failure only ever has to be handled in one place.

use std::cmp::Ordering;
use std::convert::Infallible;

use crate::error::{Incomparable, SortError};

pub trait Compare<T: ?Sized> {
    type Error;

    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, Self::Error>;

    #[inline]
    fn ordering(&mut self, a: &T, b: &T) -> Result<Ordering, SortError<Self::Error>> {
        self.compare(a, b).map_err(SortError::ComparisonFailed)
    }

    /// `a < b`
    #[inline]
    fn is_less(&mut self, a: &T, b: &T) -> Result<bool, SortError<Self::Error>> {
        Ok(self.ordering(a, b)? == Ordering::Less)
    }

    /// `a <= b`
    #[inline]
    fn is_less_eq(&mut self, a: &T, b: &T) -> Result<bool, SortError<Self::Error>> {
        Ok(self.ordering(a, b)? != Ordering::Greater)
    }

    /// `a > b`
    #[inline]
    fn is_greater(&mut self, a: &T, b: &T) -> Result<bool, SortError<Self::Error>> {
        Ok(self.ordering(a, b)? == Ordering::Greater)
    }

    /// `a >= b`
    #[inline]
    fn is_greater_eq(&mut self, a: &T, b: &T) -> Result<bool, SortError<Self::Error>> {
        Ok(self.ordering(a, b)? != Ordering::Less)
    }

    /// `a == b`
    #[inline]
    fn is_eq(&mut self, a: &T, b: &T) -> Result<bool, SortError<Self::Error>> {
        Ok(self.ordering(a, b)? == Ordering::Equal)
    }
}

impl<T, E, F> Compare<T> for F
where
    T: ?Sized,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Result<Ordering, E> {
        self(a, b)
    }
}

/// The total order of `T`. Never fails.
#[inline]
pub fn natural<T: Ord + ?Sized>(a: &T, b: &T) -> Result<Ordering, Infallible> {
    Ok(a.cmp(b))
}

/// The partial order of `T`, failing for pairs that are unordered, eg. anything compared with
/// `f64::NAN`.
#[inline]
pub fn partial<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Result<Ordering, Incomparable> {
    a.partial_cmp(b).ok_or(Incomparable)
}
