use std::convert::Infallible;

use thiserror::Error;

/// Errors reported by every algorithm in this crate.
///
/// `E` is the error type of the user supplied comparison. Orderings derived from [`Ord`] can't
/// fail, which is what the [`Infallible`] default expresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError<E = Infallible> {
    /// The comparison could not be evaluated. The range still holds its original elements, in
    /// some unspecified order.
    #[error("comparison failed: {0}")]
    ComparisonFailed(E),

    /// The merge sort scratch buffer could not be allocated. Reported before the range is
    /// touched.
    #[error("unable to allocate a scratch buffer for {len} elements")]
    AllocationFailed { len: usize },

    #[error("min_max() arg is an empty sequence")]
    EmptyInput,

    #[error("range {first}..{last} out of range for slice of length {len}")]
    IndexOutOfRange {
        first: usize,
        last: usize,
        len: usize,
    },
}

impl<E> SortError<E> {
    pub fn is_comparison_failure(&self) -> bool {
        matches!(self, SortError::ComparisonFailed(_))
    }
}

/// Returned by [`crate::compare::partial`] when two values have no defined order, eg. a float
/// NaN.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("'<' not supported between these values")]
pub struct Incomparable;
