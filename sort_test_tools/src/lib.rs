//! Shared input patterns and a generic test suite, instantiated once per sort implementation.

pub use classic_sort::Sort;

pub mod patterns;
