//! Defines some common functions used in this library.

/// Seedable pseudo-random source used by the perceptron.
pub mod random;

/// Sorting with an optional permutation index.
pub mod sort;

/// Conversion between sample-major and feature-major matrices.
pub mod transpose;

/// Defines some useful functions such as the bounded sigmoid.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

pub use random::RandomSource;
pub use sort::{sort, sort_with_index};
pub use transpose::transpose;
