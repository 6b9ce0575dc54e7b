//! Default parameters and numerical constants.

/// Boosting rounds per class.
pub const DEFAULT_ROUNDS:    usize = 100;
/// Slope of the perceptron sigmoid.
pub const DEFAULT_EPSILON:     f64 = 1.0;
/// Learning rate of the perceptron.
pub const DEFAULT_LAMBDA:      f64 = 1e-3;
/// Passes over the examples per perceptron fit.
pub const DEFAULT_MAX_ITER:  usize = 100;
/// Passes used when a non-positive number is requested.
pub const FALLBACK_MAX_ITER: usize = 10;

/// Initial value of the running minimum in the weak-learner searches.
pub const HUGE:                f64 = 1e300;
/// Seed of the running maximum in the multi-class argmax.
pub const TINY:                f64 = -1e300;

/// Tolerance on the sum of a distribution.
pub const SIMPLEX_TOLERANCE:   f64 = 1e-8;

/// Initial capacity of a feature read from a file.
pub const BUFFER_SIZE:       usize = 256;
