//! This directory provides some features for research.
//! [`Logger`] records, per round of one binary problem,
//! the exponential criterion, the weighted error of the new stump
//! or perceptron, how far the distribution has moved away from uniform,
//! the train/test losses, and the running time.

/// Defines the logger.
pub mod logger;

/// Defines the objective functions that the logger reports.
pub mod objective;

/// Defines loss functions (e.g., zero-one loss, squared loss).
pub mod loss_functions;

pub use logger::{Logger, CurrentHypothesis, RoundRecord};
pub use objective::{LoggingObjective, ExponentialObjective};
pub use loss_functions::{zero_one_loss, squared_loss};
