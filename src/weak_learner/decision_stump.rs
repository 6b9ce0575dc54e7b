//! Defines the decision stump weak learner.
pub mod dstump;
pub mod dstump_regressor;

pub use dstump::DecisionStump;
pub use dstump_regressor::DecisionStumpRegressor;
