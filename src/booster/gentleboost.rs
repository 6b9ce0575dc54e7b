//! Gentle AdaBoost for one class.
pub mod gentleboost_algorithm;

pub use gentleboost_algorithm::GentleBoost;
