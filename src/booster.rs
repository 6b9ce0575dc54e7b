//! Provides the boosting algorithm.

mod core;
mod gentleboost;


/// Booster trait
pub use self::core::Booster;

pub use self::gentleboost::GentleBoost;
