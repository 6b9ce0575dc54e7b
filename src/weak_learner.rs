//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and the two weak learners of Gentle AdaBoost.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines the 1-D sigmoid perceptron.
pub mod perceptron;


pub use self::core::{WeakLearner, WeakLearnerKind};

pub use self::decision_stump::{
    DecisionStump,
    DecisionStumpRegressor,
};

pub use self::perceptron::{
    Perceptron,
    PerceptronRegressor,
};
