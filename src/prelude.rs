//! Exports the booster, the weak learners, and the traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    GentleBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,
    WeakLearnerKind,

    // Decision stump
    DecisionStump,
    DecisionStumpRegressor,

    // Perceptron
    Perceptron,
    PerceptronRegressor,
};


pub use crate::hypothesis::{
    Regressor,
    AdditiveModel,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::model::{
    GentleBoostModel,
    Options,
    Prediction,
};
