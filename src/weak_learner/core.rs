//! Provides `WeakLearner` trait.
use serde::{Serialize, Deserialize};

use crate::Sample;

use std::fmt;


/// A trait that defines the behavor of weak learners.
/// Given a target vector in `{-1, +1}` and a distribution over examples,
/// a weak learner returns a hypothesis that fits the target
/// in the weighted least-squares sense.
pub trait WeakLearner {
    /// The hypothesis returned by [`WeakLearner::produce`].
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the parameters of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Returns a hypothesis minimizing
    /// `sum_i dist[i] * (target[i] - h(x_i))^2`.
    fn produce(&self, sample: &Sample, target: &[f64], dist: &[f64])
        -> Self::Hypothesis;
}


/// The weak-learner family used by a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeakLearnerKind {
    /// `h(x) = a * [x_f > th] + b`.
    #[default]
    DecisionStump,
    /// `h(x) = sigmoid_epsi(a * x_f + b)`.
    Perceptron,
}


impl WeakLearnerKind {
    /// Decode the host-side integer code: `0` for the decision stump,
    /// `1` for the perceptron.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::DecisionStump),
            1 => Some(Self::Perceptron),
            _ => None,
        }
    }

    /// Returns the host-side integer code.
    pub fn code(&self) -> i64 {
        match self {
            Self::DecisionStump => 0,
            Self::Perceptron => 1,
        }
    }
}


impl fmt::Display for WeakLearnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DecisionStump => "Decision Stump",
            Self::Perceptron => "Perceptron",
        };
        write!(f, "{name}")
    }
}
