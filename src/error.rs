//! Error type shared by every fallible operation of this crate.
use thiserror::Error;

use crate::weak_learner::WeakLearnerKind;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GentleBoostError>;

/// Errors reported before any training or prediction starts.
#[derive(Debug, Error)]
pub enum GentleBoostError {
    /// The feature matrix or the label vector has an unexpected shape.
    #[error("invalid shape: expected {expected}, got {got}")]
    InvalidShape {
        /// What the operation needs.
        expected: String,
        /// What it was given.
        got: String,
    },
    /// The sample has no example or no feature.
    #[error("the sample must contain at least one example and one feature")]
    EmptySample,
    /// A feature value is `NaN` or infinite.
    #[error("feature {feature} of example {row} is not a finite number")]
    NonFiniteValue {
        /// 0-based feature index.
        feature: usize,
        /// 0-based example index.
        row: usize,
    },
    /// A label is `NaN` or infinite.
    #[error("the label of example {row} is not a finite number")]
    NonFiniteTarget {
        /// 0-based example index.
        row: usize,
    },
    /// A model refers to a feature the data does not have.
    /// `index` is 1-based.
    #[error("feature index {index} is out of range 1..={n_feature}")]
    FeatureIndexOutOfRange {
        /// The offending feature index.
        index: usize,
        /// Number of features of the data.
        n_feature: usize,
    },
    /// A model parameter is `NaN` or infinite.
    #[error("entry {index} of `{array}` is not a finite number")]
    NonFiniteParameter {
        /// Name of the array, `th`, `a` or `b`.
        array: &'static str,
        /// Position in the array.
        index: usize,
    },
    /// Prediction was requested with another weak learner than training.
    #[error("the model is made of {model} hypotheses, got a request for {requested}")]
    KindMismatch {
        /// The family the model was trained with.
        model: WeakLearnerKind,
        /// The family the caller asked for.
        requested: WeakLearnerKind,
    },
    /// The requested target column does not exist.
    #[error("the column \"{0}\" does not exist")]
    MissingColumn(String),
    /// [`SampleReader`](crate::SampleReader) was not given a file.
    #[error("no input file is specified")]
    MissingFile,
    /// A CSV cell could not be parsed as a number.
    #[error("failed to parse \"{value}\" at line {line}")]
    Parse {
        /// 1-based line of the file.
        line: usize,
        /// The cell as read.
        value: String,
    },
    /// Reading a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A JSON record is malformed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
