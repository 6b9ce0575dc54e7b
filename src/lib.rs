#![warn(missing_docs)]

//!
//! A crate that provides Gentle AdaBoost
//! (Friedman, Hastie & Tibshirani, 2000).
//!
//! Each boosting round fits a weak learner to the `{-1, +1}` target
//! by weighted least squares and reweights the examples by
//! `exp(-z h(x))`. The final model is the unweighted sum of the
//! weak hypotheses.
//!
//! Two weak learners are provided.
//!
//! - [`DecisionStump`]
//!     `h(x) = a [x_j > th] + b`, fitted in closed form.
//! - [`Perceptron`]
//!     `h(x) = sigmoid_epsi(a x_j + b)`, fitted by online gradient descent.
//!
//! Problems with more than two labels are solved one-against-all:
//! [`GentleBoostModel`] boosts one class at a time
//! and predicts the class with the largest score.
//!
//! The [`interface`] module wraps training and prediction
//! for hosts that hand over flat buffers and loosely typed options.
//!
//! ```no_run
//! use gentleboost::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("/path/to/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! let options = Options::default()
//!     .kind(WeakLearnerKind::Perceptron)
//!     .max_iter(200)
//!     .seed(1234);
//! let model = GentleBoostModel::fit(&sample, 100, &options).unwrap();
//! let prediction = model.predict(&sample).unwrap();
//! ```

pub mod common;
pub mod constants;
pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod model;
pub mod interface;
pub mod research;

pub mod prelude;


pub use error::{GentleBoostError, Result};

pub use sample::{
    Sample,
    SampleReader,
    Layout,
    Feature,
};

pub use hypothesis::{
    Regressor,
    AdditiveModel,
};

pub use weak_learner::{
    WeakLearner,
    WeakLearnerKind,
    DecisionStump,
    DecisionStumpRegressor,
    Perceptron,
    PerceptronRegressor,
};

pub use booster::{
    Booster,
    GentleBoost,
};

pub use model::{
    GentleBoostModel,
    Ensemble,
    LabelSet,
    ModelArrays,
    Options,
    OptionWarning,
    Prediction,
    RawOptions,
    RawPredictOptions,
};

pub use interface::{
    gentleboost_model,
    gentleboost_predict,
};
