//! The trained model, its options, and its flat layout.

mod options;
mod label_set;
mod model_arrays;
mod prediction;
mod gentleboost_model;


pub use options::{
    Options,
    RawOptions,
    RawPredictOptions,
    OptionWarning,
    resolve_rounds,
};
pub use label_set::LabelSet;
pub use model_arrays::ModelArrays;
pub use prediction::Prediction;
pub use gentleboost_model::{GentleBoostModel, Ensemble};
