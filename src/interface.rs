//! Entry points for a host that holds flat buffers.
//!
//! The feature matrix is `d x N` in sample-major order:
//! the `d` features of example `0`, then those of example `1`, and so on.
//! Option values that make no sense are replaced by defaults
//! and reported in the `warnings` of the result.
use crate::{
    Sample,
    Layout,
    error::{GentleBoostError, Result},
    model::{
        GentleBoostModel,
        LabelSet,
        ModelArrays,
        Options,
        OptionWarning,
        Prediction,
        RawOptions,
        RawPredictOptions,
        resolve_rounds,
    },
};


/// Result of [`gentleboost_model`].
#[derive(Debug, Clone)]
pub struct Trained {
    /// The model as `T x m` arrays.
    pub model: ModelArrays,
    /// The labels seen in training, to decode class indices.
    pub labels: LabelSet,
    /// Options that were replaced by defaults.
    pub warnings: Vec<OptionWarning>,
}


/// Result of [`gentleboost_predict`].
#[derive(Debug, Clone)]
pub struct Predicted {
    /// Estimates and scores.
    pub prediction: Prediction,
    /// Options that were replaced by defaults.
    pub warnings: Vec<OptionWarning>,
}


/// Train a Gentle AdaBoost model.
///
/// `x` holds `n_feature x n_sample` values, `y` one label per example.
/// `rounds` defaults to `100`.
///
/// ```
/// use gentleboost::interface::gentleboost_model;
///
/// let x = [0.0, 0.0,  0.0, 1.0,  1.0, 0.0,  1.0, 1.0];
/// let y = [-1.0, -1.0, 1.0, 1.0];
/// let trained = gentleboost_model(&x, 2, 4, &y, Some(1), None).unwrap();
/// assert_eq!(trained.model.feature_idx, vec![1]);
/// ```
pub fn gentleboost_model(
    x: &[f64],
    n_feature: usize,
    n_sample: usize,
    y: &[f64],
    rounds: Option<usize>,
    options: Option<&RawOptions>,
) -> Result<Trained>
{
    let sample = Sample::from_feature_matrix(
            x, n_feature, n_sample, Layout::SampleMajor
        )?
        .set_target_values(y.to_vec())?;

    let (options, mut warnings) = match options {
        Some(raw) => Options::from_raw(raw),
        None => (Options::default(), Vec::new()),
    };
    let (n_rounds, warning) = resolve_rounds(rounds);
    warnings.extend(warning);

    let model = GentleBoostModel::fit(&sample, n_rounds, &options)?;
    Ok(Trained {
        model: model.to_arrays(),
        labels: model.labels().clone(),
        warnings,
    })
}


/// Predict with a model given as flat arrays.
///
/// `x` holds `n_feature x n_sample` values.
/// The requested weak learner must match the model's;
/// when it is not given, the model's is used.
pub fn gentleboost_predict(
    x: &[f64],
    n_feature: usize,
    n_sample: usize,
    model: &ModelArrays,
    options: Option<&RawPredictOptions>,
) -> Result<Predicted>
{
    let (requested, epsilon, warnings) = options
        .cloned()
        .unwrap_or_default()
        .validate();

    if let Some(requested) = requested {
        if requested != model.kind {
            return Err(GentleBoostError::KindMismatch {
                model: model.kind, requested,
            });
        }
    }

    let sample = Sample::from_feature_matrix(
        x, n_feature, n_sample, Layout::SampleMajor
    )?;
    let model = GentleBoostModel::from_arrays(model, epsilon)?;
    let prediction = model.predict(&sample)?;

    Ok(Predicted { prediction, warnings })
}
