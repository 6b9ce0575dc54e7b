//! Training and prediction options.
//!
//! [`Options`] is the typed configuration.
//! [`RawOptions`] and [`RawPredictOptions`] are the loosely typed records
//! a host hands over; [`Options::from_raw`] turns them into [`Options`],
//! replacing every invalid value by its default and reporting it.
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::{
    WeakLearnerKind,
    constants::{
        DEFAULT_ROUNDS,
        DEFAULT_EPSILON,
        DEFAULT_LAMBDA,
        DEFAULT_MAX_ITER,
        FALLBACK_MAX_ITER,
    },
    error::Result,
};


/// An option value that was replaced by a default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionWarning {
    /// The weak learner code is neither `0` nor `1`.
    #[error("unknown weak learner {0}, using the decision stump")]
    UnknownWeakLearner(i64),
    /// The number of perceptron passes is below `1`.
    #[error("max_ite = {0} is not positive, using {fallback}", fallback = FALLBACK_MAX_ITER)]
    MaxIterTooSmall(i64),
    /// The sigmoid slope is not a positive finite number.
    #[error("epsi = {0} is not a positive finite number, using {fallback}", fallback = DEFAULT_EPSILON)]
    InvalidEpsilon(f64),
    /// The learning rate is not a positive finite number.
    #[error("lambda = {0} is not a positive finite number, using {fallback}", fallback = DEFAULT_LAMBDA)]
    InvalidLambda(f64),
    /// Zero boosting rounds were requested.
    #[error("the number of rounds must be positive, using {fallback}", fallback = DEFAULT_ROUNDS)]
    ZeroRounds,
}


/// Parameters of a training run.
///
/// ```
/// use gentleboost::{Options, WeakLearnerKind};
///
/// let options = Options::default()
///     .kind(WeakLearnerKind::Perceptron)
///     .epsilon(2.0)
///     .max_iter(50)
///     .seed(1234);
/// assert_eq!(options.lambda, 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// The weak learner family.
    pub kind: WeakLearnerKind,
    /// Slope of the perceptron sigmoid.
    pub epsilon: f64,
    /// Learning rate of the perceptron.
    pub lambda: f64,
    /// Passes over the examples per perceptron fit.
    pub max_iter: usize,
    /// Seed of the perceptron's random source.
    /// `None` seeds from the clock.
    pub seed: Option<u64>,
}


impl Default for Options {
    fn default() -> Self {
        Self {
            kind: WeakLearnerKind::default(),
            epsilon: DEFAULT_EPSILON,
            lambda: DEFAULT_LAMBDA,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
        }
    }
}


impl Options {
    /// Set the weak learner family.
    pub fn kind(mut self, kind: WeakLearnerKind) -> Self {
        self.kind = kind;
        self
    }


    /// Set the sigmoid slope. Must be positive.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        assert!(epsilon > 0.0 && epsilon.is_finite());
        self.epsilon = epsilon;
        self
    }


    /// Set the perceptron learning rate. Must be positive.
    pub fn lambda(mut self, lambda: f64) -> Self {
        assert!(lambda > 0.0 && lambda.is_finite());
        self.lambda = lambda;
        self
    }


    /// Set the number of perceptron passes. Must be positive.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        assert!(max_iter > 0);
        self.max_iter = max_iter;
        self
    }


    /// Fix the seed of the perceptron's random source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Validate a raw option record.
    /// Missing fields take their defaults silently,
    /// invalid ones take their defaults with a warning.
    pub fn from_raw(raw: &RawOptions) -> (Self, Vec<OptionWarning>) {
        let mut warnings = Vec::new();
        let kind = parse_kind(raw.weaklearner, &mut warnings);
        let epsilon = parse_epsilon(raw.epsi, &mut warnings);
        let lambda = parse_lambda(raw.lambda, &mut warnings);
        let max_iter = parse_max_iter(raw.max_ite, &mut warnings);

        let options = Self { kind, epsilon, lambda, max_iter, seed: raw.seed };
        emit(&warnings);
        (options, warnings)
    }


    /// Replace the perceptron parameters that would make no sense
    /// by the same defaults [`Options::from_raw`] uses.
    /// Needed for options built from the public fields
    /// rather than the setters.
    pub fn sanitize(self) -> (Self, Vec<OptionWarning>) {
        let mut warnings = Vec::new();
        let epsilon = parse_epsilon(Some(self.epsilon), &mut warnings);
        let lambda = parse_lambda(Some(self.lambda), &mut warnings);
        let max_iter = if self.max_iter == 0 {
            warnings.push(OptionWarning::MaxIterTooSmall(0));
            FALLBACK_MAX_ITER
        } else {
            self.max_iter
        };

        let options = Self { epsilon, lambda, max_iter, ..self };
        emit(&warnings);
        (options, warnings)
    }
}


/// Resolve the number of boosting rounds.
/// `None` means the default; `Some(0)` falls back to it with a warning.
pub fn resolve_rounds(rounds: Option<usize>) -> (usize, Option<OptionWarning>) {
    match rounds {
        None => (DEFAULT_ROUNDS, None),
        Some(0) => {
            let warning = OptionWarning::ZeroRounds;
            tracing::warn!("{warning}");
            (DEFAULT_ROUNDS, Some(warning))
        },
        Some(t) => (t, None),
    }
}


/// Options of a training run as a host hands them over.
/// Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    /// `0` for the decision stump, `1` for the perceptron.
    pub weaklearner: Option<i64>,
    /// Sigmoid slope.
    pub epsi: Option<f64>,
    /// Perceptron learning rate.
    pub lambda: Option<f64>,
    /// Perceptron passes.
    pub max_ite: Option<i64>,
    /// Seed of the perceptron's random source.
    pub seed: Option<u64>,
}


impl RawOptions {
    /// Read the record from a JSON object such as
    /// `{"weaklearner": 1, "epsi": 2.0}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


/// Options of a prediction as a host hands them over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPredictOptions {
    /// `0` for the decision stump, `1` for the perceptron.
    /// `None` means the kind the model was trained with.
    pub weaklearner: Option<i64>,
    /// Sigmoid slope used to evaluate perceptrons.
    pub epsi: Option<f64>,
}


impl RawPredictOptions {
    /// Read the record from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }


    /// Validate the record.
    /// Returns the requested kind, if any, and the sigmoid slope.
    pub fn validate(&self)
        -> (Option<WeakLearnerKind>, f64, Vec<OptionWarning>)
    {
        let mut warnings = Vec::new();
        let kind = self.weaklearner
            .map(|code| parse_kind(Some(code), &mut warnings));
        let epsilon = parse_epsilon(self.epsi, &mut warnings);
        emit(&warnings);
        (kind, epsilon, warnings)
    }
}


fn parse_kind(code: Option<i64>, warnings: &mut Vec<OptionWarning>)
    -> WeakLearnerKind
{
    match code {
        None => WeakLearnerKind::default(),
        Some(code) => WeakLearnerKind::from_code(code)
            .unwrap_or_else(|| {
                warnings.push(OptionWarning::UnknownWeakLearner(code));
                WeakLearnerKind::default()
            }),
    }
}


fn parse_epsilon(epsi: Option<f64>, warnings: &mut Vec<OptionWarning>) -> f64 {
    match epsi {
        None => DEFAULT_EPSILON,
        Some(e) if e > 0.0 && e.is_finite() => e,
        Some(e) => {
            warnings.push(OptionWarning::InvalidEpsilon(e));
            DEFAULT_EPSILON
        },
    }
}


fn parse_lambda(lambda: Option<f64>, warnings: &mut Vec<OptionWarning>) -> f64 {
    match lambda {
        None => DEFAULT_LAMBDA,
        Some(l) if l > 0.0 && l.is_finite() => l,
        Some(l) => {
            warnings.push(OptionWarning::InvalidLambda(l));
            DEFAULT_LAMBDA
        },
    }
}


fn parse_max_iter(max_ite: Option<i64>, warnings: &mut Vec<OptionWarning>)
    -> usize
{
    match max_ite {
        None => DEFAULT_MAX_ITER,
        Some(it) if it >= 1 => it as usize,
        Some(it) => {
            warnings.push(OptionWarning::MaxIterTooSmall(it));
            FALLBACK_MAX_ITER
        },
    }
}


fn emit(warnings: &[OptionWarning]) {
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}
