//! The trained Gentle AdaBoost model.
use serde::{Serialize, Deserialize};

use crate::{
    Sample,
    Booster,
    GentleBoost,
    WeakLearner,
    WeakLearnerKind,
    Regressor,
    AdditiveModel,
    DecisionStump,
    DecisionStumpRegressor,
    Perceptron,
    PerceptronRegressor,

    common::{checker, utils::sign},
    constants::TINY,
    error::{GentleBoostError, Result},
};
use super::{LabelSet, ModelArrays, Options, Prediction};


/// The additive models of every class.
/// All of them are built from one weak learner family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ensemble {
    /// Sums of decision stumps.
    DecisionStump(Vec<AdditiveModel<DecisionStumpRegressor>>),
    /// Sums of perceptrons.
    Perceptron(Vec<AdditiveModel<PerceptronRegressor>>),
}


impl Ensemble {
    /// The weak learner family.
    pub fn kind(&self) -> WeakLearnerKind {
        match self {
            Self::DecisionStump(_) => WeakLearnerKind::DecisionStump,
            Self::Perceptron(_) => WeakLearnerKind::Perceptron,
        }
    }


    /// Number of classes.
    pub fn n_class(&self) -> usize {
        match self {
            Self::DecisionStump(fs) => fs.len(),
            Self::Perceptron(fs) => fs.len(),
        }
    }


    /// The scores of every class on every example, one row per class.
    fn scores(&self, sample: &Sample) -> Vec<Vec<f64>> {
        match self {
            Self::DecisionStump(fs) => score_rows(fs, sample),
            Self::Perceptron(fs) => score_rows(fs, sample),
        }
    }


    /// The largest 0-based feature index used.
    fn max_feature_index(&self) -> Option<usize> {
        match self {
            Self::DecisionStump(fs) => fs.iter()
                .flat_map(|f| f.hypotheses())
                .map(|h| h.feature_index())
                .max(),
            Self::Perceptron(fs) => fs.iter()
                .flat_map(|f| f.hypotheses())
                .map(|h| h.feature_index())
                .max(),
        }
    }
}


/// A one-against-all Gentle AdaBoost model.
///
/// # Example
/// ```no_run
/// use gentleboost::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let options = Options::default()
///     .kind(WeakLearnerKind::DecisionStump);
/// let model = GentleBoostModel::fit(&sample, 100, &options).unwrap();
///
/// let prediction = model.predict(&sample).unwrap();
/// let labels = prediction.decode(model.labels());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GentleBoostModel {
    labels: LabelSet,
    n_rounds: usize,
    ensemble: Ensemble,
}


impl GentleBoostModel {
    /// Boost `n_rounds` rounds for every class of `sample`.
    /// Classes are trained one after another,
    /// each with its own distribution.
    /// Invalid perceptron parameters fall back to their defaults
    /// with a warning.
    pub fn fit(sample: &Sample, n_rounds: usize, options: &Options)
        -> Result<Self>
    {
        checker::check_sample(sample)?;
        let (options, _) = options.sanitize();

        let labels = LabelSet::from_target(sample.target());
        let (n_sample, n_feature) = sample.shape();
        tracing::info!(
            n_sample,
            n_feature,
            n_class = labels.n_class(),
            n_rounds,
            kind = %options.kind,
            "start training"
        );

        let ensemble = match options.kind {
            WeakLearnerKind::DecisionStump => {
                let weak_learner = DecisionStump::init(sample);
                let fs = fit_classes(sample, &labels, n_rounds, &weak_learner);
                Ensemble::DecisionStump(fs)
            },
            WeakLearnerKind::Perceptron => {
                let mut weak_learner = Perceptron::init(sample)
                    .epsilon(options.epsilon)
                    .lambda(options.lambda)
                    .max_iter(options.max_iter);
                if let Some(seed) = options.seed {
                    weak_learner = weak_learner.seed(seed);
                }
                let fs = fit_classes(sample, &labels, n_rounds, &weak_learner);
                Ensemble::Perceptron(fs)
            },
        };

        tracing::info!("finish training");
        Ok(Self { labels, n_rounds, ensemble })
    }


    /// Construct a model from its parts.
    /// Every class must hold `n_rounds` hypotheses.
    pub fn from_parts(labels: LabelSet, n_rounds: usize, ensemble: Ensemble)
        -> Result<Self>
    {
        let n_class = ensemble.n_class();
        if n_class != labels.n_class() {
            return Err(GentleBoostError::InvalidShape {
                expected: format!("{} classes", labels.n_class()),
                got: format!("{n_class} classes"),
            });
        }
        let lens = match &ensemble {
            Ensemble::DecisionStump(fs) => fs.iter().map(|f| f.len()).collect::<Vec<_>>(),
            Ensemble::Perceptron(fs) => fs.iter().map(|f| f.len()).collect(),
        };
        if let Some(&len) = lens.iter().find(|&&len| len != n_rounds) {
            return Err(GentleBoostError::InvalidShape {
                expected: format!("{n_rounds} rounds per class"),
                got: format!("{len} rounds"),
            });
        }
        Ok(Self { labels, n_rounds, ensemble })
    }


    /// The labels seen in training.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }


    /// Rounds per class.
    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }


    /// Number of classes. A binary model has one.
    pub fn n_class(&self) -> usize {
        self.ensemble.n_class()
    }


    /// The weak learner family.
    pub fn kind(&self) -> WeakLearnerKind {
        self.ensemble.kind()
    }


    /// The additive models of every class.
    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }


    /// Evaluate every perceptron with the sigmoid slope `epsilon`.
    /// A stump model is returned unchanged.
    pub fn with_epsilon(self, epsilon: f64) -> Self {
        let ensemble = match self.ensemble {
            Ensemble::Perceptron(fs) => {
                let fs = fs.into_iter()
                    .map(|f| {
                        let hs = f.decompose()
                            .into_iter()
                            .map(|h| h.with_epsilon(epsilon))
                            .collect();
                        AdditiveModel::new(hs)
                    })
                    .collect();
                Ensemble::Perceptron(fs)
            },
            stumps => stumps,
        };
        Self { ensemble, ..self }
    }


    /// Predict every example of `sample`.
    ///
    /// A binary model returns `sign(f(x))` with `sign(0) = +1`.
    /// A multi-class model returns the index of the largest score;
    /// the lowest index wins a tie.
    pub fn predict(&self, sample: &Sample) -> Result<Prediction> {
        let n_feature = sample.shape().1;
        if let Some(k) = self.ensemble.max_feature_index() {
            if k >= n_feature {
                return Err(GentleBoostError::FeatureIndexOutOfRange {
                    index: k + 1, n_feature,
                });
            }
        }

        let scores = self.ensemble.scores(sample);
        let estimates = if scores.len() == 1 {
            scores[0].iter()
                .map(|&fx| sign(fx))
                .collect()
        } else {
            argmax_columns(&scores, sample.shape().0)
        };

        Ok(Prediction { estimates, scores })
    }


    /// Flatten the model into `T x m` arrays.
    pub fn to_arrays(&self) -> ModelArrays {
        let mut arrays = ModelArrays {
            kind: self.kind(),
            n_rounds: self.n_rounds,
            n_class: self.n_class(),
            feature_idx: Vec::new(),
            th: Vec::new(),
            a: Vec::new(),
            b: Vec::new(),
        };

        match &self.ensemble {
            Ensemble::DecisionStump(fs) => {
                fs.iter().flat_map(|f| f.hypotheses())
                    .for_each(|h| {
                        arrays.feature_idx.push(h.feature_index() + 1);
                        arrays.th.push(h.threshold());
                        arrays.a.push(h.scale());
                        arrays.b.push(h.bias());
                    });
            },
            Ensemble::Perceptron(fs) => {
                fs.iter().flat_map(|f| f.hypotheses())
                    .for_each(|h| {
                        arrays.feature_idx.push(h.feature_index() + 1);
                        arrays.th.push(0.0);
                        arrays.a.push(h.scale());
                        arrays.b.push(h.bias());
                    });
            },
        }
        arrays
    }


    /// Rebuild a model from flat arrays.
    /// The labels become `{-1, +1}` for one class
    /// and the class indices otherwise.
    /// Perceptrons are evaluated with the sigmoid slope `epsilon`.
    pub fn from_arrays(arrays: &ModelArrays, epsilon: f64) -> Result<Self> {
        arrays.validate()?;

        let ModelArrays { kind, n_rounds, n_class, .. } = *arrays;
        let at = |c: usize| (c * n_rounds)..((c + 1) * n_rounds);

        let ensemble = match kind {
            WeakLearnerKind::DecisionStump => {
                let fs = (0..n_class).map(|c| {
                        let hs = at(c).map(|k| DecisionStumpRegressor::new(
                                arrays.feature_idx[k] - 1,
                                arrays.th[k],
                                arrays.a[k],
                                arrays.b[k],
                            ))
                            .collect();
                        AdditiveModel::new(hs)
                    })
                    .collect();
                Ensemble::DecisionStump(fs)
            },
            WeakLearnerKind::Perceptron => {
                let fs = (0..n_class).map(|c| {
                        let hs = at(c).map(|k| PerceptronRegressor::new(
                                arrays.feature_idx[k] - 1,
                                arrays.a[k],
                                arrays.b[k],
                                epsilon,
                            ))
                            .collect();
                        AdditiveModel::new(hs)
                    })
                    .collect();
                Ensemble::Perceptron(fs)
            },
        };

        Self::from_parts(LabelSet::canonical(n_class), n_rounds, ensemble)
    }
}


fn fit_classes<W, H>(
    sample: &Sample,
    labels: &LabelSet,
    n_rounds: usize,
    weak_learner: &W,
) -> Vec<AdditiveModel<H>>
    where W: WeakLearner<Hypothesis = H>,
          H: Regressor + Clone,
{
    (0..labels.n_class()).map(|c| {
            let label = labels.class_label(c);
            tracing::debug!(class = c, label, "boosting one class");

            let target = labels.binarize(sample.target(), c);
            let mut booster = GentleBoost::init_with_target(sample, target)
                .rounds(n_rounds);
            booster.run(weak_learner)
        })
        .collect()
}


fn score_rows<H>(fs: &[AdditiveModel<H>], sample: &Sample) -> Vec<Vec<f64>>
    where H: Regressor,
{
    fs.iter()
        .map(|f| f.predict_all(sample))
        .collect()
}


/// Index of the largest score in each column.
/// The running maximum starts at `TINY` and only a strictly
/// larger score replaces it.
fn argmax_columns(scores: &[Vec<f64>], n_sample: usize) -> Vec<f64> {
    (0..n_sample).map(|i| {
            let mut best = 0_usize;
            let mut max = TINY;
            for (c, row) in scores.iter().enumerate() {
                if row[i] > max {
                    max = row[i];
                    best = c;
                }
            }
            best as f64
        })
        .collect()
}
