use serde::{Serialize, Deserialize};

use crate::{
    WeakLearnerKind,
    error::{GentleBoostError, Result},
};


/// A model laid out as four parallel `T x m` arrays,
/// `T` rounds by `m` classes.
/// Entry `(t, c)` lives at `t + c * T`,
/// so the rounds of class `c` are contiguous.
///
/// Feature indices are 1-based.
/// Thresholds are zero for perceptrons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArrays {
    /// The weak learner family of every entry.
    pub kind: WeakLearnerKind,
    /// Rounds per class, `T`.
    pub n_rounds: usize,
    /// Number of classes, `m`.
    pub n_class: usize,
    /// 1-based feature indices.
    pub feature_idx: Vec<usize>,
    /// Stump thresholds.
    pub th: Vec<f64>,
    /// Scales.
    pub a: Vec<f64>,
    /// Biases.
    pub b: Vec<f64>,
}


impl ModelArrays {
    /// Check that the four arrays hold `T x m` entries
    /// and that the feature indices are 1-based.
    pub fn validate(&self) -> Result<()> {
        if self.n_class == 0 {
            return Err(GentleBoostError::InvalidShape {
                expected: "at least one class".to_string(),
                got: "0 classes".to_string(),
            });
        }

        let size = self.n_rounds.checked_mul(self.n_class)
            .ok_or_else(|| GentleBoostError::InvalidShape {
                expected: "a model whose size fits in memory".to_string(),
                got: format!("{} x {}", self.n_rounds, self.n_class),
            })?;
        let arrays = [
            ("feature_idx", self.feature_idx.len()),
            ("th", self.th.len()),
            ("a", self.a.len()),
            ("b", self.b.len()),
        ];
        for (name, len) in arrays {
            if len != size {
                return Err(GentleBoostError::InvalidShape {
                    expected: format!(
                        "{} x {} = {size} entries in `{name}`",
                        self.n_rounds, self.n_class
                    ),
                    got: format!("{len} entries"),
                });
            }
        }

        if self.feature_idx.iter().any(|&k| k == 0) {
            return Err(GentleBoostError::InvalidShape {
                expected: "1-based feature indices".to_string(),
                got: "feature index 0".to_string(),
            });
        }

        let params = [("th", &self.th), ("a", &self.a), ("b", &self.b)];
        for (name, vals) in params {
            if let Some(index) = vals.iter().position(|v| !v.is_finite()) {
                return Err(GentleBoostError::NonFiniteParameter {
                    array: name, index,
                });
            }
        }
        Ok(())
    }


    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let arrays: Self = serde_json::from_str(json)?;
        arrays.validate()?;
        Ok(arrays)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> ModelArrays {
        ModelArrays {
            kind: WeakLearnerKind::DecisionStump,
            n_rounds: 2,
            n_class: 2,
            feature_idx: vec![1, 2, 2, 1],
            th: vec![0.5, 1.5, 0.0, 2.5],
            a: vec![2.0, -1.0, 0.5, 1.0],
            b: vec![-1.0, 0.5, 0.0, -0.5],
        }
    }

    #[test]
    fn well_formed_arrays_pass() {
        let arrays = two_by_two();
        assert!(arrays.validate().is_ok());
        let json = arrays.to_json().unwrap();
        assert_eq!(ModelArrays::from_json(&json).unwrap(), arrays);
    }

    #[test]
    fn overflowing_size_is_an_error() {
        let json = format!(
            r#"{{"kind":"DecisionStump","n_rounds":{},"n_class":2,
                "feature_idx":[],"th":[],"a":[],"b":[]}}"#,
            usize::MAX,
        );
        let err = ModelArrays::from_json(&json).unwrap_err();
        assert!(matches!(err, GentleBoostError::InvalidShape { .. }));
    }

    #[test]
    fn zero_index_and_nan_are_errors() {
        let mut arrays = two_by_two();
        arrays.feature_idx[3] = 0;
        assert!(matches!(
            arrays.validate(),
            Err(GentleBoostError::InvalidShape { .. })
        ));

        let mut arrays = two_by_two();
        arrays.a[1] = f64::NAN;
        assert!(matches!(
            arrays.validate(),
            Err(GentleBoostError::NonFiniteParameter { array: "a", index: 1 })
        ));
    }
}
