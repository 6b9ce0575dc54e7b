use serde::{Serialize, Deserialize};


/// The distinct labels of a training sample, in ascending order.
///
/// Two labels make a binary problem with one class,
/// whose positive label is the larger one.
/// One label makes a single class trained against itself.
/// Three or more labels make one class per label,
/// indexed by rank.
/// A model read back from arrays may also hold two classes,
/// one per label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<f64>,
    n_class: usize,
}


impl LabelSet {
    /// Collect the distinct values of `target`.
    pub fn from_target(target: &[f64]) -> Self {
        let mut labels = target.to_vec();
        labels.sort_by(|a, b| a.total_cmp(b));
        labels.dedup();
        let n_class = if labels.len() <= 2 { 1 } else { labels.len() };
        Self { labels, n_class }
    }


    /// The label set of a model whose labels are unknown:
    /// `{-1, +1}` for one class, `{0, ..., n_class - 1}` otherwise.
    pub fn canonical(n_class: usize) -> Self {
        let n_class = n_class.max(1);
        let labels = if n_class == 1 {
            vec![-1.0, 1.0]
        } else {
            (0..n_class).map(|c| c as f64).collect()
        };
        Self { labels, n_class }
    }


    /// Returns the distinct labels in ascending order.
    pub fn labels(&self) -> &[f64] {
        &self.labels[..]
    }


    /// Returns `true` if two labels share one class.
    pub fn is_binary(&self) -> bool {
        self.n_class == 1 && self.labels.len() == 2
    }


    /// Number of one-against-all problems to boost.
    pub fn n_class(&self) -> usize {
        self.n_class
    }


    /// The label that counts as positive for class `c`.
    pub fn class_label(&self, c: usize) -> f64 {
        if self.is_binary() { self.labels[1] } else { self.labels[c] }
    }


    /// The `{-1, +1}` target of class `c`.
    pub fn binarize(&self, target: &[f64], c: usize) -> Vec<f64> {
        let positive = self.class_label(c);
        target.iter()
            .map(|&y| if y == positive { 1.0 } else { -1.0 })
            .collect()
    }


    /// Map a prediction estimate back to a label.
    /// Binary estimates are `-1` or `+1`, others are class indices.
    pub fn decode(&self, estimate: f64) -> f64 {
        if self.is_binary() {
            return if estimate >= 0.0 { self.labels[1] } else { self.labels[0] };
        }
        match self.labels.len() {
            0 => estimate,
            1 => self.labels[0],
            n => {
                let c = (estimate.max(0.0) as usize).min(n - 1);
                self.labels[c]
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_positive_is_the_larger_label() {
        let labels = LabelSet::from_target(&[1.0, 0.0, 0.0, 1.0]);
        assert!(labels.is_binary());
        assert_eq!(labels.n_class(), 1);
        assert_eq!(labels.class_label(0), 1.0);
        assert_eq!(
            labels.binarize(&[1.0, 0.0, 0.0, 1.0], 0),
            vec![1.0, -1.0, -1.0, 1.0]
        );
        assert_eq!(labels.decode(-1.0), 0.0);
        assert_eq!(labels.decode(1.0), 1.0);
    }

    #[test]
    fn single_label_is_one_class() {
        let labels = LabelSet::from_target(&[4.0, 4.0]);
        assert_eq!(labels.n_class(), 1);
        assert_eq!(labels.binarize(&[4.0, 4.0], 0), vec![1.0, 1.0]);
        assert_eq!(labels.decode(-1.0), 4.0);
    }

    #[test]
    fn multi_class_by_rank() {
        let labels = LabelSet::from_target(&[3.0, 1.0, 2.0, 1.0]);
        assert_eq!(labels.labels(), &[1.0, 2.0, 3.0]);
        assert_eq!(labels.n_class(), 3);
        assert_eq!(labels.class_label(2), 3.0);
        assert_eq!(
            labels.binarize(&[3.0, 1.0, 2.0, 1.0], 1),
            vec![-1.0, -1.0, 1.0, -1.0]
        );
        assert_eq!(labels.decode(2.0), 3.0);
    }

    #[test]
    fn canonical_labels() {
        assert_eq!(LabelSet::canonical(1).labels(), &[-1.0, 1.0]);
        assert_eq!(LabelSet::canonical(3).labels(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn canonical_two_classes_stay_two() {
        let labels = LabelSet::canonical(2);
        assert!(!labels.is_binary());
        assert_eq!(labels.n_class(), 2);
        assert_eq!(labels.labels(), &[0.0, 1.0]);
        assert_eq!(labels.class_label(0), 0.0);
        assert_eq!(labels.class_label(1), 1.0);
        assert_eq!(labels.decode(1.0), 1.0);
        assert_eq!(labels.decode(0.0), 0.0);
    }
}
