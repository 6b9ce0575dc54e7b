use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use super::feature_struct::Feature;
use crate::common::transpose;
use crate::error::{GentleBoostError, Result};


/// Memory layout of a flat feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// All features of example `0`, then all features of example `1`, ...
    /// This is the `d x N` column-major layout.
    SampleMajor,
    /// All examples of feature `0`, then all examples of feature `1`, ...
    FeatureMajor,
}


/// A batch of examples stored feature by feature.
/// The target vector is empty for a sample that is only predicted on.
#[derive(Debug, Clone)]
pub struct Sample {
    name_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    target: Vec<f64>,
    n_sample: usize,
    n_feature: usize,
}


impl Sample {
    /// Construct a sample from a flat matrix of
    /// `n_feature` features by `n_sample` examples.
    /// A [`Layout::SampleMajor`] buffer is transposed once.
    ///
    /// Every value must be finite.
    pub fn from_feature_matrix(
        data: &[f64],
        n_feature: usize,
        n_sample: usize,
        layout: Layout,
    ) -> Result<Self>
    {
        let feature_major = match layout {
            Layout::SampleMajor => transpose(data, n_sample, n_feature)?,
            Layout::FeatureMajor => {
                if data.len() != n_feature * n_sample {
                    return Err(GentleBoostError::InvalidShape {
                        expected: format!(
                            "{n_feature} x {n_sample} = {} values",
                            n_feature * n_sample
                        ),
                        got: format!("{} values", data.len()),
                    });
                }
                data.to_vec()
            },
        };

        let columns = if n_sample == 0 {
            vec![Vec::new(); n_feature]
        } else {
            feature_major.chunks_exact(n_sample)
                .map(|col| col.to_vec())
                .collect::<Vec<_>>()
        };
        Self::from_columns(columns)
    }


    /// Construct a sample from feature columns.
    /// Features are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let n_feature = columns.len();
        let n_sample = columns.first().map(|col| col.len()).unwrap_or(0);

        for (j, col) in columns.iter().enumerate() {
            if col.len() != n_sample {
                return Err(GentleBoostError::InvalidShape {
                    expected: format!("{n_sample} values for feature {j}"),
                    got: format!("{} values", col.len()),
                });
            }
            if let Some(row) = col.iter().position(|x| !x.is_finite()) {
                return Err(GentleBoostError::NonFiniteValue {
                    feature: j, row,
                });
            }
        }

        let features = columns.into_iter()
            .enumerate()
            .map(|(j, col)| Feature::from_vals(format!("Feat. [{}]", j + 1), col))
            .collect::<Vec<_>>();

        let name_to_index = index_of_names(&features);

        Ok(Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            n_sample,
            n_feature,
        })
    }


    /// Attach the label vector to `self`.
    /// The old target is dropped.
    pub fn set_target_values(mut self, target: Vec<f64>) -> Result<Self> {
        if target.len() != self.n_sample {
            return Err(GentleBoostError::InvalidShape {
                expected: format!("{} labels", self.n_sample),
                got: format!("{} labels", target.len()),
            });
        }
        self.target = target;
        Ok(self)
    }


    /// Read a CSV format file to [`Sample`] type.
    ///
    /// If the CSV file does not header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    ///
    /// **Do not forget** to call [`Sample::set_target`] to
    /// assign the class label.
    pub(crate) fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read a CSV from [`BufReader`].
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut lines = reader.lines();

        let mut features: Vec<Feature> = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                features = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let line_no = if has_header { i + 2 } else { i + 1 };

            let xs = line.split(',')
                .map(|x| {
                    let x = x.trim();
                    x.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| GentleBoostError::Parse {
                            line: line_no,
                            value: x.to_string(),
                        })
                })
                .collect::<Result<Vec<f64>>>()?;

            // if the header does not exist,
            // construct a dummy header.
            if features.is_empty() {
                features = (1..=xs.len()).map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect();
            }

            if xs.len() != features.len() {
                return Err(GentleBoostError::InvalidShape {
                    expected: format!("{} columns", features.len()),
                    got: format!("{} columns at line {line_no}", xs.len()),
                });
            }

            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });

            n_sample += 1;
        }

        let n_feature = features.len();
        let name_to_index = index_of_names(&features);

        Ok(Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            n_sample,
            n_feature,
        })
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| GentleBoostError::MissingColumn(target.to_string()))?;

        self.target = self.features.remove(pos).into_vals();
        self.n_feature -= 1;
        self.name_to_index = index_of_names(&self.features);

        Ok(self)
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the distinct target values in ascending order.
    pub fn unique_target(&self) -> Vec<f64> {
        let mut target = self.target.to_vec();
        target.sort_by(|a, b| a.total_cmp(b));
        target.dedup();
        target
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the value of the `feature`-th feature (0-based)
    /// of the `row`-th example.
    #[inline(always)]
    pub fn value(&self, feature: usize, row: usize) -> f64 {
        self.features[feature][row]
    }


    /// Returns the `row`-th feature vector.
    pub fn at(&self, row: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[row])
            .collect::<Vec<f64>>()
    }
}


fn index_of_names(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    /// Panics if no feature is named `name`.
    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = self.name_to_index[name];
        &self.features[k]
    }
}
